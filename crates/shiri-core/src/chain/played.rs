use std::collections::HashSet;

use crate::normalize::{normalize, CanonicalForm};
use crate::transliterate::render_katakana;

/// Words accepted so far in one game. Only grows.
///
/// Each word is recorded twice: by its rendered katakana (the dictionary
/// key, so こう and コー collide) and by its canonical form (so ぢ/じ and
/// script variants collide).
#[derive(Debug, Clone, Default)]
pub struct PlayedWordSet {
    rendered: HashSet<String>,
    canonical: HashSet<CanonicalForm>,
}

impl PlayedWordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a word. Returns `false` if it was already present.
    pub fn insert(&mut self, kana: &str) -> bool {
        let fresh_rendered = self.rendered.insert(render_katakana(kana));
        let fresh_canonical = self.canonical.insert(normalize(kana));
        fresh_rendered || fresh_canonical
    }

    pub fn contains(&self, kana: &str) -> bool {
        self.rendered.contains(&render_katakana(kana)) || self.canonical.contains(&normalize(kana))
    }

    /// Number of words recorded.
    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    /// Rendered katakana forms, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.rendered.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for PlayedWordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for word in iter {
            set.insert(word.as_ref());
        }
        set
    }
}
