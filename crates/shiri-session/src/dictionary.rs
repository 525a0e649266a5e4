//! The dictionary seam.
//!
//! The game only needs two questions answered: which entries a kana key or
//! surface form names, and which entries start with a given kana. Anything
//! that can answer them (an online service, a local file) implements
//! `Dictionary`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use shiri_core::normalize;
use shiri_core::transliterate::render_katakana;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictEntry {
    /// Kana reading, hiragana or katakana as the source spells it.
    pub reading: String,
    /// Written form, when it differs from the reading.
    #[serde(default)]
    pub surface: Option<String>,
    #[serde(default)]
    pub glosses: Vec<String>,
}

impl DictEntry {
    /// The surface form, falling back to the reading.
    pub fn display(&self) -> &str {
        self.surface.as_deref().unwrap_or(&self.reading)
    }
}

pub trait Dictionary: Send + Sync {
    /// Entries named by `key`: a kana reading or a surface form.
    fn lookup(&self, key: &str) -> Vec<DictEntry>;

    /// Entries whose reading starts with `prefix`, script-insensitive.
    fn predict(&self, prefix: &str, max_results: usize) -> Vec<DictEntry>;
}

/// In-memory dictionary, indexed by reading, rendered katakana, canonical
/// form and surface. Exact keys win over canonical matches.
#[derive(Debug, Default)]
pub struct MemoryDictionary {
    entries: Vec<DictEntry>,
    index: HashMap<String, Vec<usize>>,
}

impl MemoryDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: DictEntry) {
        let id = self.entries.len();
        let mut keys = vec![
            entry.reading.clone(),
            render_katakana(&entry.reading),
            normalize(&entry.reading).as_str().to_string(),
        ];
        if let Some(surface) = &entry.surface {
            keys.push(surface.clone());
        }
        keys.sort();
        keys.dedup();
        for key in keys {
            self.index.entry(key).or_default().push(id);
        }
        self.entries.push(entry);
    }

    /// Convenience for tests and fixtures.
    pub fn add(&mut self, reading: &str, surface: Option<&str>, gloss: &str) {
        self.insert(DictEntry {
            reading: reading.to_string(),
            surface: surface.map(str::to_string),
            glosses: vec![gloss.to_string()],
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<DictEntry> for MemoryDictionary {
    fn from_iter<I: IntoIterator<Item = DictEntry>>(iter: I) -> Self {
        let mut dict = Self::new();
        for entry in iter {
            dict.insert(entry);
        }
        dict
    }
}

impl Dictionary for MemoryDictionary {
    fn lookup(&self, key: &str) -> Vec<DictEntry> {
        let ids = match self.index.get(key) {
            Some(ids) => ids,
            None => match self.index.get(normalize(key).as_str()) {
                Some(ids) => ids,
                None => return Vec::new(),
            },
        };
        ids.iter().map(|&id| self.entries[id].clone()).collect()
    }

    fn predict(&self, prefix: &str, max_results: usize) -> Vec<DictEntry> {
        let prefix = normalize(prefix);
        self.entries
            .iter()
            .filter(|e| normalize(&e.reading).as_str().starts_with(prefix.as_str()))
            .take(max_results)
            .cloned()
            .collect()
    }
}
