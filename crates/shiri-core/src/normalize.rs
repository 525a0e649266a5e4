//! Canonical kana form for comparisons.
//!
//! Three folds, applied in order:
//! 1. ー becomes the vowel of the preceding mora's row.
//! 2. ぢ→じ, づ→ず, small ゃゅょ → やゆよ.
//! 3. katakana → hiragana.
//!
//! The result is only ever compared, never displayed. Characters the folds
//! do not know pass through unchanged.

use std::fmt;

use serde::Serialize;

pub use crate::kana::{mora_count, morae};
use crate::kana::{Vowel, CHOONPU};
use crate::unicode::fold_to_hiragana;

/// Normalized kana. Equal for words that differ only in script, voiced
/// variant spelling, small-kana size or macron rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CanonicalForm(String);

impl CanonicalForm {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn morae(&self) -> Vec<&str> {
        morae(&self.0)
    }

    pub fn mora_count(&self) -> usize {
        mora_count(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Final mora, if any.
    pub fn last_mora(&self) -> Option<&str> {
        self.morae().pop()
    }
}

impl fmt::Display for CanonicalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalForm {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn fold_char(c: char) -> char {
    match fold_to_hiragana(c) {
        'ぢ' => 'じ',
        'づ' => 'ず',
        'ゃ' => 'や',
        'ゅ' => 'ゆ',
        'ょ' => 'よ',
        h => h,
    }
}

/// Replace each ー with the vowel of the mora before it. A resolved ー
/// feeds the next one; ー with no vowel-row mora before it is kept.
fn resolve_choonpu(kana: &str) -> String {
    let mut out = String::with_capacity(kana.len());
    let mut row: Option<Vowel> = None;
    for mora in morae(kana) {
        if mora.starts_with(CHOONPU) {
            match row {
                Some(v) => out.push(v.hiragana()),
                None => out.push(CHOONPU),
            }
            // Anything bound to the ー itself is kept verbatim.
            out.push_str(&mora[CHOONPU.len_utf8()..]);
        } else {
            out.push_str(mora);
            row = Vowel::of_mora(mora);
        }
    }
    out
}

/// Canonical form of a kana string. Pure, total and idempotent.
pub fn normalize(kana: &str) -> CanonicalForm {
    let resolved = resolve_choonpu(kana);
    CanonicalForm(resolved.chars().map(fold_char).collect())
}
