//! Romaji ↔ kana transliteration.
//!
//! `romaji_to_kana` tokenizes greedily against the `KanaTables`, handling
//! sokuon (っ) for doubled consonants. Katakana output comes in up to two
//! parse families (with and without ー contraction) because the dictionary
//! may know either spelling.

mod romaji;
mod script;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::classify::InputKind;
use crate::settings::settings;

pub use crate::kana::Script;
pub use romaji::{kana_to_romaji, romaji_to_kana};
pub use script::{contract_long_vowels, hiragana_to_katakana, katakana_to_hiragana, render_katakana};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransliterationError {
    #[error("empty input")]
    Empty,
    #[error("not a valid romaji word: {input:?} (no match at byte {position})")]
    InvalidRomaji { input: String, position: usize },
    #[error("no hiragana form for {0:?}")]
    NoHiraganaForm(String),
    #[error("no romaji for {0:?}")]
    UnmappedKana(String),
}

/// One or two kana renderings of a romaji word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanaParses {
    /// Mora-for-mora rendering.
    pub plain: String,
    /// Katakana with ー contraction, when it differs from `plain`.
    pub contracted: Option<String>,
}

impl KanaParses {
    /// Contracted spelling first, as the dictionary form of katakana words
    /// usually uses ー.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.contracted
            .as_deref()
            .into_iter()
            .chain(std::iter::once(self.plain.as_str()))
    }
}

/// A kana spelling to try against the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KanaCandidate {
    pub kana: String,
    pub script: Script,
    pub contracted: bool,
}

/// Kana spellings for already-classified input.
///
/// Romaji yields the hiragana parse (if any) then the katakana families.
/// Kana is returned as-is. Kanji yields nothing; its reading comes from the
/// dictionary.
pub fn to_kana_candidates(text: &str, kind: InputKind) -> Vec<KanaCandidate> {
    let _span = debug_span!("to_kana_candidates", text, ?kind).entered();

    let mut out: Vec<KanaCandidate> = Vec::new();
    match kind {
        InputKind::Romaji => {
            if let Ok(parses) = romaji_to_kana(text, Script::Hiragana) {
                out.push(KanaCandidate {
                    kana: parses.plain,
                    script: Script::Hiragana,
                    contracted: false,
                });
            }
            if let Ok(parses) = romaji_to_kana(text, Script::Katakana) {
                if let Some(contracted) = parses.contracted {
                    out.push(KanaCandidate {
                        kana: contracted,
                        script: Script::Katakana,
                        contracted: true,
                    });
                }
                out.push(KanaCandidate {
                    kana: parses.plain,
                    script: Script::Katakana,
                    contracted: false,
                });
            }
        }
        InputKind::Kana => {
            let script = if text.chars().any(|c| crate::unicode::is_hiragana(c)) {
                Script::Hiragana
            } else {
                Script::Katakana
            };
            out.push(KanaCandidate {
                kana: text.to_string(),
                script,
                contracted: false,
            });
        }
        InputKind::Kanji => {}
    }

    debug!(candidates = out.len());
    out
}

fn contraction_enabled() -> bool {
    settings().katakana.contract_long_vowels
}
