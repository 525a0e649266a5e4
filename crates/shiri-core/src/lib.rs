//! Kana transliteration and Shiritori chain validation.
//!
//! The four entry points used by a game are re-exported here:
//! [`classify`], [`to_kana_candidates`], [`normalize`] and
//! [`validate_continuation`].

pub mod chain;
pub mod classify;
pub mod kana;
pub mod normalize;
pub mod settings;
pub mod transliterate;
pub mod unicode;

pub use chain::{validate_continuation, ChainPolicy, ChainState, PlayedWordSet, Validation};
pub use classify::{classify, sanitize, InputKind};
pub use normalize::{normalize, CanonicalForm};
pub use transliterate::{to_kana_candidates, KanaCandidate, Script, TransliterationError};
