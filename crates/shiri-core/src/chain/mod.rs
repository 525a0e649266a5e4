//! Shiritori chain validation.
//!
//! `validate_continuation` decides whether a candidate word may follow the
//! previous one. Checks run in a fixed order and the first failure wins:
//! empty, too short, already played, no head/tail match, ends in ん.

mod played;
mod state;

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::kana::mora_count;
use crate::normalize::{normalize, CanonicalForm};
use crate::settings::{settings, ChainSettings};

pub use played::PlayedWordSet;
pub use state::{ChainState, PreviousWord};

/// Outcome of validating one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    Valid,
    /// No morae (romaji that failed to transliterate).
    EmptyInput,
    /// Fewer morae than the policy minimum.
    SingleMora,
    AlreadyPlayed,
    /// Head of the candidate does not continue the previous word.
    NoMatch,
    /// Ends with the syllabic ん/ン.
    EndsInN,
}

impl Validation {
    pub fn is_valid(self) -> bool {
        self == Validation::Valid
    }
}

/// Rule switches for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainPolicy {
    /// Apply the mora-count and ん checks to the opening word as well.
    pub enforce_on_opening: bool,
    pub min_morae: usize,
}

impl From<&ChainSettings> for ChainPolicy {
    fn from(s: &ChainSettings) -> Self {
        Self {
            enforce_on_opening: s.enforce_on_opening,
            min_morae: s.min_morae,
        }
    }
}

impl Default for ChainPolicy {
    fn default() -> Self {
        Self::from(&settings().chain)
    }
}

/// Whether `candidate` starts where `previous` ends.
///
/// Windows grow from one mora up to the shorter word's length; the first
/// window where the tail of `previous` equals the head of `candidate`
/// accepts. A previous word ending in しゃ (canonical しや) is therefore
/// continued by both や… and しゃ….
pub fn heads_match(previous: &CanonicalForm, candidate: &CanonicalForm) -> bool {
    let prev = previous.morae();
    let cand = candidate.morae();
    let max = prev.len().min(cand.len());
    (1..=max).any(|k| prev[prev.len() - k..] == cand[..k])
}

/// Validate `candidate` as the next word after `previous`.
///
/// `previous` is `None` (or empty) on the opening turn, where the match
/// check is skipped and the shape checks follow `policy.enforce_on_opening`.
/// Length is counted on the written word (ちゃ is one mora); matching and
/// the ん check use the canonical form.
pub fn validate_continuation(
    previous: Option<&str>,
    candidate: &str,
    played: &PlayedWordSet,
    policy: &ChainPolicy,
) -> Validation {
    let _span = debug_span!("validate_continuation", candidate, ?previous).entered();

    let cand = normalize(candidate);
    let previous = previous.filter(|p| !p.is_empty());
    let enforce_shape = previous.is_some() || policy.enforce_on_opening;

    let verdict = if cand.is_empty() {
        Validation::EmptyInput
    } else if enforce_shape && mora_count(candidate) < policy.min_morae {
        Validation::SingleMora
    } else if played.contains(candidate) {
        Validation::AlreadyPlayed
    } else if previous.is_some_and(|p| !heads_match(&normalize(p), &cand)) {
        Validation::NoMatch
    } else if enforce_shape && cand.last_mora() == Some("ん") {
        Validation::EndsInN
    } else {
        Validation::Valid
    };

    debug!(?verdict);
    verdict
}
