//! Turn handling for one Shiritori game.
//!
//! `GameSession` owns the chain state and played words of a game, resolves
//! raw chat responses to dictionary words and records the accepted ones.
//! Timers, lives and message delivery belong to the caller.

mod dictionary;
mod resolve;
mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tracing::debug;

use shiri_core::transliterate::{kana_to_romaji, render_katakana};
use shiri_core::{validate_continuation, ChainPolicy, ChainState, PlayedWordSet, Validation};

pub use dictionary::{DictEntry, Dictionary, MemoryDictionary};
pub use types::{InputMode, PlayedWord, Prompt, TurnRejection};

/// Dictionary entries fetched per batch when choosing a computer move.
/// The batch doubles until a playable word turns up or the dictionary runs
/// out of entries for the head.
const COMPUTER_BATCH: usize = 200;

/// Head the computer opens a game with.
const OPENING_HEAD: &str = "ア";

pub struct GameSession {
    dict: Arc<dyn Dictionary>,
    mode: InputMode,
    policy: ChainPolicy,
    chain: ChainState,
    played: PlayedWordSet,
}

impl GameSession {
    pub fn new(dict: Arc<dyn Dictionary>, mode: InputMode) -> Self {
        Self {
            dict,
            mode,
            policy: ChainPolicy::default(),
            chain: ChainState::new(),
            played: PlayedWordSet::new(),
        }
    }

    pub fn with_policy(mut self, policy: ChainPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn policy(&self) -> &ChainPolicy {
        &self.policy
    }

    pub fn chain(&self) -> &ChainState {
        &self.chain
    }

    pub fn played(&self) -> &PlayedWordSet {
        &self.played
    }

    /// Number of words accepted so far.
    pub fn streak(&self) -> usize {
        self.played.len()
    }

    /// Validate `kana` against the current chain without touching the state.
    pub fn validate(&self, kana: &str) -> Validation {
        validate_continuation(self.chain.previous_kana(), kana, &self.played, &self.policy)
    }

    /// Record an accepted word: it joins the played set and becomes the
    /// word the next turn chains from.
    pub fn accept(&mut self, word: &PlayedWord) {
        self.played.insert(&word.kana);
        self.chain.advance(word.kana.clone(), word.surface.clone());
        debug!(kana = %word.kana, surface = %word.surface, streak = self.streak(), "accepted");
    }

    /// Resolve a raw response and accept it.
    pub fn play(&mut self, raw: &str) -> Result<PlayedWord, TurnRejection> {
        let word = self.resolve(raw)?;
        self.accept(&word);
        Ok(word)
    }

    /// What the next player must continue from; `None` before the first word.
    pub fn prompt(&self) -> Option<Prompt> {
        let previous = self.chain.previous()?;
        let head = self.chain.required_head()?;
        Some(Prompt {
            previous_surface: previous.surface.clone(),
            previous_romaji: kana_to_romaji(&previous.kana).ok(),
            head_romaji: kana_to_romaji(&head).ok(),
            head_kana: head,
        })
    }

    /// Pick a word for the computer: the first dictionary entry starting
    /// with the required head that passes validation. Does not accept it.
    pub fn computer_move(&self) -> Option<PlayedWord> {
        let head = self
            .chain
            .required_head()
            .unwrap_or_else(|| OPENING_HEAD.to_string());
        let mut examined = 0;
        let mut limit = COMPUTER_BATCH;
        let pick = loop {
            let hits = self.dict.predict(&head, limit);
            let exhausted = hits.len() < limit;
            let pick = hits
                .into_iter()
                .skip(examined)
                .map(played_word)
                .find(|w| self.validate(&w.kana).is_valid());
            if pick.is_some() || exhausted {
                break pick;
            }
            examined = limit;
            limit = limit.saturating_mul(2);
        };
        debug!(%head, examined, pick = ?pick.as_ref().map(|w| &w.kana), "computer move");
        pick
    }
}

pub(crate) fn played_word(entry: DictEntry) -> PlayedWord {
    PlayedWord {
        kana: render_katakana(&entry.reading),
        surface: entry.display().to_string(),
        reading: entry.reading,
        glosses: entry.glosses,
    }
}
