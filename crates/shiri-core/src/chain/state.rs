use serde::Serialize;

use crate::kana::{morae, Vowel, CHOONPU};
use crate::unicode::is_katakana;

/// The last accepted word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviousWord {
    /// Kana reading (katakana rendering as recorded by the game).
    pub kana: String,
    /// Dictionary surface form (kanji or kana).
    pub surface: String,
}

/// What the next word has to chain from. Empty until the first word is
/// accepted; replaced on every accepted word after that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChainState {
    previous: Option<PreviousWord>,
}

impl ChainState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous(&self) -> Option<&PreviousWord> {
        self.previous.as_ref()
    }

    pub fn previous_kana(&self) -> Option<&str> {
        self.previous.as_ref().map(|p| p.kana.as_str())
    }

    pub fn is_opening(&self) -> bool {
        self.previous.is_none()
    }

    pub fn advance(&mut self, kana: impl Into<String>, surface: impl Into<String>) {
        self.previous = Some(PreviousWord {
            kana: kana.into(),
            surface: surface.into(),
        });
    }

    /// The mora the next word should start with, in the script it was
    /// written in. A trailing digraph is kept whole (しゃ), and a trailing ー
    /// is spelled out as its vowel.
    pub fn required_head(&self) -> Option<String> {
        let kana = self.previous_kana()?;
        let morae = morae(kana);
        let last = *morae.last()?;
        if !last.starts_with(CHOONPU) {
            return Some(last.to_string());
        }
        let base = morae.iter().rev().find(|m| !m.starts_with(CHOONPU))?;
        let vowel = Vowel::of_mora(base)?;
        let katakana = base.chars().next().is_some_and(is_katakana);
        Some(if katakana { vowel.katakana() } else { vowel.hiragana() }.to_string())
    }
}
