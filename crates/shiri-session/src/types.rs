use serde::{Deserialize, Serialize};

use shiri_core::{InputKind, Validation};

/// Which kinds of response a game accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    /// Romaji, kana and kanji are all accepted.
    #[default]
    Romaji,
    /// Romaji is refused.
    Kana,
    /// Romaji is refused, and kana responses are looked up as surface forms.
    Kanji,
}

impl InputMode {
    pub fn allows(self, kind: InputKind) -> bool {
        kind != InputKind::Romaji || self == InputMode::Romaji
    }

    /// The lookup path a response of `kind` takes in this mode.
    pub(crate) fn route(self, kind: InputKind) -> InputKind {
        match (self, kind) {
            (InputMode::Kanji, InputKind::Kana) => InputKind::Kanji,
            _ => kind,
        }
    }
}

/// A word that passed validation and was found in the dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayedWord {
    /// Katakana rendering of the reading; what the chain records.
    pub kana: String,
    /// Dictionary reading as spelled by the source.
    pub reading: String,
    /// Surface form (falls back to the reading).
    pub surface: String,
    pub glosses: Vec<String>,
}

/// Why a response was not accepted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TurnRejection {
    #[error("{0} is not a valid romaji word")]
    NotRomaji(String),
    #[error("{word} {}", rejection_reason(.validation))]
    Invalid { word: String, validation: Validation },
    #[error("{0} is not a valid word")]
    UnknownWord(String),
    #[error("{} input is not allowed in this mode", kind_name(.0))]
    ModeDisallows(InputKind),
}

fn rejection_reason(v: &Validation) -> &'static str {
    match v {
        Validation::Valid => "is valid",
        Validation::EmptyInput => "is empty",
        Validation::SingleMora => "is too short",
        Validation::AlreadyPlayed => "has already been played",
        Validation::NoMatch => "does not match the previous word",
        Validation::EndsInN => "ends with ん",
    }
}

fn kind_name(kind: &InputKind) -> &'static str {
    match kind {
        InputKind::Romaji => "romaji",
        InputKind::Kana => "kana",
        InputKind::Kanji => "kanji",
    }
}

/// What the next player has to continue from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub previous_surface: String,
    /// `None` when the reading has no romaji spelling (e.g. a leading ー).
    pub previous_romaji: Option<String>,
    pub head_kana: String,
    pub head_romaji: Option<String>,
}
