use tracing::{debug, debug_span};

use shiri_core::settings::settings;
use shiri_core::transliterate::render_katakana;
use shiri_core::{classify, normalize, sanitize, to_kana_candidates, InputKind, Validation};

use crate::{played_word, GameSession, PlayedWord, TurnRejection};

/// Two readings name the same word when their katakana renderings or their
/// canonical forms agree (こうひい and コーヒー, はなぢ and はなじ).
fn same_word(a: &str, b: &str) -> bool {
    render_katakana(a) == render_katakana(b) || normalize(a) == normalize(b)
}

impl GameSession {
    /// Turn a raw response into a playable word without recording it.
    ///
    /// Validation runs before the dictionary is consulted, so a response
    /// that breaks the chain is rejected even if it is not a word.
    pub fn resolve(&self, raw: &str) -> Result<PlayedWord, TurnRejection> {
        let text = sanitize(raw, &settings().input);
        let kind = classify(&text);
        let _span = debug_span!("resolve", %text, ?kind).entered();

        if !self.mode.allows(kind) {
            return Err(TurnRejection::ModeDisallows(kind));
        }
        let result = match self.mode.route(kind) {
            InputKind::Romaji => self.resolve_romaji(&text),
            InputKind::Kana => self.resolve_kana(&text),
            InputKind::Kanji => self.resolve_surface(&text),
        };
        debug!(ok = result.is_ok());
        result
    }

    fn resolve_romaji(&self, text: &str) -> Result<PlayedWord, TurnRejection> {
        let candidates = to_kana_candidates(text, InputKind::Romaji);
        let Some(first) = candidates.first() else {
            return Err(TurnRejection::NotRomaji(text.to_string()));
        };

        let mut rejection = None;
        let mut valid = Vec::new();
        for candidate in &candidates {
            match self.validate(&candidate.kana) {
                Validation::Valid => valid.push(candidate.kana.as_str()),
                v => {
                    rejection.get_or_insert(v);
                }
            }
        }
        if valid.is_empty() {
            return Err(TurnRejection::Invalid {
                word: first.kana.clone(),
                validation: rejection.unwrap_or(Validation::EmptyInput),
            });
        }

        valid
            .into_iter()
            .find_map(|kana| self.find_reading(kana))
            .ok_or_else(|| TurnRejection::UnknownWord(text.to_string()))
    }

    fn resolve_kana(&self, text: &str) -> Result<PlayedWord, TurnRejection> {
        let validation = self.validate(text);
        if !validation.is_valid() {
            return Err(TurnRejection::Invalid {
                word: text.to_string(),
                validation,
            });
        }
        self.find_reading(text)
            .ok_or_else(|| TurnRejection::UnknownWord(text.to_string()))
    }

    /// Look `text` up as a written form and keep the first reading that
    /// continues the chain.
    fn resolve_surface(&self, text: &str) -> Result<PlayedWord, TurnRejection> {
        let entries = self.dict.lookup(text);
        if entries.is_empty() {
            return Err(TurnRejection::UnknownWord(text.to_string()));
        }

        let mut rejection = None;
        for entry in entries {
            match self.validate(&render_katakana(&entry.reading)) {
                Validation::Valid => return Ok(played_word(entry)),
                v => {
                    rejection.get_or_insert(v);
                }
            }
        }
        Err(TurnRejection::Invalid {
            word: text.to_string(),
            validation: rejection.unwrap_or(Validation::EmptyInput),
        })
    }

    /// Dictionary entry whose reading is `kana`.
    fn find_reading(&self, kana: &str) -> Option<PlayedWord> {
        self.dict
            .lookup(kana)
            .into_iter()
            .find(|e| same_word(&e.reading, kana))
            .map(played_word)
    }
}
