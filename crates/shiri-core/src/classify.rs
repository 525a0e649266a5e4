//! Routing of raw chat input.
//!
//! `classify` only says which path a response takes (romaji, kana or
//! dictionary surface). Whether the word is any good is decided later.

use serde::Serialize;

use crate::settings::InputSettings;
use crate::unicode::{is_kana_letter, is_latin};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Romaji,
    Kana,
    /// Everything else: kanji, mixed kanji/kana surfaces, empty input.
    Kanji,
}

pub fn classify(raw: &str) -> InputKind {
    if raw.is_empty() {
        InputKind::Kanji
    } else if raw.chars().all(is_latin) {
        InputKind::Romaji
    } else if raw.chars().all(is_kana_letter) {
        InputKind::Kana
    } else {
        InputKind::Kanji
    }
}

fn expand_macron(c: char) -> Option<&'static str> {
    Some(match c {
        'ā' | 'â' => "aa",
        'ī' | 'î' => "ii",
        'ū' | 'û' => "uu",
        'ē' | 'ê' => "ee",
        'ō' | 'ô' => "ou",
        'Ā' | 'Â' => "AA",
        'Ī' | 'Î' => "II",
        'Ū' | 'Û' => "UU",
        'Ē' | 'Ê' => "EE",
        'Ō' | 'Ô' => "OU",
        _ => return None,
    })
}

/// Clean a chat response before classification: trim, drop one message
/// prefix, expand Hepburn macrons and lowercase ASCII.
pub fn sanitize(raw: &str, input: &InputSettings) -> String {
    let mut text = raw.trim_start();
    if let Some(rest) = input
        .message_prefixes
        .iter()
        .find_map(|p| text.strip_prefix(p.as_str()))
    {
        text = rest;
    }
    let text = text.trim();

    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match expand_macron(c).filter(|_| input.expand_macrons) {
            Some(pair) => out.push_str(pair),
            None => out.push(c),
        }
    }
    out.make_ascii_lowercase();
    out
}
