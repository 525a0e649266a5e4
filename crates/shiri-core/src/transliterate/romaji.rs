use tracing::debug_span;

use super::script::contract_morae;
use super::{contraction_enabled, KanaParses, Script, TransliterationError};
use crate::kana::{morae, KanaTables, Vowel, CHOONPU, MAX_ROMAJI_LEN};

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'i' | b'u' | b'e' | b'o')
}

/// A doubled consonant (other than `n`) is written with a small tsu.
fn is_geminate(bytes: &[u8], i: usize) -> bool {
    let Some(&next) = bytes.get(i + 1) else {
        return false;
    };
    let b = bytes[i];
    if b == b'n' || is_vowel(b) {
        return false;
    }
    // Hepburn spells っち as "tchi".
    next == b || (b == b't' && next == b'c' && bytes.get(i + 2) == Some(&b'h'))
}

/// Greedy tokenization into table morae. Fails on the first position where
/// no 3-, 2- or 1-letter prefix is in the table.
pub(super) fn tokenize<'t>(
    input: &str,
    script: Script,
    tables: &'t KanaTables,
) -> Result<Vec<&'t str>, TransliterationError> {
    let bytes = input.as_bytes();
    let invalid = |position: usize| TransliterationError::InvalidRomaji {
        input: input.to_string(),
        position,
    };

    let mut tokens: Vec<&'t str> = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if !bytes[i].is_ascii_lowercase() {
            return Err(invalid(i));
        }
        if is_geminate(bytes, i) {
            tokens.push(script.sokuon());
            i += 1;
        }

        let max = MAX_ROMAJI_LEN.min(bytes.len() - i);
        let hit = (1..=max).rev().find_map(|len| {
            let seg = input.get(i..i + len)?;
            tables.lookup(script, seg).map(|kana| (len, kana))
        });
        match hit {
            Some((len, kana)) => {
                tokens.push(kana);
                i += len;
            }
            None => return Err(invalid(i)),
        }
    }
    Ok(tokens)
}

/// Convert a romaji word to kana in the given script.
///
/// Input is case-folded. Any unparseable position invalidates the whole
/// word; there are no partial parses.
pub fn romaji_to_kana(input: &str, script: Script) -> Result<KanaParses, TransliterationError> {
    let _span = debug_span!("romaji_to_kana", input, ?script).entered();

    let lower = input.to_ascii_lowercase();
    if lower.is_empty() {
        return Err(TransliterationError::Empty);
    }

    let tables = KanaTables::global();
    let tokens = tokenize(&lower, script, tables)?;
    let plain: String = tokens.concat();

    let contracted = match script {
        Script::Katakana if contraction_enabled() => {
            Some(contract_morae(&tokens)).filter(|c| *c != plain)
        }
        _ => None,
    };

    Ok(KanaParses { plain, contracted })
}

/// Convert kana (either script) to Hepburn romaji.
///
/// ー repeats the preceding vowel and っ doubles the next consonant
/// (`tch` before `ch`). Unknown morae and markers with nothing to attach to
/// are errors.
pub fn kana_to_romaji(kana: &str) -> Result<String, TransliterationError> {
    let tables = KanaTables::global();
    let unmapped = |m: &str| TransliterationError::UnmappedKana(m.to_string());

    let mut out = String::with_capacity(kana.len());
    let mut sokuon = false;
    for mora in morae(kana) {
        match mora {
            "っ" | "ッ" => {
                if sokuon {
                    return Err(unmapped(mora));
                }
                sokuon = true;
            }
            _ if mora.starts_with(CHOONPU) => {
                let vowel = out
                    .chars()
                    .last()
                    .and_then(Vowel::from_romaji)
                    .filter(|_| !sokuon)
                    .ok_or_else(|| unmapped(mora))?;
                out.push(vowel.romaji());
            }
            _ => {
                let romaji = tables.romaji_of(mora).ok_or_else(|| unmapped(mora))?;
                if sokuon {
                    let first = romaji.as_bytes()[0];
                    if is_vowel(first) || first == b'n' {
                        return Err(unmapped(mora));
                    }
                    out.push(if romaji.starts_with("ch") { 't' } else { first as char });
                    sokuon = false;
                }
                out.push_str(romaji);
            }
        }
    }
    if sokuon {
        return Err(unmapped(kana));
    }
    Ok(out)
}
