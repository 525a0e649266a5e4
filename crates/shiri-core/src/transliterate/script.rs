use super::TransliterationError;
use crate::kana::{morae, KanaTables, Vowel, CHOONPU};

/// Whether `next` lengthens `prev` and is written ー in katakana.
///
/// Fixed pair set: a+あ, i+い, u+う, e+え, e+い, o+お, o+う. Only a single
/// kana lengthens; digraphs such as キョ keep the vowel written out.
fn extends(prev: &str, next: &str) -> bool {
    if prev.chars().count() != 1 {
        return false;
    }
    let (Some(row), Some(vowel)) = (Vowel::of_mora(prev), Vowel::bare(next)) else {
        return false;
    };
    matches!(
        (row, vowel),
        (Vowel::A, Vowel::A)
            | (Vowel::I, Vowel::I)
            | (Vowel::U, Vowel::U)
            | (Vowel::E, Vowel::E)
            | (Vowel::E, Vowel::I)
            | (Vowel::O, Vowel::O)
            | (Vowel::O, Vowel::U)
    )
}

/// Join morae, replacing each vowel that lengthens the *unmodified* mora
/// before it with ー. Chains stay chains: アアア becomes アーー.
pub(super) fn contract_morae(morae: &[&str]) -> String {
    let mut out = String::new();
    for (i, mora) in morae.iter().enumerate() {
        if i > 0 && extends(morae[i - 1], mora) {
            out.push(CHOONPU);
        } else {
            out.push_str(mora);
        }
    }
    out
}

/// Apply ー contraction to a kana string of either script.
pub fn contract_long_vowels(kana: &str) -> String {
    contract_morae(&morae(kana))
}

/// Character-by-character hiragana → katakana. Characters outside the table
/// pass through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    let tables = KanaTables::global();
    s.chars()
        .map(|c| tables.katakana_char(c).unwrap_or(c))
        .collect()
}

/// Character-by-character katakana → hiragana.
///
/// Loanword morae such as ティ or ヴ have no hiragana spelling; the first
/// such mora is reported as `NoHiraganaForm`. ー and non-katakana characters
/// pass through.
pub fn katakana_to_hiragana(s: &str) -> Result<String, TransliterationError> {
    let tables = KanaTables::global();
    let mut out = String::with_capacity(s.len());
    for mora in morae(s) {
        for c in mora.chars() {
            if c == CHOONPU || !crate::unicode::is_katakana(c) {
                out.push(c);
                continue;
            }
            match tables.hiragana_char(c) {
                Some(h) => out.push(h),
                None => return Err(TransliterationError::NoHiraganaForm(mora.to_string())),
            }
        }
    }
    Ok(out)
}

/// The katakana spelling used as the dictionary key and played-word record:
/// script substitution followed by ー contraction. Total.
pub fn render_katakana(kana: &str) -> String {
    contract_long_vowels(&hiragana_to_katakana(kana))
}
