//! Character-level Unicode classification for Japanese text.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes the prolonged
/// sound mark ー (U+30FC) and the middle dot ・ (U+30FB).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Kana that can be part of a word: either kana block, minus the
/// punctuation-like code points (゛ ゜ ゠ ・).
pub fn is_kana_letter(c: char) -> bool {
    (is_hiragana(c) || is_katakana(c)) && !matches!(c, '゛' | '゜' | '゠' | '・')
}

/// Fold a katakana letter to the hiragana at the same offset. Only
/// U+30A1..=U+30F6 have hiragana counterparts; everything else (including
/// ー) is returned unchanged.
pub fn fold_to_hiragana(c: char) -> char {
    if ('\u{30A1}'..='\u{30F6}').contains(&c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    }
}
