use super::table::COMBINING_SMALL;

/// Split kana into morae.
///
/// A small ゃゅょ / ぁぃぅぇぉ (or katakana equivalent) binds to the character
/// before it. っ and ー are morae of their own. A leading small kana has
/// nothing to bind to and stands alone. Characters outside the kana blocks
/// are treated as one mora each.
pub fn morae(kana: &str) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, c) in kana.char_indices() {
        if COMBINING_SMALL.contains(c) && start.is_some() {
            continue;
        }
        if let Some(s) = start {
            out.push(&kana[s..idx]);
        }
        start = Some(idx);
    }
    if let Some(s) = start {
        out.push(&kana[s..]);
    }
    out
}

pub fn mora_count(kana: &str) -> usize {
    morae(kana).len()
}
