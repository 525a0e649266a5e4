mod basic;
mod computer;

use std::sync::Arc;

use super::{DictEntry, GameSession, InputMode, MemoryDictionary};

pub(super) fn make_test_dict() -> Arc<MemoryDictionary> {
    let words: &[(&str, Option<&str>, &str)] = &[
        ("あめ", Some("雨"), "rain"),
        ("あめ", Some("飴"), "candy"),
        ("ねこ", Some("猫"), "cat"),
        ("こま", Some("独楽"), "spinning top"),
        ("まね", Some("真似"), "imitation"),
        ("まど", Some("窓"), "window"),
        ("コーヒー", None, "coffee"),
        ("いす", Some("椅子"), "chair"),
        ("すし", Some("寿司"), "sushi"),
        ("いしゃ", Some("医者"), "doctor"),
        ("やま", Some("山"), "mountain"),
        ("しゃかい", Some("社会"), "society"),
        ("くつ", Some("靴"), "shoes"),
        ("つくえ", Some("机"), "desk"),
        ("えき", Some("駅"), "station"),
        ("かど", Some("角"), "corner"),
        ("つの", Some("角"), "horn"),
        ("ねずみ", Some("鼠"), "mouse"),
        ("みかん", Some("蜜柑"), "mandarin orange"),
        ("みず", Some("水"), "water"),
        ("いぬ", Some("犬"), "dog"),
        ("き", Some("木"), "tree"),
        ("はなぢ", Some("鼻血"), "nosebleed"),
        ("とうきょう", Some("東京"), "Tokyo"),
        ("うみ", Some("海"), "sea"),
    ];
    Arc::new(
        words
            .iter()
            .map(|&(reading, surface, gloss)| DictEntry {
                reading: reading.to_string(),
                surface: surface.map(str::to_string),
                glosses: vec![gloss.to_string()],
            })
            .collect(),
    )
}

pub(super) fn session(mode: InputMode) -> GameSession {
    GameSession::new(make_test_dict(), mode)
}

/// Play each response in order, panicking on the first rejection.
pub(super) fn play_all(session: &mut GameSession, responses: &[&str]) {
    for r in responses {
        if let Err(e) = session.play(r) {
            panic!("{r:?} rejected: {e}");
        }
    }
}
