use super::*;

#[test]
fn test_computer_opens_with_a() {
    let session = session(InputMode::Romaji);
    let word = session.computer_move().unwrap();
    assert_eq!(word.kana, "アメ");
    assert_eq!(word.surface, "雨");
    // Picking does not play.
    assert_eq!(session.streak(), 0);
}

#[test]
fn test_computer_continues_chain() {
    let mut session = session(InputMode::Romaji);
    play_all(&mut session, &["neko"]);
    let word = session.computer_move().unwrap();
    assert_eq!(word.kana, "コマ");
    session.accept(&word);
    assert_eq!(session.streak(), 2);
    assert_eq!(session.prompt().unwrap().head_kana, "マ");
}

#[test]
fn test_computer_skips_words_ending_in_n() {
    let mut session = session(InputMode::Romaji);
    play_all(&mut session, &["nezumi"]);
    assert_eq!(session.computer_move().unwrap().surface, "水");
}

#[test]
fn test_computer_skips_played_words() {
    let mut session = session(InputMode::Romaji);
    play_all(&mut session, &["neko", "koma", "mane"]);
    // ねこ is taken, so the next ね… word comes up.
    assert_eq!(session.computer_move().map(|w| w.kana), Some("ネズミ".to_string()));
    play_all(&mut session, &["nezumi", "mizu"]);
    assert!(session.computer_move().is_none());
}

#[test]
fn test_computer_after_long_vowel() {
    let mut session = session(InputMode::Romaji);
    play_all(&mut session, &["koohii"]);
    let word = session.computer_move().unwrap();
    assert_eq!(word.kana, "イス");
}

#[test]
fn test_computer_gives_up() {
    let mut session = session(InputMode::Romaji);
    play_all(&mut session, &["inu"]);
    assert!(session.computer_move().is_none());
}

#[test]
fn test_computer_looks_past_first_batch() {
    let row = "かきくけこさしすせそたちつてとな";
    let mut dict = MemoryDictionary::new();
    for a in row.chars() {
        for b in row.chars() {
            dict.add(&format!("あ{a}{b}ん"), None, "");
        }
    }
    dict.add("あさ", Some("朝"), "morning");
    assert!(dict.len() > crate::COMPUTER_BATCH);

    let session = GameSession::new(Arc::new(dict), InputMode::Romaji);
    assert_eq!(session.computer_move().unwrap().surface, "朝");
}
