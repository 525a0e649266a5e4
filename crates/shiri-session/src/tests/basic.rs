use shiri_core::Validation;

use super::*;
use crate::TurnRejection;

// --- Accepted words ---

#[test]
fn test_opening_romaji_word() {
    let mut session = session(InputMode::Romaji);
    assert!(session.prompt().is_none());

    let word = session.play("neko").unwrap();
    assert_eq!(word.kana, "ネコ");
    assert_eq!(word.reading, "ねこ");
    assert_eq!(word.surface, "猫");
    assert_eq!(word.glosses, vec!["cat"]);
    assert_eq!(session.streak(), 1);

    let prompt = session.prompt().unwrap();
    assert_eq!(prompt.previous_surface, "猫");
    assert_eq!(prompt.previous_romaji.as_deref(), Some("neko"));
    assert_eq!(prompt.head_kana, "コ");
    assert_eq!(prompt.head_romaji.as_deref(), Some("ko"));
}

#[test]
fn test_chain_of_three() {
    let mut session = session(InputMode::Romaji);
    play_all(&mut session, &["neko", "koma", "mado"]);
    assert_eq!(session.streak(), 3);
    assert_eq!(session.chain().previous_kana(), Some("マド"));
}

#[test]
fn test_message_prefix_and_case() {
    let mut session = session(InputMode::Romaji);
    let word = session.play(">  Neko ").unwrap();
    assert_eq!(word.surface, "猫");
}

#[test]
fn test_long_vowel_romaji() {
    let mut session = session(InputMode::Romaji);
    let word = session.play("koohii").unwrap();
    assert_eq!(word.kana, "コーヒー");
    assert_eq!(session.prompt().unwrap().head_kana, "イ");
    assert_eq!(session.play("isu").unwrap().surface, "椅子");
}

#[test]
fn test_digraph_keeps_trailing_vowel() {
    let mut session = session(InputMode::Romaji);
    let word = session.play("toukyou").unwrap();
    assert_eq!(word.kana, "トーキョウ");
    assert_eq!(word.surface, "東京");
    assert_eq!(session.prompt().unwrap().head_kana, "ウ");
    assert_eq!(session.play("umi").unwrap().surface, "海");
}

#[test]
fn test_voiced_variant_romaji() {
    let mut session = session(InputMode::Romaji);
    let word = session.play("hanaji").unwrap();
    assert_eq!(word.surface, "鼻血");
    assert_eq!(word.kana, "ハナヂ");
}

#[test]
fn test_kana_response() {
    let mut session = session(InputMode::Romaji);
    let word = session.play("コーヒー").unwrap();
    assert_eq!(word.kana, "コーヒー");
    assert_eq!(word.surface, "コーヒー");
    let prompt = session.prompt().unwrap();
    assert_eq!(prompt.head_romaji.as_deref(), Some("i"));
    assert_eq!(session.play("いす").unwrap().kana, "イス");
}

#[test]
fn test_surface_response_digraph_tail() {
    let mut session = session(InputMode::Romaji);
    let word = session.play("医者").unwrap();
    assert_eq!(word.kana, "イシャ");

    let prompt = session.prompt().unwrap();
    assert_eq!(prompt.head_kana, "シャ");
    assert_eq!(prompt.head_romaji.as_deref(), Some("sha"));

    // Both the bare や and the full しゃ continue しゃ.
    assert!(session.resolve("shakai").is_ok());
    assert_eq!(session.play("yama").unwrap().surface, "山");
}

#[test]
fn test_surface_keeps_first_reading_that_chains() {
    let mut session = session(InputMode::Romaji);
    play_all(&mut session, &["kutsu"]);
    let word = session.play("角").unwrap();
    assert_eq!(word.reading, "つの");
    assert_eq!(word.surface, "角");
}

// --- Rejections ---

#[test]
fn test_not_romaji() {
    let session = session(InputMode::Romaji);
    assert_eq!(
        session.resolve("xyz"),
        Err(TurnRejection::NotRomaji("xyz".into()))
    );
}

#[test]
fn test_single_mora_opening() {
    let session = session(InputMode::Romaji);
    let err = session.resolve("ki").unwrap_err();
    assert_eq!(
        err,
        TurnRejection::Invalid {
            word: "き".into(),
            validation: Validation::SingleMora,
        }
    );
    assert_eq!(err.to_string(), "き is too short");
}

#[test]
fn test_no_match() {
    let mut session = session(InputMode::Romaji);
    play_all(&mut session, &["neko"]);
    let err = session.play("kutsu").unwrap_err();
    assert_eq!(
        err,
        TurnRejection::Invalid {
            word: "くつ".into(),
            validation: Validation::NoMatch,
        }
    );
    assert_eq!(err.to_string(), "くつ does not match the previous word");
}

#[test]
fn test_ends_in_n() {
    let mut session = session(InputMode::Romaji);
    play_all(&mut session, &["sushi"]);
    let err = session.play("shin").unwrap_err();
    assert!(matches!(
        err,
        TurnRejection::Invalid {
            validation: Validation::EndsInN,
            ..
        }
    ));
}

#[test]
fn test_already_played() {
    let mut session = session(InputMode::Romaji);
    play_all(&mut session, &["neko", "koma", "mane"]);
    let err = session.play("neko").unwrap_err();
    assert_eq!(
        err,
        TurnRejection::Invalid {
            word: "ねこ".into(),
            validation: Validation::AlreadyPlayed,
        }
    );
    // Same word in another script.
    let err = session.play("ネコ").unwrap_err();
    assert!(matches!(
        err,
        TurnRejection::Invalid {
            validation: Validation::AlreadyPlayed,
            ..
        }
    ));
}

#[test]
fn test_unknown_word_after_validation() {
    let mut session = session(InputMode::Romaji);
    play_all(&mut session, &["neko"]);
    assert_eq!(
        session.play("koko"),
        Err(TurnRejection::UnknownWord("koko".into()))
    );
}

#[test]
fn test_unknown_surface() {
    let session = session(InputMode::Romaji);
    assert_eq!(
        session.resolve("犬犬"),
        Err(TurnRejection::UnknownWord("犬犬".into()))
    );
}

#[test]
fn test_surface_that_breaks_chain() {
    let mut session = session(InputMode::Romaji);
    play_all(&mut session, &["neko"]);
    assert_eq!(
        session.play("窓"),
        Err(TurnRejection::Invalid {
            word: "窓".into(),
            validation: Validation::NoMatch,
        })
    );
}

#[test]
fn test_rejection_leaves_state_untouched() {
    let mut session = session(InputMode::Romaji);
    play_all(&mut session, &["neko"]);
    let before = session.chain().clone();

    assert!(session.play("kutsu").is_err());
    assert!(session.play("xyz").is_err());
    assert!(session.play("koko").is_err());

    assert_eq!(session.streak(), 1);
    assert_eq!(session.chain(), &before);
}

#[test]
fn test_lenient_opening_policy() {
    use shiri_core::ChainPolicy;

    let policy = ChainPolicy {
        enforce_on_opening: false,
        min_morae: 2,
    };
    let mut session = session(InputMode::Romaji).with_policy(policy);
    assert_eq!(session.play("ki").unwrap().surface, "木");
    assert_eq!(session.policy(), &policy);
}
