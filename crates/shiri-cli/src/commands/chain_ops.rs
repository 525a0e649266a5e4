use std::fs;
use std::path::Path;
use std::process;
use std::sync::Arc;

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use shiri_core::settings::settings;
use shiri_core::transliterate::render_katakana;
use shiri_core::{
    classify, sanitize, to_kana_candidates, validate_continuation, ChainPolicy, ChainState,
    InputKind, PlayedWordSet, Validation,
};
use shiri_session::{GameSession, InputMode};

use super::dict_file::load_dictionary;
use super::{pad, print_json};

/// Rule overrides from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyArgs {
    pub lenient_opening: bool,
    pub min_morae: Option<usize>,
}

impl PolicyArgs {
    pub fn policy(self) -> ChainPolicy {
        let mut policy = ChainPolicy::default();
        if self.lenient_opening {
            policy.enforce_on_opening = false;
        }
        if let Some(n) = self.min_morae {
            policy.min_morae = n;
        }
        policy
    }
}

/// Kana spellings of a romaji or kana argument.
fn kana_spellings(text: &str) -> Result<Vec<String>, String> {
    let input = sanitize(text, &settings().input);
    match classify(&input) {
        InputKind::Kanji => Err(format!(
            "{input:?} is not romaji or kana (kanji needs a dictionary: use replay --dict)"
        )),
        kind => {
            let spellings: Vec<String> = to_kana_candidates(&input, kind)
                .into_iter()
                .map(|c| c.kana)
                .collect();
            if spellings.is_empty() {
                Err(format!("{input} is not a valid romaji word"))
            } else {
                Ok(spellings)
            }
        }
    }
}

/// First spelling that validates, or the first spelling with its verdict.
fn best_spelling(
    spellings: &[String],
    previous: Option<&str>,
    played: &PlayedWordSet,
    policy: &ChainPolicy,
) -> (String, Validation) {
    let verdicts: Vec<Validation> = spellings
        .iter()
        .map(|k| validate_continuation(previous, k, played, policy))
        .collect();
    let i = verdicts.iter().position(|v| v.is_valid()).unwrap_or(0);
    (spellings[i].clone(), verdicts[i])
}

#[derive(Serialize)]
struct CheckReport {
    candidates: Vec<CheckedSpelling>,
    valid: bool,
}

#[derive(Serialize)]
struct CheckedSpelling {
    kana: String,
    validation: Validation,
}

pub fn check(candidate: &str, prev: Option<&str>, played: &[String], args: PolicyArgs, json: bool) {
    let policy = args.policy();
    let previous = prev.map(|p| die!(kana_spellings(p), "Error in --prev: {}").swap_remove(0));
    let played: PlayedWordSet = played
        .iter()
        .map(|w| die!(kana_spellings(w), "Error in --played: {}").swap_remove(0))
        .collect();
    let spellings = die!(kana_spellings(candidate), "Error: {}");

    let candidates: Vec<CheckedSpelling> = spellings
        .into_iter()
        .map(|kana| CheckedSpelling {
            validation: validate_continuation(previous.as_deref(), &kana, &played, &policy),
            kana,
        })
        .collect();
    let valid = candidates.iter().any(|c| c.validation.is_valid());

    if json {
        print_json(&CheckReport { candidates, valid });
    } else {
        let width = candidates
            .iter()
            .map(|c| UnicodeWidthStr::width(c.kana.as_str()))
            .max()
            .unwrap_or(0);
        for c in &candidates {
            println!("{}  {:?}", pad(&c.kana, width), c.validation);
        }
    }
    if !valid {
        process::exit(1);
    }
}

/// One line of a replayed game.
#[derive(Debug, Serialize)]
pub struct ReplayRow {
    pub turn: usize,
    pub input: String,
    pub kana: Option<String>,
    pub surface: Option<String>,
    pub accepted: bool,
    pub verdict: String,
}

/// Replay a chain without a dictionary: every word that validates is
/// accepted and recorded in its katakana rendering, as a session records
/// dictionary readings.
pub fn replay_chain(lines: &[&str], policy: ChainPolicy) -> Vec<ReplayRow> {
    let mut chain = ChainState::new();
    let mut played = PlayedWordSet::new();
    let mut rows = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        let row = match kana_spellings(line) {
            Err(reason) => ReplayRow {
                turn: i + 1,
                input: line.to_string(),
                kana: None,
                surface: None,
                accepted: false,
                verdict: reason,
            },
            Ok(spellings) => {
                let (spelling, verdict) =
                    best_spelling(&spellings, chain.previous_kana(), &played, &policy);
                let accepted = verdict.is_valid();
                let kana = if accepted {
                    let kana = render_katakana(&spelling);
                    played.insert(&kana);
                    chain.advance(kana.clone(), line.to_string());
                    kana
                } else {
                    spelling
                };
                ReplayRow {
                    turn: i + 1,
                    input: line.to_string(),
                    kana: Some(kana),
                    surface: None,
                    accepted,
                    verdict: format!("{verdict:?}"),
                }
            }
        };
        rows.push(row);
    }
    rows
}

/// Replay a game against a dictionary, the way a live session resolves
/// each response.
pub fn replay_session(lines: &[&str], session: &mut GameSession) -> Vec<ReplayRow> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| match session.play(line) {
            Ok(word) => ReplayRow {
                turn: i + 1,
                input: line.to_string(),
                kana: Some(word.kana),
                surface: Some(word.surface),
                accepted: true,
                verdict: "Valid".to_string(),
            },
            Err(rejection) => ReplayRow {
                turn: i + 1,
                input: line.to_string(),
                kana: None,
                surface: None,
                accepted: false,
                verdict: rejection.to_string(),
            },
        })
        .collect()
}

fn column_width(rows: &[ReplayRow], cell: impl Fn(&ReplayRow) -> String) -> usize {
    rows.iter()
        .map(|r| UnicodeWidthStr::width(cell(r).as_str()))
        .max()
        .unwrap_or(0)
}

fn print_table(rows: &[ReplayRow]) {
    let or_dash = |s: &Option<String>| s.clone().unwrap_or_else(|| "-".to_string());
    let w_input = column_width(rows, |r| r.input.clone());
    let w_kana = column_width(rows, |r| or_dash(&r.kana));
    let w_surface = column_width(rows, |r| or_dash(&r.surface));

    for r in rows {
        println!(
            "{:>3}  {}  {}  {}  {}",
            r.turn,
            pad(&r.input, w_input),
            pad(&or_dash(&r.kana), w_kana),
            pad(&or_dash(&r.surface), w_surface),
            r.verdict,
        );
    }
}

pub fn replay(file: &str, dict: Option<&str>, mode: InputMode, args: PolicyArgs, json: bool) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let lines: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect();
    let policy = args.policy();

    let rows = match dict {
        Some(path) => {
            let dict = die!(load_dictionary(Path::new(path)), "Error: {}");
            let mut session = GameSession::new(Arc::new(dict), mode).with_policy(policy);
            replay_session(&lines, &mut session)
        }
        None => replay_chain(&lines, policy),
    };
    let streak = rows.iter().filter(|r| r.accepted).count();

    if json {
        print_json(&serde_json::json!({ "turns": rows, "streak": streak }));
    } else {
        print_table(&rows);
        println!("streak: {streak}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiri_session::{DictEntry, MemoryDictionary};

    const STRICT: ChainPolicy = ChainPolicy {
        enforce_on_opening: true,
        min_morae: 2,
    };

    #[test]
    fn spellings_for_romaji_and_kana() {
        assert_eq!(
            kana_spellings("koohii").unwrap(),
            vec!["こおひい", "コーヒー", "コオヒイ"]
        );
        assert_eq!(kana_spellings("ねこ").unwrap(), vec!["ねこ"]);
        assert!(kana_spellings("猫").is_err());
        assert!(kana_spellings("xyz").is_err());
    }

    #[test]
    fn policy_overrides() {
        let policy = PolicyArgs {
            lenient_opening: true,
            min_morae: Some(3),
        }
        .policy();
        assert!(!policy.enforce_on_opening);
        assert_eq!(policy.min_morae, 3);
        assert_eq!(PolicyArgs::default().policy(), STRICT);
    }

    #[test]
    fn replay_chain_without_dictionary() {
        let rows = replay_chain(&["neko", "kutsu", "koma", "ねこ", "mikan", "maru"], STRICT);
        let verdicts: Vec<&str> = rows.iter().map(|r| r.verdict.as_str()).collect();
        assert_eq!(
            verdicts,
            vec!["Valid", "NoMatch", "Valid", "AlreadyPlayed", "NoMatch", "Valid"]
        );
        assert_eq!(rows[2].kana.as_deref(), Some("コマ"));
        assert_eq!(rows[3].kana.as_deref(), Some("ねこ"));
        assert_eq!(rows.iter().filter(|r| r.accepted).count(), 3);
    }

    #[test]
    fn replay_chain_agrees_with_session() {
        let dict: MemoryDictionary = [
            ("とうきょう", "東京"),
            ("うみ", "海"),
            ("みず", "水"),
            ("こおひい", "コーヒー"),
            ("いす", "椅子"),
            ("ねこ", "猫"),
        ]
        .into_iter()
        .map(|(reading, surface)| DictEntry {
            reading: reading.to_string(),
            surface: Some(surface.to_string()),
            glosses: Vec::new(),
        })
        .collect();
        let lines = ["toukyou", "umi", "mizu", "neko", "koohii", "isu"];

        let chain_rows = replay_chain(&lines, STRICT);
        let mut session = GameSession::new(Arc::new(dict), InputMode::Romaji).with_policy(STRICT);
        let session_rows = replay_session(&lines, &mut session);

        let accepted =
            |rows: &[ReplayRow]| -> Vec<bool> { rows.iter().map(|r| r.accepted).collect() };
        assert_eq!(accepted(&chain_rows), vec![true, true, true, false, false, false]);
        assert_eq!(accepted(&chain_rows), accepted(&session_rows));
        assert_eq!(chain_rows[0].kana.as_deref(), Some("トーキョウ"));
        for (c, s) in chain_rows.iter().zip(&session_rows).filter(|(c, _)| c.accepted) {
            assert_eq!(c.kana, s.kana, "turn {}", c.turn);
        }
    }

    #[test]
    fn replay_chain_reports_bad_romaji() {
        let rows = replay_chain(&["xyz"], STRICT);
        assert!(!rows[0].accepted);
        assert!(rows[0].kana.is_none());
        assert_eq!(rows[0].verdict, "xyz is not a valid romaji word");
    }

    #[test]
    fn replay_with_dictionary() {
        let dict: MemoryDictionary = [("ねこ", "猫"), ("こま", "独楽")]
            .into_iter()
            .map(|(reading, surface)| DictEntry {
                reading: reading.to_string(),
                surface: Some(surface.to_string()),
                glosses: Vec::new(),
            })
            .collect();
        let mut session = GameSession::new(Arc::new(dict), InputMode::Romaji).with_policy(STRICT);
        let rows = replay_session(&["neko", "koko", "独楽"], &mut session);

        assert!(rows[0].accepted);
        assert_eq!(rows[0].surface.as_deref(), Some("猫"));
        assert!(!rows[1].accepted);
        assert_eq!(rows[1].verdict, "koko is not a valid word");
        assert_eq!(rows[2].kana.as_deref(), Some("コマ"));
        assert_eq!(session.streak(), 2);
    }
}
