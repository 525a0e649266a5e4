use std::process;

use serde::Serialize;

use shiri_core::normalize::{mora_count, morae};
use shiri_core::settings::settings;
use shiri_core::transliterate::{
    kana_to_romaji, katakana_to_hiragana, render_katakana, romaji_to_kana,
};
use shiri_core::{classify, normalize, sanitize, to_kana_candidates, InputKind, KanaCandidate, Script};

use super::{pad, print_json};

#[derive(Serialize)]
struct ConvertReport {
    input: String,
    kind: InputKind,
    candidates: Vec<KanaCandidate>,
}

pub fn convert(text: &str, json: bool) {
    let input = sanitize(text, &settings().input);
    let kind = classify(&input);
    let candidates = to_kana_candidates(&input, kind);

    if candidates.is_empty() {
        match romaji_to_kana(&input, Script::Hiragana) {
            Err(e) if kind == InputKind::Romaji => eprintln!("Error: {e}"),
            _ => eprintln!("Error: {input:?} is not romaji or kana"),
        }
        process::exit(1);
    }

    if json {
        print_json(&ConvertReport {
            input,
            kind,
            candidates,
        });
        return;
    }
    for c in &candidates {
        let label = match (c.script, c.contracted) {
            (Script::Hiragana, _) => "hiragana",
            (Script::Katakana, true) => "katakana (ー)",
            (Script::Katakana, false) => "katakana",
        };
        println!("{} {}", pad(label, 14), c.kana);
    }
}

pub fn romaji(kana: &str, json: bool) {
    let romaji = die!(kana_to_romaji(kana), "Error: {}");
    if json {
        print_json(&serde_json::json!({ "kana": kana, "romaji": romaji }));
    } else {
        println!("{romaji}");
    }
}

#[derive(Serialize)]
struct NormalizeReport<'a> {
    input: &'a str,
    canonical: String,
    morae: Vec<String>,
    mora_count: usize,
    katakana: String,
    /// `None` for katakana-only morae such as ティ.
    hiragana: Option<String>,
}

pub fn normalize_cmd(kana: &str, json: bool) {
    let canonical = normalize(kana);
    let report = NormalizeReport {
        input: kana,
        morae: morae(kana).into_iter().map(str::to_string).collect(),
        mora_count: mora_count(kana),
        canonical: canonical.as_str().to_string(),
        katakana: render_katakana(kana),
        hiragana: katakana_to_hiragana(kana).ok(),
    };
    if json {
        print_json(&report);
        return;
    }
    println!("canonical: {}", report.canonical);
    println!("morae:     {} ({})", report.morae.join(" | "), report.mora_count);
    println!("katakana:  {}", report.katakana);
    match &report.hiragana {
        Some(h) => println!("hiragana:  {h}"),
        None => println!("hiragana:  (none)"),
    }
}

pub fn classify_cmd(text: &str, json: bool) {
    let input = sanitize(text, &settings().input);
    let kind = classify(&input);
    if json {
        print_json(&serde_json::json!({ "input": input, "kind": kind }));
    } else {
        println!("{kind:?}: {input}");
    }
}
