use std::fs;

use shiri_core::kana::{parse_kana_toml, KanaTables};
use shiri_core::settings;

/// Install custom settings and kana mappings before anything reads them.
pub fn load_custom(settings_file: Option<&str>, kana_file: Option<&str>) {
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(content), "Error in {file}: {}");
    }
    if let Some(file) = kana_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(KanaTables::init_custom(content), "Error in {file}: {}");
    }
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(settings::parse_settings_toml(&content), "Error: {}");
    println!(
        "OK: chain.enforce_on_opening={}, chain.min_morae={}, katakana.contract_long_vowels={}",
        s.chain.enforce_on_opening, s.chain.min_morae, s.katakana.contract_long_vowels
    );
}

pub fn kana_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let config = die!(parse_kana_toml(&content), "Error: {}");
    println!(
        "OK: {} hiragana, {} katakana mappings",
        config.hiragana.len(),
        config.katakana.len()
    );
}
