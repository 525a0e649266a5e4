//! Kana mapping tables and mora segmentation.
//!
//! `KanaTables` holds the romaji → hiragana/katakana maps, the reverse
//! kana → romaji map, and the hiragana ↔ katakana character pairs. The
//! global instance is built once on first use; a custom TOML can add
//! mappings before that via `KanaTables::init_custom`.

mod config;
mod mora;
pub(crate) mod table;

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::unicode::fold_to_hiragana;

pub use config::{parse_kana_toml, KanaConfig, KanaConfigError};
pub use mora::{mora_count, morae};
pub use table::{CHOONPU, MAX_ROMAJI_LEN};

use table::{
    HIRAGANA, KATAKANA_EXTENDED, LOANWORD_PAIRS, ROW_A, ROW_E, ROW_I, ROW_O, ROW_U, SCRIPT_PAIRS,
    SOKUON_HIRAGANA, SOKUON_KATAKANA,
};

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Output script of a transliteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Hiragana,
    Katakana,
}

impl Script {
    /// Small tsu marking a geminate consonant.
    pub fn sokuon(self) -> &'static str {
        match self {
            Script::Hiragana => SOKUON_HIRAGANA,
            Script::Katakana => SOKUON_KATAKANA,
        }
    }
}

/// Vowel row of a mora (あ段, い段, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Vowel {
    A,
    I,
    U,
    E,
    O,
}

impl Vowel {
    pub fn from_romaji(c: char) -> Option<Self> {
        match c {
            'a' => Some(Vowel::A),
            'i' => Some(Vowel::I),
            'u' => Some(Vowel::U),
            'e' => Some(Vowel::E),
            'o' => Some(Vowel::O),
            _ => None,
        }
    }

    pub fn romaji(self) -> char {
        match self {
            Vowel::A => 'a',
            Vowel::I => 'i',
            Vowel::U => 'u',
            Vowel::E => 'e',
            Vowel::O => 'o',
        }
    }

    pub fn hiragana(self) -> char {
        match self {
            Vowel::A => 'あ',
            Vowel::I => 'い',
            Vowel::U => 'う',
            Vowel::E => 'え',
            Vowel::O => 'お',
        }
    }

    pub fn katakana(self) -> char {
        match self {
            Vowel::A => 'ア',
            Vowel::I => 'イ',
            Vowel::U => 'ウ',
            Vowel::E => 'エ',
            Vowel::O => 'オ',
        }
    }

    /// Row of a single kana character, either script.
    pub fn of_char(c: char) -> Option<Self> {
        let h = fold_to_hiragana(c);
        if ROW_A.contains(h) {
            Some(Vowel::A)
        } else if ROW_I.contains(h) {
            Some(Vowel::I)
        } else if ROW_U.contains(h) {
            Some(Vowel::U)
        } else if ROW_E.contains(h) {
            Some(Vowel::E)
        } else if ROW_O.contains(h) {
            Some(Vowel::O)
        } else {
            None
        }
    }

    /// Row of a mora. A digraph takes the row of its trailing small kana
    /// (きょ is an お-row mora). ん, っ and ー have no row.
    pub fn of_mora(mora: &str) -> Option<Self> {
        mora.chars().last().and_then(Self::of_char)
    }

    /// The vowel if `mora` is exactly a bare vowel kana (あ or ア, …).
    pub fn bare(mora: &str) -> Option<Self> {
        let mut chars = mora.chars();
        let c = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match fold_to_hiragana(c) {
            'あ' => Some(Vowel::A),
            'い' => Some(Vowel::I),
            'う' => Some(Vowel::U),
            'え' => Some(Vowel::E),
            'お' => Some(Vowel::O),
            _ => None,
        }
    }
}

pub struct KanaTables {
    hiragana: HashMap<String, String>,
    katakana: HashMap<String, String>,
    romaji: HashMap<String, String>,
    to_katakana: HashMap<char, char>,
    to_hiragana: HashMap<char, char>,
}

impl KanaTables {
    /// Set custom mapping TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), KanaConfigError> {
        // Validate eagerly
        parse_kana_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| KanaConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static KanaTables {
        static INSTANCE: OnceLock<KanaTables> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            match CUSTOM_TOML.get().and_then(|s| parse_kana_toml(s).ok()) {
                Some(config) => KanaTables::with_config(&config),
                None => KanaTables::builtin(),
            }
        })
    }

    /// Tables with only the built-in mappings.
    pub fn builtin() -> Self {
        let to_katakana: HashMap<char, char> =
            SCRIPT_PAIRS.iter().chain(LOANWORD_PAIRS).copied().collect();
        let to_hiragana: HashMap<char, char> =
            SCRIPT_PAIRS.iter().map(|&(h, k)| (k, h)).collect();

        let mut tables = KanaTables {
            hiragana: HashMap::new(),
            katakana: HashMap::new(),
            romaji: HashMap::new(),
            to_katakana,
            to_hiragana,
        };
        for &(romaji, hira) in HIRAGANA {
            tables.add_hiragana(romaji, hira);
        }
        for &(romaji, kata) in KATAKANA_EXTENDED {
            tables.add_katakana(romaji, kata);
        }
        tables
    }

    /// Built-in tables extended with custom mappings. Built-in entries keep
    /// their reverse (kana → romaji) spelling.
    pub fn with_config(config: &KanaConfig) -> Self {
        let mut tables = Self::builtin();
        for (romaji, hira) in &config.hiragana {
            tables.add_hiragana(romaji, hira);
        }
        for (romaji, kata) in &config.katakana {
            tables.add_katakana(romaji, kata);
        }
        tables
    }

    fn add_hiragana(&mut self, romaji: &str, hira: &str) {
        self.hiragana.insert(romaji.to_string(), hira.to_string());
        self.romaji
            .entry(hira.to_string())
            .or_insert_with(|| romaji.to_string());

        let kata: Option<String> = hira.chars().map(|c| self.katakana_char(c)).collect();
        if let Some(kata) = kata {
            self.add_katakana(romaji, &kata);
        }
    }

    fn add_katakana(&mut self, romaji: &str, kata: &str) {
        self.katakana.insert(romaji.to_string(), kata.to_string());
        self.romaji
            .entry(kata.to_string())
            .or_insert_with(|| romaji.to_string());
    }

    /// Exact table lookup for one romaji segment.
    pub fn lookup(&self, script: Script, romaji: &str) -> Option<&str> {
        let map = match script {
            Script::Hiragana => &self.hiragana,
            Script::Katakana => &self.katakana,
        };
        map.get(romaji).map(String::as_str)
    }

    /// Romaji spelling of one mora, either script.
    pub fn romaji_of(&self, mora: &str) -> Option<&str> {
        self.romaji.get(mora).map(String::as_str)
    }

    pub fn katakana_char(&self, c: char) -> Option<char> {
        self.to_katakana.get(&c).copied()
    }

    pub fn hiragana_char(&self, c: char) -> Option<char> {
        self.to_hiragana.get(&c).copied()
    }

    /// All `(romaji, kana)` pairs for a script, in no particular order.
    pub fn entries(&self, script: Script) -> impl Iterator<Item = (&str, &str)> {
        let map = match script {
            Script::Hiragana => &self.hiragana,
            Script::Katakana => &self.katakana,
        };
        map.iter().map(|(r, k)| (r.as_str(), k.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_basic() {
        let tables = KanaTables::global();
        assert_eq!(tables.lookup(Script::Hiragana, "ka"), Some("か"));
        assert_eq!(tables.lookup(Script::Katakana, "ka"), Some("カ"));
        assert_eq!(tables.lookup(Script::Hiragana, "sha"), Some("しゃ"));
        assert_eq!(tables.lookup(Script::Katakana, "sha"), Some("シャ"));
        assert_eq!(tables.lookup(Script::Hiragana, "k"), None);
    }

    #[test]
    fn extended_katakana_has_no_hiragana_key() {
        let tables = KanaTables::global();
        assert_eq!(tables.lookup(Script::Katakana, "fa"), Some("ファ"));
        assert_eq!(tables.lookup(Script::Hiragana, "fa"), None);
        assert_eq!(tables.lookup(Script::Katakana, "vu"), Some("ヴ"));
    }

    #[test]
    fn reverse_lookup_both_scripts() {
        let tables = KanaTables::global();
        assert_eq!(tables.romaji_of("し"), Some("shi"));
        assert_eq!(tables.romaji_of("シ"), Some("shi"));
        assert_eq!(tables.romaji_of("きょ"), Some("kyo"));
        assert_eq!(tables.romaji_of("ティ"), Some("ti"));
        assert_eq!(tables.romaji_of("づ"), Some("dzu"));
        assert_eq!(tables.romaji_of("x"), None);
    }

    #[test]
    fn keys_fit_greedy_window() {
        let tables = KanaTables::global();
        for script in [Script::Hiragana, Script::Katakana] {
            for (romaji, kana) in tables.entries(script) {
                assert!(
                    (1..=MAX_ROMAJI_LEN).contains(&romaji.len()),
                    "{romaji} -> {kana}"
                );
            }
        }
    }

    #[test]
    fn kana_values_are_unique() {
        let tables = KanaTables::builtin();
        for script in [Script::Hiragana, Script::Katakana] {
            let mut seen = std::collections::HashSet::new();
            for (romaji, kana) in tables.entries(script) {
                assert!(seen.insert(kana), "duplicate kana {kana} for {romaji}");
            }
        }
    }

    #[test]
    fn custom_config_adds_without_changing_reverse() {
        let config = parse_kana_toml("[hiragana]\nsi = \"し\"\n").unwrap();
        let tables = KanaTables::with_config(&config);
        assert_eq!(tables.lookup(Script::Hiragana, "si"), Some("し"));
        assert_eq!(tables.lookup(Script::Katakana, "si"), Some("シ"));
        assert_eq!(tables.romaji_of("し"), Some("shi"));
    }

    #[test]
    fn vowel_rows() {
        assert_eq!(Vowel::of_mora("か"), Some(Vowel::A));
        assert_eq!(Vowel::of_mora("キョ"), Some(Vowel::O));
        assert_eq!(Vowel::of_mora("ティ"), Some(Vowel::I));
        assert_eq!(Vowel::of_mora("ヴ"), Some(Vowel::U));
        assert_eq!(Vowel::of_mora("ん"), None);
        assert_eq!(Vowel::of_mora("ッ"), None);
        assert_eq!(Vowel::of_mora("ー"), None);
    }

    #[test]
    fn bare_vowels() {
        assert_eq!(Vowel::bare("ウ"), Some(Vowel::U));
        assert_eq!(Vowel::bare("い"), Some(Vowel::I));
        assert_eq!(Vowel::bare("く"), None);
        assert_eq!(Vowel::bare("いい"), None);
    }
}
