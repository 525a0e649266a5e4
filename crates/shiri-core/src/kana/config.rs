use std::collections::BTreeMap;

use serde::Deserialize;

use super::table::MAX_ROMAJI_LEN;

/// Extra romaji mappings layered over the built-in tables.
#[derive(Debug, Default, Deserialize)]
pub struct KanaConfig {
    #[serde(default)]
    pub hiragana: BTreeMap<String, String>,
    #[serde(default)]
    pub katakana: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum KanaConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("no [hiragana] or [katakana] mappings")]
    Empty,
    #[error("romaji key must be 1-3 lowercase ASCII letters: {0:?}")]
    InvalidKey(String),
    #[error("empty value for key: {0}")]
    EmptyValue(String),
    #[error("kana tables already initialized")]
    AlreadyInitialized,
}

/// Parse and validate a custom mapping TOML.
pub fn parse_kana_toml(toml_str: &str) -> Result<KanaConfig, KanaConfigError> {
    let config: KanaConfig =
        toml::from_str(toml_str).map_err(|e| KanaConfigError::Parse(e.to_string()))?;

    if config.hiragana.is_empty() && config.katakana.is_empty() {
        return Err(KanaConfigError::Empty);
    }

    for (key, value) in config.hiragana.iter().chain(config.katakana.iter()) {
        if key.is_empty()
            || key.len() > MAX_ROMAJI_LEN
            || !key.bytes().all(|b| b.is_ascii_lowercase())
        {
            return Err(KanaConfigError::InvalidKey(key.clone()));
        }
        if value.is_empty() {
            return Err(KanaConfigError::EmptyValue(key.clone()));
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[hiragana]
si = "し"
tu = "つ"

[katakana]
twu = "トゥ"
"#;
        let config = parse_kana_toml(toml).unwrap();
        assert_eq!(config.hiragana.len(), 2);
        assert_eq!(config.hiragana["si"], "し");
        assert_eq!(config.katakana["twu"], "トゥ");
    }

    #[test]
    fn katakana_only_is_enough() {
        let config = parse_kana_toml("[katakana]\nwo = \"ウォ\"\n").unwrap();
        assert!(config.hiragana.is_empty());
        assert_eq!(config.katakana.len(), 1);
    }

    #[test]
    fn error_empty_mappings() {
        let err = parse_kana_toml("[hiragana]\n").unwrap_err();
        assert!(matches!(err, KanaConfigError::Empty));
    }

    #[test]
    fn error_non_ascii_key() {
        let toml = "
[hiragana]
\"あ\" = \"a\"
";
        let err = parse_kana_toml(toml).unwrap_err();
        assert!(matches!(err, KanaConfigError::InvalidKey(_)));
    }

    #[test]
    fn error_key_too_long() {
        let err = parse_kana_toml("[hiragana]\nxtsu = \"っ\"\n").unwrap_err();
        assert!(matches!(err, KanaConfigError::InvalidKey(_)));
    }

    #[test]
    fn error_uppercase_key() {
        let err = parse_kana_toml("[hiragana]\nKa = \"か\"\n").unwrap_err();
        assert!(matches!(err, KanaConfigError::InvalidKey(_)));
    }

    #[test]
    fn error_empty_value() {
        let toml = r#"
[katakana]
fa = ""
"#;
        let err = parse_kana_toml(toml).unwrap_err();
        assert!(matches!(err, KanaConfigError::EmptyValue(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_kana_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, KanaConfigError::Parse(_)));
    }
}
