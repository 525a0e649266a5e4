//! Global settings loaded from TOML, following the same OnceLock pattern as
//! the kana tables.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub chain: ChainSettings,
    pub input: InputSettings,
    pub katakana: KatakanaSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainSettings {
    pub enforce_on_opening: bool,
    pub min_morae: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    #[serde(default)]
    pub message_prefixes: Vec<String>,
    pub expand_macrons: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KatakanaSettings {
    pub contract_long_vowels: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.chain.min_morae == 0 {
        return Err(SettingsError::InvalidValue {
            field: "chain.min_morae".into(),
            reason: "must be at least 1".into(),
        });
    }
    if let Some(p) = s.input.message_prefixes.iter().find(|p| p.is_empty()) {
        return Err(SettingsError::InvalidValue {
            field: "input.message_prefixes".into(),
            reason: format!("empty prefix {p:?}"),
        });
    }
    Ok(())
}
