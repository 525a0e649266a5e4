//! Word lists for `replay --dict`.
//!
//! A dictionary file is a JSON array of entries:
//! `[{"reading": "ねこ", "surface": "猫", "glosses": ["cat"]}, ...]`.

use std::fs;
use std::path::Path;

use shiri_session::{DictEntry, MemoryDictionary};

#[derive(Debug, thiserror::Error)]
pub enum DictFileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid dictionary JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("entry {0} has an empty reading")]
    EmptyReading(usize),
}

pub fn parse_dictionary(json: &str) -> Result<MemoryDictionary, DictFileError> {
    let entries: Vec<DictEntry> = serde_json::from_str(json)?;
    if let Some(i) = entries.iter().position(|e| e.reading.is_empty()) {
        return Err(DictFileError::EmptyReading(i));
    }
    Ok(entries.into_iter().collect())
}

pub fn load_dictionary(path: &Path) -> Result<MemoryDictionary, DictFileError> {
    let json = fs::read_to_string(path).map_err(|source| DictFileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_dictionary(&json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shiri_session::Dictionary;

    #[test]
    fn parse_entries() {
        let d = parse_dictionary(r#"[{"reading": "ねこ", "surface": "猫"}, {"reading": "こま"}]"#)
            .unwrap();
        assert_eq!(d.len(), 2);
        assert_eq!(d.lookup("猫")[0].reading, "ねこ");
    }

    #[test]
    fn reject_empty_reading() {
        let err = parse_dictionary(r#"[{"reading": "ねこ"}, {"reading": ""}]"#).unwrap_err();
        assert!(matches!(err, DictFileError::EmptyReading(1)));
    }

    #[test]
    fn reject_bad_json() {
        let err = parse_dictionary("{not json").unwrap_err();
        assert!(matches!(err, DictFileError::Json(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.json");
        std::fs::write(&path, r#"[{"reading": "いぬ", "surface": "犬", "glosses": ["dog"]}]"#)
            .unwrap();
        let d = load_dictionary(&path).unwrap();
        assert_eq!(d.lookup("イヌ")[0].glosses, vec!["dog"]);
    }

    #[test]
    fn missing_file() {
        let err = load_dictionary(Path::new("/nonexistent/words.json")).unwrap_err();
        assert!(matches!(err, DictFileError::Io { .. }));
    }
}
