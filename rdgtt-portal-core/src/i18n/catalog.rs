//! Translation catalogs
//!
//! A catalog is a JSON object; nested objects are flattened into dotted keys
//! so `{"nav": {"dashboard": "Dashboard"}}` provides `nav.dashboard`.

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use super::Language;
use crate::error::{CoreError, CoreResult};

const BUILTIN_FR: &str = include_str!("../../locales/fr.json");
const BUILTIN_EN: &str = include_str!("../../locales/en.json");

/// Key → text mapping for one language
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Parse a catalog from JSON text
    pub fn from_json(language: Language, json: &str) -> CoreResult<Self> {
        let value: Value = serde_json::from_str(json).map_err(|e| CoreError::Catalog {
            language: language.code().to_string(),
            message: e.to_string(),
        })?;

        let mut entries = HashMap::new();
        flatten(language, "", &value, &mut entries)?;
        Ok(Self { entries })
    }

    /// Catalog shipped with the crate
    pub fn builtin(language: Language) -> CoreResult<Self> {
        let json = match language {
            Language::Fr => BUILTIN_FR,
            Language::En => BUILTIN_EN,
        };
        Self::from_json(language, json)
    }

    /// Load `<dir>/<code>.json`
    pub fn load(dir: &Path, language: Language) -> CoreResult<Self> {
        let path = dir.join(format!("{}.json", language.code()));
        let json = std::fs::read_to_string(&path).map_err(|e| CoreError::Catalog {
            language: language.code().to_string(),
            message: format!("{}: {e}", path.display()),
        })?;
        Self::from_json(language, &json)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or replace one entry
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }
}

fn flatten(
    language: Language,
    prefix: &str,
    value: &Value,
    out: &mut HashMap<String, String>,
) -> CoreResult<()> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let full = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(language, &full, child, out)?;
            }
            Ok(())
        }
        Value::String(text) if !prefix.is_empty() => {
            out.insert(prefix.to_string(), text.clone());
            Ok(())
        }
        _ => Err(CoreError::Catalog {
            language: language.code().to_string(),
            message: format!("`{prefix}` must be a string or an object"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_objects_are_flattened() {
        let catalog =
            Catalog::from_json(Language::En, r#"{"nav": {"dashboard": "Dashboard"}, "x": "y"}"#)
                .unwrap();
        assert_eq!(catalog.get("nav.dashboard"), Some("Dashboard"));
        assert_eq!(catalog.get("x"), Some("y"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn non_string_leaf_is_rejected() {
        let err = Catalog::from_json(Language::Fr, r#"{"nav": {"count": 3}}"#).unwrap_err();
        assert!(matches!(err, CoreError::Catalog { ref language, .. } if language == "fr"));
    }

    #[test]
    fn top_level_string_is_rejected() {
        assert!(Catalog::from_json(Language::Fr, r#""hello""#).is_err());
    }

    #[test]
    fn builtin_catalogs_parse() {
        assert!(!Catalog::builtin(Language::Fr).unwrap().is_empty());
        assert!(!Catalog::builtin(Language::En).unwrap().is_empty());
    }

    #[test]
    fn load_reads_language_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("en.json"), r#"{"nav": {"permis": "Permits"}}"#).unwrap();

        let catalog = Catalog::load(dir.path(), Language::En).unwrap();
        assert_eq!(catalog.get("nav.permis"), Some("Permits"));

        assert!(Catalog::load(dir.path(), Language::Fr).is_err());
    }
}
