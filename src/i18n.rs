use crate::error::{MetricsError, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use serde_json::from_str;
use std::fs;
use std::path::Path;

/// Lookup of user-facing literals.
pub trait Translate {
    fn translate(&self, key: &str) -> String;
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn translate(&self, key: &str) -> String {
        self(key)
    }
}

/// Translation table keyed by the untranslated literal. Unknown keys translate to themselves.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    entries: IndexMap<String, String>,
}

// Create
impl Translations {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json_str = fs::read_to_string(path).map_err(|source| MetricsError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let translations: Self =
            from_str(&json_str).map_err(|source| MetricsError::ParseTranslations {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(
            "Loaded {} translations from {}",
            translations.entries.len(),
            path.display()
        );
        Ok(translations)
    }

    pub fn insert(&mut self, key: impl ToString, text: impl ToString) -> &mut Self {
        self.entries.insert(key.to_string(), text.to_string());
        self
    }
}

impl Translate for Translations {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
