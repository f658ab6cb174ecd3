//! Flattened locale tables
//!
//! Locale sources are nested JSON objects. They are flattened once at startup
//! into a map from fully-qualified dotted key to string, so a lookup is a
//! single exact match instead of a walk through a loosely-typed tree.

use std::collections::{
    BTreeMap,
    BTreeSet,
    HashMap,
};

use serde_json::Value;

use super::{
    I18nError,
    Language,
};

/// Separator between path segments in translation keys.
pub const KEY_SEPARATOR: &str = ".";

/// Spanish strings bundled with the crate.
const ES_SOURCE: &str = include_str!("../../locales/es.json");
/// English strings bundled with the crate.
const EN_SOURCE: &str = include_str!("../../locales/en.json");

/// Flatten a nested JSON object into a dotted-key map of its string leaves.
///
/// Arrays are addressed with `[index]` suffixes. Numbers, booleans and nulls
/// are not translations and are left out.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use taurel_site::i18n::catalog::flatten_json;
///
/// let json = json!({
///     "footer": {
///         "send": "Send",
///         "errorRequired": "is required"
///     }
/// });
///
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("footer.send"), Some(&"Send".to_string()));
/// assert_eq!(flattened.get("footer.errorRequired"), Some(&"is required".to_string()));
/// ```
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            tracing::trace!(key = ?prefix, "Skipping non-string locale value");
        }
    }
}

/// Immutable per-language translation tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCatalog {
    tables: HashMap<Language, HashMap<String, String>>,
}

impl LocaleCatalog {
    /// Catalog built from the locale files shipped with the crate.
    ///
    /// # Errors
    /// Returns an error if a bundled file is malformed or the two languages
    /// do not define the same keys.
    pub fn builtin() -> Result<Self, I18nError> {
        Self::from_sources(&[(Language::Es, ES_SOURCE), (Language::En, EN_SOURCE)])
    }

    /// Build a catalog from raw JSON sources and enforce key parity.
    ///
    /// # Errors
    /// - A source is not valid JSON or not an object
    /// - A key defined for one language is missing from another
    pub fn from_sources(sources: &[(Language, &str)]) -> Result<Self, I18nError> {
        let mut tables = HashMap::new();
        for (language, source) in sources {
            let json: Value = serde_json::from_str(source).map_err(|e| {
                I18nError::InvalidSource { language: *language, message: e.to_string() }
            })?;
            if !json.is_object() {
                return Err(I18nError::InvalidSource {
                    language: *language,
                    message: "top-level value must be an object".to_string(),
                });
            }
            let keys = flatten_json(&json, KEY_SEPARATOR, None);
            tracing::debug!(language = %language, keys = keys.len(), "Loaded locale table");
            tables.insert(*language, keys);
        }

        let catalog = Self { tables };
        catalog.check_parity()?;
        Ok(catalog)
    }

    /// Every language must define every key any other language defines.
    /// All gaps of all languages are reported together.
    fn check_parity(&self) -> Result<(), I18nError> {
        let all_keys: BTreeSet<&str> =
            self.tables.values().flat_map(|table| table.keys().map(String::as_str)).collect();

        let missing: BTreeMap<Language, Vec<String>> = self
            .tables
            .iter()
            .map(|(language, table)| {
                let keys: Vec<String> = all_keys
                    .iter()
                    .filter(|key| !table.contains_key(**key))
                    .map(|key| (*key).to_string())
                    .collect();
                (*language, keys)
            })
            .filter(|(_, keys)| !keys.is_empty())
            .collect();

        if missing.is_empty() { Ok(()) } else { Err(I18nError::MissingKeys { missing }) }
    }

    /// Exact lookup of a dotted key.
    #[must_use]
    pub fn lookup(&self, language: Language, key: &str) -> Option<&str> {
        self.tables.get(&language)?.get(key).map(String::as_str)
    }

    /// All keys defined for `language`, sorted.
    #[must_use]
    pub fn keys(&self, language: Language) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .tables
            .get(&language)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Resolve `key`, falling back to the key itself when it is missing or
    /// its translation is empty.
    #[must_use]
    pub fn translate(&self, language: Language, key: &str) -> String {
        match self.lookup(language, key) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => key.to_string(),
        }
    }
}
