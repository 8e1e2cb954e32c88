//! Locale messages for page chrome

use serde_json::Value;
use std::collections::HashMap;
use std::env;

#[derive(Clone, Debug)]
pub struct I18n {
    locale: String,
    messages: HashMap<String, String>,
}

impl I18n {
    /// Detect the locale from the environment and load its messages.
    pub fn from_env() -> Self {
        let locale = detect_locale();
        let messages = load_messages(&locale);
        Self { locale, messages }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn t(&self, key: &str) -> String {
        self.messages
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    pub fn format(&self, key: &str, params: &[(&str, &str)]) -> String {
        let mut value = self.t(key);
        for (param, replacement) in params {
            value = value.replace(&format!("{{{param}}}"), replacement);
        }
        value
    }
}

/// First non-empty of `LC_ALL`, `LC_MESSAGES` and `LANG`, normalized to
/// `ll_cc` form without the encoding suffix.
fn detect_locale() -> String {
    ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .map(|value| normalize_locale(&value))
        .find(|locale| !locale.is_empty())
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_locale(value: &str) -> String {
    value
        .trim()
        .split('.')
        .next()
        .unwrap_or_default()
        .replace('-', "_")
        .to_lowercase()
}

fn load_messages(locale: &str) -> HashMap<String, String> {
    // Only English ships today; other locales fall back to it.
    if !locale.starts_with("en") {
        tracing::debug!("No messages for locale {}, using en", locale);
    }
    let raw = include_str!("../i18n/en.json");

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map
            .into_iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k, s.to_string())))
            .collect(),
        _ => HashMap::new(),
    }
}
