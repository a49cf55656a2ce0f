//! Engine settings loadable from JSON.
//!
//! ```json
//! {
//!   "default_tag": "validate",
//!   "messages": { "min": "at least {0}" }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::registry::{self, DEFAULT_TAG, Registry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Record tag read when no tags are requested.
    pub default_tag: String,
    /// Message templates added to or replacing the defaults.
    pub messages: BTreeMap<String, String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_tag: DEFAULT_TAG.to_owned(),
            messages: BTreeMap::new(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Settings(e.to_string()))
    }
}

impl Registry {
    /// Applies `settings` on top of this registry.
    pub fn apply(&mut self, settings: &Settings) {
        self.set_default_tag(settings.default_tag.clone());
        self.update_messages(settings.messages.clone());
        tracing::debug!(
            default_tag = %settings.default_tag,
            messages = settings.messages.len(),
            "applied settings"
        );
    }
}

/// Applies `settings` to the global registry.
pub fn configure_from(settings: &Settings) {
    registry::configure(|registry| registry.apply(settings));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.default_tag, "valid");
    }

    #[test]
    fn applies_tag_and_messages() {
        let settings =
            Settings::from_json(r#"{"default_tag": "check", "messages": {"min": "at least {0}"}}"#)
                .unwrap();
        let mut registry = Registry::new();
        registry.apply(&settings);

        assert_eq!(registry.default_tag(), "check");
        assert_eq!(registry.messages().render("min", &["2".into()]), "at least 2");
        assert_eq!(
            registry.messages().render("max", &["2".into()]),
            "must be lower or equal of 2"
        );
    }

    #[test]
    fn rejects_malformed_settings() {
        assert!(matches!(
            Settings::from_json(r#"{"default_tag": 1}"#),
            Err(Error::Settings(_))
        ));
        assert!(matches!(
            Settings::from_json(r#"{"tag": "x"}"#),
            Err(Error::Settings(_))
        ));
    }
}
