//! Runtime configuration for the catalog.
//!
//! Defaults cover everything; the environment can override the numeric knobs:
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `CATALOG_CHANNEL_BUFFER` | [`CatalogConfig::channel_buffer`] | 32 |
//! | `CATALOG_SHORT_DESCRIPTION_LEN` | [`CatalogConfig::short_description_len`] | 150 |
//!
//! Log verbosity is controlled separately through `RUST_LOG`.
use serde::Deserialize;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::warn;

use crate::normalize::CountryCodes;

pub const ENV_CHANNEL_BUFFER: &str = "CATALOG_CHANNEL_BUFFER";
pub const ENV_SHORT_DESCRIPTION_LEN: &str = "CATALOG_SHORT_DESCRIPTION_LEN";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Request queue size of every collection actor.
    pub channel_buffer: usize,
    /// Characters kept when deriving a short description.
    pub short_description_len: usize,
    /// Country names added to (or overriding) the built-in code table.
    pub extra_country_codes: HashMap<String, String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            channel_buffer: 32,
            short_description_len: 150,
            extra_country_codes: HashMap::new(),
        }
    }
}

impl CatalogConfig {
    /// Defaults overlaid with whatever the environment provides.
    pub fn from_env() -> Self {
        Self::default().overlay(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`. Unparseable values are logged and skipped.
    pub fn overlay(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(v) = parse_var(&lookup, ENV_CHANNEL_BUFFER) {
            if v == 0 {
                warn!(key = ENV_CHANNEL_BUFFER, "Channel buffer must be positive, keeping default");
            } else {
                self.channel_buffer = v;
            }
        }
        if let Some(v) = parse_var(&lookup, ENV_SHORT_DESCRIPTION_LEN) {
            self.short_description_len = v;
        }
        self
    }

    /// The built-in country table plus [`extra_country_codes`](Self::extra_country_codes).
    pub fn country_codes(&self) -> CountryCodes {
        CountryCodes::default().with_entries(&self.extra_country_codes)
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring malformed configuration value");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_overlay_applies_valid_values() {
        let config = CatalogConfig::default().overlay(env(&[
            ("CATALOG_CHANNEL_BUFFER", "64"),
            ("CATALOG_SHORT_DESCRIPTION_LEN", " 80 "),
        ]));
        assert_eq!(config.channel_buffer, 64);
        assert_eq!(config.short_description_len, 80);
    }

    #[test]
    fn test_overlay_ignores_malformed_values() {
        let config = CatalogConfig::default().overlay(env(&[
            ("CATALOG_CHANNEL_BUFFER", "0"),
            ("CATALOG_SHORT_DESCRIPTION_LEN", "muitos"),
        ]));
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_deserializes_partial_document() {
        let config: CatalogConfig = serde_json::from_str(
            r#"{"channel_buffer": 8, "extra_country_codes": {"Chile": "CL"}}"#,
        )
        .unwrap();
        assert_eq!(config.channel_buffer, 8);
        assert_eq!(config.short_description_len, 150);
        assert_eq!(config.country_codes().lookup("chile"), Some("CL"));
        assert_eq!(config.country_codes().lookup("Brasil"), Some("BR"));
    }
}
