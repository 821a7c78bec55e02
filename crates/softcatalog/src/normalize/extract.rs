//! Positional parsing of legacy location strings and inference of company size
//! and pricing type from sparse legacy signals.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::slug::fold;
use crate::model::{CompanySize, LegacyProduct, PricingType, UNKNOWN_COUNTRY, UNKNOWN_COUNTRY_CODE};

const BUILT_IN_CODES: &[(&str, &str)] = &[
    ("Brasil", "BR"),
    ("Brazil", "BR"),
    ("Estados Unidos", "US"),
    ("EUA", "US"),
    ("USA", "US"),
    ("United States", "US"),
    ("Reino Unido", "GB"),
    ("United Kingdom", "GB"),
    ("Alemanha", "DE"),
    ("Germany", "DE"),
    ("França", "FR"),
    ("France", "FR"),
    ("Canadá", "CA"),
    ("Portugal", "PT"),
    ("Argentina", "AR"),
    ("México", "MX"),
    ("Espanha", "ES"),
    ("Spain", "ES"),
    ("Índia", "IN"),
    ("India", "IN"),
    ("China", "CN"),
    ("Japão", "JP"),
    ("Japan", "JP"),
    ("Israel", "IL"),
];

/// Country name to ISO 3166 alpha-2 lookup.
///
/// Names match case- and accent-insensitively, so `"canada"` and `"Canadá"` are
/// the same key. The table is a plain value: build one with extra entries and
/// hand it to the [`Normalizer`](super::Normalizer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "HashMap<String, String>", into = "HashMap<String, String>")]
pub struct CountryCodes {
    by_name: HashMap<String, String>,
}

impl Default for CountryCodes {
    fn default() -> Self {
        Self::empty().with_entries(BUILT_IN_CODES.iter().map(|(n, c)| (*n, *c)))
    }
}

impl CountryCodes {
    pub fn empty() -> Self {
        Self {
            by_name: HashMap::new(),
        }
    }

    /// Adds or overrides entries. Codes are stored uppercased.
    pub fn with_entries<N, C>(mut self, entries: impl IntoIterator<Item = (N, C)>) -> Self
    where
        N: AsRef<str>,
        C: AsRef<str>,
    {
        for (name, code) in entries {
            self.by_name
                .insert(fold(name.as_ref().trim()), code.as_ref().trim().to_uppercase());
        }
        self
    }

    pub fn lookup(&self, country: &str) -> Option<&str> {
        self.by_name.get(&fold(country.trim())).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl From<HashMap<String, String>> for CountryCodes {
    fn from(map: HashMap<String, String>) -> Self {
        Self::empty().with_entries(map)
    }
}

impl From<CountryCodes> for HashMap<String, String> {
    fn from(codes: CountryCodes) -> Self {
        codes.by_name
    }
}

fn segments(location: Option<&str>) -> Vec<&str> {
    location
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Last comma-separated segment, or `"Desconhecido"`.
pub fn extract_country(location: Option<&str>) -> String {
    segments(location)
        .last()
        .map(|s| s.to_string())
        .unwrap_or_else(|| UNKNOWN_COUNTRY.to_string())
}

/// ISO code of [`extract_country`], or `"XX"`.
pub fn extract_country_code(location: Option<&str>, codes: &CountryCodes) -> String {
    segments(location)
        .last()
        .and_then(|country| codes.lookup(country))
        .unwrap_or(UNKNOWN_COUNTRY_CODE)
        .to_string()
}

/// Second-to-last segment when there are at least two.
pub fn extract_state(location: Option<&str>) -> Option<String> {
    let parts = segments(location);
    if parts.len() >= 2 {
        Some(parts[parts.len() - 2].to_string())
    } else {
        None
    }
}

/// First segment when there are at least three.
pub fn extract_city(location: Option<&str>) -> Option<String> {
    let parts = segments(location);
    if parts.len() >= 3 {
        Some(parts[0].to_string())
    } else {
        None
    }
}

/// First matching rule wins: large, then medium, then startup.
pub fn infer_company_size(legacy: &LegacyProduct) -> CompanySize {
    if legacy.downloads.is_some_and(|d| d > 1_000_000) || legacy.is_unicorn == Some(true) {
        CompanySize::Large
    } else if legacy.founded_year.is_some_and(|y| y < 2010) {
        CompanySize::Medium
    } else {
        CompanySize::Startup
    }
}

/// Maps the legacy price and free-text pricing model to a [`PricingType`].
///
/// A price of `0` always yields [`PricingType::Free`]. Otherwise
/// `"freemium"` contains `"free"` as a substring, so the free-text check looks
/// for `"free"` only after removing every `"freemium"`. A model such as
/// `"Freemium"` therefore yields [`PricingType::Freemium`], not
/// [`PricingType::Free`] as a plain substring test would.
pub fn infer_pricing_type(legacy: &LegacyProduct) -> PricingType {
    let model = legacy
        .pricing_model
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();

    if legacy.price == Some(0.0) || model.replace("freemium", "").contains("free") {
        PricingType::Free
    } else if model.contains("freemium") {
        PricingType::Freemium
    } else if model.contains("enterprise") {
        PricingType::Enterprise
    } else if legacy.price.is_some_and(|p| p > 0.0) {
        PricingType::Paid
    } else {
        PricingType::Free
    }
}
