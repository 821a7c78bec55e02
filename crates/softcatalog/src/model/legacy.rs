//! Loosely-shaped product documents from the two legacy collections.
//!
//! Nothing in a legacy document is guaranteed: any field may be missing, blank,
//! or typed differently than expected (prices and years stored as strings,
//! timestamps stored as epoch milliseconds). Deserialization accepts all of
//! that and the normalizer decides what a missing value means.
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt::Display;

use crate::legacy_actor::LegacyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LegacyId(pub u32);

impl From<u32> for LegacyId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for LegacyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "legacy_{}", self.0)
    }
}

/// A product document as the legacy store kept it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyProduct {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub logo: Option<String>,
    pub website: Option<String>,
    /// Free text, comma separated, e.g. `"São Paulo, SP, Brasil"`.
    pub location: Option<String>,
    pub category: Option<String>,
    pub category_id: Option<String>,
    pub category_slug: Option<String>,
    pub pricing_model: Option<String>,
    #[serde(deserialize_with = "lenient_f64")]
    pub price: Option<f64>,
    pub currency: Option<String>,
    pub features: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub screenshots: Option<Vec<String>>,
    pub substitutes: Option<Vec<String>>,
    pub alternatives: Option<Vec<String>>,
    pub alternative_to: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient_u64")]
    pub downloads: Option<u64>,
    #[serde(deserialize_with = "lenient_i32")]
    pub founded_year: Option<i32>,
    pub headquarters: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub employees: Option<String>,
    pub is_active: Option<bool>,
    pub is_featured: Option<bool>,
    pub is_unicorn: Option<bool>,
    #[serde(deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl LegacyProduct {
    /// Parses one legacy JSON document.
    pub fn from_json(raw: &str) -> Result<Self, LegacyError> {
        serde_json::from_str(raw).map_err(|e| LegacyError::InvalidDocument(e.to_string()))
    }

    /// Treats blank strings as absent so fallbacks apply to them too.
    pub fn sanitized(mut self) -> Self {
        for field in [
            &mut self.name,
            &mut self.slug,
            &mut self.description,
            &mut self.short_description,
            &mut self.logo,
            &mut self.website,
            &mut self.location,
            &mut self.category,
            &mut self.category_id,
            &mut self.category_slug,
            &mut self.pricing_model,
            &mut self.currency,
            &mut self.headquarters,
            &mut self.employees,
        ] {
            if field.as_deref().is_some_and(|s| s.trim().is_empty()) {
                *field = None;
            }
        }
        self
    }
}

/// A stored legacy document. The collection serves it read-only apart from purge.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyRecord {
    pub id: LegacyId,
    pub data: LegacyProduct,
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().replace(',', ".").parse().ok(),
        _ => None,
    })
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_i32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_string<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// RFC 3339 strings or epoch milliseconds.
fn lenient_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => DateTime::parse_from_rfc3339(s.trim())
            .ok()
            .map(|dt| dt.with_timezone(&Utc)),
        Value::Number(n) => n
            .as_i64()
            .and_then(|ms| Utc.timestamp_millis_opt(ms).single()),
        _ => None,
    })
}
