//! Categories own a denormalized `product_count`.
//!
//! The count is only ever moved by signed [`CounterAdjustment`]s executed inside
//! the category collection (see [`crate::category_actor`]).
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier for Categories.
///
/// String-backed: generated ids look like `category_3`, but ids carried over
/// from older data are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl From<u32> for CategoryId {
    fn from(id: u32) -> Self {
        Self(format!("category_{}", id))
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for CategoryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: Option<String>,
    pub product_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a category. An empty `slug` is derived from the name.
#[derive(Debug, Clone, Default)]
pub struct CategoryCreate {
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: Option<String>,
}

impl CategoryCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryUpdate {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
}

/// A signed change to one category's `product_count`.
///
/// Produced by a product write after it commits and dispatched on its own, so a
/// failed adjustment can be retried without repeating the write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterAdjustment {
    pub category_id: CategoryId,
    pub delta: i64,
}

impl CounterAdjustment {
    pub fn new(category_id: CategoryId, delta: i64) -> Self {
        Self { category_id, delta }
    }

    pub fn increment(category_id: CategoryId) -> Self {
        Self {
            category_id,
            delta: 1,
        }
    }

    pub fn decrement(category_id: CategoryId) -> Self {
        Self {
            category_id,
            delta: -1,
        }
    }
}
