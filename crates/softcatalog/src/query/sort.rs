use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::model::Product;
use crate::normalize::fold;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Rating,
    Category,
    Newest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortKey {
    pub fn default_direction(self) -> SortDirection {
        match self {
            SortKey::Name | SortKey::Category => SortDirection::Asc,
            SortKey::Rating | SortKey::Newest => SortDirection::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    /// `None` uses the key's default direction.
    pub direction: Option<SortDirection>,
}

impl SortSpec {
    pub fn new(key: SortKey) -> Self {
        Self {
            key,
            direction: None,
        }
    }

    pub fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn direction(&self) -> SortDirection {
        self.direction.unwrap_or(self.key.default_direction())
    }
}

/// Precomputed comparison key for one product.
enum SortValue {
    Text(String),
    Number(f64),
    Millis(i64),
}

impl SortValue {
    fn of(product: &Product, key: SortKey) -> Self {
        match key {
            SortKey::Name => SortValue::Text(fold(&product.name)),
            SortKey::Category => SortValue::Text(fold(product.category.as_deref().unwrap_or_default())),
            SortKey::Rating => SortValue::Number(product.rating.unwrap_or(0.0)),
            SortKey::Newest => {
                SortValue::Millis(product.created_at.map_or(0, |t| t.timestamp_millis()))
            }
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Millis(a), SortValue::Millis(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

/// Stable sort: products with equal keys keep their relative order.
///
/// Names and categories compare case- and accent-insensitively. A missing
/// rating counts as `0.0` and a missing `created_at` as the Unix epoch.
pub fn sort_products(products: &mut Vec<Product>, spec: SortSpec) {
    let direction = spec.direction();
    let mut keyed: Vec<(SortValue, Product)> = products
        .drain(..)
        .map(|p| (SortValue::of(&p, spec.key), p))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ord = a.compare(b);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    products.extend(keyed.into_iter().map(|(_, p)| p));
}
