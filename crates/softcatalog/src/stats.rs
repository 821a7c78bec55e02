//! Platform-wide counts derived from a product snapshot.
//!
//! Read-only: the per-category histogram is recomputed here and never written
//! back to the stored category counters, so the two can disagree after a failed
//! counter adjustment.
use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::Product;

/// Histogram label for products without a category name.
pub const UNCATEGORIZED: &str = "Sem categoria";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total: usize,
    pub brazilian: usize,
    pub foreign: usize,
    pub active: usize,
    pub featured: usize,
    /// Keyed by the product's denormalized category name.
    pub by_category: BTreeMap<String, usize>,
}

pub fn compute_stats(products: &[Product]) -> CatalogStats {
    let mut stats = CatalogStats::default();
    for product in products {
        stats.total += 1;
        if product.is_brazilian() {
            stats.brazilian += 1;
        } else {
            stats.foreign += 1;
        }
        if product.is_active {
            stats.active += 1;
        }
        if product.is_featured {
            stats.featured += 1;
        }
        let label = product
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(UNCATEGORIZED);
        *stats.by_category.entry(label.to_string()).or_default() += 1;
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductCreate, ProductId, ProductLocation};
    use resource_actor::ActorEntity;

    fn product(id: u32, code: &str, category: Option<&str>) -> Product {
        let mut draft = ProductCreate::new(format!("p{}", id));
        draft.location = ProductLocation {
            country_code: code.into(),
            ..ProductLocation::default()
        };
        draft.category = category.map(String::from);
        Product::from_create_params(ProductId(id), draft).unwrap()
    }

    #[test]
    fn test_empty_snapshot() {
        let stats = compute_stats(&[]);
        assert_eq!(stats, CatalogStats::default());
        assert!(stats.by_category.is_empty());
    }

    #[test]
    fn test_counts_and_histogram() {
        let mut inactive = product(3, "XX", Some(""));
        inactive.is_active = false;
        let mut featured = product(2, "BR", Some("ERP"));
        featured.is_featured = true;

        let stats = compute_stats(&[product(1, "BR", Some("ERP")), featured, inactive, product(4, "US", None)]);

        assert_eq!(stats.total, 4);
        assert_eq!(stats.brazilian, 2);
        assert_eq!(stats.foreign, 2);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.featured, 1);
        assert_eq!(stats.by_category.get("ERP"), Some(&2));
        assert_eq!(stats.by_category.get(UNCATEGORIZED), Some(&2));
        assert_eq!(stats.by_category.len(), 2);
    }
}
