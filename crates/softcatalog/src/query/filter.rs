use serde::{Deserialize, Serialize};

use crate::model::{Origin, Product};

/// Conjunctive product filter. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilter {
    /// Category id or category slug, exact match.
    pub category: Option<String>,
    pub origin: Option<Origin>,
    /// Keeps products whose `is_active` is not `false`.
    pub only_active: bool,
    pub only_featured: bool,
    /// Case-insensitive substring of name, description, a tag or a feature.
    pub search: Option<String>,
}

impl ProductFilter {
    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn only_brazilian(mut self) -> Self {
        self.origin = Some(Origin::Brazilian);
        self
    }

    pub fn only_foreign(mut self) -> Self {
        self.origin = Some(Origin::Foreign);
        self
    }

    pub fn active(mut self) -> Self {
        self.only_active = true;
        self
    }

    pub fn featured(mut self) -> Self {
        self.only_featured = true;
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            let by_id = product
                .category_id
                .as_ref()
                .is_some_and(|id| id.0 == *category);
            let by_slug = product.category_slug.as_deref() == Some(category.as_str());
            if !by_id && !by_slug {
                return false;
            }
        }
        if self.origin.is_some_and(|origin| product.origin() != origin) {
            return false;
        }
        if self.only_active && !product.is_active {
            return false;
        }
        if self.only_featured && !product.is_featured {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => matches_search(product, &term.to_lowercase()),
            _ => true,
        }
    }
}

fn matches_search(product: &Product, term: &str) -> bool {
    let hit = |text: &str| text.to_lowercase().contains(term);
    hit(&product.name)
        || hit(&product.description)
        || product.tags.iter().any(|t| hit(t))
        || product.features.iter().any(|f| hit(f))
}

/// The products matching `filter`, in their original order.
pub fn filter_products(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}
