//! Custom actions for the Product actor.
//!
//! Each action is a single-field read-modify-write executed inside the product
//! collection, so concurrent view increments on one product never lose a count.

/// Custom actions for Product entities.
#[derive(Debug, Clone)]
pub enum ProductAction {
    /// Adds one to `views`.
    IncrementViews,
    SetActive(bool),
    SetFeatured(bool),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// The view count after the increment.
    IncrementViews(u64),
    SetActive(()),
    SetFeatured(()),
}
