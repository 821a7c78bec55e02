//! Counter actions for the Category actor.
//!
//! Both run inside the category collection, so the read of the current count
//! and the write of the new one cannot interleave with another adjustment to
//! the same category.

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryAction {
    /// Adds a signed delta to `product_count`, flooring the result at zero.
    AdjustProductCount(i64),
    /// Overwrites `product_count`. Administrative repair only.
    SetProductCount(u64),
}
