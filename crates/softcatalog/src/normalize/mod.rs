//! Slug generation, legacy field extraction and record normalization.
//!
//! Everything here is pure: no collection is touched, no clock is read except
//! for the "now" fallback timestamps.

pub mod extract;
pub mod record;
pub mod slug;

pub use extract::*;
pub use record::*;
pub use slug::*;
