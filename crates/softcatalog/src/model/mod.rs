//! Domain records: catalog products, categories and legacy source documents.

pub mod category;
pub mod legacy;
pub mod product;

pub use category::*;
pub use legacy::*;
pub use product::*;
