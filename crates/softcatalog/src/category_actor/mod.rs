//! # Category Actor
//!
//! The category collection. Besides plain CRUD it exposes
//! [`CategoryAction::AdjustProductCount`], the only way the core changes a
//! stored `product_count`.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Category;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Category actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Category>, ResourceClient<Category>) {
    ResourceActor::new(buffer_size)
}
