//! # Product Actor
//!
//! The product collection: canonical [`Product`] records served by a
//! [`ResourceActor`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](resource_actor::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`] for view counting and status toggles
//! - [`new()`] - Factory function that creates the actor and client
//!
//! Category counters are not touched here. The
//! [`ProductClient`](crate::clients::ProductClient) computes the adjustments a
//! write implies and sends them to the category collection after the write
//! commits.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::*;
pub use error::*;

use crate::model::Product;
use resource_actor::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
