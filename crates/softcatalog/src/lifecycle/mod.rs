//! # System Lifecycle
//!
//! Starting, wiring and stopping the catalog's collections.
//!
//! Every collection is an independent actor. [`CatalogSystem`] hands the
//! [`ProductClient`](crate::clients::ProductClient) a clone of the
//! [`CategoryClient`](crate::clients::CategoryClient); counter adjustments are
//! dispatched by the client after a write, never from inside the product actor.
//! The product actor's only context is [`ProductContext`](crate::product_actor::ProductContext).
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each channel
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for every actor task to finish
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber once per process; see
//! [`resource_actor::tracing`] for filter examples.

pub mod catalog_system;

pub use catalog_system::*;
pub use resource_actor::tracing::setup_tracing;
