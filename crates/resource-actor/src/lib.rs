//! # Resource Actor
//!
//! Building blocks for serving document collections from Tokio tasks. Each
//! collection is one [`ResourceActor`] that owns its records outright and
//! processes requests sequentially, reached through a cloneable
//! [`ResourceClient`].
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record type and its lifecycle hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message processing and storage
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed async calls
//!
//! ## Guarantees
//!
//! - An [`Action`](ResourceRequest::Action) runs to completion before the next
//!   request on the same collection is looked at, so read-modify-write actions
//!   (counters, toggles) cannot lose updates among themselves.
//! - [`ResourceClient::create_batch`] is all-or-nothing: one rejected record
//!   rejects the batch and nothing from it is stored.
//! - [`ResourceClient::list`] returns a snapshot in id order.
//! - Nothing is coordinated *across* collections. Work that spans two
//!   collections is two independent requests.
//!
//! ```rust
//! use resource_actor::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Counter { id: u32, value: i64 }
//!
//! #[derive(Debug)] struct CounterCreate;
//! #[derive(Debug)] struct CounterUpdate;
//! #[derive(Debug)] enum CounterAction { Add(i64) }
//! #[derive(Debug, thiserror::Error)] #[error("counter error")] struct CounterError;
//!
//! #[async_trait]
//! impl ActorEntity for Counter {
//!     type Id = u32;
//!     type Create = CounterCreate;
//!     type Update = CounterUpdate;
//!     type Action = CounterAction;
//!     type ActionResult = i64;
//!     type Context = ();
//!     type Error = CounterError;
//!
//!     fn from_create_params(id: u32, _: CounterCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, value: 0 })
//!     }
//!
//!     async fn on_update(&mut self, _: CounterUpdate, _: &()) -> Result<(), Self::Error> {
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: CounterAction, _: &()) -> Result<i64, Self::Error> {
//!         match action {
//!             CounterAction::Add(delta) => {
//!                 self.value += delta;
//!                 Ok(self.value)
//!             }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Counter>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(CounterCreate).await.unwrap();
//!     let value = client.perform_action(id, CounterAction::Add(3)).await.unwrap();
//!     assert_eq!(value, 3);
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers requests from scripted expectations, which is how
//! tests simulate unreachable collections and rejected batches.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
