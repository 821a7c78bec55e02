//! # Legacy Source Actors
//!
//! Each historical collection (Brazilian, foreign) is one [`ResourceActor`]
//! holding [`LegacyRecord`]s. Records are only ever inserted, listed and
//! purged; nothing edits them in place.

use async_trait::async_trait;
use resource_actor::{ActorEntity, FrameworkError, ResourceActor, ResourceClient};
use thiserror::Error;

use crate::model::{LegacyId, LegacyProduct, LegacyRecord};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum LegacyError {
    /// The collection could not be reached.
    #[error("Legacy source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Invalid legacy document: {0}")]
    InvalidDocument(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for LegacyError {
    fn from(e: FrameworkError) -> Self {
        if e.is_unreachable() {
            LegacyError::SourceUnavailable(e.to_string())
        } else {
            LegacyError::ActorCommunicationError(e.to_string())
        }
    }
}

/// Legacy records accept no custom actions.
#[derive(Debug, Clone)]
pub enum LegacyAction {}

#[async_trait]
impl ActorEntity for LegacyRecord {
    type Id = LegacyId;
    type Create = LegacyProduct;
    type Update = ();
    type Action = LegacyAction;
    type ActionResult = ();
    type Context = ();
    type Error = LegacyError;

    fn from_create_params(id: LegacyId, data: LegacyProduct) -> Result<Self, Self::Error> {
        Ok(Self { id, data })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(&mut self, action: LegacyAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}

/// Creates a new legacy source actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<LegacyRecord>, ResourceClient<LegacyRecord>) {
    ResourceActor::new(buffer_size)
}
