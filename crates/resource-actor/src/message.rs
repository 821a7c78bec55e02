//! # Generic Messages
//!
//! Request envelopes exchanged between a [`ResourceClient`](crate::ResourceClient)
//! and its [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants cover the document-collection surface a caller needs:
///
/// - **Create** / **CreateBatch**: insert one record, or many records as a
///   single all-or-nothing write.
/// - **Get** / **List**: point read by id, or a snapshot of the whole collection
///   in id order.
/// - **Update**: partial mutation through [`ActorEntity::on_update`].
/// - **Delete**: removal; the removed record is handed back to the caller so
///   follow-up work (counter adjustments and the like) does not need a second read.
/// - **Action**: a resource-specific [`ActorEntity::Action`], executed atomically
///   with respect to every other request on the same collection.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    CreateBatch {
        params: Vec<T::Create>,
        respond_to: Response<Vec<T::Id>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<T>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
