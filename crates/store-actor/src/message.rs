//! # Message Protocol
//!
//! Defines the messages exchanged between [`ResourceClient`](crate::ResourceClient)
//! and [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants of this enum map directly to standard **CRUD** (Create, Read, Update, Delete)
/// operations plus `List`, which returns the whole collection.
///
/// - **Create**: Uses [`ActorEntity::Create`] to build a new resource under a caller-chosen id.
/// - **Get (Read)**: Fetches the current state of the resource by ID.
/// - **List**: Fetches every resource, ordered by ID.
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Delete**: Removes the resource.
///
/// Every variant is handled as one load/modify/save cycle against the actor's
/// [`Store`](crate::Store).
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
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
        respond_to: Response<()>,
    },
}
