//! # Entity Trait
//!
//! The [`ActorEntity`] trait is the contract between your domain model and the
//! generic [`ResourceActor`](crate::ResourceActor). Implement it once per resource
//! type and the actor takes care of message handling, persistence and logging.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Architecture Note
/// By defining a contract (`ActorEntity`) that all our resource types must satisfy,
/// we can write the `ResourceActor` logic *once* and reuse it everywhere.
///
/// # Persistence
/// Entities are persisted as a single document mapping `Id -> Entity`, so both the
/// entity and its id must round-trip through `serde`. The id is chosen by the caller
/// (it travels inside [`ActorEntity::Create`]) and must be usable as a map key.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks.
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing clients to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The unique identifier for this entity. Serialized as the document key.
    type Id: Ord + Clone + Send + Sync + Display + Debug + Serialize + DeserializeOwned;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// The framework enforces a **Per-Actor Error Type** (one enum for the whole actor).
    /// Hook failures are boxed into [`FrameworkError::EntityError`](crate::FrameworkError::EntityError)
    /// and can be downcast back to this type by the client wrapper.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The key this entity is stored under.
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the creation payload.
    ///
    /// Runs before the store is touched, so a rejected payload never costs a read.
    fn from_create_params(params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received. Failing leaves the stored record untouched.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the collection.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}
