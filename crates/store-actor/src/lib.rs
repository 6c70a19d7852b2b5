//! # Store Actor
//!
//! This crate provides a small, type-safe building block for managing a persisted collection
//! of entities: a **Resource-Oriented** CRUD API on top of the **Actor Model**, backed by a
//! whole-document [`Store`].
//!
//! ## Why an Actor in Front of a File?
//!
//! A JSON document that is read in full and rewritten in full on every mutation is simple and
//! easy to inspect, but two overlapping read-modify-write cycles silently lose one update.
//! Putting the store behind a single [`ResourceActor`] task makes every cycle exclusive:
//!
//! - Requests from any number of cloned [`ResourceClient`]s are queued on one channel
//! - The actor processes them sequentially, each as `load_all` → mutate → `save_all`
//! - Nothing is cached between requests, so the file stays the single source of truth
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your domain model, its id, and its validation hooks
//! 2. **Storage Layer** ([`Store`]) - [`JsonFileStore`] on disk, [`MemoryStore`] for tests
//! 3. **Runtime Layer** ([`ResourceActor`]) - Message processing and the read-modify-write cycle
//! 4. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ## Quick Example
//!
//! ```rust
//! use store_actor::{ActorEntity, FrameworkError, JsonFileStore, ResourceActor};
//! use async_trait::async_trait;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Clone, Debug, Serialize, Deserialize)]
//! struct Book { id: String, title: String }
//! #[derive(Debug)] struct BookCreate { id: String, title: String }
//! #[derive(Debug)] struct BookUpdate { title: String }
//! #[derive(Debug, thiserror::Error)] #[error("title cannot be empty")] struct BookError;
//!
//! #[async_trait]
//! impl ActorEntity for Book {
//!     type Id = String;
//!     type Create = BookCreate;
//!     type Update = BookUpdate;
//!     type Context = ();
//!     type Error = BookError;
//!
//!     fn id(&self) -> &String { &self.id }
//!
//!     fn from_create_params(p: BookCreate) -> Result<Self, Self::Error> {
//!         if p.title.is_empty() { return Err(BookError); }
//!         Ok(Self { id: p.id, title: p.title })
//!     }
//!
//!     async fn on_update(&mut self, u: BookUpdate, _: &()) -> Result<(), Self::Error> {
//!         if u.title.is_empty() { return Err(BookError); }
//!         self.title = u.title;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let dir = tempfile::tempdir().unwrap();
//!     let store = JsonFileStore::new(dir.path().join("books.json"));
//!     let (actor, client) = ResourceActor::<Book, _>::new(10, store);
//!     tokio::spawn(actor.run(()));
//!
//!     let create = || BookCreate { id: "b1".into(), title: "Dune".into() };
//!     client.create(create()).await.unwrap();
//!     assert!(matches!(client.create(create()).await, Err(FrameworkError::AlreadyExists(_))));
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns `Result<_, FrameworkError>`. Entity hook failures arrive as
//! [`FrameworkError::EntityError`] and keep the entity's own error inside the box, so a
//! client wrapper can downcast them back. Storage failures arrive as
//! [`FrameworkError::Storage`] and are also logged by the actor.
//!
//! ## Testing
//!
//! See [`mock`] for utilities to test clients without spawning an actor, and
//! [`MemoryStore`] for running a real actor without a file.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::{Collection, JsonFileStore, MemoryStore, Store, StoreError};
