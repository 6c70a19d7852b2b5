//! # Resource Actor
//!
//! The server side of the framework: a task that owns a [`Store`] and applies every
//! request to it one at a time.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::store::{Collection, Store};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The generic actor that manages a persisted collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the backing [`Store`] and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Requests are processed *sequentially*, and every request performs its own
/// `load_all` / mutate / `save_all` cycle. Because only this task ever touches the
/// store, the read-modify-write cycle is never interleaved with another one: cloned
/// clients in many tasks can create and update concurrently without lost updates,
/// and without a `Mutex` around the file.
///
/// # Usage Pattern
///
/// ```rust
/// use store_actor::{ActorEntity, MemoryStore, ResourceActor};
/// use async_trait::async_trait;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// struct Note { id: String, text: String }
/// #[derive(Debug)] struct NoteCreate { id: String, text: String }
/// #[derive(Debug)] struct NoteUpdate { text: String }
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = String;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Context = ();
///     type Error = NoteError;
///
///     fn id(&self) -> &String { &self.id }
///     fn from_create_params(p: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id: p.id, text: p.text })
///     }
///     async fn on_update(&mut self, u: NoteUpdate, _: &()) -> Result<(), Self::Error> {
///         self.text = u.text;
///         Ok(())
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::new(10, MemoryStore::<Note>::new());
///     tokio::spawn(actor.run(()));
///
///     let id = client
///         .create(NoteCreate { id: "n1".into(), text: "hello".into() })
///         .await
///         .unwrap();
///     let note = client.get(id).await.unwrap().unwrap();
///     assert_eq!(note.text, "hello");
/// }
/// ```
///
/// ## Operations
///
/// * **Create**: builds the entity (`from_create_params`), loads the collection, rejects an
///   id that is already present, runs `on_create`, inserts and saves.
/// * **Get** / **List**: load the collection and return clones.
/// * **Update**: loads, runs `on_update` on the stored entity, saves and returns the new state.
/// * **Delete**: loads, runs `on_delete`, removes and saves.
///
/// Nothing is saved when a hook or a lookup fails.
pub struct ResourceActor<T: ActorEntity, S: Store<T>> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: S,
}

impl<T: ActorEntity, S: Store<T>> ResourceActor<T, S> {
    /// Creates a new `ResourceActor` over `store` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    /// * `store` - The persistence backend this actor exclusively owns.
    pub fn new(buffer_size: usize, store: S) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, store };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Product" instead of "inventory::model::product::Product")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, "Created"),
                        Err(e) => log_failure(entity_type, "Create", e),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let result = self.load().map(|mut items| items.remove(&id));
                    match &result {
                        Ok(item) => debug!(entity_type, %id, found = item.is_some(), "Get"),
                        Err(e) => log_failure(entity_type, "Get", e),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::List { respond_to } => {
                    let result = self
                        .load()
                        .map(|items| items.into_values().collect::<Vec<_>>());
                    match &result {
                        Ok(items) => debug!(entity_type, size = items.len(), "List"),
                        Err(e) => log_failure(entity_type, "List", e),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, "Updated"),
                        Err(e) => log_failure(entity_type, "Update", e),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    match &result {
                        Ok(size) => info!(entity_type, %id, size, "Deleted"),
                        Err(e) => log_failure(entity_type, "Delete", e),
                    }
                    let _ = respond_to.send(result.map(|_| ()));
                }
            }
        }

        info!(entity_type, "Shutdown");
    }

    fn load(&self) -> Result<Collection<T>, FrameworkError> {
        Ok(self.store.load_all()?)
    }

    fn save(&self, items: &Collection<T>) -> Result<(), FrameworkError> {
        Ok(self.store.save_all(items)?)
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let mut item = T::from_create_params(params).map_err(entity_error)?;
        let mut items = self.load()?;

        let id = item.id().clone();
        if items.contains_key(&id) {
            return Err(FrameworkError::AlreadyExists(id.to_string()));
        }

        item.on_create(context).await.map_err(entity_error)?;
        items.insert(id.clone(), item);
        self.save(&items)?;
        Ok(id)
    }

    async fn update(
        &mut self,
        id: &T::Id,
        update: T::Update,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let mut items = self.load()?;
        let item = items
            .get_mut(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;

        item.on_update(update, context).await.map_err(entity_error)?;
        let updated = item.clone();
        self.save(&items)?;
        Ok(updated)
    }

    /// Returns the collection size after removal.
    async fn delete(&mut self, id: &T::Id, context: &T::Context) -> Result<usize, FrameworkError> {
        let mut items = self.load()?;
        let item = items
            .get(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;

        item.on_delete(context).await.map_err(entity_error)?;
        items.remove(id);
        self.save(&items)?;
        Ok(items.len())
    }
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}

fn log_failure(entity_type: &str, operation: &str, e: &FrameworkError) {
    match e {
        FrameworkError::Storage(_) => error!(entity_type, operation, error = %e, "Storage failure"),
        _ => warn!(entity_type, operation, error = %e, "Request rejected"),
    }
}
