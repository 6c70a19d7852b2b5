//! # Persistence Backends
//!
//! A [`Store`] loads and saves the *whole* collection of entities at once. There are no
//! partial updates and no append log: every mutation performed by the
//! [`ResourceActor`](crate::ResourceActor) is a full read-modify-write cycle.
//!
//! - [`JsonFileStore`] - one pretty-printed JSON object on disk, replaced atomically on save.
//! - [`MemoryStore`] - the same contract without touching the filesystem.

use crate::entity::ActorEntity;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// The persisted aggregate: every entity keyed by its id.
pub type Collection<T> = BTreeMap<<T as ActorEntity>::Id, T>;

/// Errors raised while loading or saving a collection.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("record stored under key {key} has id {id}")]
    KeyMismatch { key: String, id: String },
}

/// Whole-document persistence for a collection of `T`.
///
/// Implementations are owned by a single [`ResourceActor`](crate::ResourceActor), which
/// serializes access, so they need no internal locking of their own.
pub trait Store<T: ActorEntity>: Send + 'static {
    /// Reads the full collection. A store that has never been written reads as empty.
    fn load_all(&self) -> Result<Collection<T>, StoreError>;

    /// Replaces the full collection.
    fn save_all(&self, collection: &Collection<T>) -> Result<(), StoreError>;
}

/// Rejects documents whose map key disagrees with the id inside the record.
fn check_keys<T: ActorEntity>(collection: &Collection<T>) -> Result<(), StoreError> {
    for (key, item) in collection {
        if key != item.id() {
            return Err(StoreError::KeyMismatch {
                key: key.to_string(),
                id: item.id().to_string(),
            });
        }
    }
    Ok(())
}

// =============================================================================
// JSON FILE
// =============================================================================

/// Stores the collection as a single JSON object at `path`.
///
/// Saves go through a `.tmp` sibling that is synced and then renamed over the target,
/// so a successful save never leaves a half-written document behind.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl<T: ActorEntity> Store<T> for JsonFileStore {
    fn load_all(&self) -> Result<Collection<T>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No backing file yet, starting empty");
                return Ok(Collection::<T>::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let collection: Collection<T> =
            serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;
        check_keys::<T>(&collection)?;
        Ok(collection)
    }

    fn save_all(&self, collection: &Collection<T>) -> Result<(), StoreError> {
        // Four-space indent, the layout existing data files use
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        collection.serialize(&mut serializer)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let temp_path = self.temp_path();
        let mut file = File::create(&temp_path).map_err(|e| self.write_error(e))?;
        file.write_all(&buf).map_err(|e| self.write_error(e))?;
        file.sync_all().map_err(|e| self.write_error(e))?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            self.write_error(e)
        })?;

        debug!(path = %self.path.display(), size = collection.len(), "Saved collection");
        Ok(())
    }
}

// =============================================================================
// IN MEMORY
// =============================================================================

/// Keeps the collection in memory.
///
/// Clones share the same collection, so a test can keep one handle while the actor
/// owns another and inspect what was "persisted".
pub struct MemoryStore<T: ActorEntity> {
    collection: Arc<Mutex<Collection<T>>>,
}

impl<T: ActorEntity> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            collection: Arc::new(Mutex::new(Collection::<T>::new())),
        }
    }

    /// Starts from an existing collection.
    pub fn with_collection(collection: Collection<T>) -> Self {
        Self {
            collection: Arc::new(Mutex::new(collection)),
        }
    }

    /// Returns a copy of the current collection.
    pub fn snapshot(&self) -> Collection<T> {
        self.collection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<T: ActorEntity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> Clone for MemoryStore<T> {
    fn clone(&self) -> Self {
        Self {
            collection: Arc::clone(&self.collection),
        }
    }
}

impl<T: ActorEntity> Store<T> for MemoryStore<T> {
    fn load_all(&self) -> Result<Collection<T>, StoreError> {
        Ok(self.snapshot())
    }

    fn save_all(&self, collection: &Collection<T>) -> Result<(), StoreError> {
        check_keys::<T>(collection)?;
        *self
            .collection
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = collection.clone();
        Ok(())
    }
}
