//! InMemoryStore - HashMap-backed model store with versioned reads.

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};
use std::sync::{Arc, RwLock, RwLockWriteGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use super::RepositoryError;

/// Trait for entities that can be kept in the store.
pub trait Model: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Collection name; forms the key prefix (`"companies:<id>"`).
    const COLLECTION: &'static str;

    fn id(&self) -> Uuid;
}

/// A model as read from the store.
///
/// A tracked read carries the version it observed; an untracked read
/// carries none and cannot be written back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tracked<M> {
    pub data: M,
    version: Option<u64>,
}

impl<M> Tracked<M> {
    /// Version observed by the read, `None` when it was untracked.
    pub fn version(&self) -> Option<u64> {
        self.version
    }

    pub fn is_tracked(&self) -> bool {
        self.version.is_some()
    }

    pub fn into_inner(self) -> M {
        self.data
    }
}

impl<M> Deref for Tracked<M> {
    type Target = M;

    fn deref(&self) -> &M {
        &self.data
    }
}

impl<M> DerefMut for Tracked<M> {
    fn deref_mut(&mut self) -> &mut M {
        &mut self.data
    }
}

struct StoredModel {
    bytes: Vec<u8>,
    version: u64,
}

type Storage = HashMap<String, StoredModel>;

/// In-memory model store.
///
/// Storage key is `"COLLECTION:id"`. Clone-friendly via Arc. Every write,
/// including the parent/child variants, happens under a single write guard.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    storage: Arc<RwLock<Storage>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn make_key(collection: &str, id: Uuid) -> String {
        format!("{}:{}", collection, id)
    }

    fn key_of<M: Model>(model: &M) -> String {
        Self::make_key(M::COLLECTION, model.id())
    }

    fn read_model<M: Model>(
        stored: &StoredModel,
        track_changes: bool,
    ) -> Result<Tracked<M>, RepositoryError> {
        Ok(Tracked {
            data: serde_json::from_slice(&stored.bytes)?,
            version: track_changes.then_some(stored.version),
        })
    }

    fn write_guard(&self) -> Result<RwLockWriteGuard<'_, Storage>, RepositoryError> {
        self.storage
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("write"))
    }

    /// Get a model by ID. Returns None if not found.
    pub fn get<M: Model>(
        &self,
        id: Uuid,
        track_changes: bool,
    ) -> Result<Option<Tracked<M>>, RepositoryError> {
        let key = Self::make_key(M::COLLECTION, id);
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;

        storage
            .get(&key)
            .map(|stored| Self::read_model(stored, track_changes))
            .transpose()
    }

    /// All models of a collection matching `predicate`.
    pub fn find<M: Model>(
        &self,
        predicate: &dyn Fn(&M) -> bool,
        track_changes: bool,
    ) -> Result<Vec<Tracked<M>>, RepositoryError> {
        let prefix = format!("{}:", M::COLLECTION);
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;

        let mut models = Vec::new();
        for (_, stored) in storage.iter().filter(|(key, _)| key.starts_with(&prefix)) {
            let model: Tracked<M> = Self::read_model(stored, track_changes)?;
            if predicate(&model.data) {
                models.push(model);
            }
        }
        Ok(models)
    }

    /// First model of a collection matching `predicate`.
    pub fn find_one<M: Model>(
        &self,
        predicate: &dyn Fn(&M) -> bool,
        track_changes: bool,
    ) -> Result<Option<Tracked<M>>, RepositoryError> {
        let prefix = format!("{}:", M::COLLECTION);
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;

        for (_, stored) in storage.iter().filter(|(key, _)| key.starts_with(&prefix)) {
            let model: Tracked<M> = Self::read_model(stored, track_changes)?;
            if predicate(&model.data) {
                return Ok(Some(model));
            }
        }
        Ok(None)
    }

    /// Insert a new model. Fails if it already exists.
    pub fn insert<M: Model>(&self, model: &M) -> Result<(), RepositoryError> {
        self.insert_all::<M, M>(model, &[])
    }

    /// Insert a parent and its children together. Nothing is written if any
    /// of them already exists.
    pub fn insert_all<P: Model, C: Model>(
        &self,
        parent: &P,
        children: &[C],
    ) -> Result<(), RepositoryError> {
        let mut staged = vec![(Self::key_of(parent), serde_json::to_vec(parent)?)];
        for child in children {
            staged.push((Self::key_of(child), serde_json::to_vec(child)?));
        }

        let mut storage = self.write_guard()?;
        Self::ensure_absent(&storage, P::COLLECTION, parent.id())?;
        for child in children {
            Self::ensure_absent(&storage, C::COLLECTION, child.id())?;
        }

        for (key, bytes) in staged {
            storage.insert(key, StoredModel { bytes, version: 1 });
        }
        Ok(())
    }

    /// Insert `child` only if the parent `P` with `parent_id` exists at the
    /// moment of the write.
    pub fn insert_child<P: Model, C: Model>(
        &self,
        parent_id: Uuid,
        child: &C,
    ) -> Result<(), RepositoryError> {
        let bytes = serde_json::to_vec(child)?;

        let mut storage = self.write_guard()?;
        if !storage.contains_key(&Self::make_key(P::COLLECTION, parent_id)) {
            return Err(RepositoryError::Missing {
                collection: P::COLLECTION,
                id: parent_id,
            });
        }
        Self::ensure_absent(&storage, C::COLLECTION, child.id())?;

        storage.insert(Self::key_of(child), StoredModel { bytes, version: 1 });
        Ok(())
    }

    /// Write back a model obtained through a tracked read.
    ///
    /// Returns the new version, which `model` now carries, so it can be
    /// written again.
    pub fn update<M: Model>(&self, model: &mut Tracked<M>) -> Result<u64, RepositoryError> {
        self.update_with_children::<M, M>(model, &[])
    }

    /// Write back a tracked parent and insert new children in one step.
    pub fn update_with_children<P: Model, C: Model>(
        &self,
        parent: &mut Tracked<P>,
        children: &[C],
    ) -> Result<u64, RepositoryError> {
        let key = Self::key_of(&parent.data);
        let bytes = serde_json::to_vec(&parent.data)?;
        let mut staged = Vec::with_capacity(children.len());
        for child in children {
            staged.push((Self::key_of(child), serde_json::to_vec(child)?));
        }

        let mut storage = self.write_guard()?;
        let Some(expected) = parent.version else {
            return Err(RepositoryError::NotTracked {
                collection: P::COLLECTION,
                id: parent.id(),
            });
        };
        let actual = storage.get(&key).map(|stored| stored.version);
        match actual {
            None => {
                return Err(RepositoryError::Missing {
                    collection: P::COLLECTION,
                    id: parent.id(),
                })
            }
            Some(actual) if actual != expected => {
                return Err(RepositoryError::ConcurrencyConflict {
                    collection: P::COLLECTION,
                    id: parent.id(),
                    expected,
                    actual,
                })
            }
            Some(_) => {}
        }
        for child in children {
            Self::ensure_absent(&storage, C::COLLECTION, child.id())?;
        }

        let version = expected + 1;
        storage.insert(key, StoredModel { bytes, version });
        for (key, bytes) in staged {
            storage.insert(key, StoredModel { bytes, version: 1 });
        }
        parent.version = Some(version);
        Ok(version)
    }

    /// Delete a model by ID. Returns true if it existed.
    pub fn delete<M: Model>(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let key = Self::make_key(M::COLLECTION, id);
        let mut storage = self.write_guard()?;
        Ok(storage.remove(&key).is_some())
    }

    /// Delete parent `P` and every `C` matching `is_child` in one step.
    ///
    /// Returns how many children went with it, or `None` if the parent did
    /// not exist (nothing is removed then).
    pub fn delete_with_children<P: Model, C: Model>(
        &self,
        parent_id: Uuid,
        is_child: &dyn Fn(&C) -> bool,
    ) -> Result<Option<usize>, RepositoryError> {
        let parent_key = Self::make_key(P::COLLECTION, parent_id);
        let prefix = format!("{}:", C::COLLECTION);

        let mut storage = self.write_guard()?;
        if !storage.contains_key(&parent_key) {
            return Ok(None);
        }

        let mut doomed = Vec::new();
        for (key, stored) in storage.iter().filter(|(key, _)| key.starts_with(&prefix)) {
            let child: C = serde_json::from_slice(&stored.bytes)?;
            if is_child(&child) {
                doomed.push(key.clone());
            }
        }

        storage.remove(&parent_key);
        for key in &doomed {
            storage.remove(key);
        }
        Ok(Some(doomed.len()))
    }

    fn ensure_absent(
        storage: &Storage,
        collection: &'static str,
        id: Uuid,
    ) -> Result<(), RepositoryError> {
        if storage.contains_key(&Self::make_key(collection, id)) {
            return Err(RepositoryError::AlreadyExists { collection, id });
        }
        Ok(())
    }
}
