//! In-memory entity store
//!
//! One [`EntityStore`] holds every entity of one type for the lifetime of the
//! process. Clones share the same underlying collection.
//!
//! A handler that validates and then mutates does both inside a single
//! [`EntityStore::write`] call, so no other request can observe or change the
//! collection between the checks and the mutation.

use crate::core::entity::Entity;
use crate::core::error::{ApiError, ApiResult};
use crate::core::id::IdGenerator;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

/// Generator draws before an id collision is reported as an internal error
const MAX_ID_ATTEMPTS: usize = 16;

/// Insertion-ordered entities keyed by id
#[derive(Debug, Clone)]
pub struct Entries<T> {
    map: IndexMap<String, T>,
}

impl<T: Entity> Entries<T> {
    fn new() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.map.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.map.get_mut(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.map.values()
    }

    /// Append an entity built around a freshly generated id
    ///
    /// Ids that are empty or already stored are re-drawn.
    pub fn insert_new(
        &mut self,
        ids: &dyn IdGenerator,
        build: impl FnOnce(String) -> T,
    ) -> ApiResult<T> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = ids.next_id();
            if id.is_empty() || self.map.contains_key(&id) {
                continue;
            }
            let entity = build(id.clone());
            self.map.insert(id, entity.clone());
            return Ok(entity);
        }

        Err(ApiError::Internal(format!(
            "could not generate a unique id for {}",
            T::resource_name()
        )))
    }

    /// Replace the entity stored under `id`, keeping its position
    pub fn replace(&mut self, id: &str, entity: T) -> ApiResult<T> {
        let slot = self
            .map
            .get_mut(id)
            .ok_or_else(|| ApiError::not_found(T::label(), id))?;
        *slot = entity.clone();
        Ok(entity)
    }

    /// Remove the entity stored under `id`, keeping the order of the rest
    pub fn remove(&mut self, id: &str) -> Option<T> {
        self.map.shift_remove(id)
    }
}

/// Shared, lock-guarded collection of one entity type
#[derive(Clone)]
pub struct EntityStore<T> {
    data: Arc<RwLock<Entries<T>>>,
}

impl<T: Entity> EntityStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(Entries::new())),
        }
    }

    /// Create a store pre-populated with entities that already carry ids
    ///
    /// Fails on an empty or repeated id.
    pub fn with_entities(entities: impl IntoIterator<Item = T>) -> ApiResult<Self> {
        let mut entries = Entries::new();
        for entity in entities {
            let id = entity.id().to_string();
            if id.is_empty() {
                return Err(ApiError::validation(
                    "id",
                    format!("{} id must not be empty", T::label()),
                ));
            }
            if entries.map.contains_key(&id) {
                return Err(ApiError::validation(
                    "id",
                    format!("Duplicate {} id: {}", T::label(), id),
                ));
            }
            entries.map.insert(id, entity);
        }

        Ok(Self {
            data: Arc::new(RwLock::new(entries)),
        })
    }

    /// Run `f` with shared access to the entries
    pub fn read<R>(&self, f: impl FnOnce(&Entries<T>) -> ApiResult<R>) -> ApiResult<R> {
        let entries = self
            .data
            .read()
            .map_err(|e| ApiError::Internal(format!("Failed to acquire read lock: {}", e)))?;
        f(&entries)
    }

    /// Run `f` with exclusive access to the entries
    pub fn write<R>(&self, f: impl FnOnce(&mut Entries<T>) -> ApiResult<R>) -> ApiResult<R> {
        let mut entries = self
            .data
            .write()
            .map_err(|e| ApiError::Internal(format!("Failed to acquire write lock: {}", e)))?;
        f(&mut entries)
    }

    /// All entities in insertion order
    pub fn list(&self) -> ApiResult<Vec<T>> {
        self.read(|entries| Ok(entries.iter().cloned().collect()))
    }

    pub fn get(&self, id: &str) -> ApiResult<Option<T>> {
        self.read(|entries| Ok(entries.get(id).cloned()))
    }

    pub fn len(&self) -> ApiResult<usize> {
        self.read(|entries| Ok(entries.len()))
    }
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
