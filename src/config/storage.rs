//! Typed stores backing a cache.
//!
//! A storage is a registry of string-keyed maps, one per [`ValueKind`]. The
//! object-safe [`Storage`] trait deals in type-erased stores; [`StorageExt`]
//! layers the typed API on top of any implementation.

use std::any::Any;
use std::collections::HashMap;

use tracing::trace;

use super::value::{CacheValue, ValueKind};
use super::CacheError;

pub trait Storage {
    /// Registers a type-erased store under `kind`.
    ///
    /// Fails if a store for `kind` is already registered.
    fn insert_store(&mut self, kind: ValueKind, store: Box<dyn Any>) -> Result<(), CacheError>;

    fn store(&self, kind: ValueKind) -> Option<&dyn Any>;

    fn store_mut(&mut self, kind: ValueKind) -> Option<&mut dyn Any>;

    /// Removes every registered store.
    fn clear(&mut self);

    /// Number of registered stores.
    fn count(&self) -> usize;
}

pub trait StorageExt: Storage {
    /// Registers an empty store for `T`.
    fn initialize_store<T: CacheValue>(&mut self) -> Result<&mut Self, CacheError> {
        self.add_store(HashMap::<String, T>::new())
    }

    fn add_store<T: CacheValue>(
        &mut self,
        store: HashMap<String, T>,
    ) -> Result<&mut Self, CacheError> {
        self.insert_store(T::KIND, Box::new(store))?;
        Ok(self)
    }

    fn get_store<T: CacheValue>(&self) -> Result<&HashMap<String, T>, CacheError> {
        self.store(T::KIND)
            .and_then(|store| store.downcast_ref())
            .ok_or(CacheError::StoreNotInitialized(T::KIND))
    }

    fn get_store_mut<T: CacheValue>(&mut self) -> Result<&mut HashMap<String, T>, CacheError> {
        self.store_mut(T::KIND)
            .and_then(|store| store.downcast_mut())
            .ok_or(CacheError::StoreNotInitialized(T::KIND))
    }
}

impl<S: Storage + ?Sized> StorageExt for S {}

/// Default [`Storage`] keeping one map per value kind.
#[derive(Debug, Default)]
pub struct TypedStorage {
    stores: HashMap<ValueKind, Box<dyn Any>>,
}

impl TypedStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for TypedStorage {
    fn insert_store(&mut self, kind: ValueKind, store: Box<dyn Any>) -> Result<(), CacheError> {
        if self.stores.contains_key(&kind) {
            return Err(CacheError::StoreAlreadyAdded(kind));
        }
        trace!(%kind, "registering store");
        self.stores.insert(kind, store);
        Ok(())
    }

    fn store(&self, kind: ValueKind) -> Option<&dyn Any> {
        self.stores.get(&kind).map(|store| store.as_ref())
    }

    fn store_mut(&mut self, kind: ValueKind) -> Option<&mut dyn Any> {
        self.stores.get_mut(&kind).map(|store| store.as_mut())
    }

    fn clear(&mut self) {
        trace!(count = self.stores.len(), "clearing stores");
        self.stores.clear();
    }

    fn count(&self) -> usize {
        self.stores.len()
    }
}
