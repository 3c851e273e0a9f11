use std::fmt;

use tracing::debug;

use super::retriever::CategoryRetriever;
use super::storage::Storage;
use super::value::CacheValue;
use super::CacheError;
use crate::guard::Guard;

/// Configuration cache fronting a retriever and a storage.
///
/// A cache is usable once both a storage and a retriever are set, in any
/// order. Setting either again replaces the previous one.
///
/// Retrieval always goes to the retriever; values are not memoized in the
/// storage.
///
/// ```
/// use guard_fnd::config::{Cache, DictionaryRetriever, TypedStorage, ValueKind};
///
/// let retriever = DictionaryRetriever::from_iter([("port", "8080")]);
/// let cache = Cache::with_default_category(ValueKind::UInt16)
///     .set_storage(TypedStorage::new())
///     .set_retriever(retriever);
///
/// assert!(cache.is_configured());
/// assert_eq!(cache.retrieve_and_cache::<u16>("port")?, 8080);
/// # Ok::<(), guard_fnd::config::CacheError>(())
/// ```
pub struct Cache<C> {
    default_category: C,
    storage: Option<Box<dyn Storage>>,
    retriever: Option<Box<dyn CategoryRetriever<C>>>,
}

impl<C: Default> Cache<C> {
    /// Creates an unconfigured cache with the default category.
    pub fn create() -> Self {
        Self::with_default_category(C::default())
    }
}

impl<C: Default> Default for Cache<C> {
    fn default() -> Self {
        Self::create()
    }
}

impl<C> Cache<C> {
    pub fn with_default_category(category: C) -> Self {
        Self {
            default_category: category,
            storage: None,
            retriever: None,
        }
    }

    #[must_use]
    pub fn set_storage(mut self, storage: impl Storage + 'static) -> Self {
        debug!(replaced = self.storage.is_some(), "cache storage set");
        self.storage = Some(Box::new(storage));
        self
    }

    #[must_use]
    pub fn set_retriever(mut self, retriever: impl CategoryRetriever<C> + 'static) -> Self {
        debug!(replaced = self.retriever.is_some(), "cache retriever set");
        self.retriever = Some(Box::new(retriever));
        self
    }

    #[must_use]
    pub fn set_default_category(mut self, category: C) -> Self {
        debug!("cache default category set");
        self.default_category = category;
        self
    }

    pub fn default_category(&self) -> &C {
        &self.default_category
    }

    /// True once both a storage and a retriever are set.
    pub fn is_configured(&self) -> bool {
        self.storage.is_some() && self.retriever.is_some()
    }

    pub fn storage(&self) -> Option<&dyn Storage> {
        self.storage.as_deref()
    }

    pub fn storage_mut(&mut self) -> Option<&mut (dyn Storage + 'static)> {
        self.storage.as_deref_mut()
    }

    /// Clears every store in the storage.
    pub fn reset_cache(&mut self) -> Result<(), CacheError> {
        let storage = self.storage.as_mut().ok_or(CacheError::StorageNotSet)?;
        debug!(stores = storage.count(), "resetting cache");
        storage.clear();
        Ok(())
    }

    /// Retrieves `key` from the default category.
    pub fn retrieve_and_cache<T: CacheValue>(&self, key: &str) -> Result<T, CacheError> {
        self.retrieve_and_cache_in(&self.default_category, key)
    }

    /// Retrieves `key` from `category`.
    ///
    /// The key must not be blank and the cache must be configured; both are
    /// checked before the retriever is called.
    pub fn retrieve_and_cache_in<T: CacheValue>(
        &self,
        category: &C,
        key: &str,
    ) -> Result<T, CacheError> {
        let key = Guard::<_, CacheError>::new(key)
            .test(|key| !key.trim().is_empty())
            .error_builder(|_| CacheError::MissingKey)
            .validate_and_return()?;

        let retriever = match (&self.storage, &self.retriever) {
            (Some(_), Some(retriever)) => retriever,
            _ => return Err(CacheError::NotConfigured),
        };

        let kind = T::KIND;
        debug!(key, %kind, "retrieving configuration value");
        retriever.retrieve_value(category, key, kind)?.into_typed()
    }
}

impl<C: fmt::Debug> fmt::Debug for Cache<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("default_category", &self.default_category)
            .field("has_storage", &self.storage.is_some())
            .field("has_retriever", &self.retriever.is_some())
            .finish()
    }
}
