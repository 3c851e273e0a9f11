//! Configuration value cache.
//!
//! A [`Cache`] pairs a [`Storage`] of typed stores with a
//! [`CategoryRetriever`] that fetches raw values by category and key and
//! converts them to the requested [`ValueKind`].

mod cache;
mod error;
mod retriever;
mod storage;
mod table;
mod value;

pub use cache::Cache;
pub use error::CacheError;
pub use retriever::{CategoryRetriever, DictionaryRetriever};
pub use storage::{Storage, StorageExt, TypedStorage};
pub use table::TableRetriever;
pub use value::{CacheValue, ConfigValue, Parser, ValueKind};
