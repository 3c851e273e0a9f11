use thiserror::Error;

use super::ValueKind;
use crate::guard::GuardError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CacheError {
    #[error("Storage class is not set yet.")]
    StorageNotSet,

    #[error("The cache is not configured with both storage and retriever.")]
    NotConfigured,

    #[error("A key for the cached item must be provided.")]
    MissingKey,

    #[error("The type code provided, '{0}', is not supported.")]
    UnsupportedKind(ValueKind),

    #[error("The key provided, '{0}', is not defined in the source dictionary.")]
    KeyNotDefined(String),

    #[error("The type code, '{kind}', and the requested type, '{requested}', do not match.")]
    TypeMismatch {
        kind: ValueKind,
        requested: ValueKind,
    },

    #[error("failed to parse '{key}' as {kind}: {reason}")]
    ParseFailed {
        key: String,
        kind: ValueKind,
        reason: String,
    },

    #[error("The type provided, '{0}', has not yet been initialized or added to this storage.")]
    StoreNotInitialized(ValueKind),

    #[error("A store for type '{0}' has already been added to this storage.")]
    StoreAlreadyAdded(ValueKind),

    #[error("The category provided, '{0}', is not defined.")]
    CategoryNotDefined(String),

    #[error("cannot retrieve non-scalar value: {0}")]
    NonScalarValue(String),

    #[error("failed to parse configuration table: {0}")]
    ParseError(#[source] toml::de::Error),

    #[error("failed to deserialize section '{section}': {source}")]
    DeserializeError {
        section: String,
        source: toml::de::Error,
    },

    #[error(transparent)]
    Guard(#[from] GuardError),
}
