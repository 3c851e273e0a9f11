//! Argument guards and a typed configuration cache.
//!
//! - [`guard`] validates values through fluent, single-use guards and the
//!   domain guard extension traits.
//! - [`message`] holds the message templates guard failures are built from.
//! - [`config`] caches configuration values fetched by pluggable retrievers.

pub mod config;
pub mod guard;
pub mod message;
mod error;

pub use config::{Cache, CacheError};
pub use error::Error;
pub use guard::{Guard, GuardError};
