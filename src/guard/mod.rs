//! Guards for method arguments and object state.
//!
//! The domain guards are extension traits: bring them into scope and call
//! them on the value being checked. On success the value comes back so
//! guards can be chained.
//!
//! ```
//! use guard_fnd::guard::{GuardError, NumericGuards, StringGuards};
//!
//! fn open(host: &str, port: u16) -> Result<(), GuardError> {
//!     let host = host.guard_is_set("host")?;
//!     let port = port.guard_in_range("port", 1, 49151)?;
//!     # let _ = (host, port);
//!     Ok(())
//! }
//!
//! assert!(open("localhost", 8080).is_ok());
//! assert!(open(" ", 8080).is_err());
//! ```

mod boolean;
mod collection;
mod compose;
mod engine;
mod error;
mod limit;
mod numeric;
mod object;
mod ordering;
mod string;

pub use boolean::BooleanGuards;
pub use collection::{CollectionGuards, ElementCount};
pub use compose::{ItemTemplateComposer, MessageTemplateComposer};
pub use engine::Guard;
pub use error::GuardError;
pub use limit::{LimitGuard, LimitMessage};
pub use numeric::NumericGuards;
pub use object::{DefaultGuards, ObjectGuards};
pub use ordering::OrderingExt;
pub use string::StringGuards;
