//! Message templates used to build guard failure messages.
//!
//! Templates are immutable catalog constants. Each use takes a copy, binds
//! values through the fluent setters and calls `prepare()`:
//!
//! ```
//! use guard_fnd::message::RangeTemplate;
//!
//! let message = RangeTemplate::OUT_OF_RANGE
//!     .using_item("port")
//!     .using_value(0)
//!     .with_minimum(1)
//!     .with_maximum(65535)
//!     .prepare();
//! assert!(message.contains("'port'"));
//! ```

mod limit;
mod substitute;
mod templates;

pub use limit::LimitMessageTemplate;
pub use substitute::substitute;
pub use templates::{
    ItemTemplate, ItemValueTemplate, RangeTemplate, SingleValueComparisonTemplate,
    StringLengthRangeTemplate, StringSizeTemplate,
};

/// Static messages that take no substitution.
pub mod static_messages {
    pub const BAD_REQUIRED_LENGTH: &str =
        "Guard configured incorrectly. The required length of a string must be greater than zero.";
}
