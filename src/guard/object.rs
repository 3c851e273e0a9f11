//! Presence and default-value guards.
//!
//! A missing value is modelled as `Option::None`; the presence guards unwrap
//! the option so the caller continues with the inner value.

use super::engine::Guard;
use super::error::GuardError;
use crate::message::{ItemTemplate, ItemValueTemplate};

pub trait ObjectGuards<T> {
    /// Requires a value to be present.
    fn guard_is_not_null(self, item: &str) -> Result<T, GuardError>;

    fn guard_is_not_null_with_message(
        self,
        item: &str,
        message: impl FnOnce() -> String,
    ) -> Result<T, GuardError>;

    /// Requires a value to be present for `operation` to proceed.
    fn guard_is_required_for_operation(self, item: &str, operation: &str)
        -> Result<T, GuardError>;
}

impl<T> ObjectGuards<T> for Option<T> {
    fn guard_is_not_null(self, item: &str) -> Result<T, GuardError> {
        self.guard_is_not_null_with_message(item, || {
            ItemTemplate::IS_NULL.using_item(item).prepare()
        })
    }

    fn guard_is_not_null_with_message(
        self,
        item: &str,
        message: impl FnOnce() -> String,
    ) -> Result<T, GuardError> {
        self.ok_or_else(|| GuardError::missing_value(item, message()))
    }

    fn guard_is_required_for_operation(
        self,
        item: &str,
        operation: &str,
    ) -> Result<T, GuardError> {
        self.ok_or_else(|| {
            GuardError::invalid_operation(
                ItemValueTemplate::MISSING_FOR_OPERATION
                    .using_item(item)
                    .using_value(operation)
                    .prepare(),
            )
        })
    }
}

pub trait DefaultGuards: Default + PartialEq + Sized {
    /// Requires the value to differ from its type's default.
    ///
    /// For `Option<T>` the default is `None`, which makes this a presence
    /// check that keeps the option intact.
    fn guard_is_not_default(self, item: &str) -> Result<Self, GuardError> {
        Guard::new(self)
            .test(|value| *value != Self::default())
            .error_builder(|_| {
                GuardError::invalid_argument(
                    item,
                    ItemValueTemplate::DEFAULT_NOT_ALLOWED
                        .using_item(item)
                        .using_value(short_type_name::<Self>())
                        .prepare(),
                )
            })
            .validate_and_return()
    }
}

impl<T: Default + PartialEq> DefaultGuards for T {}

/// Type name with module paths stripped, e.g. `Option<String>`.
fn short_type_name<T: ?Sized>() -> String {
    let full = std::any::type_name::<T>();
    let mut name = String::with_capacity(full.len());
    let mut segment = String::new();
    let mut chars = full.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                segment.clear();
            }
            c if c.is_alphanumeric() || c == '_' => segment.push(c),
            c => {
                name.push_str(&segment);
                segment.clear();
                name.push(c);
            }
        }
    }

    name.push_str(&segment);
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_not_null_returns_inner() {
        assert_eq!(Some(5).guard_is_not_null("count"), Ok(5));
    }

    #[test]
    fn test_not_null_rejects_none() {
        let err = None::<String>.guard_is_not_null("owner").unwrap_err();
        assert_eq!(
            err,
            GuardError::missing_value("owner", "The value of 'owner' is required but is null.")
        );
    }

    #[test]
    fn test_not_null_with_message() {
        let err = None::<u8>
            .guard_is_not_null_with_message("owner", || "no owner".into())
            .unwrap_err();
        assert_eq!(err.to_string(), "no owner");
    }

    #[test]
    fn test_required_for_operation() {
        assert_eq!(Some("db").guard_is_required_for_operation("pool", "connect"), Ok("db"));

        let err = None::<&str>
            .guard_is_required_for_operation("pool", "connect")
            .unwrap_err();
        assert_eq!(
            err,
            GuardError::invalid_operation(
                "The operation, 'connect', requires a value for 'pool' which is null."
            )
        );
    }

    #[test]
    fn test_not_default_value_type() {
        assert_eq!(7i32.guard_is_not_default("param"), Ok(7));

        let err = 0i32.guard_is_not_default("param").unwrap_err();
        assert_eq!(
            err.to_string(),
            "The value of 'param' cannot be the default value for its type (i32)."
        );
    }

    #[test]
    fn test_not_default_option() {
        assert_eq!(Some(0).guard_is_not_default("param"), Ok(Some(0)));

        let err = None::<String>.guard_is_not_default("param").unwrap_err();
        assert_eq!(
            err.to_string(),
            "The value of 'param' cannot be the default value for its type (Option<String>)."
        );
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<u64>(), "u64");
        assert_eq!(
            short_type_name::<std::collections::HashMap<String, Vec<i32>>>(),
            "HashMap<String, Vec<i32>>"
        );
    }
}
