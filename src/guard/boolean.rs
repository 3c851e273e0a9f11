//! Boolean guards.
//!
//! Unlike the other guards these return nothing: a flag has only two
//! mutually exclusive states, so there is nothing left to chain.

use super::compose::MessageTemplateComposer;
use super::engine::Guard;
use super::error::GuardError;
use crate::message::ItemTemplate;

pub trait BooleanGuards {
    /// Requires the flag to be `true`.
    fn guard_is_true(self, item: &str) -> Result<(), GuardError>;

    /// Requires the flag to be `false`.
    fn guard_is_false(self, item: &str) -> Result<(), GuardError>;

    fn guard_is_true_with_message(
        self,
        message: impl FnOnce() -> String,
    ) -> Result<(), GuardError>;

    fn guard_is_false_with_message(
        self,
        message: impl FnOnce() -> String,
    ) -> Result<(), GuardError>;
}

impl BooleanGuards for bool {
    fn guard_is_true(self, item: &str) -> Result<(), GuardError> {
        MessageTemplateComposer::new(self)
            .test(|flag| *flag)
            .error_builder(GuardError::invalid_operation)
            .name_template(ItemTemplate::NOT_TRUE)
            .for_item(item)
            .guard()
            .map(|_| ())
    }

    fn guard_is_false(self, item: &str) -> Result<(), GuardError> {
        MessageTemplateComposer::new(self)
            .test(|flag| !*flag)
            .error_builder(GuardError::invalid_operation)
            .name_template(ItemTemplate::NOT_FALSE)
            .for_item(item)
            .guard()
            .map(|_| ())
    }

    fn guard_is_true_with_message(
        self,
        message: impl FnOnce() -> String,
    ) -> Result<(), GuardError> {
        Guard::new(self)
            .test(|flag| *flag)
            .error_builder(|_| GuardError::invalid_operation(message()))
            .perform()
    }

    fn guard_is_false_with_message(
        self,
        message: impl FnOnce() -> String,
    ) -> Result<(), GuardError> {
        Guard::new(self)
            .test(|flag| !*flag)
            .error_builder(|_| GuardError::invalid_operation(message()))
            .perform()
    }
}
