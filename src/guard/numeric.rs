//! Guards over any ordered value.
//!
//! Only `PartialOrd` is required, so the same guards serve integers, floats
//! and any user type with an ordering. Bounds are inclusive.

use std::fmt::Display;

use super::engine::Guard;
use super::error::GuardError;
use super::limit::LimitGuard;
use super::ordering::OrderingExt;

pub trait NumericGuards: PartialOrd + Display + Sized {
    /// Requires `self >= min`.
    fn guard_minimum(self, item: &str, min: Self) -> Result<Self, GuardError> {
        LimitGuard::new(self)
            .check_minimum(min)
            .for_item(item)
            .error_builder(|message| GuardError::out_of_range(item, message))
            .guard()
    }

    /// Requires `self <= max`.
    fn guard_maximum(self, item: &str, max: Self) -> Result<Self, GuardError> {
        LimitGuard::new(self)
            .check_maximum(max)
            .for_item(item)
            .error_builder(|message| GuardError::out_of_range(item, message))
            .guard()
    }

    /// Requires `min <= self <= max`.
    fn guard_in_range(self, item: &str, min: Self, max: Self) -> Result<Self, GuardError> {
        LimitGuard::new(self)
            .check_range(min, max)
            .for_item(item)
            .error_builder(|message| GuardError::out_of_range(item, message))
            .guard()
    }

    fn guard_minimum_with_message(
        self,
        item: &str,
        min: Self,
        message: impl FnOnce() -> String,
    ) -> Result<Self, GuardError> {
        Guard::new(self)
            .test(|value| value.greater_than_or_equal(&min))
            .error_builder(|_| GuardError::out_of_range(item, message()))
            .validate_and_return()
    }

    fn guard_maximum_with_message(
        self,
        item: &str,
        max: Self,
        message: impl FnOnce() -> String,
    ) -> Result<Self, GuardError> {
        Guard::new(self)
            .test(|value| value.less_than_or_equal(&max))
            .error_builder(|_| GuardError::out_of_range(item, message()))
            .validate_and_return()
    }

    fn guard_in_range_with_message(
        self,
        item: &str,
        min: Self,
        max: Self,
        message: impl FnOnce() -> String,
    ) -> Result<Self, GuardError> {
        Guard::new(self)
            .test(|value| value.greater_than_or_equal(&min) && value.less_than_or_equal(&max))
            .error_builder(|_| GuardError::out_of_range(item, message()))
            .validate_and_return()
    }
}

impl<T: PartialOrd + Display> NumericGuards for T {}
