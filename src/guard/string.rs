//! String guards. Each returns the tested string for further chaining.
//!
//! Lengths are counted in characters, not bytes.

use super::compose::ItemTemplateComposer;
use super::engine::Guard;
use super::error::GuardError;
use super::numeric::NumericGuards;
use crate::message::static_messages::BAD_REQUIRED_LENGTH;
use crate::message::{ItemTemplate, StringLengthRangeTemplate, StringSizeTemplate};

fn is_set(text: &str) -> bool {
    !text.trim().is_empty()
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

pub trait StringGuards: AsRef<str> + Sized {
    /// Requires the string to be non-empty and not only whitespace.
    fn guard_is_set(self, item: &str) -> Result<Self, GuardError> {
        ItemTemplateComposer::new(self)
            .test(|text| is_set(text.as_ref()))
            .error_builder(|item, message| GuardError::invalid_argument(item, message))
            .name_template(ItemTemplate::NOT_SET)
            .for_item(item)
            .guard()
    }

    fn guard_is_set_with_message(
        self,
        item: &str,
        message: impl FnOnce() -> String,
    ) -> Result<Self, GuardError> {
        Guard::new(self)
            .test(|text| is_set(text.as_ref()))
            .error_builder(|_| GuardError::invalid_argument(item, message()))
            .validate_and_return()
    }

    /// Requires the string to be exactly `required_length` characters.
    ///
    /// A required length of zero is a configuration error.
    fn guard_required_length(self, item: &str, required_length: usize) -> Result<Self, GuardError> {
        self.guard_required_length_with_message(item, required_length, |text| {
            StringSizeTemplate::NOT_REQUIRED_SIZE
                .using_item(item)
                .using_value(text)
                .requiring_length(required_length)
                .prepare()
        })
    }

    fn guard_required_length_with_message(
        self,
        item: &str,
        required_length: usize,
        message: impl FnOnce(&str) -> String,
    ) -> Result<Self, GuardError> {
        required_length
            .guard_minimum_with_message("required_length", 1, || BAD_REQUIRED_LENGTH.to_owned())
            .map_err(|err| GuardError::configuration(err.to_string()))?;

        Guard::new(self)
            .test(|text| char_len(text.as_ref()) == required_length)
            .error_builder(|text| GuardError::out_of_range(item, message(text.as_ref())))
            .validate_and_return()
    }

    /// Requires the string to be set and between `min` and `max` characters.
    fn guard_size(self, item: &str, min: usize, max: usize) -> Result<Self, GuardError> {
        self.guard_is_set(item)?
            .guard_size_with_message(item, min, max, |text| {
                StringLengthRangeTemplate::TEXT_SIZE_OUT_OF_RANGE
                    .using_item(item)
                    .using_value(text)
                    .with_minimum(min)
                    .with_maximum(max)
                    .prepare()
            })
    }

    fn guard_size_with_message(
        self,
        item: &str,
        min: usize,
        max: usize,
        message: impl FnOnce(&str) -> String,
    ) -> Result<Self, GuardError> {
        Guard::new(self)
            .test(|text| (min..=max).contains(&char_len(text.as_ref())))
            .error_builder(|text| GuardError::invalid_argument(item, message(text.as_ref())))
            .validate_and_return()
    }
}

impl<T: AsRef<str>> StringGuards for T {}
