//! Ordering guards: minimums, maximums and ranges.

use std::fmt::Display;

use super::error::{GuardError, NO_ERROR_BUILDER};
use super::ordering::OrderingExt;
use crate::message::{LimitMessageTemplate, RangeTemplate};

/// Builds the failure message for a limit check.
///
/// The pattern is picked by [`LimitMessageTemplate::template_for`] from the
/// limits that were set. Building with no limits is a configuration error.
#[derive(Debug, Clone)]
#[must_use = "builders do nothing until .build() is called"]
pub struct LimitMessage<'v, T> {
    value: &'v T,
    item: String,
    min: Option<&'v T>,
    max: Option<&'v T>,
}

impl<'v, T: Display> LimitMessage<'v, T> {
    pub fn new(value: &'v T) -> Self {
        Self {
            value,
            item: String::new(),
            min: None,
            max: None,
        }
    }

    pub fn for_item(mut self, item: impl Into<String>) -> Self {
        self.item = item.into();
        self
    }

    pub fn with_min(mut self, min: &'v T) -> Self {
        self.min = Some(min);
        self
    }

    pub fn with_max(mut self, max: &'v T) -> Self {
        self.max = Some(max);
        self
    }

    pub fn build(&self) -> Result<String, GuardError> {
        let (min_set, max_set) = (self.min.is_some(), self.max.is_some());
        let template = LimitMessageTemplate::template_for(min_set, max_set);
        if !LimitMessageTemplate::is_valid(min_set, max_set) {
            return Err(GuardError::configuration(template));
        }

        let mut message = RangeTemplate::custom(template)
            .using_item(&self.item)
            .using_value(self.value);
        if let Some(min) = self.min {
            message = message.with_minimum(min);
        }
        if let Some(max) = self.max {
            message = message.with_maximum(max);
        }
        Ok(message.prepare())
    }
}

#[derive(Debug, Clone)]
enum Check<T> {
    AtLeast(T),
    AtMost(T),
}

impl<T: PartialOrd> Check<T> {
    fn passes(&self, value: &T) -> bool {
        match self {
            Self::AtLeast(min) => value.greater_than_or_equal(min),
            Self::AtMost(max) => value.less_than_or_equal(max),
        }
    }
}

/// Guard accumulating independent limit checks; all must pass.
///
/// ```
/// use guard_fnd::guard::{GuardError, LimitGuard};
///
/// let err = LimitGuard::new(42)
///     .check_range(0, 10)
///     .for_item("retries")
///     .error_builder(|message| GuardError::out_of_range("retries", message))
///     .guard()
///     .unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "The value of 'retries' (42) is not within the expected range of 0 to 10."
/// );
/// ```
#[must_use = "guards do nothing until .guard() is called"]
pub struct LimitGuard<'a, T, E = GuardError> {
    value: T,
    checks: Vec<Check<T>>,
    item: String,
    error_builder: Option<Box<dyn FnOnce(String) -> E + 'a>>,
}

impl<'a, T, E> LimitGuard<'a, T, E>
where
    T: PartialOrd + Display,
    E: From<GuardError>,
{
    pub fn new(value: T) -> Self {
        Self {
            value,
            checks: Vec::new(),
            item: String::new(),
            error_builder: None,
        }
    }

    pub fn check_minimum(mut self, min: T) -> Self {
        self.checks.push(Check::AtLeast(min));
        self
    }

    pub fn check_maximum(mut self, max: T) -> Self {
        self.checks.push(Check::AtMost(max));
        self
    }

    pub fn check_range(self, min: T, max: T) -> Self {
        self.check_minimum(min).check_maximum(max)
    }

    pub fn for_item(mut self, item: impl Into<String>) -> Self {
        self.item = item.into();
        self
    }

    pub fn error_builder(mut self, builder: impl FnOnce(String) -> E + 'a) -> Self {
        self.error_builder = Some(Box::new(builder));
        self
    }

    pub fn guard(self) -> Result<T, E> {
        let builder = self
            .error_builder
            .ok_or_else(|| GuardError::configuration(NO_ERROR_BUILDER))?;
        if self.checks.is_empty() {
            return Err(GuardError::configuration(LimitMessageTemplate::INVALID).into());
        }

        if self.checks.iter().all(|check| check.passes(&self.value)) {
            return Ok(self.value);
        }

        // The message reports the last minimum and maximum registered.
        let mut message = LimitMessage::new(&self.value).for_item(self.item.as_str());
        for check in &self.checks {
            message = match check {
                Check::AtLeast(min) => message.with_min(min),
                Check::AtMost(max) => message.with_max(max),
            };
        }
        let message = message.build()?;
        Err(builder(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn out_of_range(message: String) -> GuardError {
        GuardError::out_of_range("value", message)
    }

    #[test]
    fn test_min_message() {
        let message = LimitMessage::new(&1).for_item("size").with_min(&10).build();
        assert_eq!(
            message.unwrap(),
            "The value of 'size' (1) is below the minimum limit of 10."
        );
    }

    #[test]
    fn test_max_message() {
        let message = LimitMessage::new(&20).for_item("size").with_max(&10).build();
        assert_eq!(
            message.unwrap(),
            "The value of 'size' (20) is above the maximum limit of 10."
        );
    }

    #[test]
    fn test_range_message() {
        let message = LimitMessage::new(&2.5)
            .for_item("ratio")
            .with_min(&3.0)
            .with_max(&4.0)
            .build();
        assert_eq!(
            message.unwrap(),
            "The value of 'ratio' (2.5) is not within the expected range of 3 to 4."
        );
    }

    #[test]
    fn test_no_limits_message_is_configuration_error() {
        let err = LimitMessage::new(&5).build().unwrap_err();
        assert_eq!(
            err,
            GuardError::configuration("Invalid limit test: no limits set.")
        );
    }

    #[test]
    fn test_guard_passes_on_boundaries() {
        assert_eq!(
            LimitGuard::new(1)
                .check_range(1, 5)
                .error_builder(out_of_range)
                .guard(),
            Ok(1)
        );
        assert_eq!(
            LimitGuard::new(5)
                .check_range(1, 5)
                .error_builder(out_of_range)
                .guard(),
            Ok(5)
        );
    }

    #[test]
    fn test_guard_fails_below_minimum() {
        let err = LimitGuard::new(0)
            .check_minimum(1)
            .for_item("workers")
            .error_builder(out_of_range)
            .guard()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "The value of 'workers' (0) is below the minimum limit of 1."
        );
    }

    #[test]
    fn test_guard_without_checks_is_configuration_error() {
        let err = LimitGuard::new(0)
            .error_builder(out_of_range)
            .guard()
            .unwrap_err();
        assert!(err.is_configuration_error());
    }

    #[test]
    fn test_nan_fails_every_bound() {
        let result = LimitGuard::new(f64::NAN)
            .check_minimum(0.0)
            .error_builder(out_of_range)
            .guard();
        assert!(result.is_err());
    }
}
