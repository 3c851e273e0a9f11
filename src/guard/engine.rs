use tracing::debug;

use super::error::{GuardError, NO_ERROR_BUILDER, NO_TEST};

type Test<'a, T> = Box<dyn FnOnce(&T) -> bool + 'a>;
type ErrorBuilder<'a, T, E> = Box<dyn FnOnce(&T) -> E + 'a>;

/// Single-use validation of one value.
///
/// A guard is configured with a test and an error builder, then evaluated
/// once. On success the original value is handed back unchanged; on failure
/// the builder's error is returned.
///
/// The error type defaults to [`GuardError`]. Any other type works as long as
/// it can absorb the "not configured" errors raised when the guard is
/// evaluated before both pieces were bound.
///
/// ```
/// use guard_fnd::guard::{Guard, GuardError};
///
/// let port = Guard::new(8080u16)
///     .test(|port| *port >= 1024)
///     .error_builder(|_| GuardError::out_of_range("port", "privileged port"))
///     .validate_and_return()?;
/// assert_eq!(port, 8080);
/// # Ok::<(), GuardError>(())
/// ```
#[must_use = "guards do nothing until .validate_and_return() is called"]
pub struct Guard<'a, T, E = GuardError> {
    value: T,
    test: Option<Test<'a, T>>,
    error_builder: Option<ErrorBuilder<'a, T, E>>,
}

impl<'a, T, E> Guard<'a, T, E>
where
    E: From<GuardError>,
{
    pub fn new(value: T) -> Self {
        Self {
            value,
            test: None,
            error_builder: None,
        }
    }

    /// Binds the test the value must pass.
    pub fn test(mut self, test: impl FnOnce(&T) -> bool + 'a) -> Self {
        self.test = Some(Box::new(test));
        self
    }

    /// Binds the builder for the error returned when the test fails.
    pub fn error_builder(mut self, builder: impl FnOnce(&T) -> E + 'a) -> Self {
        self.error_builder = Some(Box::new(builder));
        self
    }

    /// Evaluates the test and returns the value if it passed.
    pub fn validate_and_return(self) -> Result<T, E> {
        let test = self
            .test
            .ok_or_else(|| GuardError::configuration(NO_TEST))?;
        let error_builder = self
            .error_builder
            .ok_or_else(|| GuardError::configuration(NO_ERROR_BUILDER))?;

        if test(&self.value) {
            return Ok(self.value);
        }

        debug!(
            value_type = std::any::type_name::<T>(),
            "guard check failed"
        );
        Err(error_builder(&self.value))
    }

    /// Evaluates the guard, discarding the value.
    pub fn perform(self) -> Result<(), E> {
        self.validate_and_return().map(|_| ())
    }
}

impl<T: std::fmt::Debug, E> std::fmt::Debug for Guard<'_, T, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard")
            .field("value", &self.value)
            .field("has_test", &self.test.is_some())
            .field("has_error_builder", &self.error_builder.is_some())
            .finish()
    }
}
