use thiserror::Error;

pub(crate) const NO_TEST: &str = "Guard is not configured properly. No test has been defined.";
pub(crate) const NO_ERROR_BUILDER: &str =
    "Guard is not configured properly. No exception builder has been defined.";
pub(crate) const NO_TEMPLATE: &str =
    "Guard is not configured properly. No message template has been defined.";

/// Errors raised by guards.
///
/// `Configuration` signals a misconfigured guard and is a programmer error.
/// Every other variant is a validation failure whose `Display` is the
/// template-built message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GuardError {
    #[error("{0}")]
    Configuration(String),

    #[error("{message}")]
    InvalidArgument { argument: String, message: String },

    #[error("{message}")]
    OutOfRange { argument: String, message: String },

    #[error("{message}")]
    MissingValue { argument: String, message: String },

    #[error("{0}")]
    InvalidOperation(String),
}

impl GuardError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }

    pub fn out_of_range(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            argument: argument.into(),
            message: message.into(),
        }
    }

    pub fn missing_value(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MissingValue {
            argument: argument.into(),
            message: message.into(),
        }
    }

    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation(message.into())
    }

    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Name of the argument that failed, when the failure is tied to one.
    pub fn argument(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { argument, .. }
            | Self::OutOfRange { argument, .. }
            | Self::MissingValue { argument, .. } => Some(argument),
            Self::Configuration(_) | Self::InvalidOperation(_) => None,
        }
    }
}
