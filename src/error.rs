use crate::config::CacheError;
use crate::guard::GuardError;
use thiserror::Error;

/// Top-level error type for the guard-fnd library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("guard error: {0}")]
    Guard(#[from] GuardError),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_port(port: u16) -> Result<u16, Error> {
        use crate::guard::NumericGuards;
        Ok(port.guard_minimum("port", 1024)?)
    }

    #[test]
    fn test_guard_error_converts() {
        let err = checked_port(80).unwrap_err();
        assert!(matches!(err, Error::Guard(GuardError::OutOfRange { .. })));
        assert_eq!(
            err.to_string(),
            "guard error: The value of 'port' (80) is below the minimum limit of 1024."
        );
    }

    #[test]
    fn test_cache_error_converts() {
        let err = Error::from(CacheError::MissingKey);
        assert_eq!(
            err.to_string(),
            "cache error: A key for the cached item must be provided."
        );
    }
}
