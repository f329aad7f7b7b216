use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by user lookups
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The id was zero or negative, rejected before touching the cache
    #[error("invalid user id")]
    InvalidArgument(i64),

    /// The caller's context fired before the lookup finished
    #[error(transparent)]
    Context(#[from] ContextError),
}

impl Error {
    /// True when the id itself was rejected
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// True for both explicit cancellation and an expired deadline
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Context(_))
    }
}

/// Why a [`crate::Context`] is done
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextError {
    #[error("context canceled")]
    Canceled,

    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Error::InvalidArgument(-1).to_string(), "invalid user id");
        assert_eq!(
            Error::from(ContextError::DeadlineExceeded).to_string(),
            "context deadline exceeded"
        );
        assert_eq!(Error::from(ContextError::Canceled).to_string(), "context canceled");
    }

    #[test]
    fn test_classification() {
        assert!(Error::InvalidArgument(0).is_invalid_argument());
        assert!(!Error::InvalidArgument(0).is_cancelled());
        assert!(Error::Context(ContextError::Canceled).is_cancelled());
    }
}
