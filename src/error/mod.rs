//! Error types for bytesep.

use std::fmt;

/// Errors that can occur during byte sequence operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteError {
    /// Index arguments violate `from <= to <= len`.
    OutOfRange {
        /// Start of the requested range (inclusive).
        from: usize,
        /// End of the requested range (exclusive).
        to: usize,
        /// Length of the sequence the range was checked against, if known.
        len: Option<usize>,
    },
}

impl fmt::Display for ByteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ByteError::OutOfRange {
                from,
                to,
                len: Some(len),
            } => {
                write!(f, "range {}..{} out of bounds for length {}", from, to, len)
            }
            ByteError::OutOfRange { from, to, len: None } => {
                write!(f, "range start {} is greater than end {}", from, to)
            }
        }
    }
}

impl std::error::Error for ByteError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_len() {
        let err = ByteError::OutOfRange {
            from: 2,
            to: 9,
            len: Some(4),
        };
        assert_eq!(err.to_string(), "range 2..9 out of bounds for length 4");
    }

    #[test]
    fn test_display_inverted() {
        let err = ByteError::OutOfRange {
            from: 5,
            to: 1,
            len: None,
        };
        assert!(err.to_string().contains("greater than end"));
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ByteError::OutOfRange {
            from: 1,
            to: 0,
            len: None,
        });
        assert!(err.source().is_none());
    }
}
