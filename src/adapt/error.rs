//! Error types for argument-shape adapters.
//!
//! This module provides the error type shared by the adapters that can
//! fail at invocation time: keyed dispatch ([`call`](crate::adapt::call))
//! and sequence-based argument transformation
//! ([`over_args`](crate::adapt::over_args)).

/// Represents errors raised by argument-shape adapters.
///
/// Most adapters in this crate cannot fail by construction; the two that
/// can are keyed dispatch (the key may be absent from the table) and
/// sequence-based argument transformation (fewer transforms than
/// call-time arguments may be supplied).
///
/// # Examples
///
/// ```rust
/// use fnadapt::adapt::AdaptError;
///
/// let error = AdaptError::MissingMethod {
///     key: "greet".to_string(),
/// };
/// assert_eq!(
///     format!("{}", error),
///     "dispatch: no method registered for key `greet`"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdaptError {
    /// The method table has no entry for the requested key.
    MissingMethod {
        /// The rendered form of the key that failed to resolve.
        key: String,
    },
    /// Fewer transforms than call-time arguments were supplied.
    MissingTransform {
        /// The number of transforms supplied at construction.
        supplied: usize,
        /// The number of arguments received at invocation.
        required: usize,
    },
}

impl std::fmt::Display for AdaptError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMethod { key } => {
                write!(formatter, "dispatch: no method registered for key `{key}`")
            }
            Self::MissingTransform { supplied, required } => {
                write!(
                    formatter,
                    "over_args: {required} arguments supplied but only {supplied} transforms registered"
                )
            }
        }
    }
}

impl std::error::Error for AdaptError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_method_display() {
        let error = AdaptError::MissingMethod {
            key: "greet".to_string(),
        };
        assert_eq!(
            format!("{error}"),
            "dispatch: no method registered for key `greet`"
        );
    }

    #[test]
    fn test_missing_transform_display() {
        let error = AdaptError::MissingTransform {
            supplied: 2,
            required: 3,
        };
        assert_eq!(
            format!("{error}"),
            "over_args: 3 arguments supplied but only 2 transforms registered"
        );
    }

    #[test]
    fn test_adapt_error_equality() {
        let error1 = AdaptError::MissingMethod {
            key: "greet".to_string(),
        };
        let error2 = AdaptError::MissingMethod {
            key: "greet".to_string(),
        };
        let error3 = AdaptError::MissingMethod {
            key: "farewell".to_string(),
        };
        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_adapt_error_is_error() {
        use std::error::Error;

        let error = AdaptError::MissingTransform {
            supplied: 0,
            required: 1,
        };
        let _: &dyn Error = &error;
        assert!(error.source().is_none());
    }
}
