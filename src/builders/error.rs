//! Error types for the builder API.

use std::error::Error;
use std::fmt;

/// Errors that can occur while building a template.
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderError {
    /// A required field is missing or empty.
    MissingRequiredField(&'static str),
    /// A text field is longer than the platform allows.
    TooLong {
        /// The name of the field that was too long.
        field: &'static str,
        /// The maximum number of characters allowed.
        max: usize,
        /// The number of characters provided.
        actual: usize,
    },
    /// A URL field is not a well-formed absolute web URL.
    MalformedUrl {
        /// The name of the field holding the URL.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
    /// Adding one more entry would exceed the platform limit.
    LimitExceeded {
        /// The collection that is full (`bubbles` or `buttons`).
        field: &'static str,
        /// The maximum number of entries allowed.
        max: usize,
    },
    /// The template was serialized before any bubble was added.
    NoBubbles,
    /// A per-bubble operation was called before any bubble was added.
    NoCurrentBubble {
        /// The operation that needed a bubble to target.
        operation: &'static str,
    },
}

/// Broad classification of a [`BuilderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing, empty, too long or malformed argument.
    InvalidArgument,
    /// Too many bubbles or buttons.
    LimitExceeded,
    /// The builder is not in a state where the operation makes sense.
    InvalidState,
}

impl BuilderError {
    /// Returns which class of rule was violated.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BuilderError::MissingRequiredField(_)
            | BuilderError::TooLong { .. }
            | BuilderError::MalformedUrl { .. } => ErrorKind::InvalidArgument,
            BuilderError::LimitExceeded { .. } => ErrorKind::LimitExceeded,
            BuilderError::NoBubbles | BuilderError::NoCurrentBubble { .. } => {
                ErrorKind::InvalidState
            }
        }
    }
}

impl fmt::Display for BuilderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuilderError::MissingRequiredField(field) => {
                write!(f, "Required field '{}' is missing", field)
            }
            BuilderError::TooLong { field, max, actual } => write!(
                f,
                "Field '{}' cannot be longer than {} characters, got {}",
                field, max, actual
            ),
            BuilderError::MalformedUrl { field, value } => {
                write!(f, "Field '{}' needs a valid URL, got '{}'", field, value)
            }
            BuilderError::LimitExceeded { field, max } => {
                write!(f, "Too many {}: {} is the maximum", field, max)
            }
            BuilderError::NoBubbles => write!(f, "Add at least one bubble first"),
            BuilderError::NoCurrentBubble { operation } => {
                write!(f, "Cannot {} before a bubble is added", operation)
            }
        }
    }
}

impl Error for BuilderError {}

/// Result type for builder operations.
pub type BuilderResult<T> = Result<T, BuilderError>;
