//! Builder pattern API for creating Messenger template messages.
//!
//! Builders validate every call against the platform limits, so a finished
//! [`Message`] is accepted by the Send API without structural errors.

/// Error types for the builder API.
pub mod error;
/// Builder for generic template (carousel) messages.
pub mod generic;
/// Validation predicates shared between builders.
pub mod validate;


use crate::types::Message;

// Re-export builders at module level
pub use error::{BuilderError, BuilderResult, ErrorKind};
pub use generic::*;

/// Common capability of every template builder: producing the message.
///
/// Each template kind has its own builder with its own entry points; they
/// all end in `get`.
pub trait TemplateBuilder {
    /// Serialize the accumulated state into a message.
    fn get(&self) -> BuilderResult<Message>;
}
