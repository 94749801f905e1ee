//! Validated payloads for Messenger generic template messages.
//!
//! A generic template is a carousel of up to ten cards ("bubbles"), each with
//! a title, optional subtitle, link, image and up to three buttons. The
//! [`GenericTemplateBuilder`] checks every platform limit as the message is
//! put together, so mistakes show up at the call that made them rather than as
//! a rejected API request.
//!
//! ```rust
//! use fb_generic_template::GenericTemplateBuilder;
//! use serde_json::json;
//!
//! let mut builder = GenericTemplateBuilder::new();
//! builder.add_bubble("Title", None).unwrap();
//!
//! assert_eq!(
//!     serde_json::to_value(builder.get().unwrap()).unwrap(),
//!     json!({
//!         "attachment": {
//!             "type": "template",
//!             "payload": { "template_type": "generic", "elements": [{ "title": "Title" }] }
//!         }
//!     })
//! );
//! ```
//!
//! Sending the message is left to the caller's HTTP client.

pub mod builders;
pub mod types;

pub use builders::{
    BuilderError, BuilderResult, ErrorKind, GenericTemplateBuilder, TemplateBuilder,
};
pub use types::{Attachment, Bubble, Button, Message, Template};
