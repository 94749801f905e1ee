//! Wire-format structures of a Messenger attachment message.
//!
//! These types serialize to exactly the JSON the Send API expects in its
//! `message` field. They are produced by the builders in [`crate::builders`]
//! and handed to whatever transport sends them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A complete outgoing message carrying one attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The attachment carried by the message.
    pub attachment: Attachment,
}

/// Attachment kinds, serialized as `{"type": ..., "payload": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum Attachment {
    /// A structured template.
    Template(Template),
}

/// Template kinds, tagged by `template_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "template_type", rename_all = "snake_case")]
pub enum Template {
    /// A horizontally scrollable carousel of bubbles.
    Generic {
        /// Bubbles in display order.
        elements: Vec<Bubble>,
    },
}

/// One card of a generic template.
///
/// Optional fields are left out of the JSON entirely when not set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bubble {
    /// Card title, 1 to 80 characters.
    pub title: String,
    /// Card subtitle, up to 80 characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// URL opened when the card is tapped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_url: Option<String>,
    /// URL of the image shown on the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Up to three action buttons.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<Button>,
}

impl Bubble {
    pub(crate) fn new(title: String, subtitle: Option<String>) -> Self {
        Self {
            title,
            subtitle,
            item_url: None,
            image_url: None,
            buttons: Vec::new(),
        }
    }
}

/// A tappable action on a bubble, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Button {
    /// Opens `url` in the in-app browser.
    WebUrl {
        /// Button label.
        title: String,
        /// Absolute web URL to open.
        url: String,
    },
    /// Sends `payload` back to the bot.
    Postback {
        /// Button label.
        title: String,
        /// Opaque value, kept with its original JSON type.
        payload: Value,
    },
}

impl Button {
    /// The button label.
    pub fn title(&self) -> &str {
        match self {
            Button::WebUrl { title, .. } | Button::Postback { title, .. } => title,
        }
    }
}
