//! Builder for generic template (carousel) messages.

use super::TemplateBuilder;
use super::error::{BuilderError, BuilderResult};
use super::validate::{is_web_url, max_chars, required, web_url};
use crate::types::{Attachment, Bubble, Button, Message, Template};
use serde_json::Value;

/// Maximum number of bubbles in one generic template.
pub const MAX_BUBBLES: usize = 10;
/// Maximum number of buttons on one bubble.
pub const MAX_BUTTONS: usize = 3;
/// Maximum length of a bubble title, in characters.
pub const MAX_TITLE_CHARS: usize = 80;
/// Maximum length of a bubble subtitle, in characters.
pub const MAX_SUBTITLE_CHARS: usize = 80;

/// Builder for a generic template message.
///
/// Bubbles are added in display order. [`add_url`](Self::add_url),
/// [`add_image`](Self::add_image) and [`add_button`](Self::add_button) always
/// configure the bubble added last. Every method validates its input right
/// away; a call that fails leaves the builder untouched.
///
/// # Example
///
/// ```rust
/// use fb_generic_template::builders::*;
///
/// # fn main() -> BuilderResult<()> {
/// let mut carousel = GenericTemplateBuilder::new();
/// carousel
///     .add_bubble("Rust mug", Some("Ceramic, 350ml"))?
///     .add_image("https://shop.example.com/mug.png")?
///     .add_button("Buy", "BUY_MUG")?
///     .add_button("Details", "https://shop.example.com/mug")?;
///
/// let message = carousel.get()?;
/// assert_eq!(serde_json::to_value(&message).unwrap()["attachment"]["type"], "template");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GenericTemplateBuilder {
    finished: Vec<Bubble>,
    current: Option<Bubble>,
}

impl GenericTemplateBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new bubble. Later per-bubble calls target this one.
    ///
    /// An empty subtitle is treated as no subtitle.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::LimitExceeded`] if [`MAX_BUBBLES`] bubbles already exist.
    /// - [`BuilderError::MissingRequiredField`] if `title` is empty.
    /// - [`BuilderError::TooLong`] if `title` or `subtitle` exceed 80 characters.
    pub fn add_bubble(
        &mut self,
        title: &str,
        subtitle: Option<&str>,
    ) -> BuilderResult<&mut Self> {
        if self.len() >= MAX_BUBBLES {
            return Err(BuilderError::LimitExceeded {
                field: "bubbles",
                max: MAX_BUBBLES,
            });
        }
        let title = required("title", title)?;
        max_chars("title", title, MAX_TITLE_CHARS)?;
        let subtitle = subtitle.filter(|s| !s.is_empty());
        if let Some(subtitle) = subtitle {
            max_chars("subtitle", subtitle, MAX_SUBTITLE_CHARS)?;
        }

        let bubble = Bubble::new(title.to_string(), subtitle.map(str::to_string));
        if let Some(previous) = self.current.replace(bubble) {
            self.finished.push(previous);
        }
        tracing::debug!(bubbles = self.len(), title, "added bubble");
        Ok(self)
    }

    /// Set the URL opened when the current bubble is tapped.
    ///
    /// The string is stored exactly as given.
    pub fn add_url(&mut self, url: &str) -> BuilderResult<&mut Self> {
        let url = web_url("url", url)?;
        self.current_bubble("add a url")?.item_url = Some(url.to_string());
        Ok(self)
    }

    /// Set the image shown on the current bubble.
    pub fn add_image(&mut self, url: &str) -> BuilderResult<&mut Self> {
        let url = web_url("image_url", url)?;
        self.current_bubble("add an image")?.image_url = Some(url.to_string());
        Ok(self)
    }

    /// Append a button to the current bubble.
    ///
    /// A `value` that is a well-formed web URL makes a `web_url` button. Any
    /// other value makes a `postback` button carrying the value unchanged, so
    /// `1` stays a number and `"1"` stays a string.
    ///
    /// # Errors
    ///
    /// - [`BuilderError::MissingRequiredField`] if `title` is empty, or `value`
    ///   is `null` or an empty string.
    /// - [`BuilderError::NoCurrentBubble`] if no bubble was added yet.
    /// - [`BuilderError::LimitExceeded`] if the bubble already has
    ///   [`MAX_BUTTONS`] buttons.
    pub fn add_button(
        &mut self,
        title: &str,
        value: impl Into<Value>,
    ) -> BuilderResult<&mut Self> {
        let title = required("button_title", title)?.to_string();
        let button = match value.into() {
            Value::Null => return Err(BuilderError::MissingRequiredField("button_value")),
            Value::String(s) if s.is_empty() => {
                return Err(BuilderError::MissingRequiredField("button_value"));
            }
            Value::String(url) if is_web_url(&url) => Button::WebUrl { title, url },
            payload => Button::Postback { title, payload },
        };

        let bubble = self.current_bubble("add a button")?;
        if bubble.buttons.len() >= MAX_BUTTONS {
            return Err(BuilderError::LimitExceeded {
                field: "buttons",
                max: MAX_BUTTONS,
            });
        }
        bubble.buttons.push(button);
        tracing::debug!(buttons = bubble.buttons.len(), "added button");
        Ok(self)
    }

    /// Bubbles in display order.
    pub fn bubbles(&self) -> impl Iterator<Item = &Bubble> {
        self.finished.iter().chain(self.current.as_ref())
    }

    /// Number of bubbles added so far.
    pub fn len(&self) -> usize {
        self.finished.len() + usize::from(self.current.is_some())
    }

    /// Returns `true` if no bubble was added yet.
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }

    /// Produce the message payload.
    ///
    /// Does not consume or change the builder; calling it twice without
    /// changes in between gives equal results.
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::NoBubbles`] if no bubble was added.
    pub fn get(&self) -> BuilderResult<Message> {
        if self.is_empty() {
            return Err(BuilderError::NoBubbles);
        }
        let elements: Vec<Bubble> = self.bubbles().cloned().collect();
        tracing::debug!(elements = elements.len(), "built generic template");
        Ok(Message {
            attachment: Attachment::Template(Template::Generic { elements }),
        })
    }

    fn current_bubble(&mut self, operation: &'static str) -> BuilderResult<&mut Bubble> {
        self.current
            .as_mut()
            .ok_or(BuilderError::NoCurrentBubble { operation })
    }
}

impl TemplateBuilder for GenericTemplateBuilder {
    fn get(&self) -> BuilderResult<Message> {
        GenericTemplateBuilder::get(self)
    }
}
