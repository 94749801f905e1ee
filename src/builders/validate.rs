//! Small predicates shared by bubble and button validation.

use super::error::{BuilderError, BuilderResult};
use url::Url;

/// Returns `true` if `value` is an absolute `http`/`https` URL with a host.
///
/// The scheme must be followed by `://`, and the value must be usable as is:
/// no surrounding whitespace and no tabs or line breaks, which the parser
/// would otherwise silently strip.
pub fn is_web_url(value: &str) -> bool {
    if value.trim() != value || value.contains(['\t', '\r', '\n']) {
        return false;
    }
    match Url::parse(value) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && value[url.scheme().len()..].starts_with("://")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// Require a non-empty text value.
pub fn required<'a>(field: &'static str, value: &'a str) -> BuilderResult<&'a str> {
    if value.is_empty() {
        tracing::trace!(field, "rejected empty value");
        return Err(BuilderError::MissingRequiredField(field));
    }
    Ok(value)
}

/// Require `value` to be at most `max` characters long.
pub fn max_chars(field: &'static str, value: &str, max: usize) -> BuilderResult<()> {
    let actual = value.chars().count();
    if actual > max {
        tracing::trace!(field, actual, max, "rejected value that is too long");
        return Err(BuilderError::TooLong { field, max, actual });
    }
    Ok(())
}

/// Require a present, well-formed web URL.
pub fn web_url<'a>(field: &'static str, value: &'a str) -> BuilderResult<&'a str> {
    let value = required(field, value)?;
    if !is_web_url(value) {
        tracing::trace!(field, value, "rejected malformed url");
        return Err(BuilderError::MalformedUrl {
            field,
            value: value.to_string(),
        });
    }
    Ok(value)
}
