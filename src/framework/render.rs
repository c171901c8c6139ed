//! # Template Rendering
//!
//! GraphQL documents are stored as plain strings with mustache-style triple-brace
//! placeholders (`{{{NAME}}}`). Triple braces mean the value is substituted verbatim,
//! which is what fragments need: they are pre-rendered GraphQL, not strings to escape.

use crate::framework::error::FrameworkError;
use std::collections::HashMap;

const OPEN: &str = "{{{";
const CLOSE: &str = "}}}";

/// Substitutes every `{{{KEY}}}` in `template` with `bindings[KEY]`.
///
/// Bindings the template does not reference are ignored. Substituted values are
/// never scanned for further placeholders.
///
/// # Errors
/// - [`FrameworkError::MissingBinding`] if a placeholder has no binding.
/// - [`FrameworkError::MalformedTemplate`] if a `{{{` is never closed.
pub fn render(template: &str, bindings: &HashMap<String, String>) -> Result<String, FrameworkError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            return Err(FrameworkError::MalformedTemplate(offset + start));
        };
        let key = after_open[..end].trim();
        let value = bindings
            .get(key)
            .ok_or_else(|| FrameworkError::MissingBinding(key.to_string()))?;
        out.push_str(value);

        let consumed = start + OPEN.len() + end + CLOSE.len();
        offset += consumed;
        rest = &rest[consumed..];
    }
    out.push_str(rest);

    Ok(out)
}

/// Lists the placeholder names used by `template`, in order of first appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find(OPEN) {
        let after_open = &rest[start + OPEN.len()..];
        let Some(end) = after_open.find(CLOSE) else {
            break;
        };
        let key = after_open[..end].trim();
        if !names.contains(&key) {
            names.push(key);
        }
        rest = &after_open[end + CLOSE.len()..];
    }
    names
}
