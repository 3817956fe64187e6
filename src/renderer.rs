//! Template substitution engine.
//!
//! Templates use a small, fixed tag language rather than a general-purpose
//! template engine, so the substitution contract stays auditable:
//!
//! - `{{ .Field }}` substitutes a context field; booleans print as
//!   `true`/`false`.
//! - `{{ if .Flag }} ... {{ else }} ... {{ end }}` gates a section on a
//!   boolean field. Blocks nest.
//!
//! Rendering fails closed: an unknown field is an error even inside a
//! suppressed branch, `if` over a non-boolean field is an error, and so is
//! any malformed or unterminated tag. A misspelled placeholder never
//! silently renders as an empty string.

use crate::context::VariableContext;
use crate::error::{Error, Result};

/// Trait for template rendering engines.
pub trait Renderer {
    /// Renders a template string with the given context.
    ///
    /// Rendering is pure: the same template and context always yield
    /// identical output.
    fn render(&self, template: &str, context: &VariableContext) -> Result<String>;
}

/// Stateless renderer for the `{{ .Field }}` tag language.
pub struct PlaceholderRenderer;

impl PlaceholderRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlaceholderRenderer {
    fn default() -> Self {
        PlaceholderRenderer::new()
    }
}

/// One open `if` block.
struct Frame {
    emitting: bool,
    else_seen: bool,
}

fn substitution_error(detail: impl Into<String>) -> Error {
    Error::Substitution { detail: detail.into() }
}

/// Extracts the field name from a `.Field` token.
fn parse_field(token: &str) -> Result<&str> {
    let token = token.trim();
    let name = token
        .strip_prefix('.')
        .ok_or_else(|| substitution_error(format!("malformed tag '{{{{ {} }}}}'", token)))?;
    if name.is_empty()
        || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(substitution_error(format!("malformed field reference '.{}'", name)));
    }
    Ok(name)
}

fn lookup<'a>(
    fields: &'a serde_json::Map<String, serde_json::Value>,
    name: &str,
) -> Result<&'a serde_json::Value> {
    fields
        .get(name)
        .ok_or_else(|| substitution_error(format!("unknown field '.{}'", name)))
}

impl Renderer for PlaceholderRenderer {
    fn render(&self, template: &str, context: &VariableContext) -> Result<String> {
        let fields = context.fields();
        let mut out = String::with_capacity(template.len());
        let mut frames: Vec<Frame> = Vec::new();
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            let (literal, tail) = rest.split_at(start);
            if frames.iter().all(|f| f.emitting) {
                out.push_str(literal);
            }

            let tag_end = tail
                .find("}}")
                .ok_or_else(|| substitution_error("unterminated '{{' tag"))?;
            let tag = tail[2..tag_end].trim();
            rest = &tail[tag_end + 2..];

            if let Some(condition) = tag.strip_prefix("if ") {
                let name = parse_field(condition)?;
                let enabled = match lookup(&fields, name)? {
                    serde_json::Value::Bool(b) => *b,
                    _ => {
                        return Err(substitution_error(format!(
                            "'if' requires a boolean field, '.{}' is not one",
                            name
                        )))
                    }
                };
                frames.push(Frame { emitting: enabled, else_seen: false });
            } else if tag == "else" {
                match frames.last_mut() {
                    Some(frame) if !frame.else_seen => {
                        frame.emitting = !frame.emitting;
                        frame.else_seen = true;
                    }
                    Some(_) => {
                        return Err(substitution_error("duplicate 'else' in 'if' block"))
                    }
                    None => {
                        return Err(substitution_error("'else' outside of an 'if' block"))
                    }
                }
            } else if tag == "end" {
                if frames.pop().is_none() {
                    return Err(substitution_error("'end' outside of an 'if' block"));
                }
            } else {
                // Plain field substitution. The lookup happens even inside a
                // suppressed branch so a misspelled field always fails.
                let name = parse_field(tag)?;
                let value = lookup(&fields, name)?;
                if frames.iter().all(|f| f.emitting) {
                    match value {
                        serde_json::Value::String(s) => out.push_str(s),
                        serde_json::Value::Bool(b) => {
                            out.push_str(if *b { "true" } else { "false" })
                        }
                        other => out.push_str(&other.to_string()),
                    }
                }
            }
        }

        if !frames.is_empty() {
            return Err(substitution_error("unclosed 'if' block"));
        }
        out.push_str(rest);

        Ok(out)
    }
}
