//! Structured header ("frontmatter") formatting and parsing.
//!
//! A document is an optional YAML header block followed by a markdown body:
//!
//! ```text
//! ---
//! name: security-reviewer
//! description: Security-focused agent
//! tools:
//! - Bash
//! - Read
//! ---
//!
//! Focus on vulnerabilities.
//! ```
//!
//! Headers carry only text and string-list values. Both directions go
//! through `serde_yaml`, so `parse_frontmatter(&format_frontmatter(h, b))`
//! gives back `(h, b)` for any body that does not itself open with `---`.

use serde_yaml::{Mapping, Value};
use tracing::warn;

use crate::error::{BridgeError, Result};

const DELIMITER: &str = "---";

/// A single header value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    List(Vec<String>),
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// An insertion-ordered header mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    fields: Vec<(String, FieldValue)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, keeping its original position when it already exists.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_text(&self, key: &str) -> Option<&str> {
        match self.get(key)? {
            FieldValue::Text(s) => Some(s),
            FieldValue::List(_) => None,
        }
    }

    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        match self.get(key)? {
            FieldValue::List(items) => Some(items),
            FieldValue::Text(_) => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Render `header` and `body` into a single document.
///
/// An empty header yields the body unchanged.
pub fn format_frontmatter(header: &Frontmatter, body: &str) -> String {
    if header.is_empty() {
        return body.to_owned();
    }

    match serde_yaml::to_string(&to_mapping(header)) {
        Ok(yaml) => format!("{DELIMITER}\n{yaml}{DELIMITER}\n\n{body}"),
        Err(e) => {
            warn!(error = %e, "failed to serialize frontmatter, writing body only");
            body.to_owned()
        }
    }
}

fn to_mapping(header: &Frontmatter) -> Mapping {
    header
        .iter()
        .map(|(key, value)| {
            let value = match value {
                FieldValue::Text(text) => Value::String(text.clone()),
                FieldValue::List(items) => {
                    Value::Sequence(items.iter().cloned().map(Value::String).collect())
                }
            };
            (Value::String(key.to_owned()), value)
        })
        .collect()
}

/// Split a document into its header mapping and body.
///
/// Documents that do not open with a `---` line have an empty header and the
/// whole text as body.
pub fn parse_frontmatter(content: &str) -> Result<(Frontmatter, String)> {
    let Some(rest) = content
        .strip_prefix("---\n")
        .or_else(|| content.strip_prefix("---\r\n"))
    else {
        return Ok((Frontmatter::new(), content.to_owned()));
    };

    let (yaml, body) =
        split_closing_delimiter(rest).ok_or_else(|| BridgeError::InvalidFrontmatter {
            reason: "missing closing --- for frontmatter".into(),
        })?;

    let header = match serde_yaml::from_str::<Value>(yaml)? {
        Value::Null => Frontmatter::new(),
        Value::Mapping(mapping) => {
            let mut header = Frontmatter::new();
            for (key, value) in mapping {
                let key = scalar_to_string(&key).ok_or_else(|| {
                    BridgeError::InvalidFrontmatter {
                        reason: format!("non-scalar key {key:?}"),
                    }
                })?;
                if let Some(value) = field_value(&key, value)? {
                    header.insert(key, value);
                }
            }
            header
        }
        _ => {
            return Err(BridgeError::InvalidFrontmatter {
                reason: "header is not a mapping".into(),
            });
        }
    };

    Ok((header, body.to_owned()))
}

/// Find the closing delimiter line. Returns `(yaml, body)` where the body
/// has the single blank separator line removed.
fn split_closing_delimiter(rest: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == DELIMITER {
            let yaml = &rest[..offset];
            let after = &rest[offset + line.len()..];
            let body = after
                .strip_prefix("\r\n")
                .or_else(|| after.strip_prefix('\n'))
                .unwrap_or(after);
            return Some((yaml, body));
        }
        offset += line.len();
    }
    None
}

fn field_value(key: &str, value: Value) -> Result<Option<FieldValue>> {
    match value {
        Value::Null => Ok(None),
        Value::Sequence(items) => items
            .iter()
            .map(|item| {
                scalar_to_string(item).ok_or_else(|| BridgeError::UnsupportedField {
                    key: key.to_owned(),
                })
            })
            .collect::<Result<Vec<_>>>()
            .map(|items| Some(FieldValue::List(items))),
        other => scalar_to_string(&other)
            .map(|text| Some(FieldValue::Text(text)))
            .ok_or_else(|| BridgeError::UnsupportedField {
                key: key.to_owned(),
            }),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
