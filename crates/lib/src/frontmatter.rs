//! The delimited `key: value` block at the top of every content file.
//!
//! ```text
//! ---
//! title: "Hello"
//! tags: ["a", "b"]
//! ---
//!
//! body
//! ```
//!
//! Parsing is pure: callers read the file and hand the text in, which keeps
//! every rule testable against string literals.

mod parse;
mod render;
pub mod schema;

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

pub use parse::{parse, ParseError};
pub use render::render;
pub use schema::{Field, FieldKind, Schema};

pub const DELIMITER: &str = "---";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Text(String),
    Date(NaiveDate),
    Integer(u32),
    List(Vec<String>),
}

/// Decoded front matter. Keys are always fields of the schema it was parsed with.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata(HashMap<String, Value>);

impl Metadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: Value) -> Option<Value> {
        self.0.insert(key.to_owned(), value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key)? {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn date(&self, key: &str) -> Option<NaiveDate> {
        match self.0.get(key)? {
            Value::Date(date) => Some(*date),
            _ => None,
        }
    }

    #[must_use]
    pub fn integer(&self, key: &str) -> Option<u32> {
        match self.0.get(key)? {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn list(&self, key: &str) -> Option<&[String]> {
        match self.0.get(key)? {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Owned text for `key`, empty when absent. Drafts may omit required keys.
    #[must_use]
    pub fn text_or_empty(&self, key: &str) -> String {
        self.text(key).unwrap_or_default().to_owned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub metadata: Metadata,
    pub body: String,
}
