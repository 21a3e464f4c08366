//! # Types Module
//!
//! Shared output types of the resolvers.
//!
//! ## Key Types
//! - `StyleFragment`: an ordered bag of resolved CSS properties (camelCase keys).

use serde::Serialize;
use std::collections::BTreeMap;

/// A renderer-ready set of CSS properties keyed by camelCase property name
/// (`boxShadow`, `backdropFilter`, ...).
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct StyleFragment(BTreeMap<String, String>);

impl StyleFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        self.0.insert(property.to_string(), value.into());
    }

    /// Sets the property only when `value` is present.
    pub fn set_opt(&mut self, property: &str, value: Option<impl Into<String>>) {
        if let Some(value) = value {
            self.set(property, value);
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    pub fn contains(&self, property: &str) -> bool {
        self.0.contains_key(property)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copies every property of `other` over this fragment.
    pub fn extend(&mut self, other: StyleFragment) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Formats a pixel length the way CSS authors write it (`16px`, `-2px`, `0.5px`).
pub fn px(value: f64) -> String {
    format!("{}px", value)
}
