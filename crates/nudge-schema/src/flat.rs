//! The legacy flat wire record consumed by renderers.
//!
//! The record is a single JSON object keyed by role prefix (`titleColor`,
//! `buttonText`, `dragHandleWidth`, ...) plus a `components` array carrying
//! the full nested tree. It is kept as an ordered JSON map; typed readers
//! and writers live in `nudge-core`.

use crate::animation::LayerAnimation;
use crate::flex::{FlexChild, FlexLayout};
use crate::layer::{Layer, LayerContent, LayerSize, LayerStyle, LayerType, Position, ResponsiveOverride};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

/// Key of the nested component tree inside a flat record.
pub const COMPONENTS_KEY: &str = "components";
/// Key of an explicit flat layer list inside a flat record.
pub const LAYERS_KEY: &str = "layers";
/// Key of the overflow decorative icon list.
pub const ICONS_KEY: &str = "icons";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct FlatConfig(pub Map<String, Value>);

impl FlatConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Numbers, and strings holding numbers (`"16"`, `"16px"`), read as `f64`.
    pub fn f64(&self, key: &str) -> Option<f64> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().trim_end_matches("px").trim().parse().ok(),
            _ => None,
        }
    }

    pub fn bool(&self, key: &str) -> Option<bool> {
        match self.0.get(key)? {
            Value::Bool(b) => Some(*b),
            Value::String(s) => match s.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// A string key that is present and not blank.
    pub fn non_empty_str(&self, key: &str) -> Option<&str> {
        self.str(key).filter(|s| !s.trim().is_empty())
    }

    /// Nested component tree, if the record carries a well-formed one.
    pub fn components(&self) -> Vec<ComponentNode> {
        self.typed_list(COMPONENTS_KEY)
    }

    /// Explicit flat layer list, if the record carries a well-formed one.
    pub fn layers(&self) -> Vec<Layer> {
        self.typed_list(LAYERS_KEY)
    }

    pub fn icons(&self) -> Vec<IconEntry> {
        self.typed_list(ICONS_KEY)
    }

    /// Entries that fail to deserialize are skipped with a warning, not fatal.
    fn typed_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.0.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| match serde_json::from_value(item.clone()) {
                    Ok(entry) => Some(entry),
                    Err(error) => {
                        warn!(key, index, %error, "dropping unreadable entry");
                        None
                    }
                })
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// One node of the nested `components` tree.
///
/// Mirrors [`Layer`] but nests children by value. `flexLayout` is only
/// present on container nodes and `flexChild` only below the root.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNode {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LayerType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default = "default_true")]
    pub visible: bool,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub z_index: i64,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub size: LayerSize,
    #[serde(default)]
    pub content: LayerContent,
    #[serde(default)]
    pub style: LayerStyle,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub responsive_overrides: Vec<ResponsiveOverride>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub animations: Vec<LayerAnimation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_layout: Option<FlexLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_child: Option<FlexChild>,
    #[serde(default, deserialize_with = "nested_children")]
    pub children: Vec<ComponentNode>,
}

fn default_true() -> bool {
    true
}

/// Children that are not component objects (e.g. bare id strings from an
/// older exporter) are dropped.
fn nested_children<'de, D>(deserializer: D) -> Result<Vec<ComponentNode>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let items = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(items
        .into_iter()
        .enumerate()
        .filter(|(_, item)| item.is_object())
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(node) => Some(node),
            Err(error) => {
                warn!(index, %error, "dropping unreadable child component");
                None
            }
        })
        .collect())
}

/// A decorative icon that did not fit the single `icon*` slot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IconEntry {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub size: f64,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}
