use crate::flat::{ComponentNode, FlatConfig};
use crate::layer::Layer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The persisted / transmitted campaign record.
///
/// `config` is always present for renderer compatibility. When `layers` is
/// present and non-empty it is the authoritative design.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PersistedRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub trigger: Value,
    #[serde(default)]
    pub rules: Vec<Value>,
    #[serde(default)]
    pub targeting: Vec<Value>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Value>,
    #[serde(default)]
    pub config: FlatConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<Layer>>,
}

fn default_status() -> String {
    "draft".to_string()
}

/// Campaign metadata carried next to the design in a [`PersistedRecord`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RecordMeta {
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub trigger: Value,
    pub rules: Vec<Value>,
    pub targeting: Vec<Value>,
    pub tags: Vec<String>,
    pub schedule: Option<Value>,
}

impl Default for RecordMeta {
    fn default() -> Self {
        Self {
            kind: "bottom-sheet".to_string(),
            status: default_status(),
            trigger: Value::Null,
            rules: Vec::new(),
            targeting: Vec::new(),
            tags: Vec::new(),
            schedule: None,
        }
    }
}

/// A design template as returned by the external template source.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TemplateDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub config: TemplateConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TemplateConfig {
    #[serde(default)]
    pub components: Vec<ComponentNode>,
}
