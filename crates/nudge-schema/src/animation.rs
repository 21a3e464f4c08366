use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// When an animation starts playing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationTrigger {
    #[default]
    OnEnter,
    OnExit,
    OnClick,
    OnHover,
    #[serde(other)]
    Unknown,
}

/// A keyframed animation attached to a layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LayerAnimation {
    pub id: String,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub trigger: AnimationTrigger,
    /// Milliseconds.
    #[serde(default = "default_duration")]
    pub duration: f64,
    /// Milliseconds.
    #[serde(default)]
    pub delay: f64,
    /// Any CSS timing function.
    #[serde(default = "default_easing")]
    pub easing: String,
    #[serde(rename = "loop", default)]
    pub looping: bool,
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

fn default_true() -> bool {
    true
}

fn default_duration() -> f64 {
    300.0
}

fn default_easing() -> String {
    "ease-out".to_string()
}

/// One stop of an animation. `time` is a percentage (0 - 100).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Keyframe {
    pub time: f64,
    #[serde(default)]
    pub properties: Map<String, Value>,
}
