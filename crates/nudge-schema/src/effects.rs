use serde::{Deserialize, Serialize};

/// Declarative visual effects of a layer, resolved into CSS at render time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EffectBag {
    #[serde(default)]
    pub shadows: Vec<ShadowEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<GradientEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<BlurEffect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<StrokeEffect>,
    /// Layer opacity in percent (0 - 100).
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_blend_mode")]
    pub blend_mode: String,
}

impl Default for EffectBag {
    fn default() -> Self {
        Self {
            shadows: Vec::new(),
            gradient: None,
            blur: None,
            stroke: None,
            opacity: default_opacity(),
            blend_mode: default_blend_mode(),
        }
    }
}

fn default_opacity() -> f64 {
    100.0
}

fn default_blend_mode() -> String {
    "normal".to_string()
}

fn default_true() -> bool {
    true
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ShadowKind {
    InnerShadow,
    /// Unrecognised kinds read as a drop shadow.
    #[default]
    #[serde(other)]
    DropShadow,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShadowEffect {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(rename = "type", default)]
    pub kind: ShadowKind,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub blur: f64,
    #[serde(default)]
    pub spread: f64,
    #[serde(default = "default_shadow_color")]
    pub color: String,
}

fn default_shadow_color() -> String {
    "rgba(0, 0, 0, 0.25)".to_string()
}

/// Gradient flavours. Anything unknown deserializes to `Unknown` and paints nothing.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Angular,
    Conic,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GradientStop {
    pub color: String,
    /// 0 - 100
    #[serde(default)]
    pub position: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct GradientEffect {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(rename = "type", default)]
    pub kind: GradientKind,
    /// Degrees.
    #[serde(default = "default_angle")]
    pub angle: f64,
    #[serde(default)]
    pub stops: Vec<GradientStop>,
}

fn default_angle() -> f64 {
    180.0
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlurKind {
    /// Blurs the layer itself.
    #[default]
    Layer,
    /// Blurs whatever is painted behind the layer.
    Background,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BlurEffect {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(rename = "type", default)]
    pub kind: BlurKind,
    #[serde(default)]
    pub amount: f64,
}

/// Where a stroke is drawn relative to the layer edge.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StrokePosition {
    #[default]
    Inside,
    Center,
    Outside,
    #[serde(other)]
    Unknown,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StrokeEffect {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_stroke_width")]
    pub width: f64,
    #[serde(default = "default_stroke_color")]
    pub color: String,
    #[serde(default)]
    pub position: StrokePosition,
    #[serde(default = "default_stroke_style")]
    pub style: String,
}

fn default_stroke_width() -> f64 {
    1.0
}

fn default_stroke_color() -> String {
    "#000000".to_string()
}

fn default_stroke_style() -> String {
    "solid".to_string()
}
