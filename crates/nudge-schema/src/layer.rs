use crate::animation::LayerAnimation;
use crate::effects::EffectBag;
use crate::flex::{FlexChild, FlexLayout};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The closed set of layer kinds. The kind decides which content and style
/// fields a renderer looks at, and never changes after creation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LayerType {
    Container,
    Text,
    Media,
    Button,
    Handle,
    Icon,
    Video,
}

impl LayerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerType::Container => "container",
            LayerType::Text => "text",
            LayerType::Media => "media",
            LayerType::Button => "button",
            LayerType::Handle => "handle",
            LayerType::Icon => "icon",
            LayerType::Video => "video",
        }
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node in the editor's design tree.
///
/// Layers are stored as a flat list; hierarchy is expressed through `parent`
/// and the ordered `children` id list (paint order).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: LayerType,
    /// Optional display name, also used to infer the layer's semantic role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub children: Vec<String>,
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
}

fn default_true() -> bool {
    true
}

impl Layer {
    /// Creates a visible, unlocked layer with default geometry and no content.
    pub fn new(id: impl Into<String>, kind: LayerType) -> Self {
        Self {
            id: id.into(),
            kind,
            name: None,
            parent: None,
            children: Vec::new(),
            visible: true,
            locked: false,
            z_index: 0,
            position: Position::default(),
            size: LayerSize::default(),
            content: LayerContent::default(),
            style: LayerStyle::default(),
            responsive_overrides: Vec::new(),
            animations: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content.text = Some(text.into());
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Positioning scheme of a layer inside its parent.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PositionMode {
    #[default]
    Relative,
    Absolute,
}

impl PositionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionMode::Relative => "relative",
            PositionMode::Absolute => "absolute",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "relative" => Some(PositionMode::Relative),
            "absolute" => Some(PositionMode::Absolute),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(rename = "type", default)]
    pub mode: PositionMode,
}

/// Partial position used by responsive overrides; unset keys keep the base value.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<PositionMode>,
}

/// A single size dimension: pixels, a percentage string (`"50%"`) or `"auto"`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum SizeValue {
    Px(f64),
    Keyword(String),
}

impl SizeValue {
    pub fn auto() -> Self {
        SizeValue::Keyword("auto".to_string())
    }

    pub fn percent(value: f64) -> Self {
        SizeValue::Keyword(format!("{}%", value))
    }

    pub fn to_value(&self) -> Value {
        match self {
            SizeValue::Px(px) => Value::from(*px),
            SizeValue::Keyword(k) => Value::from(k.clone()),
        }
    }

    /// Reads a size from loosely typed JSON; anything that is neither a
    /// number nor a string yields `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_f64().map(SizeValue::Px),
            Value::String(s) => Some(SizeValue::Keyword(s.clone())),
            _ => None,
        }
    }
}

impl Default for SizeValue {
    fn default() -> Self {
        Self::auto()
    }
}

impl fmt::Display for SizeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeValue::Px(px) => write!(f, "{}px", px),
            SizeValue::Keyword(k) => f.write_str(k),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LayerSize {
    #[serde(default)]
    pub width: SizeValue,
    #[serde(default)]
    pub height: SizeValue,
}

/// Per-type payload. Text and button labels live in `text`, image and video
/// sources in `url`, icon names in `icon`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct LayerContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Button action, e.g. `"dismiss"` or `"deeplink"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Four explicit corners of a border radius.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Corners {
    #[serde(default)]
    pub top_left: f64,
    #[serde(default)]
    pub top_right: f64,
    #[serde(default)]
    pub bottom_right: f64,
    #[serde(default)]
    pub bottom_left: f64,
}

impl Corners {
    pub const fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }
}

/// Border radius as authored: a single number or four named corners.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum CornerRadius {
    Uniform(f64),
    Corners(Corners),
}

impl CornerRadius {
    /// Broadcasts the scalar form to all four corners.
    pub fn to_corners(&self) -> Corners {
        match self {
            CornerRadius::Uniform(r) => Corners::uniform(*r),
            CornerRadius::Corners(c) => *c,
        }
    }
}

/// Four sides of a padding or margin box.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct EdgeInsets {
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub right: f64,
    #[serde(default)]
    pub bottom: f64,
    #[serde(default)]
    pub left: f64,
}

impl EdgeInsets {
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Padding or margin as authored: a single number or four named sides.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum Spacing {
    Uniform(f64),
    Sides(EdgeInsets),
}

impl Spacing {
    pub fn to_sides(&self) -> EdgeInsets {
        match self {
            Spacing::Uniform(v) => EdgeInsets::uniform(*v),
            Spacing::Sides(s) => *s,
        }
    }
}

/// CSS-like filter values. Brightness and contrast are percentages (100 = identity).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct FilterBag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grayscale: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TransformBag {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translate_y: Option<f64>,
    /// Degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
}

/// Free-form visual attributes of a layer.
///
/// The well-known attributes are typed; anything else an editor panel writes
/// is kept in `extra` and carried through untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LayerStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::de::opt_string_or_number"
    )]
    pub font_weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<CornerRadius>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Spacing>,
    /// Shadow string: `"[inset ]Xpx Ypx BLURpx SPREADpx <color>"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterBag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<TransformBag>,
    /// 0.0 - 1.0
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    /// A CSS gradient string used as background.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<EffectBag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_layout: Option<FlexLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_child: Option<FlexChild>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LayerStyle {
    /// Shallow merge: every attribute set on `over` replaces the base value,
    /// unset attributes keep it. Nested values (radius, filter, ...) are
    /// replaced whole, never merged.
    pub fn merged(&self, over: &LayerStyle) -> LayerStyle {
        macro_rules! pick {
            ($base:ident, $over:ident; $($field:ident),* $(,)?) => {
                LayerStyle {
                    $($field: $over.$field.clone().or_else(|| $base.$field.clone()),)*
                    extra: {
                        let mut extra = $base.extra.clone();
                        for (key, value) in &$over.extra {
                            extra.insert(key.clone(), value.clone());
                        }
                        extra
                    },
                }
            };
        }

        pick!(
            self, over;
            color,
            background_color,
            font_size,
            font_weight,
            text_align,
            border_width,
            border_color,
            border_style,
            border_radius,
            padding,
            margin,
            box_shadow,
            filter,
            transform,
            opacity,
            gradient,
            effects,
            flex_layout,
            flex_child,
        )
    }
}

/// Viewport class selected from the viewport width.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

/// Style, position and visibility replacements applied at one breakpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResponsiveOverride {
    pub breakpoint: Breakpoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<LayerStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<PositionOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}
