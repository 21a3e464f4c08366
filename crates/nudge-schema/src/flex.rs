use crate::layer::Spacing;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FlexDirection {
    Row,
    RowReverse,
    ColumnReverse,
    /// Also what any unrecognised direction reads as.
    #[default]
    #[serde(other)]
    Column,
}

impl FlexDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
            FlexDirection::RowReverse => "row-reverse",
            FlexDirection::ColumnReverse => "column-reverse",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FlexWrap {
    Wrap,
    WrapReverse,
    #[default]
    #[serde(other)]
    Nowrap,
}

impl FlexWrap {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlexWrap::Nowrap => "nowrap",
            FlexWrap::Wrap => "wrap",
            FlexWrap::WrapReverse => "wrap-reverse",
        }
    }
}

/// Flex container declaration of a container layer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FlexLayout {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub direction: FlexDirection,
    /// Pixels between children.
    #[serde(default)]
    pub gap: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Spacing>,
    /// CSS `align-items` value, e.g. `"center"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_items: Option<String>,
    /// CSS `justify-content` value, e.g. `"space-between"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap: Option<FlexWrap>,
}

/// How a flex child sizes itself along the main axis.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SizingMode {
    /// Takes the remaining space.
    Fill,
    /// Neither grows nor shrinks.
    Fixed,
    /// Natural size, may shrink. Unrecognised modes read as this.
    #[default]
    #[serde(other)]
    Hug,
}

/// Flex participation of a layer inside a flex container.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct FlexChild {
    #[serde(default)]
    pub sizing_mode: SizingMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_shrink: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_self: Option<String>,
}
