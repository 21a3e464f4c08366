//! # Flex Style Resolver
//!
//! Resolves a container's [`FlexLayout`] and a child's [`FlexChild`] into
//! flex declarations. No layout is solved here; the declaration is handed
//! to the renderer, either as CSS ([`FlexContainerStyle::to_style`]) or as a
//! Taffy style for renderers that lay out with Taffy
//! ([`FlexContainerStyle::apply_to`]).

use crate::types::{px, StyleFragment};
use nudge_schema::{EdgeInsets, FlexChild, FlexDirection, FlexLayout, FlexWrap, SizingMode};
use serde::Serialize;
use taffy::geometry::{Rect, Size};
use taffy::style::{
    AlignItems, AlignSelf, Dimension, Display, FlexDirection as TaffyFlexDirection,
    FlexWrap as TaffyFlexWrap, JustifyContent, LengthPercentage, Style,
};

/// Padding applied to a flex container that does not declare its own.
pub const DEFAULT_FLEX_PADDING: f64 = 16.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexContainerStyle {
    pub flex_direction: FlexDirection,
    pub gap: f64,
    pub padding: EdgeInsets,
    pub align_items: String,
    pub justify_content: String,
    pub flex_wrap: FlexWrap,
}

/// Resolves the container side. A disabled layout contributes nothing.
pub fn resolve_flex_container(layout: &FlexLayout) -> Option<FlexContainerStyle> {
    if !layout.enabled {
        return None;
    }

    Some(FlexContainerStyle {
        flex_direction: layout.direction,
        gap: layout.gap,
        padding: layout
            .padding
            .map(|p| p.to_sides())
            .unwrap_or(EdgeInsets::uniform(DEFAULT_FLEX_PADDING)),
        align_items: layout
            .align_items
            .clone()
            .unwrap_or_else(|| "flex-start".to_string()),
        justify_content: layout
            .justify_content
            .clone()
            .unwrap_or_else(|| "flex-start".to_string()),
        flex_wrap: layout.wrap.unwrap_or_default(),
    })
}

impl FlexContainerStyle {
    pub fn to_style(&self) -> StyleFragment {
        let mut style = StyleFragment::new();
        style.set("display", "flex");
        style.set("flexDirection", self.flex_direction.as_str());
        style.set("gap", px(self.gap));
        style.set(
            "padding",
            format!(
                "{} {} {} {}",
                px(self.padding.top),
                px(self.padding.right),
                px(self.padding.bottom),
                px(self.padding.left)
            ),
        );
        style.set("alignItems", self.align_items.clone());
        style.set("justifyContent", self.justify_content.clone());
        style.set("flexWrap", self.flex_wrap.as_str());
        style
    }

    /// Writes the declaration into a Taffy style.
    pub fn apply_to(&self, style: &mut Style) {
        style.display = Display::Flex;
        style.flex_direction = match self.flex_direction {
            FlexDirection::Row => TaffyFlexDirection::Row,
            FlexDirection::Column => TaffyFlexDirection::Column,
            FlexDirection::RowReverse => TaffyFlexDirection::RowReverse,
            FlexDirection::ColumnReverse => TaffyFlexDirection::ColumnReverse,
        };
        style.flex_wrap = match self.flex_wrap {
            FlexWrap::Nowrap => TaffyFlexWrap::NoWrap,
            FlexWrap::Wrap => TaffyFlexWrap::Wrap,
            FlexWrap::WrapReverse => TaffyFlexWrap::WrapReverse,
        };

        let gap = LengthPercentage::length(self.gap as f32);
        style.gap = Size {
            width: gap,
            height: gap,
        };
        style.padding = Rect {
            left: LengthPercentage::length(self.padding.left as f32),
            right: LengthPercentage::length(self.padding.right as f32),
            top: LengthPercentage::length(self.padding.top as f32),
            bottom: LengthPercentage::length(self.padding.bottom as f32),
        };
        style.align_items = parse_align(&self.align_items);
        style.justify_content = parse_justify(&self.justify_content);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlexChildStyle {
    pub flex_grow: f64,
    pub flex_shrink: f64,
    /// `"auto"` for natural size, `"0%"` for fill.
    pub flex_basis: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align_self: Option<String>,
}

/// Resolves the child side.
///
/// The sizing mode picks grow/shrink defaults, explicit `flexGrow` /
/// `flexShrink` win over them, and min/max constraints always apply.
pub fn resolve_flex_child(child: &FlexChild) -> FlexChildStyle {
    let (grow, shrink, basis) = match child.sizing_mode {
        SizingMode::Hug => (0.0, 1.0, "auto"),
        SizingMode::Fill => (1.0, 1.0, "0%"),
        SizingMode::Fixed => (0.0, 0.0, "auto"),
    };

    FlexChildStyle {
        flex_grow: child.flex_grow.unwrap_or(grow),
        flex_shrink: child.flex_shrink.unwrap_or(shrink),
        flex_basis: basis.to_string(),
        min_width: child.min_width,
        max_width: child.max_width,
        min_height: child.min_height,
        max_height: child.max_height,
        align_self: child
            .align_self
            .clone()
            .filter(|a| !a.is_empty() && a != "auto"),
    }
}

impl FlexChildStyle {
    pub fn to_style(&self) -> StyleFragment {
        let mut style = StyleFragment::new();
        style.set("flexGrow", self.flex_grow.to_string());
        style.set("flexShrink", self.flex_shrink.to_string());
        style.set("flexBasis", self.flex_basis.clone());
        style.set_opt("minWidth", self.min_width.map(px));
        style.set_opt("maxWidth", self.max_width.map(px));
        style.set_opt("minHeight", self.min_height.map(px));
        style.set_opt("maxHeight", self.max_height.map(px));
        style.set_opt("alignSelf", self.align_self.clone());
        style
    }

    /// Writes the child declaration into a Taffy style.
    pub fn apply_to(&self, style: &mut Style) {
        style.flex_grow = self.flex_grow as f32;
        style.flex_shrink = self.flex_shrink as f32;
        style.flex_basis = if self.flex_basis == "auto" {
            Dimension::auto()
        } else {
            Dimension::percent(0.0)
        };
        if let Some(v) = self.min_width {
            style.min_size.width = Dimension::length(v as f32);
        }
        if let Some(v) = self.max_width {
            style.max_size.width = Dimension::length(v as f32);
        }
        if let Some(v) = self.min_height {
            style.min_size.height = Dimension::length(v as f32);
        }
        if let Some(v) = self.max_height {
            style.max_size.height = Dimension::length(v as f32);
        }
        if let Some(a) = &self.align_self {
            style.align_self = parse_align(a);
        }
    }
}

fn parse_align(value: &str) -> Option<AlignSelf> {
    match value {
        "flex-start" => Some(AlignItems::FlexStart),
        "flex-end" => Some(AlignItems::FlexEnd),
        "start" => Some(AlignItems::Start),
        "end" => Some(AlignItems::End),
        "center" => Some(AlignItems::Center),
        "baseline" => Some(AlignItems::Baseline),
        "stretch" => Some(AlignItems::Stretch),
        _ => None,
    }
}

fn parse_justify(value: &str) -> Option<JustifyContent> {
    match value {
        "flex-start" => Some(JustifyContent::FlexStart),
        "flex-end" => Some(JustifyContent::FlexEnd),
        "start" => Some(JustifyContent::Start),
        "end" => Some(JustifyContent::End),
        "center" => Some(JustifyContent::Center),
        "stretch" => Some(JustifyContent::Stretch),
        "space-between" => Some(JustifyContent::SpaceBetween),
        "space-around" => Some(JustifyContent::SpaceAround),
        "space-evenly" => Some(JustifyContent::SpaceEvenly),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nudge_schema::Spacing;

    #[test]
    fn test_disabled_container_contributes_nothing() {
        let layout = FlexLayout {
            enabled: false,
            gap: 12.0,
            ..Default::default()
        };
        assert_eq!(resolve_flex_container(&layout), None);
    }

    #[test]
    fn test_container_defaults() {
        let layout = FlexLayout {
            enabled: true,
            direction: FlexDirection::Row,
            gap: 8.0,
            ..Default::default()
        };
        let resolved = resolve_flex_container(&layout).unwrap();
        assert_eq!(resolved.padding, EdgeInsets::uniform(16.0));
        assert_eq!(resolved.align_items, "flex-start");
        assert_eq!(resolved.justify_content, "flex-start");
        assert_eq!(resolved.flex_wrap, FlexWrap::Nowrap);

        let css = resolved.to_style();
        assert_eq!(css.get("display"), Some("flex"));
        assert_eq!(css.get("flexDirection"), Some("row"));
        assert_eq!(css.get("gap"), Some("8px"));
        assert_eq!(css.get("padding"), Some("16px 16px 16px 16px"));
        assert_eq!(css.get("flexWrap"), Some("nowrap"));
    }

    #[test]
    fn test_container_explicit_padding() {
        let layout = FlexLayout {
            enabled: true,
            padding: Some(Spacing::Sides(EdgeInsets::symmetric(8.0, 24.0))),
            justify_content: Some("space-between".into()),
            ..Default::default()
        };
        let resolved = resolve_flex_container(&layout).unwrap();
        assert_eq!(resolved.padding.left, 24.0);
        assert_eq!(resolved.padding.top, 8.0);
        assert_eq!(resolved.justify_content, "space-between");
    }

    #[test]
    fn test_sizing_modes() {
        let hug = resolve_flex_child(&FlexChild::default());
        assert_eq!((hug.flex_grow, hug.flex_shrink), (0.0, 1.0));
        assert_eq!(hug.flex_basis, "auto");

        let fill = resolve_flex_child(&FlexChild {
            sizing_mode: SizingMode::Fill,
            ..Default::default()
        });
        assert_eq!((fill.flex_grow, fill.flex_shrink), (1.0, 1.0));

        let fixed = resolve_flex_child(&FlexChild {
            sizing_mode: SizingMode::Fixed,
            ..Default::default()
        });
        assert_eq!((fixed.flex_grow, fixed.flex_shrink), (0.0, 0.0));
    }

    #[test]
    fn test_explicit_grow_and_constraints_win() {
        let child = resolve_flex_child(&FlexChild {
            sizing_mode: SizingMode::Fixed,
            flex_grow: Some(2.0),
            min_width: Some(120.0),
            max_height: Some(48.0),
            align_self: Some("auto".into()),
            ..Default::default()
        });
        assert_eq!(child.flex_grow, 2.0);
        assert_eq!(child.flex_shrink, 0.0);
        assert_eq!(child.min_width, Some(120.0));
        assert_eq!(child.align_self, None, "auto alignment is not emitted");

        let css = child.to_style();
        assert_eq!(css.get("minWidth"), Some("120px"));
        assert_eq!(css.get("maxHeight"), Some("48px"));
        assert!(!css.contains("alignSelf"));
    }

    #[test]
    fn test_taffy_bridge() {
        let container = resolve_flex_container(&FlexLayout {
            enabled: true,
            direction: FlexDirection::Row,
            align_items: Some("center".into()),
            justify_content: Some("space-between".into()),
            wrap: Some(FlexWrap::Wrap),
            ..Default::default()
        })
        .unwrap();

        let mut style = Style::default();
        container.apply_to(&mut style);
        assert_eq!(style.display, Display::Flex);
        assert_eq!(style.flex_direction, TaffyFlexDirection::Row);
        assert_eq!(style.flex_wrap, TaffyFlexWrap::Wrap);
        assert_eq!(style.align_items, Some(AlignItems::Center));
        assert_eq!(style.justify_content, Some(JustifyContent::SpaceBetween));

        let child = resolve_flex_child(&FlexChild {
            sizing_mode: SizingMode::Fill,
            align_self: Some("flex-end".into()),
            ..Default::default()
        });
        let mut style = Style::default();
        child.apply_to(&mut style);
        assert_eq!(style.flex_grow, 1.0);
        assert_eq!(style.flex_shrink, 1.0);
        assert_eq!(style.align_self, Some(AlignItems::FlexEnd));
    }
}
