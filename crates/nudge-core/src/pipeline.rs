//! # Render-time style pipeline
//!
//! Runs every resolver against one layer for a given viewport:
//! responsive overrides first, then effects, flex and animation on the
//! effective layer.

use crate::animation::{resolve_animation, AnimationOutput};
use crate::effects::{resolve_effects, ResolvedEffects};
use crate::flex::{resolve_flex_child, resolve_flex_container, FlexChildStyle, FlexContainerStyle};
use crate::responsive::{breakpoint_for_width, resolve_responsive};
use crate::types::{px, StyleFragment};
use nudge_schema::{Breakpoint, Layer, LayerStyle, PositionMode};
use serde::Serialize;
use tracing::instrument;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedLayerStyle {
    pub layer_id: String,
    pub breakpoint: Breakpoint,
    /// Effective visibility. How a hidden layer is shown is up to the caller.
    pub visible: bool,
    /// Plain style attributes of the effective layer.
    pub base: StyleFragment,
    pub effects: ResolvedEffects,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_container: Option<FlexContainerStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flex_child: Option<FlexChildStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationOutput>,
}

impl ResolvedLayerStyle {
    /// Everything merged into one fragment. Resolved effects override the
    /// plain attributes they overlap with.
    pub fn to_style(&self) -> StyleFragment {
        let mut style = self.base.clone();
        style.extend(self.effects.to_style());
        if let Some(container) = &self.flex_container {
            style.extend(container.to_style());
        }
        if let Some(child) = &self.flex_child {
            style.extend(child.to_style());
        }
        if let Some(animation) = &self.animation {
            style.extend(animation.animation.to_style());
        }
        style
    }
}

#[instrument(level = "debug", skip_all, fields(layer = %layer.id, viewport_width))]
pub fn resolve_layer_styles(
    layer: &Layer,
    viewport_width: f64,
    preview_animation_id: Option<&str>,
) -> ResolvedLayerStyle {
    let effective = resolve_responsive(layer, viewport_width);
    let style = &effective.style;

    ResolvedLayerStyle {
        layer_id: effective.id.clone(),
        breakpoint: breakpoint_for_width(viewport_width),
        visible: effective.visible,
        base: base_style(&effective),
        effects: style.effects.as_ref().map(resolve_effects).unwrap_or_default(),
        flex_container: style.flex_layout.as_ref().and_then(resolve_flex_container),
        flex_child: style.flex_child.as_ref().map(resolve_flex_child),
        animation: resolve_animation(&effective.animations, preview_animation_id),
    }
}

/// Maps the plain geometry and style attributes of a layer to CSS.
pub fn base_style(layer: &Layer) -> StyleFragment {
    let mut out = StyleFragment::new();
    let s: &LayerStyle = &layer.style;

    out.set("width", layer.size.width.to_string());
    out.set("height", layer.size.height.to_string());
    if layer.position.mode == PositionMode::Absolute {
        out.set("position", "absolute");
        out.set("left", px(layer.position.x));
        out.set("top", px(layer.position.y));
    }
    if layer.z_index != 0 {
        out.set("zIndex", layer.z_index.to_string());
    }

    out.set_opt("color", s.color.clone());
    out.set_opt("backgroundColor", s.background_color.clone());
    out.set_opt("fontSize", s.font_size.map(px));
    out.set_opt("fontWeight", s.font_weight.clone());
    out.set_opt("textAlign", s.text_align.clone());

    if let Some(width) = s.border_width {
        out.set(
            "border",
            format!(
                "{} {} {}",
                px(width),
                s.border_style.as_deref().unwrap_or("solid"),
                s.border_color.as_deref().unwrap_or("transparent")
            ),
        );
    }
    if let Some(radius) = s.border_radius {
        let c = radius.to_corners();
        out.set(
            "borderRadius",
            format!(
                "{} {} {} {}",
                px(c.top_left),
                px(c.top_right),
                px(c.bottom_right),
                px(c.bottom_left)
            ),
        );
    }
    for (property, spacing) in [("padding", s.padding), ("margin", s.margin)] {
        if let Some(spacing) = spacing {
            let e = spacing.to_sides();
            out.set(
                property,
                format!("{} {} {} {}", px(e.top), px(e.right), px(e.bottom), px(e.left)),
            );
        }
    }

    out.set_opt("boxShadow", s.box_shadow.clone());
    out.set_opt("background", s.gradient.clone());
    out.set_opt("opacity", s.opacity.map(|o| o.to_string()));

    if let Some(filter) = s.filter {
        let parts: Vec<String> = [
            filter.blur.map(|v| format!("blur({})", px(v))),
            filter.brightness.map(|v| format!("brightness({}%)", v)),
            filter.contrast.map(|v| format!("contrast({}%)", v)),
            filter.grayscale.map(|v| format!("grayscale({}%)", v)),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !parts.is_empty() {
            out.set("filter", parts.join(" "));
        }
    }

    if let Some(t) = s.transform {
        let mut parts = Vec::new();
        if t.translate_x.is_some() || t.translate_y.is_some() {
            parts.push(format!(
                "translate({}, {})",
                px(t.translate_x.unwrap_or(0.0)),
                px(t.translate_y.unwrap_or(0.0))
            ));
        }
        if let Some(rotate) = t.rotate {
            parts.push(format!("rotate({}deg)", rotate));
        }
        if let Some(scale) = t.scale {
            parts.push(format!("scale({})", scale));
        }
        if !parts.is_empty() {
            out.set("transform", parts.join(" "));
        }
    }

    out
}
