//! # Effect Style Resolver
//!
//! Turns a layer's declarative [`EffectBag`] into resolved CSS.
//!
//! ## Channels
//! - **Shadows**: enabled entries, comma-joined, `inner-shadow` rendered `inset`.
//! - **Gradient**: linear / radial / conic background.
//! - **Blur**: layer blur goes to `filter`, background blur to `backdropFilter`.
//! - **Stroke**: inside = border, center = inward-offset outline, outside = ring shadow.
//! - **Opacity / blend mode**: only emitted when they differ from the defaults.
//!
//! Each channel writes its own keys. The one shared key is `boxShadow`:
//! an outside stroke ring is appended after the effect shadows.

use crate::shadow::shadow_css;
use crate::types::{px, StyleFragment};
use nudge_schema::{
    BlurEffect, BlurKind, EffectBag, GradientEffect, GradientKind, ShadowEffect, ShadowKind,
    StrokeEffect, StrokePosition,
};
use serde::Serialize;

/// Resolved effect styles. Unset fields contribute nothing.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEffects {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backdrop_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline_offset: Option<String>,
    /// CSS opacity (0.0 - 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mix_blend_mode: Option<String>,
}

impl ResolvedEffects {
    pub fn is_empty(&self) -> bool {
        *self == ResolvedEffects::default()
    }

    pub fn to_style(&self) -> StyleFragment {
        let mut style = StyleFragment::new();
        style.set_opt("boxShadow", self.box_shadow.clone());
        style.set_opt("background", self.background.clone());
        style.set_opt("filter", self.filter.clone());
        style.set_opt("backdropFilter", self.backdrop_filter.clone());
        style.set_opt("border", self.border.clone());
        style.set_opt("outline", self.outline.clone());
        style.set_opt("outlineOffset", self.outline_offset.clone());
        style.set_opt("opacity", self.opacity.map(|o| o.to_string()));
        style.set_opt("mixBlendMode", self.mix_blend_mode.clone());
        style
    }
}

/// Resolves every effect channel of `bag`.
pub fn resolve_effects(bag: &EffectBag) -> ResolvedEffects {
    let mut resolved = ResolvedEffects {
        box_shadow: resolve_shadows(&bag.shadows),
        background: bag.gradient.as_ref().and_then(resolve_gradient),
        ..Default::default()
    };

    if let Some(blur) = &bag.blur {
        apply_blur(blur, &mut resolved);
    }
    if let Some(stroke) = &bag.stroke {
        apply_stroke(stroke, &mut resolved);
    }

    if (bag.opacity - 100.0).abs() > f64::EPSILON {
        resolved.opacity = Some(bag.opacity.clamp(0.0, 100.0) / 100.0);
    }
    if !bag.blend_mode.is_empty() && bag.blend_mode != "normal" {
        resolved.mix_blend_mode = Some(bag.blend_mode.clone());
    }

    resolved
}

fn resolve_shadows(shadows: &[ShadowEffect]) -> Option<String> {
    let entries: Vec<String> = shadows
        .iter()
        .filter(|s| s.enabled)
        .map(|s| {
            shadow_css(
                s.kind == ShadowKind::InnerShadow,
                s.x,
                s.y,
                s.blur,
                s.spread,
                &s.color,
            )
        })
        .collect();

    if entries.is_empty() {
        None
    } else {
        Some(entries.join(", "))
    }
}

/// Renders a gradient background. Unknown kinds and empty stop lists paint nothing.
pub fn resolve_gradient(gradient: &GradientEffect) -> Option<String> {
    if !gradient.enabled || gradient.stops.is_empty() {
        return None;
    }

    let stops = gradient
        .stops
        .iter()
        .map(|stop| format!("{} {}%", stop.color, stop.position))
        .collect::<Vec<_>>()
        .join(", ");

    match gradient.kind {
        GradientKind::Linear => Some(format!("linear-gradient({}deg, {})", gradient.angle, stops)),
        GradientKind::Radial => Some(format!("radial-gradient(circle, {})", stops)),
        GradientKind::Angular | GradientKind::Conic => Some(format!(
            "conic-gradient(from {}deg, {})",
            gradient.angle, stops
        )),
        GradientKind::Unknown => None,
    }
}

fn apply_blur(blur: &BlurEffect, resolved: &mut ResolvedEffects) {
    if !blur.enabled || blur.amount <= 0.0 {
        return;
    }
    let value = format!("blur({})", px(blur.amount));
    match blur.kind {
        BlurKind::Layer => resolved.filter = Some(value),
        BlurKind::Background => resolved.backdrop_filter = Some(value),
        BlurKind::Unknown => {}
    }
}

fn apply_stroke(stroke: &StrokeEffect, resolved: &mut ResolvedEffects) {
    if !stroke.enabled || stroke.width <= 0.0 {
        return;
    }

    match stroke.position {
        StrokePosition::Center => {
            resolved.outline = Some(format!(
                "{} {} {}",
                px(stroke.width),
                stroke.style,
                stroke.color
            ));
            resolved.outline_offset = Some(px(-stroke.width / 2.0));
        }
        StrokePosition::Outside => {
            let ring = shadow_css(false, 0.0, 0.0, 0.0, stroke.width, &stroke.color);
            resolved.box_shadow = Some(match resolved.box_shadow.take() {
                Some(shadows) => format!("{}, {}", shadows, ring),
                None => ring,
            });
        }
        StrokePosition::Inside | StrokePosition::Unknown => {
            resolved.border = Some(format!(
                "{} {} {}",
                px(stroke.width),
                stroke.style,
                stroke.color
            ));
        }
    }
}
