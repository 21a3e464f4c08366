//! Responsive override resolution.
//!
//! Breakpoints are fixed: mobile below 768px, tablet up to 1024px, desktop
//! from 1024px.

use nudge_schema::{Breakpoint, Layer, Position};
use std::borrow::Cow;

pub const TABLET_MIN_WIDTH: f64 = 768.0;
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

pub fn breakpoint_for_width(viewport_width: f64) -> Breakpoint {
    if viewport_width >= DESKTOP_MIN_WIDTH {
        Breakpoint::Desktop
    } else if viewport_width >= TABLET_MIN_WIDTH {
        Breakpoint::Tablet
    } else {
        Breakpoint::Mobile
    }
}

/// Returns the layer as seen at `viewport_width`.
///
/// Without an override for the selected breakpoint the layer is borrowed
/// back unchanged. Otherwise style and position are shallow-merged with the
/// override (override wins per key) and `visible` is replaced only when the
/// override sets it.
pub fn resolve_responsive(layer: &Layer, viewport_width: f64) -> Cow<'_, Layer> {
    let breakpoint = breakpoint_for_width(viewport_width);
    let Some(over) = layer
        .responsive_overrides
        .iter()
        .find(|o| o.breakpoint == breakpoint)
    else {
        return Cow::Borrowed(layer);
    };

    let mut effective = layer.clone();
    if let Some(style) = &over.style {
        effective.style = layer.style.merged(style);
    }
    if let Some(position) = &over.position {
        effective.position = Position {
            x: position.x.unwrap_or(layer.position.x),
            y: position.y.unwrap_or(layer.position.y),
            mode: position.mode.unwrap_or(layer.position.mode),
        };
    }
    if let Some(visible) = over.visible {
        effective.visible = visible;
    }
    Cow::Owned(effective)
}
