//! # nudge-schema
//!
//! The data model shared by the nudge editor, the transformer and the CLI:
//! the editor-side [`Layer`] tree, the declarative effect/flex/animation
//! bags, per-surface [`SurfaceSettings`], the legacy [`FlatConfig`] wire
//! record and the [`PersistedRecord`] that wraps it.
//!
//! Everything here is plain serde data with `camelCase` wire names.

pub mod animation;
mod de;
pub mod effects;
pub mod flat;
pub mod flex;
pub mod layer;
pub mod record;
pub mod settings;

pub use animation::{AnimationTrigger, Keyframe, LayerAnimation};
pub use effects::{
    BlurEffect, BlurKind, EffectBag, GradientEffect, GradientKind, GradientStop, ShadowEffect,
    ShadowKind, StrokeEffect, StrokePosition,
};
pub use flat::{ComponentNode, FlatConfig, IconEntry};
pub use flex::{FlexChild, FlexDirection, FlexLayout, FlexWrap, SizingMode};
pub use layer::{
    Breakpoint, CornerRadius, Corners, EdgeInsets, FilterBag, Layer, LayerContent, LayerSize,
    LayerStyle, LayerType, Position, PositionMode, PositionOverride, ResponsiveOverride,
    SizeValue, Spacing, TransformBag,
};
pub use record::{PersistedRecord, RecordMeta, TemplateConfig, TemplateDocument};
pub use settings::{
    EntranceSettings, FloatingVideoSettings, OverlaySettings, SheetSettings, SurfaceSettings,
    SurfaceType,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_layer_deserializes_with_defaults() {
        let layer: Layer = serde_json::from_value(json!({
            "id": "title-1",
            "type": "text",
            "content": { "text": "Hello" }
        }))
        .unwrap();

        assert_eq!(layer.kind, LayerType::Text);
        assert!(layer.visible, "layers are visible unless stated otherwise");
        assert!(!layer.locked);
        assert_eq!(layer.position.mode, PositionMode::Relative);
        assert_eq!(layer.size.width, SizeValue::auto());
        assert_eq!(layer.content.text.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_radius_and_spacing_accept_both_shapes() {
        let style: LayerStyle = serde_json::from_value(json!({
            "borderRadius": { "topLeft": 20, "topRight": 20 },
            "padding": 12,
            "margin": { "top": 4, "bottom": 8 },
            "fontWeight": 700
        }))
        .unwrap();

        let corners = style.border_radius.unwrap().to_corners();
        assert_eq!(corners.top_left, 20.0);
        assert_eq!(corners.bottom_left, 0.0);
        assert_eq!(style.padding.unwrap().to_sides(), EdgeInsets::uniform(12.0));
        assert_eq!(style.margin.unwrap().to_sides().bottom, 8.0);
        assert_eq!(style.font_weight.as_deref(), Some("700"));
    }

    #[test]
    fn test_unknown_style_keys_survive() {
        let value = json!({ "color": "#111111", "letterSpacing": 2 });
        let style: LayerStyle = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(style.extra.get("letterSpacing"), Some(&json!(2)));
        assert_eq!(serde_json::to_value(&style).unwrap(), value);
    }

    #[test]
    fn test_style_merge_is_shallow() {
        let base = LayerStyle {
            color: Some("#000000".into()),
            border_radius: Some(CornerRadius::Uniform(8.0)),
            font_size: Some(16.0),
            ..Default::default()
        };
        let over = LayerStyle {
            color: Some("#FF0000".into()),
            border_radius: Some(CornerRadius::Corners(Corners {
                top_left: 4.0,
                ..Default::default()
            })),
            ..Default::default()
        };

        let merged = base.merged(&over);
        assert_eq!(merged.color.as_deref(), Some("#FF0000"));
        assert_eq!(merged.font_size, Some(16.0));
        assert_eq!(
            merged.border_radius.unwrap().to_corners().top_right,
            0.0,
            "nested values are replaced whole"
        );
    }

    #[test]
    fn test_unknown_enum_values_fall_back() {
        let bag: EffectBag = serde_json::from_value(json!({
            "gradient": { "type": "diamond", "stops": [] },
            "stroke": { "position": "sideways" }
        }))
        .unwrap();
        assert_eq!(bag.gradient.unwrap().kind, GradientKind::Unknown);
        assert_eq!(bag.stroke.unwrap().position, StrokePosition::Unknown);
        assert_eq!(bag.opacity, 100.0);
        assert_eq!(bag.blend_mode, "normal");

        let anim: LayerAnimation =
            serde_json::from_value(json!({ "id": "a", "trigger": "on-scroll" })).unwrap();
        assert_eq!(anim.trigger, AnimationTrigger::Unknown);
        assert!(anim.enabled);
        assert!(!anim.looping);
    }

    #[test]
    fn test_unknown_shadow_and_flex_values_read_as_defaults() {
        let bag: EffectBag = serde_json::from_value(json!({
            "shadows": [{ "type": "outer-glow" }, { "type": "inner-shadow" }]
        }))
        .unwrap();
        assert_eq!(bag.shadows[0].kind, ShadowKind::DropShadow);
        assert_eq!(bag.shadows[1].kind, ShadowKind::InnerShadow);

        let layout: FlexLayout =
            serde_json::from_value(json!({ "direction": "diagonal", "wrap": "balance" })).unwrap();
        assert_eq!(layout.direction, FlexDirection::Column);
        assert_eq!(layout.wrap, Some(FlexWrap::Nowrap));

        let child: FlexChild = serde_json::from_value(json!({ "sizingMode": "auto" })).unwrap();
        assert_eq!(child.sizing_mode, SizingMode::Hug);
        assert_eq!(
            serde_json::to_value(ShadowKind::DropShadow).unwrap(),
            json!("drop-shadow")
        );
    }

    #[test]
    fn test_component_children_skip_bare_ids() {
        let node: ComponentNode = serde_json::from_value(json!({
            "id": "root",
            "type": "container",
            "children": ["dangling", { "id": "t", "type": "text" }]
        }))
        .unwrap();
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].id, "t");
    }

    #[test]
    fn test_flat_config_readers_are_lenient() {
        let config: FlatConfig = serde_json::from_value(json!({
            "titleFontSize": "18px",
            "showButton": "true",
            "text": "   ",
            "components": [{ "id": "a", "type": "text" }, { "broken": true }]
        }))
        .unwrap();

        assert_eq!(config.f64("titleFontSize"), Some(18.0));
        assert_eq!(config.bool("showButton"), Some(true));
        assert_eq!(config.non_empty_str("text"), None);
        assert_eq!(config.components().len(), 1);
    }

    #[test]
    fn test_record_roundtrip() {
        let record: PersistedRecord = serde_json::from_value(json!({
            "type": "bottom-sheet",
            "trigger": { "event": "app_open" },
            "config": { "text": "Hi" }
        }))
        .unwrap();
        assert_eq!(record.status, "draft");
        assert!(record.layers.is_none());

        let json = serde_json::to_string(&record).unwrap();
        let loaded: PersistedRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: SurfaceSettings = serde_json::from_value(json!({
            "surfaceType": "floating-video",
            "overlay": { "opacity": 0.7 }
        }))
        .unwrap();
        assert_eq!(settings.surface_type, SurfaceType::FloatingVideo);
        assert_eq!(settings.overlay.opacity, 0.7);
        assert_eq!(settings.overlay.color, "#000000");
        assert!(!settings.surface_type.is_sheet_like());
    }
}
