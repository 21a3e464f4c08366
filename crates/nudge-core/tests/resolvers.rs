//! Resolver Tests
//!
//! Shadow codec, effects, responsive overrides, animation selection and the
//! keyframe style block, exercised through the public API.

use nudge_core::animation::select_animation;
use nudge_core::effects::resolve_effects;
use nudge_core::responsive::resolve_responsive;
use nudge_core::{
    parse_shadow, resolve_layer_styles, serialize_shadow, BoxShadow, KeyframeInjector,
    MemoryStyleSheet,
};
use nudge_schema::{
    AnimationTrigger, Breakpoint, EffectBag, Layer, LayerAnimation, LayerStyle, LayerType,
    ResponsiveOverride,
};
use serde_json::json;

fn animation(id: &str, trigger: AnimationTrigger, enabled: bool) -> LayerAnimation {
    serde_json::from_value(json!({
        "id": id,
        "enabled": enabled,
        "trigger": trigger,
        "keyframes": [
            { "time": 0, "properties": { "opacity": 0 } },
            { "time": 100, "properties": { "opacity": 1 } }
        ]
    }))
    .unwrap()
}

fn tablet_red() -> Layer {
    let mut layer = Layer::new("headline", LayerType::Text);
    layer.style.color = Some("#000000".into());
    layer.responsive_overrides.push(ResponsiveOverride {
        breakpoint: Breakpoint::Tablet,
        style: Some(LayerStyle {
            color: Some("#FF0000".into()),
            ..Default::default()
        }),
        position: None,
        visible: None,
    });
    layer
}

#[test]
fn serialized_shadows_parse_back() {
    let cases = [
        BoxShadow {
            color: "#1a2b3c".into(),
            opacity: 0.35,
            blur: 8.0,
            spread: 2.0,
            offset_x: 1.0,
            offset_y: -3.0,
            inset: true,
        },
        BoxShadow {
            color: "#6366f1".into(),
            opacity: 1.0,
            blur: 0.0,
            spread: 0.0,
            offset_x: 0.0,
            offset_y: 0.0,
            inset: false,
        },
        BoxShadow::default(),
    ];

    for shadow in cases {
        let css = serialize_shadow(
            &shadow.color,
            shadow.opacity,
            shadow.blur,
            shadow.spread,
            shadow.offset_x,
            shadow.offset_y,
            shadow.inset,
        );
        assert_eq!(parse_shadow(&css), shadow, "round trip of {}", css);
    }
}

#[test]
fn unreadable_shadow_yields_default() {
    assert_eq!(parse_shadow("definitely not a shadow"), BoxShadow::default());
    assert_eq!(parse_shadow(""), BoxShadow::default());
}

#[test]
fn disabled_and_inner_shadows() {
    let bag: EffectBag = serde_json::from_value(json!({
        "shadows": [
            { "enabled": false, "type": "drop-shadow", "x": 9, "y": 9, "blur": 9, "color": "#FF0000" },
            { "type": "inner-shadow", "x": 0, "y": 2, "blur": 4, "spread": 0, "color": "#000000" }
        ]
    }))
    .unwrap();

    let resolved = resolve_effects(&bag);
    assert_eq!(resolved.box_shadow.as_deref(), Some("inset 0px 2px 4px 0px #000000"));
    assert!(resolved.opacity.is_none());
    assert!(resolved.mix_blend_mode.is_none());
}

#[test]
fn effect_channels_compose() {
    let bag: EffectBag = serde_json::from_value(json!({
        "gradient": { "type": "radial", "stops": [
            { "color": "#FFFFFF", "position": 0 },
            { "color": "#000000", "position": 100 }
        ]},
        "blur": { "type": "background", "amount": 6 },
        "stroke": { "width": 2, "color": "#111827", "position": "center" },
        "opacity": 50,
        "blendMode": "multiply"
    }))
    .unwrap();

    let style = resolve_effects(&bag).to_style();
    assert_eq!(
        style.get("background"),
        Some("radial-gradient(circle, #FFFFFF 0%, #000000 100%)")
    );
    assert_eq!(style.get("backdropFilter"), Some("blur(6px)"));
    assert!(!style.contains("filter"));
    assert_eq!(style.get("outline"), Some("2px solid #111827"));
    assert_eq!(style.get("outlineOffset"), Some("-1px"));
    assert_eq!(style.get("opacity"), Some("0.5"));
    assert_eq!(style.get("mixBlendMode"), Some("multiply"));
}

#[test]
fn responsive_resolution_is_pure() {
    let layer = tablet_red();
    for width in [320.0, 375.0, 800.0, 1023.0, 1440.0] {
        let first = resolve_responsive(&layer, width).into_owned();
        let second = resolve_responsive(&layer, width).into_owned();
        assert_eq!(first, second);
    }
    assert!(layer.style.color.as_deref() == Some("#000000"), "input is untouched");
}

#[test]
fn no_mobile_override_returns_the_layer() {
    let layer = tablet_red();
    assert_eq!(*resolve_responsive(&layer, 375.0), layer);
}

#[test]
fn tablet_override_replaces_color() {
    let layer = tablet_red();
    assert_eq!(
        resolve_responsive(&layer, 800.0).style.color.as_deref(),
        Some("#FF0000")
    );
    assert_eq!(
        resolve_responsive(&layer, 375.0).style.color.as_deref(),
        Some("#000000")
    );
}

#[test]
fn first_on_enter_animation_wins() {
    let animations = vec![
        animation("fade", AnimationTrigger::OnEnter, true),
        animation("slide", AnimationTrigger::OnEnter, true),
    ];
    assert_eq!(select_animation(&animations, None).map(|a| a.id.as_str()), Some("fade"));
}

#[test]
fn disabled_preview_falls_through() {
    let animations = vec![
        animation("pulse", AnimationTrigger::OnClick, false),
        animation("fade", AnimationTrigger::OnEnter, true),
    ];
    let selected = select_animation(&animations, Some("pulse"));
    assert_eq!(selected.map(|a| a.id.as_str()), Some("fade"));

    let enabled_preview = vec![
        animation("pulse", AnimationTrigger::OnClick, true),
        animation("fade", AnimationTrigger::OnEnter, true),
    ];
    let selected = select_animation(&enabled_preview, Some("pulse"));
    assert_eq!(selected.map(|a| a.id.as_str()), Some("pulse"));
}

#[test]
fn keyframe_block_is_replaced_not_appended() {
    let mut sheet = MemoryStyleSheet::new();
    {
        let mut injector = KeyframeInjector::new(&mut sheet);

        let first = vec![animation("fade", AnimationTrigger::OnEnter, true)];
        let resolved = injector.sync(&first, None).unwrap();
        assert_eq!(resolved.to_css(), "nudge-anim-fade 300ms ease-out 0ms 1 forwards");
        let css = injector.sheet().css().unwrap().to_string();
        assert!(css.starts_with("@keyframes nudge-anim-fade {"));

        let second = vec![animation("slide", AnimationTrigger::OnEnter, true)];
        injector.sync(&second, None);
        let css = injector.sheet().css().unwrap();
        assert!(css.contains("nudge-anim-slide"));
        assert!(!css.contains("nudge-anim-fade"), "stale keyframes are removed");

        injector.sync(&second, None);
        assert_eq!(injector.sheet().writes(), 2, "unchanged lists do not rewrite");
    }
    assert_eq!(sheet.css(), None, "dropping the injector clears the block");
}

#[test]
fn pipeline_uses_the_breakpoint_layer() {
    let mut layer = tablet_red();
    layer.responsive_overrides.push(ResponsiveOverride {
        breakpoint: Breakpoint::Desktop,
        style: None,
        position: None,
        visible: Some(false),
    });

    let tablet = resolve_layer_styles(&layer, 800.0, None);
    assert_eq!(tablet.breakpoint, Breakpoint::Tablet);
    assert_eq!(tablet.to_style().get("color"), Some("#FF0000"));

    let desktop = resolve_layer_styles(&layer, 1280.0, None);
    assert!(!desktop.visible);
    assert_eq!(desktop.base.get("color"), Some("#000000"));
}
