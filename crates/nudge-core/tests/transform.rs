//! Transformer Tests
//!
//! Flatten / reconstruct behaviour over complete designs, including the
//! round-trip guarantee for designs with one layer per role.

use nudge_core::{flatten, flatten_with, reconstruct_at, Design, FlattenOptions};
use nudge_schema::{
    CornerRadius, Corners, EdgeInsets, FilterBag, FlexChild, FlexDirection, FlexLayout, Layer,
    LayerType, Position, PositionMode, ShadowKind, SizeValue, SizingMode, Spacing,
    SurfaceSettings, SurfaceType, TransformBag,
};
use serde_json::json;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::WARN)
        .try_init();
}

fn child(id: &str, kind: LayerType, parent: &str) -> Layer {
    let mut layer = Layer::new(id, kind);
    layer.parent = Some(parent.to_string());
    layer
}

/// One layer for every role, plus layers that are not roles at all.
fn full_design() -> Design {
    init_logging();

    let mut root = Layer::new("sheet", LayerType::Container).with_name("Sheet");
    root.style.background_color = Some("#0F172A".into());
    root.style.padding = Some(Spacing::Uniform(20.0));
    root.style.flex_layout = Some(FlexLayout {
        enabled: true,
        gap: 12.0,
        ..Default::default()
    });

    let mut handle = child("grip", LayerType::Handle, "sheet");
    handle.size.width = SizeValue::Px(36.0);
    handle.size.height = SizeValue::Px(5.0);

    let mut image = child("hero", LayerType::Media, "sheet");
    image.content.url = Some("https://cdn.example.com/hero.png".into());
    image.size.height = SizeValue::Px(160.0);
    image.style.border_radius = Some(CornerRadius::Corners(Corners {
        top_left: 16.0,
        top_right: 16.0,
        ..Default::default()
    }));
    image.style.gradient = Some("linear-gradient(180deg, #00000000 0%, #000000 100%)".into());

    let mut body = child("body", LayerType::Text, "sheet")
        .with_name("Body")
        .with_text("Your cart is waiting.");
    body.style.margin = Some(Spacing::Sides(EdgeInsets {
        top: 4.0,
        ..Default::default()
    }));

    let mut heading = child("heading", LayerType::Text, "sheet")
        .with_name("Heading")
        .with_text("Still thinking?");
    heading.style.font_size = Some(24.0);
    heading.style.font_weight = Some("800".into());
    heading.style.flex_child = Some(FlexChild {
        sizing_mode: SizingMode::Fill,
        ..Default::default()
    });

    let mut sub = child("sub", LayerType::Text, "sheet").with_text("Items sell out fast.");
    sub.style.opacity = Some(0.8);
    sub.style.filter = Some(FilterBag {
        grayscale: Some(20.0),
        ..Default::default()
    });

    let mut buy = child("buy", LayerType::Button, "sheet").with_text("Check out");
    buy.content.action = Some("deeplink".into());
    buy.content.href = Some("app://cart".into());
    buy.style.box_shadow = Some("0px 4px 12px 0px rgba(99, 102, 241, 0.4)".into());

    let later = child("later", LayerType::Button, "sheet")
        .with_name("Secondary")
        .with_text("Later");

    let mut close = child("close", LayerType::Icon, "sheet").with_name("Close");
    close.content.icon = Some("x".into());
    close.position = Position {
        x: 340.0,
        y: 12.0,
        mode: PositionMode::Absolute,
    };
    close.z_index = 2;

    let mut star = child("star", LayerType::Icon, "sheet");
    star.content.icon = Some("star".into());
    star.style.color = Some("#FBBF24".into());
    star.style.transform = Some(TransformBag {
        rotate: Some(15.0),
        ..Default::default()
    });

    let clip = child("clip", LayerType::Video, "sheet");

    let mut hidden = child("old-banner", LayerType::Text, "sheet").with_text("Legacy copy");
    hidden.visible = false;

    let layers = vec![
        root, handle, image, body, heading, sub, buy, later, close, star, clip, hidden,
    ];
    let mut design = Design::new(layers, SurfaceSettings::default());
    let ids: Vec<String> = design.layers[1..].iter().map(|l| l.id.clone()).collect();
    design.layers[0].children = ids;
    design
}

#[test]
fn flatten_is_idempotent_through_components() {
    let design = full_design();
    let first = flatten(&design);
    let second = flatten(&reconstruct_at(&first, 1_000));
    assert_eq!(first, second);
}

#[test]
fn flatten_is_idempotent_through_role_keys() {
    let design = full_design();
    let options = FlattenOptions {
        include_components: false,
    };
    let first = flatten_with(&design, &options);
    let rebuilt = reconstruct_at(&first, 1_000);
    let second = flatten_with(&rebuilt, &options);
    assert_eq!(first, second);

    // Synthesized layers: root plus one per role.
    assert_eq!(rebuilt.layers.len(), 10);
}

/// Roles located without any content must still come back on the role-key
/// path, or the second flatten reports them missing.
#[test]
fn flatten_is_idempotent_for_roles_without_content() {
    init_logging();
    let mut root = Layer::new("root", LayerType::Container);
    root.children = vec!["cta".into(), "pic".into()];
    let cta = child("cta", LayerType::Button, "root");
    let pic = child("pic", LayerType::Media, "root");
    let design = Design::new(vec![root, cta, pic], SurfaceSettings::default());

    let options = FlattenOptions {
        include_components: false,
    };
    let first = flatten_with(&design, &options);
    assert_eq!(first.bool("showButton"), Some(true));
    assert_eq!(first.bool("showImage"), Some(true));
    assert_eq!(first.str("buttonText"), Some(""));

    let rebuilt = reconstruct_at(&first, 1_000);
    let second = flatten_with(&rebuilt, &options);
    assert_eq!(second.bool("showButton"), Some(true));
    assert_eq!(second.bool("showImage"), Some(true));
    assert_eq!(first, second);
}

#[test]
fn flatten_is_idempotent_for_floating_video() {
    let mut design = full_design();
    design.settings.surface_type = SurfaceType::FloatingVideo;
    design.settings.video.position = "top-left".into();
    let options = FlattenOptions {
        include_components: false,
    };
    let first = flatten_with(&design, &options);
    assert_eq!(first.str("videoPosition"), Some("top-left"));
    let second = flatten_with(&reconstruct_at(&first, 7), &options);
    assert_eq!(first, second);
}

#[test]
fn role_keys_carry_layer_attributes() {
    let config = flatten(&full_design());

    assert_eq!(config.str("title"), Some("Still thinking?"));
    assert_eq!(config.f64("titleFontSize"), Some(24.0));
    assert_eq!(config.str("titleFontWeight"), Some("800"));
    assert_eq!(config.str("text"), Some("Your cart is waiting."));
    assert_eq!(config.str("subtitle"), Some("Items sell out fast."));
    assert_eq!(config.f64("subtitleOpacity"), Some(0.8));
    assert_eq!(config.f64("subtitleGrayscale"), Some(20.0));
    assert_eq!(config.f64("subtitleBrightness"), Some(100.0));

    assert_eq!(config.str("buttonText"), Some("Check out"));
    assert_eq!(config.str("buttonAction"), Some("deeplink"));
    assert_eq!(config.str("buttonUrl"), Some("app://cart"));
    assert_eq!(config.bool("buttonShadowEnabled"), Some(true));
    assert_eq!(config.str("buttonShadowColor"), Some("#6366f1"));
    assert_eq!(config.str("secondaryButtonText"), Some("Later"));

    assert_eq!(config.str("imageUrl"), Some("https://cdn.example.com/hero.png"));
    assert_eq!(
        config.get("imageBorderRadius"),
        Some(&json!({ "topLeft": 16.0, "topRight": 16.0, "bottomRight": 0.0, "bottomLeft": 0.0 }))
    );
    assert!(config.contains_key("imageGradient"));
    assert!(!config.contains_key("titleGradient"));

    assert_eq!(config.str("backgroundColor"), Some("#0F172A"));
    assert_eq!(
        config.get("padding"),
        Some(&json!({ "top": 20.0, "right": 20.0, "bottom": 20.0, "left": 20.0 }))
    );
    assert_eq!(config.f64("dragHandleWidth"), Some(36.0));
    assert_eq!(config.str("closeIconPositionType"), Some("absolute"));
    assert_eq!(config.f64("closeIconX"), Some(340.0));
    assert_eq!(config.str("iconName"), Some("star"));
    assert_eq!(config.f64("iconRotate"), Some(15.0));

    for flag in [
        "showTitle",
        "showText",
        "showHeading",
        "showSubtitle",
        "showImage",
        "showButton",
        "showSecondaryButton",
        "showDragHandle",
        "showCloseButton",
        "showIcon",
    ] {
        assert_eq!(config.bool(flag), Some(true), "{} should be set", flag);
    }
}

#[test]
fn components_keep_the_full_visible_tree() {
    let config = flatten(&full_design());
    let components = config.components();
    assert_eq!(components.len(), 1);

    let root = &components[0];
    assert_eq!(root.id, "sheet");
    assert_eq!(root.flex_layout.as_ref().map(|f| f.gap), Some(12.0));
    assert!(root.flex_child.is_none());

    let child_ids: Vec<&str> = root.children.iter().map(|c| c.id.as_str()).collect();
    assert!(child_ids.contains(&"clip"), "non-role layers travel in components");
    assert!(!child_ids.contains(&"old-banner"), "hidden layers are left out");

    let heading = root.children.iter().find(|c| c.id == "heading").unwrap();
    assert_eq!(heading.flex_child.as_ref().map(|f| f.sizing_mode), Some(SizingMode::Fill));
}

#[test]
fn reconstruct_prefers_explicit_tree_and_keeps_ids() {
    let config = flatten(&full_design());
    let rebuilt = reconstruct_at(&config, 0);
    assert_eq!(rebuilt.layers.len(), 11);
    assert_eq!(rebuilt.layers[0].id, "sheet");
    assert!(rebuilt.layers.iter().any(|l| l.kind == LayerType::Video));
}

#[test]
fn single_text_layer_sets_show_title() {
    let design = Design::new(
        vec![Layer::new("t", LayerType::Text).with_text("Hello")],
        SurfaceSettings::default(),
    );
    let config = flatten(&design);
    assert_eq!(config.str("text"), Some("Hello"));
    assert_eq!(config.bool("showTitle"), Some(true));
}

/// Unknown enum values inside the nested tree fall back to defaults instead
/// of taking the node (and its subtree) down with them.
#[test]
fn unknown_enum_values_keep_component_nodes() {
    init_logging();
    let config = serde_json::from_value(json!({
        "components": [{
            "id": "root",
            "type": "container",
            "flexLayout": { "enabled": true, "direction": "diagonal" },
            "children": [
                {
                    "id": "t",
                    "type": "text",
                    "style": { "effects": { "shadows": [{ "type": "outer-glow", "blur": 6 }] } }
                },
                {
                    "id": "b",
                    "type": "button",
                    "flexChild": { "sizingMode": "auto" }
                }
            ]
        }]
    }))
    .unwrap();

    let design = reconstruct_at(&config, 0);
    let ids: Vec<&str> = design.layers.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, ["root", "t", "b"]);

    let shadow = &design.layers[1].style.effects.as_ref().unwrap().shadows[0];
    assert_eq!(shadow.kind, ShadowKind::DropShadow);
    assert_eq!(shadow.blur, 6.0);
    let flex_child = design.layers[2].style.flex_child.as_ref().unwrap();
    assert_eq!(flex_child.sizing_mode, SizingMode::Hug);
    let layout = design.layers[0].style.flex_layout.as_ref().unwrap();
    assert_eq!(layout.direction, FlexDirection::Column);
}

#[test]
fn button_text_rebuilds_exactly_one_button() {
    let config = serde_json::from_value(json!({ "buttonText": "Buy Now" })).unwrap();
    let design = reconstruct_at(&config, 42);
    let buttons = design
        .layers
        .iter()
        .filter(|l| l.kind == LayerType::Button)
        .count();
    assert_eq!(buttons, 1);
}

#[test]
fn extra_icons_do_not_round_trip() {
    let mut design = full_design();
    let mut heart = child("heart", LayerType::Icon, "sheet");
    heart.content.icon = Some("heart".into());
    design.layers[0].children.push("heart".into());
    design.layers.push(heart);

    let options = FlattenOptions {
        include_components: false,
    };
    let first = flatten_with(&design, &options);
    assert_eq!(first.icons().len(), 1);

    let second = flatten_with(&reconstruct_at(&first, 0), &options);
    assert!(second.icons().is_empty(), "icons[] is not reconstructed");
}

#[test]
fn reconstruct_ids_are_unique_per_call() {
    let config = flatten_with(&full_design(), &FlattenOptions { include_components: false });
    let design = reconstruct_at(&config, 1_700_000_000_000);
    let mut ids: Vec<&str> = design.layers.iter().map(|l| l.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), design.layers.len());
    assert!(ids.iter().all(|id| id.starts_with("layer-17000000000")));
}
