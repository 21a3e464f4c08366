//! Surface-wide settings in the flat config.
//!
//! These keys are independent of the layer tree. Sheet keys are written
//! for sheet-like surfaces and video keys for the floating video surface;
//! reading accepts both groups regardless of the surface type.

use nudge_schema::{FlatConfig, SurfaceSettings, SurfaceType};

pub fn write_settings(settings: &SurfaceSettings, config: &mut FlatConfig) {
    config.insert("surfaceType", settings.surface_type.as_str());
    config.insert("overlayOpacity", settings.overlay.opacity);
    config.insert("overlayColor", settings.overlay.color.clone());
    config.insert("overlayBlur", settings.overlay.blur);
    config.insert("animationDuration", settings.animation.duration);
    config.insert("animationType", settings.animation.kind.clone());
    config.insert("animationEasing", settings.animation.easing.clone());

    if settings.surface_type.is_sheet_like() {
        let sheet = &settings.sheet;
        config.insert("heightMode", sheet.height_mode.clone());
        config.insert("dragHandle", sheet.drag_handle);
        config.insert("backgroundImageUrl", sheet.background_image_url.clone());
        config.insert("backgroundImageMode", sheet.background_image_mode.clone());
    } else {
        let video = &settings.video;
        config.insert("videoPosition", video.position.clone());
        config.insert("videoWidth", video.width);
        config.insert("videoHeight", video.height);
        config.insert("videoBackground", video.background.clone());
    }
}

pub fn read_settings(config: &FlatConfig) -> SurfaceSettings {
    let mut settings = SurfaceSettings::default();
    let text = |key: &str| config.str(key).map(str::to_string);

    if let Some(kind) = config.str("surfaceType").and_then(SurfaceType::parse) {
        settings.surface_type = kind;
    }

    let overlay = &mut settings.overlay;
    overlay.opacity = config.f64("overlayOpacity").unwrap_or(overlay.opacity);
    overlay.color = text("overlayColor").unwrap_or_else(|| overlay.color.clone());
    overlay.blur = config.f64("overlayBlur").unwrap_or(overlay.blur);

    let animation = &mut settings.animation;
    animation.duration = config.f64("animationDuration").unwrap_or(animation.duration);
    animation.kind = text("animationType").unwrap_or_else(|| animation.kind.clone());
    animation.easing = text("animationEasing").unwrap_or_else(|| animation.easing.clone());

    let sheet = &mut settings.sheet;
    sheet.height_mode = match config.get("heightMode") {
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => text("heightMode").unwrap_or_else(|| sheet.height_mode.clone()),
    };
    sheet.drag_handle = config.bool("dragHandle").unwrap_or(sheet.drag_handle);
    sheet.background_image_url =
        text("backgroundImageUrl").unwrap_or_else(|| sheet.background_image_url.clone());
    sheet.background_image_mode =
        text("backgroundImageMode").unwrap_or_else(|| sheet.background_image_mode.clone());

    let video = &mut settings.video;
    video.position = text("videoPosition").unwrap_or_else(|| video.position.clone());
    video.width = config.f64("videoWidth").unwrap_or(video.width);
    video.height = config.f64("videoHeight").unwrap_or(video.height);
    video.background = text("videoBackground").unwrap_or_else(|| video.background.clone());

    settings
}
