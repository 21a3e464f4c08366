use serde::{Deserialize, Serialize};

/// The kind of in-app surface being designed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SurfaceType {
    #[default]
    BottomSheet,
    Modal,
    Banner,
    Tooltip,
    FloatingVideo,
}

impl SurfaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceType::BottomSheet => "bottom-sheet",
            SurfaceType::Modal => "modal",
            SurfaceType::Banner => "banner",
            SurfaceType::Tooltip => "tooltip",
            SurfaceType::FloatingVideo => "floating-video",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bottom-sheet" => Some(SurfaceType::BottomSheet),
            "modal" => Some(SurfaceType::Modal),
            "banner" => Some(SurfaceType::Banner),
            "tooltip" => Some(SurfaceType::Tooltip),
            "floating-video" => Some(SurfaceType::FloatingVideo),
            _ => None,
        }
    }

    /// Every surface except the floating video player carries sheet settings.
    pub fn is_sheet_like(&self) -> bool {
        !matches!(self, SurfaceType::FloatingVideo)
    }
}

/// Surface-wide settings that live next to the layer tree rather than in it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceSettings {
    #[serde(default)]
    pub surface_type: SurfaceType,
    #[serde(default)]
    pub overlay: OverlaySettings,
    #[serde(default)]
    pub animation: EntranceSettings,
    #[serde(default)]
    pub sheet: SheetSettings,
    #[serde(default)]
    pub video: FloatingVideoSettings,
}

/// The dimmed backdrop behind the surface.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OverlaySettings {
    /// 0.0 - 1.0
    pub opacity: f64,
    pub color: String,
    /// Backdrop blur in pixels.
    pub blur: f64,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            opacity: 0.5,
            color: "#000000".to_string(),
            blur: 0.0,
        }
    }
}

/// How the surface itself enters the screen.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EntranceSettings {
    /// Milliseconds.
    pub duration: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub easing: String,
}

impl Default for EntranceSettings {
    fn default() -> Self {
        Self {
            duration: 300.0,
            kind: "slide-up".to_string(),
            easing: "ease-out".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct SheetSettings {
    /// `"auto"`, `"half"`, `"full"` or a pixel height as string.
    pub height_mode: String,
    pub drag_handle: bool,
    pub background_image_url: String,
    /// `"cover"`, `"contain"` or `"repeat"`.
    pub background_image_mode: String,
}

impl Default for SheetSettings {
    fn default() -> Self {
        Self {
            height_mode: "auto".to_string(),
            drag_handle: true,
            background_image_url: String::new(),
            background_image_mode: "cover".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FloatingVideoSettings {
    /// Screen corner, e.g. `"bottom-right"`.
    pub position: String,
    pub width: f64,
    pub height: f64,
    pub background: String,
}

impl Default for FloatingVideoSettings {
    fn default() -> Self {
        Self {
            position: "bottom-right".to_string(),
            width: 180.0,
            height: 320.0,
            background: "#000000".to_string(),
        }
    }
}
