//! Semantic roles of the flat config.
//!
//! Every role addresses one layer by key prefix. The per-role data (prefix,
//! layer type, content keys, defaults) lives in the tables below so that a
//! new role is a table change.

use nudge_schema::{Corners, EdgeInsets, LayerContent, LayerType, SizeValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Container,
    DragHandle,
    Image,
    Text,
    Title,
    Subtitle,
    Button,
    SecondaryButton,
    CloseIcon,
    Icon,
}

impl Role {
    pub const COUNT: usize = 10;

    /// Canonical order: the root first, then its children as reconstruction
    /// attaches them.
    pub const ALL: [Role; Role::COUNT] = [
        Role::Container,
        Role::DragHandle,
        Role::Image,
        Role::Text,
        Role::Title,
        Role::Subtitle,
        Role::Button,
        Role::SecondaryButton,
        Role::CloseIcon,
        Role::Icon,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Role::Container => "",
            Role::DragHandle => "dragHandle",
            Role::Image => "image",
            Role::Text => "text",
            Role::Title => "title",
            Role::Subtitle => "subtitle",
            Role::Button => "button",
            Role::SecondaryButton => "secondaryButton",
            Role::CloseIcon => "closeIcon",
            Role::Icon => "icon",
        }
    }

    pub fn layer_type(self) -> LayerType {
        match self {
            Role::Container => LayerType::Container,
            Role::DragHandle => LayerType::Handle,
            Role::Image => LayerType::Media,
            Role::Text | Role::Title | Role::Subtitle => LayerType::Text,
            Role::Button | Role::SecondaryButton => LayerType::Button,
            Role::CloseIcon | Role::Icon => LayerType::Icon,
        }
    }

    /// Name given to a layer synthesized for this role. The locator reads
    /// these names back to the same role.
    pub fn layer_name(self) -> &'static str {
        match self {
            Role::Container => "Container",
            Role::DragHandle => "Drag Handle",
            Role::Image => "Image",
            Role::Text => "Text",
            Role::Title => "Title",
            Role::Subtitle => "Subtitle",
            Role::Button => "Button",
            Role::SecondaryButton => "Secondary Button",
            Role::CloseIcon => "Close Button",
            Role::Icon => "Icon",
        }
    }

    /// Flat key of attribute `attr` (PascalCase, e.g. `"FontSize"`).
    /// The unprefixed container role uses the lower-camel attribute name.
    pub fn key(self, attr: &str) -> String {
        let prefix = self.prefix();
        if !prefix.is_empty() {
            return format!("{}{}", prefix, attr);
        }
        let mut chars = attr.chars();
        match chars.next() {
            Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
            None => String::new(),
        }
    }

    /// The `show*` flag reporting whether this role was located.
    pub fn presence_flag(self) -> Option<&'static str> {
        match self {
            Role::Container => None,
            Role::DragHandle => Some("showDragHandle"),
            Role::Image => Some("showImage"),
            Role::Text => Some("showText"),
            Role::Title => Some("showHeading"),
            Role::Subtitle => Some("showSubtitle"),
            Role::Button => Some("showButton"),
            Role::SecondaryButton => Some("showSecondaryButton"),
            Role::CloseIcon => Some("showCloseButton"),
            Role::Icon => Some("showIcon"),
        }
    }

    /// Older readers only know `showTitle`, set when body text or heading
    /// was located.
    pub fn shared_flag(self) -> Option<&'static str> {
        match self {
            Role::Text | Role::Title => Some("showTitle"),
            _ => None,
        }
    }

    /// Content keys of the role. The first binding, when present, is the
    /// one whose value triggers reconstruction.
    pub fn content(self) -> &'static [ContentBinding] {
        match self {
            Role::Container | Role::DragHandle => &[],
            Role::Image => IMAGE_CONTENT,
            Role::Text | Role::Title | Role::Subtitle => TEXT_CONTENT,
            Role::Button | Role::SecondaryButton => BUTTON_CONTENT,
            Role::CloseIcon => CLOSE_ICON_CONTENT,
            Role::Icon => ICON_CONTENT,
        }
    }

    pub fn defaults(self) -> RoleDefaults {
        match self {
            Role::Container => RoleDefaults {
                width: SizeDefault::Keyword("100%"),
                background_color: "#FFFFFF",
                radius: Corners {
                    top_left: 20.0,
                    top_right: 20.0,
                    bottom_right: 0.0,
                    bottom_left: 0.0,
                },
                padding: EdgeInsets::uniform(16.0),
                ..BASE
            },
            Role::DragHandle => RoleDefaults {
                width: SizeDefault::Px(40.0),
                height: SizeDefault::Px(4.0),
                background_color: "#D1D5DB",
                radius: Corners::uniform(2.0),
                ..BASE
            },
            Role::Image => RoleDefaults {
                width: SizeDefault::Keyword("100%"),
                height: SizeDefault::Px(200.0),
                radius: Corners::uniform(8.0),
                ..BASE
            },
            Role::Text => RoleDefaults {
                width: SizeDefault::Keyword("100%"),
                color: "#4B5563",
                ..BASE
            },
            Role::Title => RoleDefaults {
                width: SizeDefault::Keyword("100%"),
                font_size: 20.0,
                font_weight: "700",
                ..BASE
            },
            Role::Subtitle => RoleDefaults {
                width: SizeDefault::Keyword("100%"),
                color: "#6B7280",
                font_size: 14.0,
                ..BASE
            },
            Role::Button => RoleDefaults {
                width: SizeDefault::Keyword("100%"),
                height: SizeDefault::Px(48.0),
                color: "#FFFFFF",
                background_color: "#6366F1",
                font_weight: "600",
                text_align: "center",
                radius: Corners::uniform(8.0),
                padding: EdgeInsets::symmetric(12.0, 24.0),
                ..BASE
            },
            Role::SecondaryButton => RoleDefaults {
                width: SizeDefault::Keyword("100%"),
                height: SizeDefault::Px(48.0),
                color: "#374151",
                font_weight: "600",
                text_align: "center",
                border_width: 1.0,
                border_color: "#D1D5DB",
                radius: Corners::uniform(8.0),
                padding: EdgeInsets::symmetric(12.0, 24.0),
                ..BASE
            },
            Role::CloseIcon => RoleDefaults {
                width: SizeDefault::Px(24.0),
                height: SizeDefault::Px(24.0),
                color: "#6B7280",
                ..BASE
            },
            Role::Icon => RoleDefaults {
                width: SizeDefault::Px(24.0),
                height: SizeDefault::Px(24.0),
                ..BASE
            },
        }
    }
}

/// Fallback size of a role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeDefault {
    Px(f64),
    Keyword(&'static str),
}

impl SizeDefault {
    pub fn to_size(self) -> SizeValue {
        match self {
            SizeDefault::Px(px) => SizeValue::Px(px),
            SizeDefault::Keyword(k) => SizeValue::Keyword(k.to_string()),
        }
    }
}

/// Per-role fallbacks for the attributes whose default differs by role.
/// Everything else falls back to the same neutral value for every role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleDefaults {
    pub width: SizeDefault,
    pub height: SizeDefault,
    pub color: &'static str,
    pub background_color: &'static str,
    pub font_size: f64,
    pub font_weight: &'static str,
    pub text_align: &'static str,
    pub border_width: f64,
    pub border_color: &'static str,
    pub radius: Corners,
    pub padding: EdgeInsets,
}

const BASE: RoleDefaults = RoleDefaults {
    width: SizeDefault::Keyword("auto"),
    height: SizeDefault::Keyword("auto"),
    color: "#111827",
    background_color: "transparent",
    font_size: 16.0,
    font_weight: "400",
    text_align: "left",
    border_width: 0.0,
    border_color: "transparent",
    radius: Corners::uniform(0.0),
    padding: EdgeInsets::uniform(0.0),
};

const TEXT_CONTENT: &[ContentBinding] = &[ContentBinding::new("", ContentField::Text, "")];
const IMAGE_CONTENT: &[ContentBinding] = &[ContentBinding::new("Url", ContentField::Url, "")];
const BUTTON_CONTENT: &[ContentBinding] = &[
    ContentBinding::new("Text", ContentField::Text, ""),
    ContentBinding::new("Action", ContentField::Action, "dismiss"),
    ContentBinding::new("Url", ContentField::Href, ""),
];
const CLOSE_ICON_CONTENT: &[ContentBinding] = &[ContentBinding::new("Name", ContentField::Icon, "x")];
const ICON_CONTENT: &[ContentBinding] = &[ContentBinding::new("Name", ContentField::Icon, "")];

/// Which [`LayerContent`] field a content key maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentField {
    Text,
    Url,
    Icon,
    Action,
    Href,
}

impl ContentField {
    pub fn get(self, content: &LayerContent) -> Option<&str> {
        match self {
            ContentField::Text => content.text.as_deref(),
            ContentField::Url => content.url.as_deref(),
            ContentField::Icon => content.icon.as_deref(),
            ContentField::Action => content.action.as_deref(),
            ContentField::Href => content.href.as_deref(),
        }
    }

    pub fn set(self, content: &mut LayerContent, value: String) {
        let slot = match self {
            ContentField::Text => &mut content.text,
            ContentField::Url => &mut content.url,
            ContentField::Icon => &mut content.icon,
            ContentField::Action => &mut content.action,
            ContentField::Href => &mut content.href,
        };
        *slot = Some(value);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBinding {
    /// Appended to the role prefix; empty for the role's main text key
    /// (`title`, `subtitle`, `text`).
    pub suffix: &'static str,
    pub field: ContentField,
    pub default: &'static str,
}

impl ContentBinding {
    const fn new(suffix: &'static str, field: ContentField, default: &'static str) -> Self {
        Self {
            suffix,
            field,
            default,
        }
    }

    pub fn key(&self, role: Role) -> String {
        format!("{}{}", role.prefix(), self.suffix)
    }
}
