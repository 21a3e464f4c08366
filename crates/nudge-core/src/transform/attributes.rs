//! The styled attribute group every role carries in the flat config.
//!
//! One record type stands in for all role prefixes: [`RoleAttributes`] is
//! read from a layer or from flat keys, and written back to either, with
//! the role only deciding the key prefix and the fallbacks.

use super::roles::Role;
use crate::shadow::BoxShadow;
use nudge_schema::{
    CornerRadius, Corners, EdgeInsets, FilterBag, FlatConfig, Layer, PositionMode, SizeValue,
    Spacing, TransformBag,
};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct RoleAttributes {
    pub x: f64,
    pub y: f64,
    pub position_type: PositionMode,
    pub width: SizeValue,
    pub height: SizeValue,
    pub z_index: i64,
    pub color: String,
    pub background_color: String,
    pub font_size: f64,
    pub font_weight: String,
    pub text_align: String,
    pub border_width: f64,
    pub border_color: String,
    pub border_style: String,
    pub border_radius: Corners,
    pub padding: EdgeInsets,
    pub margin: EdgeInsets,
    pub opacity: f64,
    pub shadow_enabled: bool,
    pub shadow: BoxShadow,
    pub blur: f64,
    pub brightness: f64,
    pub contrast: f64,
    pub grayscale: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate: f64,
    pub scale: f64,
    pub gradient: Option<String>,
}

impl RoleAttributes {
    pub fn defaults(role: Role) -> Self {
        let d = role.defaults();
        Self {
            x: 0.0,
            y: 0.0,
            position_type: PositionMode::Relative,
            width: d.width.to_size(),
            height: d.height.to_size(),
            z_index: 0,
            color: d.color.to_string(),
            background_color: d.background_color.to_string(),
            font_size: d.font_size,
            font_weight: d.font_weight.to_string(),
            text_align: d.text_align.to_string(),
            border_width: d.border_width,
            border_color: d.border_color.to_string(),
            border_style: "solid".to_string(),
            border_radius: d.radius,
            padding: d.padding,
            margin: EdgeInsets::default(),
            opacity: 1.0,
            shadow_enabled: false,
            shadow: BoxShadow::default(),
            blur: 0.0,
            brightness: 100.0,
            contrast: 100.0,
            grayscale: 0.0,
            translate_x: 0.0,
            translate_y: 0.0,
            rotate: 0.0,
            scale: 1.0,
            gradient: None,
        }
    }

    /// Reads the attributes of a located layer; anything the layer leaves
    /// unset takes the role's fallback.
    pub fn from_layer(role: Role, layer: &Layer) -> Self {
        let d = Self::defaults(role);
        let style = &layer.style;
        let filter = style.filter.unwrap_or_default();
        let transform = style.transform.unwrap_or_default();
        let shadow = style
            .box_shadow
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("none"));

        Self {
            x: layer.position.x,
            y: layer.position.y,
            position_type: layer.position.mode,
            width: layer.size.width.clone(),
            height: layer.size.height.clone(),
            z_index: layer.z_index,
            color: style.color.clone().unwrap_or(d.color),
            background_color: style.background_color.clone().unwrap_or(d.background_color),
            font_size: style.font_size.unwrap_or(d.font_size),
            font_weight: style.font_weight.clone().unwrap_or(d.font_weight),
            text_align: style.text_align.clone().unwrap_or(d.text_align),
            border_width: style.border_width.unwrap_or(d.border_width),
            border_color: style.border_color.clone().unwrap_or(d.border_color),
            border_style: style.border_style.clone().unwrap_or(d.border_style),
            border_radius: style
                .border_radius
                .map_or(d.border_radius, |r| r.to_corners()),
            padding: style.padding.map_or(d.padding, |p| p.to_sides()),
            margin: style.margin.map_or(d.margin, |m| m.to_sides()),
            opacity: style.opacity.unwrap_or(d.opacity),
            shadow_enabled: shadow.is_some(),
            shadow: shadow.map_or(d.shadow, BoxShadow::parse),
            blur: filter.blur.unwrap_or(d.blur),
            brightness: filter.brightness.unwrap_or(d.brightness),
            contrast: filter.contrast.unwrap_or(d.contrast),
            grayscale: filter.grayscale.unwrap_or(d.grayscale),
            translate_x: transform.translate_x.unwrap_or(d.translate_x),
            translate_y: transform.translate_y.unwrap_or(d.translate_y),
            rotate: transform.rotate.unwrap_or(d.rotate),
            scale: transform.scale.unwrap_or(d.scale),
            gradient: style.gradient.clone().filter(|g| !g.trim().is_empty()),
        }
    }

    /// Reads the attributes from role-prefixed flat keys. Missing or
    /// mistyped keys take the role's fallback.
    pub fn read(role: Role, config: &FlatConfig) -> Self {
        let d = Self::defaults(role);
        let key = |attr: &str| role.key(attr);
        let num = |attr: &str, fallback: f64| config.f64(&key(attr)).unwrap_or(fallback);
        let text = |attr: &str, fallback: &str| {
            config
                .str(&key(attr))
                .map_or_else(|| fallback.to_string(), str::to_string)
        };

        let shadow = BoxShadow {
            color: text("ShadowColor", &d.shadow.color),
            opacity: num("ShadowOpacity", d.shadow.opacity),
            blur: num("ShadowBlur", d.shadow.blur),
            spread: num("ShadowSpread", d.shadow.spread),
            offset_x: num("ShadowOffsetX", d.shadow.offset_x),
            offset_y: num("ShadowOffsetY", d.shadow.offset_y),
            inset: config.bool(&key("ShadowInset")).unwrap_or(d.shadow.inset),
        };

        Self {
            x: num("X", d.x),
            y: num("Y", d.y),
            position_type: config
                .str(&key("PositionType"))
                .and_then(PositionMode::parse)
                .unwrap_or(d.position_type),
            width: config
                .get(&key("Width"))
                .and_then(SizeValue::from_value)
                .unwrap_or(d.width),
            height: config
                .get(&key("Height"))
                .and_then(SizeValue::from_value)
                .unwrap_or(d.height),
            z_index: num("ZIndex", d.z_index as f64) as i64,
            color: text("Color", &d.color),
            background_color: text("BackgroundColor", &d.background_color),
            font_size: num("FontSize", d.font_size),
            font_weight: match config.get(&key("FontWeight")) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => d.font_weight,
            },
            text_align: text("TextAlign", &d.text_align),
            border_width: num("BorderWidth", d.border_width),
            border_color: text("BorderColor", &d.border_color),
            border_style: text("BorderStyle", &d.border_style),
            border_radius: read_corners(config.get(&key("BorderRadius")), d.border_radius),
            padding: read_sides(config.get(&key("Padding")), d.padding),
            margin: read_sides(config.get(&key("Margin")), d.margin),
            opacity: num("Opacity", d.opacity),
            shadow_enabled: config.bool(&key("ShadowEnabled")).unwrap_or(false),
            shadow,
            blur: num("Blur", d.blur),
            brightness: num("Brightness", d.brightness),
            contrast: num("Contrast", d.contrast),
            grayscale: num("Grayscale", d.grayscale),
            translate_x: num("TranslateX", d.translate_x),
            translate_y: num("TranslateY", d.translate_y),
            rotate: num("Rotate", d.rotate),
            scale: num("Scale", d.scale),
            gradient: config.non_empty_str(&key("Gradient")).map(str::to_string),
        }
    }

    /// Writes the full attribute group under the role's prefix.
    pub fn write(&self, role: Role, config: &mut FlatConfig) {
        let mut put = |attr: &str, value: Value| config.insert(role.key(attr), value);

        put("X", json!(self.x));
        put("Y", json!(self.y));
        put("PositionType", json!(self.position_type.as_str()));
        put("Width", self.width.to_value());
        put("Height", self.height.to_value());
        put("ZIndex", json!(self.z_index));
        put("Color", json!(self.color));
        put("BackgroundColor", json!(self.background_color));
        put("FontSize", json!(self.font_size));
        put("FontWeight", json!(self.font_weight));
        put("TextAlign", json!(self.text_align));
        put("BorderWidth", json!(self.border_width));
        put("BorderColor", json!(self.border_color));
        put("BorderStyle", json!(self.border_style));
        put("BorderRadius", corners_value(&self.border_radius));
        put("Padding", sides_value(&self.padding));
        put("Margin", sides_value(&self.margin));
        put("Opacity", json!(self.opacity));
        put("ShadowEnabled", json!(self.shadow_enabled));
        put("ShadowColor", json!(self.shadow.color));
        put("ShadowOpacity", json!(self.shadow.opacity));
        put("ShadowBlur", json!(self.shadow.blur));
        put("ShadowSpread", json!(self.shadow.spread));
        put("ShadowOffsetX", json!(self.shadow.offset_x));
        put("ShadowOffsetY", json!(self.shadow.offset_y));
        put("ShadowInset", json!(self.shadow.inset));
        put("Blur", json!(self.blur));
        put("Brightness", json!(self.brightness));
        put("Contrast", json!(self.contrast));
        put("Grayscale", json!(self.grayscale));
        put("TranslateX", json!(self.translate_x));
        put("TranslateY", json!(self.translate_y));
        put("Rotate", json!(self.rotate));
        put("Scale", json!(self.scale));
        if let Some(gradient) = &self.gradient {
            put("Gradient", json!(gradient));
        }
    }

    /// Writes the attributes onto a layer. Filter and transform bags are
    /// only attached when they differ from the identity.
    pub fn apply_to_layer(&self, layer: &mut Layer) {
        layer.position.x = self.x;
        layer.position.y = self.y;
        layer.position.mode = self.position_type;
        layer.size.width = self.width.clone();
        layer.size.height = self.height.clone();
        layer.z_index = self.z_index;

        let style = &mut layer.style;
        style.color = Some(self.color.clone());
        style.background_color = Some(self.background_color.clone());
        style.font_size = Some(self.font_size);
        style.font_weight = Some(self.font_weight.clone());
        style.text_align = Some(self.text_align.clone());
        style.border_width = Some(self.border_width);
        style.border_color = Some(self.border_color.clone());
        style.border_style = Some(self.border_style.clone());
        style.border_radius = Some(compact_corners(self.border_radius));
        style.padding = Some(compact_sides(self.padding));
        style.margin = Some(compact_sides(self.margin));
        style.opacity = Some(self.opacity);
        style.box_shadow = self.shadow_enabled.then(|| self.shadow.to_css());
        style.gradient = self.gradient.clone();

        let identity_filter = self.blur == 0.0
            && self.brightness == 100.0
            && self.contrast == 100.0
            && self.grayscale == 0.0;
        style.filter = (!identity_filter).then_some(FilterBag {
            blur: Some(self.blur),
            brightness: Some(self.brightness),
            contrast: Some(self.contrast),
            grayscale: Some(self.grayscale),
        });

        let identity_transform = self.translate_x == 0.0
            && self.translate_y == 0.0
            && self.rotate == 0.0
            && self.scale == 1.0;
        style.transform = (!identity_transform).then_some(TransformBag {
            translate_x: Some(self.translate_x),
            translate_y: Some(self.translate_y),
            rotate: Some(self.rotate),
            scale: Some(self.scale),
        });
    }
}

/// Object form wins; a scalar is broadcast; each missing corner of an
/// object takes the fallback's corner.
fn read_corners(value: Option<&Value>, fallback: Corners) -> Corners {
    match value {
        Some(Value::Number(n)) => n.as_f64().map_or(fallback, Corners::uniform),
        Some(Value::Object(map)) => {
            let corner = |k: &str, f: f64| map.get(k).and_then(Value::as_f64).unwrap_or(f);
            Corners {
                top_left: corner("topLeft", fallback.top_left),
                top_right: corner("topRight", fallback.top_right),
                bottom_right: corner("bottomRight", fallback.bottom_right),
                bottom_left: corner("bottomLeft", fallback.bottom_left),
            }
        }
        _ => fallback,
    }
}

fn read_sides(value: Option<&Value>, fallback: EdgeInsets) -> EdgeInsets {
    match value {
        Some(Value::Number(n)) => n.as_f64().map_or(fallback, EdgeInsets::uniform),
        Some(Value::Object(map)) => {
            let side = |k: &str, f: f64| map.get(k).and_then(Value::as_f64).unwrap_or(f);
            EdgeInsets {
                top: side("top", fallback.top),
                right: side("right", fallback.right),
                bottom: side("bottom", fallback.bottom),
                left: side("left", fallback.left),
            }
        }
        _ => fallback,
    }
}

fn corners_value(c: &Corners) -> Value {
    json!({
        "topLeft": c.top_left,
        "topRight": c.top_right,
        "bottomRight": c.bottom_right,
        "bottomLeft": c.bottom_left,
    })
}

fn sides_value(s: &EdgeInsets) -> Value {
    json!({
        "top": s.top,
        "right": s.right,
        "bottom": s.bottom,
        "left": s.left,
    })
}

fn compact_corners(c: Corners) -> CornerRadius {
    if c == Corners::uniform(c.top_left) {
        CornerRadius::Uniform(c.top_left)
    } else {
        CornerRadius::Corners(c)
    }
}

fn compact_sides(s: EdgeInsets) -> Spacing {
    if s == EdgeInsets::uniform(s.top) {
        Spacing::Uniform(s.top)
    } else {
        Spacing::Sides(s)
    }
}
