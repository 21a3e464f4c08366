//! # Box-Shadow Codec
//!
//! Converts between a single CSS shadow string
//! (`"[inset ]<x>px <y>px <blur>px <spread>px <color>"`) and the structured
//! fields the flat config stores per role.
//!
//! Parsing is tolerant: shadows are decorative, so a string that cannot be
//! read at all yields [`BoxShadow::default`] instead of an error.
//!
//! Colors produced by [`BoxShadow::parse`] are lowercase 6-digit hex, with
//! the alpha channel split out into `opacity` (rounded to 3 decimals).

use csscolorparser::Color as CssColor;
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct BoxShadow {
    /// `#rrggbb`
    pub color: String,
    /// 0.0 - 1.0
    pub opacity: f64,
    pub blur: f64,
    pub spread: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub inset: bool,
}

impl Default for BoxShadow {
    /// The soft upward shadow used when nothing better is known.
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            opacity: 0.1,
            blur: 16.0,
            spread: 0.0,
            offset_x: 0.0,
            offset_y: -2.0,
            inset: false,
        }
    }
}

impl BoxShadow {
    /// Renders the shadow string. Fully opaque colors are written as hex,
    /// translucent ones as `rgba(r, g, b, a)`.
    pub fn to_css(&self) -> String {
        shadow_css(
            self.inset,
            self.offset_x,
            self.offset_y,
            self.blur,
            self.spread,
            &color_with_opacity(&self.color, self.opacity),
        )
    }

    /// Reads a shadow string, falling back to the default shadow when the
    /// input has neither a recognizable color nor any length.
    pub fn parse(input: &str) -> BoxShadow {
        match try_parse(input) {
            Some(shadow) => shadow,
            None => {
                debug!(input, "unreadable shadow, using default");
                BoxShadow::default()
            }
        }
    }
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Serializes the structured shadow fields into a shadow string.
pub fn serialize_shadow(
    color: &str,
    opacity: f64,
    blur: f64,
    spread: f64,
    offset_x: f64,
    offset_y: f64,
    inset: bool,
) -> String {
    shadow_css(
        inset,
        offset_x,
        offset_y,
        blur,
        spread,
        &color_with_opacity(color, opacity),
    )
}

/// Parses a shadow string into its structured fields. Never fails.
pub fn parse_shadow(input: &str) -> BoxShadow {
    BoxShadow::parse(input)
}

/// Shared layout of one shadow entry, also used by the effect resolver.
pub(crate) fn shadow_css(
    inset: bool,
    x: f64,
    y: f64,
    blur: f64,
    spread: f64,
    color: &str,
) -> String {
    format!(
        "{}{}px {}px {}px {}px {}",
        if inset { "inset " } else { "" },
        x,
        y,
        blur,
        spread,
        color
    )
}

fn color_with_opacity(color: &str, opacity: f64) -> String {
    if opacity >= 1.0 {
        return color.to_string();
    }
    match color.parse::<CssColor>() {
        Ok(parsed) => {
            let [r, g, b, _] = parsed.to_rgba8();
            format!("rgba({}, {}, {}, {})", r, g, b, round3(opacity.max(0.0)))
        }
        Err(_) => color.to_string(),
    }
}

fn try_parse(input: &str) -> Option<BoxShadow> {
    // Only the first entry of a comma-separated shadow list is read.
    let first = first_entry(input.trim());
    if first.is_empty() || first.eq_ignore_ascii_case("none") {
        return None;
    }

    let (color, rest) = extract_color(first);

    let mut inset = false;
    let mut lengths = Vec::with_capacity(4);
    for token in rest.split_whitespace() {
        if token.eq_ignore_ascii_case("inset") {
            inset = true;
        } else if let Some(length) = parse_length(token) {
            lengths.push(length);
        }
    }

    if color.is_none() && lengths.is_empty() {
        return None;
    }

    let (color, opacity) = color.unwrap_or_else(|| ("#000000".to_string(), 1.0));
    let at = |i: usize| lengths.get(i).copied().unwrap_or(0.0);

    Some(BoxShadow {
        color,
        opacity,
        offset_x: at(0),
        offset_y: at(1),
        blur: at(2),
        spread: at(3),
        inset,
    })
}

/// Cuts the input at the first comma that is not inside parentheses.
fn first_entry(input: &str) -> &str {
    let mut depth = 0usize;
    for (i, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return input[..i].trim(),
            _ => {}
        }
    }
    input
}

/// Finds the color token (`rgb()`/`rgba()` group, hex literal, or a named
/// color) and returns it normalized, plus the input with the token removed.
fn extract_color(input: &str) -> (Option<(String, f64)>, String) {
    let lower = input.to_ascii_lowercase();

    if let Some(start) = lower.find("rgb") {
        if let Some(len) = input[start..].find(')') {
            let token = &input[start..=start + len];
            let rest = format!("{} {}", &input[..start], &input[start + len + 1..]);
            return (normalize_functional(token), rest);
        }
    }

    let mut color = None;
    let mut rest = Vec::new();
    for token in input.split_whitespace() {
        if color.is_none() && token.starts_with('#') {
            color = normalize_hex(token);
            if color.is_some() {
                continue;
            }
        }
        if color.is_none() && is_named_color(token) {
            color = normalize_named(token);
            if color.is_some() {
                continue;
            }
        }
        rest.push(token);
    }
    (color, rest.join(" "))
}

fn normalize_functional(token: &str) -> Option<(String, f64)> {
    let parsed: CssColor = token.parse().ok()?;
    let [r, g, b, a] = parsed.to_rgba8();
    let opacity = explicit_alpha(token).unwrap_or_else(|| round3(f64::from(a) / 255.0));
    Some((hex(r, g, b), opacity))
}

/// The fourth argument of an `rgba(...)` group, read exactly rather than
/// through the 8-bit channel.
fn explicit_alpha(token: &str) -> Option<f64> {
    let open = token.find('(')?;
    let close = token.rfind(')')?;
    let args: Vec<&str> = token[open + 1..close]
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|a| !a.is_empty())
        .collect();
    let alpha = args.get(3)?;
    let value = match alpha.strip_suffix('%') {
        Some(pct) => pct.parse::<f64>().ok()? / 100.0,
        None => alpha.parse::<f64>().ok()?,
    };
    Some(round3(value.clamp(0.0, 1.0)))
}

fn normalize_hex(token: &str) -> Option<(String, f64)> {
    let digits = token.trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => Some((token.to_string(), 1.0)),
        3 | 4 | 8 => {
            let parsed: CssColor = token.parse().ok()?;
            let [r, g, b, a] = parsed.to_rgba8();
            Some((hex(r, g, b), round3(f64::from(a) / 255.0)))
        }
        _ => None,
    }
}

fn is_named_color(token: &str) -> bool {
    token.chars().all(|c| c.is_ascii_alphabetic()) && !token.eq_ignore_ascii_case("inset")
}

fn normalize_named(token: &str) -> Option<(String, f64)> {
    let parsed: CssColor = token.parse().ok()?;
    let [r, g, b, a] = parsed.to_rgba8();
    Some((hex(r, g, b), round3(f64::from(a) / 255.0)))
}

fn parse_length(token: &str) -> Option<f64> {
    token.trim_end_matches("px").parse().ok()
}

fn hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
