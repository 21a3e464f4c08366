//! # Animation Style Resolver
//!
//! Picks the active animation of a layer and renders it as a CSS animation
//! declaration plus the matching `@keyframes` block.
//!
//! The keyframe block has to live in the surrounding document. That side
//! effect goes through the [`StyleSheet`] handle owned by a
//! [`KeyframeInjector`], which always removes the previous block before
//! writing the next one.

use crate::types::StyleFragment;
use nudge_schema::{AnimationTrigger, Keyframe, LayerAnimation};
use serde::Serialize;
use serde_json::Value;
use std::fmt::Write as _;

/// Prefix of every generated keyframe name.
pub const KEYFRAME_PREFIX: &str = "nudge-anim-";

/// Selects the animation to play.
///
/// First match wins:
/// 1. the enabled animation whose id equals `preview_id`,
/// 2. the first enabled `on-enter` animation,
/// 3. nothing.
pub fn select_animation<'a>(
    animations: &'a [LayerAnimation],
    preview_id: Option<&str>,
) -> Option<&'a LayerAnimation> {
    let preview = preview_id.and_then(|id| {
        animations
            .iter()
            .find(|anim| anim.enabled && anim.id == id)
    });

    preview.or_else(|| {
        animations
            .iter()
            .find(|anim| anim.enabled && anim.trigger == AnimationTrigger::OnEnter)
    })
}

/// A named-keyframe reference ready to be written as `animation: ...`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAnimation {
    pub name: String,
    /// Milliseconds.
    pub duration: f64,
    pub easing: String,
    /// Milliseconds.
    pub delay: f64,
    /// `"infinite"` for looping animations, `"1"` otherwise.
    pub iteration_count: String,
    pub fill_mode: String,
}

impl ResolvedAnimation {
    pub fn from_animation(animation: &LayerAnimation) -> Self {
        Self {
            name: keyframe_name(&animation.id),
            duration: animation.duration,
            easing: animation.easing.clone(),
            delay: animation.delay,
            iteration_count: if animation.looping { "infinite" } else { "1" }.to_string(),
            fill_mode: "forwards".to_string(),
        }
    }

    /// The `animation` shorthand value.
    pub fn to_css(&self) -> String {
        format!(
            "{} {}ms {} {}ms {} {}",
            self.name, self.duration, self.easing, self.delay, self.iteration_count, self.fill_mode
        )
    }

    pub fn to_style(&self) -> StyleFragment {
        let mut style = StyleFragment::new();
        style.set("animationName", self.name.clone());
        style.set("animationDuration", format!("{}ms", self.duration));
        style.set("animationTimingFunction", self.easing.clone());
        style.set("animationDelay", format!("{}ms", self.delay));
        style.set("animationIterationCount", self.iteration_count.clone());
        style.set("animationFillMode", self.fill_mode.clone());
        style
    }
}

/// Keyframe name for an animation id. Characters that are not valid in a
/// CSS identifier are replaced with `-`.
pub fn keyframe_name(animation_id: &str) -> String {
    let ident: String = animation_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect();
    format!("{}{}", KEYFRAME_PREFIX, ident)
}

/// Renders an `@keyframes` block. Entries are written in the order given;
/// callers supply them sorted by `time`.
pub fn keyframes_css(name: &str, keyframes: &[Keyframe]) -> String {
    let mut css = format!("@keyframes {} {{\n", name);
    for frame in keyframes {
        let _ = write!(css, "  {}% {{", frame.time);
        for (key, value) in &frame.properties {
            let _ = write!(css, " {}: {};", key, css_value(value));
        }
        css.push_str(" }\n");
    }
    css.push('}');
    css
}

fn css_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// The resolved declaration together with its keyframe text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationOutput {
    pub animation: ResolvedAnimation,
    pub keyframes: String,
}

pub fn resolve_animation(
    animations: &[LayerAnimation],
    preview_id: Option<&str>,
) -> Option<AnimationOutput> {
    let selected = select_animation(animations, preview_id)?;
    let animation = ResolvedAnimation::from_animation(selected);
    let keyframes = keyframes_css(&animation.name, &selected.keyframes);
    Some(AnimationOutput {
        animation,
        keyframes,
    })
}

/// A single named style block in the host document.
pub trait StyleSheet {
    /// Replaces the whole block with `css`.
    fn replace(&mut self, css: &str);
    /// Removes the block.
    fn clear(&mut self);
}

impl<S: StyleSheet + ?Sized> StyleSheet for &mut S {
    fn replace(&mut self, css: &str) {
        (**self).replace(css)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

/// In-memory style block, for tests and headless tooling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStyleSheet {
    css: Option<String>,
    writes: usize,
}

impl MemoryStyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current block text, `None` when cleared.
    pub fn css(&self) -> Option<&str> {
        self.css.as_deref()
    }

    /// Number of `replace` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl StyleSheet for MemoryStyleSheet {
    fn replace(&mut self, css: &str) {
        self.css = Some(css.to_string());
        self.writes += 1;
    }

    fn clear(&mut self) {
        self.css = None;
    }
}

/// Owns the keyframe style block of one layer.
///
/// Each [`sync`](KeyframeInjector::sync) with a different animation list
/// clears the previous block before writing the new one, so stale rules never
/// pile up. Dropping the injector clears the block.
pub struct KeyframeInjector<S: StyleSheet> {
    sheet: S,
    current: Option<String>,
}

impl<S: StyleSheet> KeyframeInjector<S> {
    pub fn new(sheet: S) -> Self {
        Self {
            sheet,
            current: None,
        }
    }

    /// Resolves the active animation and brings the style block in line
    /// with it. Returns the resolved declaration, if any.
    pub fn sync(
        &mut self,
        animations: &[LayerAnimation],
        preview_id: Option<&str>,
    ) -> Option<ResolvedAnimation> {
        let output = resolve_animation(animations, preview_id);
        let css = output.as_ref().map(|o| o.keyframes.clone());

        if css != self.current {
            self.sheet.clear();
            if let Some(css) = &css {
                self.sheet.replace(css);
            }
            self.current = css;
        }

        output.map(|o| o.animation)
    }

    pub fn sheet(&self) -> &S {
        &self.sheet
    }
}

impl<S: StyleSheet> Drop for KeyframeInjector<S> {
    fn drop(&mut self) {
        if self.current.take().is_some() {
            self.sheet.clear();
        }
    }
}
