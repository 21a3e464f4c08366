//! # Nudge Core
//!
//! `nudge-core` turns an editor-side layer tree into the flat, role-prefixed
//! record that in-app surface renderers consume, reads such records back into
//! layer trees, and resolves per-layer declarations into renderer-ready CSS.
//!
//! ## Core Features
//!
//! *   **Transformer**: [`flatten`] / [`reconstruct`] between a [`Design`] and a
//!     [`FlatConfig`](nudge_schema::FlatConfig), including the nested `components` tree.
//! *   **Box-Shadow Codec**: tolerant shadow string parsing with decorative defaults.
//! *   **Resolvers**: effects, flex (with a [Taffy](https://crates.io/crates/taffy)
//!     bridge), animations with keyframe text, responsive breakpoints.
//! *   **Records**: building, validating and loading persisted campaign records.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nudge_core::{flatten, reconstruct, Design};
//! use nudge_schema::{Layer, LayerType, SurfaceSettings};
//!
//! let design = Design::new(
//!     vec![Layer::new("t", LayerType::Text).with_text("Hello")],
//!     SurfaceSettings::default(),
//! );
//! let config = flatten(&design);
//! assert_eq!(config.str("text"), Some("Hello"));
//!
//! let rebuilt = reconstruct(&config);
//! assert_eq!(rebuilt.layers.len(), 1);
//! ```

/// Box-shadow string codec.
pub mod shadow;

/// Effect bag resolution (shadows, gradient, blur, stroke, opacity, blend mode).
pub mod effects;

/// Flex container / child resolution and the Taffy bridge.
pub mod flex;

/// Animation selection, keyframe text and the style-sheet handle.
pub mod animation;

/// Breakpoint selection and responsive override merging.
pub mod responsive;

/// The layer-tree ⇄ flat-config transformer.
pub mod transform;

/// Indexed tree view and id-rewriting helpers.
pub mod tree;

/// Timestamp-salted layer ids.
pub mod ids;

/// Persisted record building and loading.
pub mod record;

/// Template documents turned into fresh designs.
pub mod template;

/// All resolvers applied to one layer at a viewport width.
pub mod pipeline;

/// Shared output types.
pub mod types;

/// Error types for record parsing.
pub mod errors;

pub use animation::{KeyframeInjector, MemoryStyleSheet, StyleSheet};
pub use errors::RecordError;
pub use pipeline::{resolve_layer_styles, ResolvedLayerStyle};
pub use record::{build_record, load_record, parse_record};
pub use shadow::{parse_shadow, serialize_shadow, BoxShadow};
pub use template::instantiate_template;
pub use transform::{flatten, flatten_with, reconstruct, reconstruct_at, Design, FlattenOptions};
pub use tree::LayerTree;
pub use types::StyleFragment;

use anyhow::{Context, Result};
use nudge_schema::TemplateDocument;
use std::path::PathBuf;
use tracing::instrument;

/// Where templates come from.
///
/// The gallery and its network fetch live outside this crate; anything that
/// can hand back a [`TemplateDocument`] by name can stand in for it.
pub trait TemplateSource {
    fn load_template(&self, name: &str) -> Result<TemplateDocument>;
}

/// Reads `<dir>/<name>.json`, or `name` itself when it is a path to a file.
pub struct DirTemplateSource {
    pub dir: PathBuf,
}

impl DirTemplateSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateSource for DirTemplateSource {
    #[instrument(level = "debug", skip(self), fields(dir = %self.dir.display()))]
    fn load_template(&self, name: &str) -> Result<TemplateDocument> {
        let direct = PathBuf::from(name);
        let path = if direct.is_file() {
            direct
        } else {
            self.dir.join(format!("{}.json", name))
        };
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Template not found: {} (looked at '{}')", name, path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Template '{}' is not a valid template document", name))
    }
}
