//! # Layer-Tree ⇄ Flat-Config Transformer
//!
//! [`flatten`] maps a [`Design`] onto the legacy role-prefixed record that
//! renderers consume; [`reconstruct`] goes the other way.
//!
//! ## Flatten
//! 1. Locate at most one visible layer per [`Role`] (see [`locate_roles`]).
//! 2. Write each role's attribute group and content keys, falling back to the
//!    role defaults when no layer was found, plus the `show*` flags.
//! 3. Overflow decorative icons go to `icons[]`.
//! 4. Surface settings are copied from [`SurfaceSettings`].
//! 5. The visible tree is nested into `components` (see [`FlattenOptions`]).
//!
//! ## Reconstruct
//! An explicit `layers` list or `components` tree is used as is. Otherwise a
//! container root is synthesized and each role whose trigger key is set gets
//! one child layer, in canonical order.
//!
//! ## Round trips
//! `flatten(reconstruct(flatten(d))) == flatten(d)` holds when `d` has at most
//! one layer per role. Extra decorative icons only survive in `icons[]` and are
//! not rebuilt from it; that loss is part of the format.

mod attributes;
mod components;
mod flatten;
mod locate;
mod reconstruct;
mod roles;
mod settings;

pub use attributes::RoleAttributes;
pub use components::{components_to_layers, layers_to_components};
pub use flatten::{flatten, flatten_with};
pub use locate::{locate_roles, RoleSlots};
pub use reconstruct::{reconstruct, reconstruct_at};
pub use roles::{ContentBinding, ContentField, Role, RoleDefaults, SizeDefault};
pub use settings::{read_settings, write_settings};

use nudge_schema::{Layer, SurfaceSettings};
use serde::{Deserialize, Serialize};

/// The editor-side design: the layer list plus surface-wide settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Design {
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(default)]
    pub settings: SurfaceSettings,
}

impl Design {
    pub fn new(layers: Vec<Layer>, settings: SurfaceSettings) -> Self {
        Self { layers, settings }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlattenOptions {
    /// Emit the nested `components` tree. Renderers that only understand
    /// role keys can do without it.
    pub include_components: bool,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            include_components: true,
        }
    }
}
