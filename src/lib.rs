//! # Nudge Engine
//!
//! `nudge-engine` bundles the data model ([`schema`]) and the transformer and
//! style resolvers ([`core`]) behind one dependency.
//!
//! Editors keep designs as a tree of [`Layer`]s; renderers read the flat,
//! role-prefixed [`FlatConfig`]. [`flatten`] and [`reconstruct`] move a
//! design between the two.

pub use nudge_core as core;
pub use nudge_schema as schema;

pub use nudge_core::{
    build_record, flatten, flatten_with, load_record, parse_record, reconstruct, reconstruct_at,
    resolve_layer_styles, Design, DirTemplateSource, FlattenOptions, RecordError,
    ResolvedLayerStyle, TemplateSource,
};
pub use nudge_schema::{FlatConfig, Layer, LayerType, PersistedRecord, SurfaceSettings};
