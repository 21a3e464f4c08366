use super::attributes::RoleAttributes;
use super::components::components_to_layers;
use super::roles::Role;
use super::settings::read_settings;
use super::Design;
use crate::ids::{role_layer_id, timestamp_millis, IdGenerator};
use crate::tree::sanitize_layers;
use nudge_schema::{FlatConfig, Layer};
use tracing::{debug, instrument};

/// What makes a role's layer appear on the heuristic path.
#[derive(Debug, Clone, Copy)]
enum Trigger {
    /// A boolean flag set to `true`.
    Flag(&'static str),
    /// The role's main content key holds a non-blank string, or the role's
    /// presence flag is `true`.
    Content,
}

/// One row of the synthesis table: the role, its id offset from the shared
/// base, and its trigger. Rows are in canonical child order.
struct Synthesis {
    role: Role,
    offset: u64,
    trigger: Trigger,
}

const SYNTHESIS: &[Synthesis] = &[
    Synthesis {
        role: Role::DragHandle,
        offset: 1,
        trigger: Trigger::Flag("showDragHandle"),
    },
    Synthesis {
        role: Role::Image,
        offset: 2,
        trigger: Trigger::Content,
    },
    Synthesis {
        role: Role::Text,
        offset: 3,
        trigger: Trigger::Content,
    },
    Synthesis {
        role: Role::Title,
        offset: 4,
        trigger: Trigger::Content,
    },
    Synthesis {
        role: Role::Subtitle,
        offset: 5,
        trigger: Trigger::Content,
    },
    Synthesis {
        role: Role::Button,
        offset: 6,
        trigger: Trigger::Content,
    },
    Synthesis {
        role: Role::SecondaryButton,
        offset: 7,
        trigger: Trigger::Content,
    },
    Synthesis {
        role: Role::CloseIcon,
        offset: 8,
        trigger: Trigger::Flag("showCloseButton"),
    },
    Synthesis {
        role: Role::Icon,
        offset: 9,
        trigger: Trigger::Content,
    },
];

impl Synthesis {
    fn fires(&self, config: &FlatConfig) -> bool {
        match self.trigger {
            Trigger::Flag(key) => config.bool(key) == Some(true),
            Trigger::Content => {
                let has_content = self
                    .role
                    .content()
                    .first()
                    .is_some_and(|binding| config.non_empty_str(&binding.key(self.role)).is_some());
                // A located role with empty content still gets its layer back.
                has_content
                    || self
                        .role
                        .presence_flag()
                        .is_some_and(|flag| config.bool(flag) == Some(true))
            }
        }
    }
}

/// Rebuilds a design from a flat config, with ids based on the wall clock.
pub fn reconstruct(config: &FlatConfig) -> Design {
    reconstruct_at(config, timestamp_millis())
}

/// Rebuilds a design from a flat config.
///
/// An explicit `layers` list wins, then a `components` tree; only when
/// neither is present are layers synthesized from the role keys, with ids
/// `layer-{id_base + offset}`.
#[instrument(level = "debug", skip_all, fields(id_base = id_base))]
pub fn reconstruct_at(config: &FlatConfig, id_base: u64) -> Design {
    let settings = read_settings(config);

    let explicit = config.layers();
    if !explicit.is_empty() {
        debug!(layers = explicit.len(), "using explicit layer list");
        return Design {
            layers: sanitize_layers(explicit),
            settings,
        };
    }

    let components = config.components();
    if !components.is_empty() {
        debug!(roots = components.len(), "using nested component tree");
        let mut ids = IdGenerator::at(id_base);
        return Design {
            layers: components_to_layers(&components, &mut ids),
            settings,
        };
    }

    Design {
        layers: synthesize(config, id_base),
        settings,
    }
}

fn synthesize(config: &FlatConfig, id_base: u64) -> Vec<Layer> {
    let mut root = build_role_layer(Role::Container, role_layer_id(id_base, 0), config);

    let mut children = Vec::new();
    for rule in SYNTHESIS.iter().filter(|rule| rule.fires(config)) {
        let mut layer = build_role_layer(rule.role, role_layer_id(id_base, rule.offset), config);
        layer.parent = Some(root.id.clone());
        children.push(layer);
    }
    debug!(children = children.len(), "synthesized layers from role keys");

    root.children = children.iter().map(|l| l.id.clone()).collect();
    let mut layers = Vec::with_capacity(children.len() + 1);
    layers.push(root);
    layers.extend(children);
    layers
}

fn build_role_layer(role: Role, id: String, config: &FlatConfig) -> Layer {
    let mut layer = Layer::new(id, role.layer_type()).with_name(role.layer_name());
    RoleAttributes::read(role, config).apply_to_layer(&mut layer);

    for binding in role.content() {
        let value = config
            .str(&binding.key(role))
            .unwrap_or(binding.default)
            .to_string();
        binding.field.set(&mut layer.content, value);
    }
    layer
}
