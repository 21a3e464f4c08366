use super::attributes::RoleAttributes;
use super::components::layers_to_components;
use super::locate::locate_roles;
use super::roles::{Role, SizeDefault};
use super::settings::write_settings;
use super::{Design, FlattenOptions};
use crate::tree::LayerTree;
use nudge_schema::flat::{COMPONENTS_KEY, ICONS_KEY};
use nudge_schema::{FlatConfig, IconEntry, Layer, SizeValue};
use tracing::{debug, instrument};

/// Flattens a design into the legacy flat config, components included.
pub fn flatten(design: &Design) -> FlatConfig {
    flatten_with(design, &FlattenOptions::default())
}

#[instrument(level = "debug", skip_all, fields(layers = design.layers.len()))]
pub fn flatten_with(design: &Design, options: &FlattenOptions) -> FlatConfig {
    let tree = LayerTree::new(&design.layers);
    let slots = locate_roles(&tree);
    let mut config = FlatConfig::new();

    for role in Role::ALL {
        let located = slots.get(role);
        let attributes = match located {
            Some(layer) => RoleAttributes::from_layer(role, layer),
            None => {
                debug!(role = ?role, "no layer for role, writing defaults");
                RoleAttributes::defaults(role)
            }
        };

        for binding in role.content() {
            let value = located
                .and_then(|layer| binding.field.get(&layer.content))
                .unwrap_or(binding.default);
            config.insert(binding.key(role), value);
        }

        if let Some(flag) = role.presence_flag() {
            config.insert(flag, located.is_some());
        }
        if let Some(flag) = role.shared_flag() {
            let shown = config.bool(flag).unwrap_or(false) || located.is_some();
            config.insert(flag, shown);
        }

        attributes.write(role, &mut config);
    }

    let icons: Vec<IconEntry> = slots.extra_icons.iter().map(|l| icon_entry(l)).collect();
    config.insert(ICONS_KEY, serde_json::to_value(icons).unwrap_or_default());

    write_settings(&design.settings, &mut config);

    if options.include_components {
        let components = layers_to_components(&tree);
        config.insert(
            COMPONENTS_KEY,
            serde_json::to_value(components).unwrap_or_default(),
        );
    }

    config
}

fn icon_entry(layer: &Layer) -> IconEntry {
    let defaults = Role::Icon.defaults();
    IconEntry {
        id: layer.id.clone(),
        name: layer
            .content
            .icon
            .clone()
            .or_else(|| layer.name.clone())
            .unwrap_or_default(),
        color: layer
            .style
            .color
            .clone()
            .unwrap_or_else(|| defaults.color.to_string()),
        size: match layer.size.width {
            SizeValue::Px(px) => px,
            _ => match defaults.width {
                SizeDefault::Px(px) => px,
                SizeDefault::Keyword(_) => 24.0,
            },
        },
        x: layer.position.x,
        y: layer.position.y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nudge_schema::{LayerType, SurfaceSettings};
    use serde_json::json;

    fn design(layers: Vec<Layer>) -> Design {
        Design {
            layers,
            settings: SurfaceSettings::default(),
        }
    }

    #[test]
    fn test_single_text_layer() {
        let config = flatten(&design(vec![
            Layer::new("t", LayerType::Text).with_text("Hello")
        ]));
        assert_eq!(config.str("text"), Some("Hello"));
        assert_eq!(config.bool("showTitle"), Some(true));
        assert_eq!(config.bool("showText"), Some(true));
        assert_eq!(config.bool("showHeading"), Some(false));
        assert_eq!(config.bool("showButton"), Some(false));
        assert_eq!(config.str("title"), Some(""));
    }

    #[test]
    fn test_empty_content_still_sets_presence() {
        let config = flatten(&design(vec![
            Layer::new("root", LayerType::Container),
            Layer::new("b", LayerType::Button),
        ]));
        assert_eq!(config.str("buttonText"), Some(""));
        assert_eq!(config.bool("showButton"), Some(true));
    }

    #[test]
    fn test_missing_roles_get_defaults() {
        let config = flatten(&design(Vec::new()));
        assert_eq!(config.str("buttonAction"), Some("dismiss"));
        assert_eq!(config.str("closeIconName"), Some("x"));
        assert_eq!(config.f64("buttonHeight"), Some(48.0));
        assert_eq!(config.str("buttonBackgroundColor"), Some("#6366F1"));
        assert_eq!(config.f64("dragHandleWidth"), Some(40.0));
        assert_eq!(
            config.get("textBorderRadius"),
            Some(&json!({ "topLeft": 0.0, "topRight": 0.0, "bottomRight": 0.0, "bottomLeft": 0.0 }))
        );
        assert_eq!(config.get("icons"), Some(&json!([])));
        assert_eq!(config.get("components"), Some(&json!([])));
        assert_eq!(config.str("surfaceType"), Some("bottom-sheet"));
    }

    #[test]
    fn test_extra_icons_overflow() {
        let mut root = Layer::new("root", LayerType::Container);
        let mut icons = Vec::new();
        for (i, name) in ["star", "heart", "bolt"].iter().enumerate() {
            let mut icon = Layer::new(format!("i{}", i), LayerType::Icon);
            icon.parent = Some("root".into());
            icon.content.icon = Some(name.to_string());
            icon.size.width = SizeValue::Px(32.0);
            root.children.push(icon.id.clone());
            icons.push(icon);
        }
        let mut layers = vec![root];
        layers.extend(icons);

        let config = flatten(&design(layers));
        assert_eq!(config.str("iconName"), Some("star"));
        let extra = config.icons();
        assert_eq!(extra.len(), 2);
        assert_eq!(extra[0].name, "heart");
        assert_eq!(extra[0].size, 32.0);
        assert_eq!(extra[1].id, "i2");
    }

    #[test]
    fn test_components_can_be_left_out() {
        let options = FlattenOptions {
            include_components: false,
        };
        let config = flatten_with(
            &design(vec![Layer::new("t", LayerType::Text).with_text("x")]),
            &options,
        );
        assert!(!config.contains_key("components"));
    }

    #[test]
    fn test_hidden_layers_are_not_flattened() {
        let mut hidden = Layer::new("b", LayerType::Button).with_text("Hidden");
        hidden.visible = false;
        let config = flatten(&design(vec![hidden]));
        assert_eq!(config.bool("showButton"), Some(false));
        assert_eq!(config.str("buttonText"), Some(""));
    }
}
