//! Role inference over a layer tree.
//!
//! Only visible layers take part, in tree order, and a layer fills at most
//! one role.

use super::roles::Role;
use crate::tree::LayerTree;
use nudge_schema::{Layer, LayerType};

#[derive(Debug, Default)]
pub struct RoleSlots<'a> {
    slots: [Option<&'a Layer>; Role::COUNT],
    /// Decorative icons beyond the single `icon` slot, in tree order.
    pub extra_icons: Vec<&'a Layer>,
}

impl<'a> RoleSlots<'a> {
    pub fn get(&self, role: Role) -> Option<&'a Layer> {
        self.slots[role.index()]
    }

    pub fn is_located(&self, role: Role) -> bool {
        self.slots[role.index()].is_some()
    }

    /// Fills the slot if it is still free.
    fn claim(&mut self, role: Role, layer: &'a Layer) -> bool {
        let slot = &mut self.slots[role.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(layer);
        true
    }

    /// Fills the first free slot of `roles`.
    fn claim_first(&mut self, roles: &[Role], layer: &'a Layer) -> bool {
        roles.iter().any(|&role| self.claim(role, layer))
    }
}

pub fn locate_roles<'a>(tree: &LayerTree<'a>) -> RoleSlots<'a> {
    let mut slots = RoleSlots::default();

    if let Some(root) = tree
        .roots()
        .into_iter()
        .find(|l| l.visible && l.kind == LayerType::Container)
    {
        slots.claim(Role::Container, root);
    }

    let visible = tree.visible_preorder();
    let of_kind = |kind: LayerType| visible.iter().copied().filter(move |l| l.kind == kind);

    // Named text layers pick their slot first, unnamed ones fill the rest.
    let mut unnamed = Vec::new();
    for layer in of_kind(LayerType::Text) {
        let claimed = match lower_name(layer) {
            Some(name) => slots.claim(text_role_for_name(&name), layer),
            None => false,
        };
        if !claimed {
            unnamed.push(layer);
        }
    }
    for layer in unnamed {
        slots.claim_first(&[Role::Text, Role::Title, Role::Subtitle], layer);
    }

    for layer in of_kind(LayerType::Button) {
        let secondary = lower_name(layer).is_some_and(|n| n.contains("secondary"));
        if secondary {
            slots.claim_first(&[Role::SecondaryButton, Role::Button], layer);
        } else {
            slots.claim_first(&[Role::Button, Role::SecondaryButton], layer);
        }
    }

    for layer in of_kind(LayerType::Icon) {
        if is_close_icon(layer) && slots.claim(Role::CloseIcon, layer) {
            continue;
        }
        if !slots.claim(Role::Icon, layer) {
            slots.extra_icons.push(layer);
        }
    }

    if let Some(image) = of_kind(LayerType::Media).next() {
        slots.claim(Role::Image, image);
    }
    if let Some(handle) = of_kind(LayerType::Handle).next() {
        slots.claim(Role::DragHandle, handle);
    }

    slots
}

fn lower_name(layer: &Layer) -> Option<String> {
    layer
        .name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_lowercase)
}

fn text_role_for_name(name: &str) -> Role {
    if ["subtitle", "subheading", "description"]
        .iter()
        .any(|k| name.contains(k))
    {
        Role::Subtitle
    } else if ["title", "heading", "headline"].iter().any(|k| name.contains(k)) {
        Role::Title
    } else {
        Role::Text
    }
}

fn is_close_icon(layer: &Layer) -> bool {
    let name_says_close = lower_name(layer).is_some_and(|n| n.contains("close"));
    let icon = layer.content.icon.as_deref().map(str::to_lowercase);
    name_says_close
        || icon
            .as_deref()
            .is_some_and(|i| i.contains("close") || i == "x")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(children: Vec<Layer>) -> Vec<Layer> {
        let mut root = Layer::new("root", LayerType::Container);
        root.children = children.iter().map(|c| c.id.clone()).collect();
        let mut layers = vec![root];
        for mut child in children {
            child.parent = Some("root".into());
            layers.push(child);
        }
        layers
    }

    fn ids<'a>(slots: &RoleSlots<'a>, role: Role) -> Option<&'a str> {
        slots.get(role).map(|l| l.id.as_str())
    }

    #[test]
    fn test_unnamed_texts_fill_in_order() {
        let layers = tree_of(vec![
            Layer::new("a", LayerType::Text),
            Layer::new("b", LayerType::Text),
            Layer::new("c", LayerType::Text),
            Layer::new("d", LayerType::Text),
        ]);
        let tree = LayerTree::new(&layers);
        let slots = locate_roles(&tree);
        assert_eq!(ids(&slots, Role::Container), Some("root"));
        assert_eq!(ids(&slots, Role::Text), Some("a"));
        assert_eq!(ids(&slots, Role::Title), Some("b"));
        assert_eq!(ids(&slots, Role::Subtitle), Some("c"));
    }

    #[test]
    fn test_named_texts_win_their_slot() {
        let layers = tree_of(vec![
            Layer::new("body", LayerType::Text),
            Layer::new("sub", LayerType::Text).with_name("Subtitle"),
            Layer::new("head", LayerType::Text).with_name("Main Headline"),
        ]);
        let tree = LayerTree::new(&layers);
        let slots = locate_roles(&tree);
        assert_eq!(ids(&slots, Role::Title), Some("head"));
        assert_eq!(ids(&slots, Role::Subtitle), Some("sub"));
        assert_eq!(ids(&slots, Role::Text), Some("body"));
    }

    #[test]
    fn test_buttons_and_icons() {
        let mut close = Layer::new("x-icon", LayerType::Icon);
        close.content.icon = Some("x".into());
        let mut star = Layer::new("star", LayerType::Icon);
        star.content.icon = Some("star".into());
        let mut heart = Layer::new("heart", LayerType::Icon);
        heart.content.icon = Some("heart".into());

        let layers = tree_of(vec![
            Layer::new("later", LayerType::Button).with_name("Secondary CTA"),
            Layer::new("buy", LayerType::Button),
            Layer::new("third", LayerType::Button),
            star,
            close,
            heart,
        ]);
        let tree = LayerTree::new(&layers);
        let slots = locate_roles(&tree);

        assert_eq!(ids(&slots, Role::SecondaryButton), Some("later"));
        assert_eq!(ids(&slots, Role::Button), Some("buy"));
        assert_eq!(ids(&slots, Role::CloseIcon), Some("x-icon"));
        assert_eq!(ids(&slots, Role::Icon), Some("star"));
        let extra: Vec<&str> = slots.extra_icons.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(extra, ["heart"]);
    }

    #[test]
    fn test_hidden_layers_are_ignored() {
        let mut hidden = Layer::new("hidden", LayerType::Text);
        hidden.visible = false;
        let layers = tree_of(vec![hidden, Layer::new("shown", LayerType::Text)]);
        let tree = LayerTree::new(&layers);
        let slots = locate_roles(&tree);
        assert_eq!(ids(&slots, Role::Text), Some("shown"));
        assert!(!slots.is_located(Role::Title));
    }
}
