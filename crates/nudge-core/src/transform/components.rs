//! The nested `components` tree of the flat config.

use crate::ids::IdGenerator;
use crate::tree::LayerTree;
use nudge_schema::{ComponentNode, Layer, LayerType};
use std::collections::HashSet;

/// Nests the visible layers under their roots. `flexLayout` is attached to
/// container nodes only and `flexChild` to non-root nodes only.
pub fn layers_to_components(tree: &LayerTree<'_>) -> Vec<ComponentNode> {
    let mut seen = HashSet::new();
    tree.roots()
        .into_iter()
        .filter_map(|root| to_node(tree, root, true, &mut seen))
        .collect()
}

fn to_node<'a>(
    tree: &LayerTree<'a>,
    layer: &'a Layer,
    is_root: bool,
    seen: &mut HashSet<&'a str>,
) -> Option<ComponentNode> {
    if !layer.visible || !seen.insert(layer.id.as_str()) {
        return None;
    }

    let mut style = layer.style.clone();
    let flex_layout = style.flex_layout.take();
    let flex_child = style.flex_child.take();

    let children = tree
        .children(layer)
        .into_iter()
        .filter_map(|child| to_node(tree, child, false, seen))
        .collect();

    Some(ComponentNode {
        id: layer.id.clone(),
        kind: layer.kind,
        name: layer.name.clone(),
        visible: layer.visible,
        locked: layer.locked,
        z_index: layer.z_index,
        position: layer.position,
        size: layer.size.clone(),
        content: layer.content.clone(),
        style,
        responsive_overrides: layer.responsive_overrides.clone(),
        animations: layer.animations.clone(),
        flex_layout: flex_layout.filter(|_| layer.kind == LayerType::Container),
        flex_child: flex_child.filter(|_| !is_root),
        children,
    })
}

/// Un-nests a component tree into a flat layer list in pre-order, rebuilding
/// `parent` and `children` from the nesting. Nodes without an id get a
/// fresh one.
pub fn components_to_layers(nodes: &[ComponentNode], ids: &mut IdGenerator) -> Vec<Layer> {
    let mut layers = Vec::new();
    for node in nodes {
        push_node(node, None, ids, &mut layers);
    }
    layers
}

fn push_node(
    node: &ComponentNode,
    parent: Option<&str>,
    ids: &mut IdGenerator,
    out: &mut Vec<Layer>,
) -> String {
    let id = if node.id.trim().is_empty() {
        ids.next(node.kind)
    } else {
        node.id.clone()
    };

    let mut layer = Layer::new(id.clone(), node.kind);
    layer.name = node.name.clone();
    layer.parent = parent.map(str::to_string);
    layer.visible = node.visible;
    layer.locked = node.locked;
    layer.z_index = node.z_index;
    layer.position = node.position;
    layer.size = node.size.clone();
    layer.content = node.content.clone();
    layer.style = node.style.clone();
    layer.responsive_overrides = node.responsive_overrides.clone();
    layer.animations = node.animations.clone();
    if node.flex_layout.is_some() {
        layer.style.flex_layout = node.flex_layout.clone();
    }
    if node.flex_child.is_some() {
        layer.style.flex_child = node.flex_child.clone();
    }

    let slot = out.len();
    out.push(layer);

    let children: Vec<String> = node
        .children
        .iter()
        .map(|child| push_node(child, Some(&id), ids, out))
        .collect();
    out[slot].children = children;

    id
}
