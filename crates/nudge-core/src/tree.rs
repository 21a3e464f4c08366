//! # Layer Tree
//!
//! Read-only indexed view over a flat layer list, plus the editing helpers
//! that rewrite ids and references.
//!
//! Hierarchy follows the `children` lists (their order is paint order). A
//! root is any layer whose `parent` is unset or names a layer outside the
//! list.

use crate::ids::IdGenerator;
use nudge_schema::Layer;
use std::collections::{HashMap, HashSet};
use tracing::warn;

pub struct LayerTree<'a> {
    layers: &'a [Layer],
    index: HashMap<&'a str, usize>,
}

impl<'a> LayerTree<'a> {
    pub fn new(layers: &'a [Layer]) -> Self {
        let mut index = HashMap::with_capacity(layers.len());
        for (i, layer) in layers.iter().enumerate() {
            // First occurrence wins on duplicate ids.
            index.entry(layer.id.as_str()).or_insert(i);
        }
        Self { layers, index }
    }

    pub fn get(&self, id: &str) -> Option<&'a Layer> {
        self.index.get(id).map(|&i| &self.layers[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn layers(&self) -> &'a [Layer] {
        self.layers
    }

    /// Roots in list order.
    pub fn roots(&self) -> Vec<&'a Layer> {
        self.layers
            .iter()
            .filter(|layer| match &layer.parent {
                None => true,
                Some(parent) => !self.contains(parent),
            })
            .collect()
    }

    /// Children of `layer` in declared order. Ids that resolve to nothing are skipped.
    pub fn children(&self, layer: &Layer) -> Vec<&'a Layer> {
        layer
            .children
            .iter()
            .filter_map(|id| self.get(id))
            .collect()
    }

    /// Pre-order walk from every root, skipping hidden layers together with
    /// their subtrees. Each layer is visited at most once, so cyclic
    /// `children` lists terminate.
    pub fn visible_preorder(&self) -> Vec<&'a Layer> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        for root in self.roots() {
            self.walk(root, &mut seen, &mut out);
        }
        out
    }

    fn walk(&self, layer: &'a Layer, seen: &mut HashSet<&'a str>, out: &mut Vec<&'a Layer>) {
        if !layer.visible || !seen.insert(layer.id.as_str()) {
            return;
        }
        out.push(layer);
        for child in self.children(layer) {
            self.walk(child, seen, out);
        }
    }

    /// `id` and all of its descendants, pre-order.
    pub fn subtree_ids(&self, id: &str) -> Vec<String> {
        let mut out = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![id.to_string()];
        while let Some(current) = stack.pop() {
            let Some(layer) = self.get(&current) else {
                continue;
            };
            if !seen.insert(layer.id.clone()) {
                continue;
            }
            out.push(layer.id.clone());
            for child in layer.children.iter().rev() {
                stack.push(child.clone());
            }
        }
        out
    }
}

/// Drops `children` entries naming unknown layers and clears `parent`
/// references to unknown layers.
pub fn sanitize_layers(mut layers: Vec<Layer>) -> Vec<Layer> {
    let known: HashSet<String> = layers.iter().map(|l| l.id.clone()).collect();

    for layer in &mut layers {
        let before = layer.children.len();
        layer.children.retain(|child| known.contains(child));
        if layer.children.len() != before {
            warn!(
                layer = %layer.id,
                dropped = before - layer.children.len(),
                "dropping dangling child references"
            );
        }

        if let Some(parent) = &layer.parent {
            if !known.contains(parent) {
                warn!(layer = %layer.id, parent = %parent, "dropping dangling parent reference");
                layer.parent = None;
            }
        }
    }
    layers
}

/// Gives every layer a fresh id and rewrites `parent` / `children`
/// accordingly. Returns the old → new id map.
pub fn reassign_ids(layers: &mut [Layer], ids: &mut IdGenerator) -> HashMap<String, String> {
    let mapping: HashMap<String, String> = layers
        .iter()
        .map(|layer| (layer.id.clone(), ids.next(layer.kind)))
        .collect();
    remap(layers, &mapping);
    mapping
}

fn remap(layers: &mut [Layer], mapping: &HashMap<String, String>) {
    for layer in layers {
        if let Some(new_id) = mapping.get(&layer.id) {
            layer.id = new_id.clone();
        }
        if let Some(parent) = layer.parent.as_mut() {
            if let Some(new_parent) = mapping.get(parent.as_str()) {
                *parent = new_parent.clone();
            }
        }
        for child in &mut layer.children {
            if let Some(new_child) = mapping.get(child.as_str()) {
                *child = new_child.clone();
            }
        }
    }
}

/// Copies the subtree rooted at `id` with fresh ids. The copy is inserted
/// into the list after the original subtree and placed right after the
/// original in its parent's `children`. Returns the id of the copied root.
pub fn duplicate_subtree(layers: &mut Vec<Layer>, id: &str, ids: &mut IdGenerator) -> Option<String> {
    let (subtree, insert_at) = {
        let tree = LayerTree::new(layers);
        let subtree_ids = tree.subtree_ids(id);
        if subtree_ids.is_empty() {
            return None;
        }
        let members: HashSet<&str> = subtree_ids.iter().map(String::as_str).collect();
        let copies: Vec<Layer> = subtree_ids
            .iter()
            .filter_map(|sid| tree.get(sid).cloned())
            .collect();
        let insert_at = layers
            .iter()
            .rposition(|l| members.contains(l.id.as_str()))
            .map_or(layers.len(), |i| i + 1);
        (copies, insert_at)
    };

    let mut copies = subtree;
    let mapping = reassign_ids(&mut copies, ids);
    let new_root = mapping.get(id)?.clone();

    let parent = copies.first().and_then(|root| root.parent.clone());
    if let Some(parent_id) = parent {
        if let Some(parent_layer) = layers.iter_mut().find(|l| l.id == parent_id) {
            let slot = parent_layer
                .children
                .iter()
                .position(|c| c == id)
                .map_or(parent_layer.children.len(), |i| i + 1);
            parent_layer.children.insert(slot, new_root.clone());
        }
    }

    layers.splice(insert_at..insert_at, copies);
    Some(new_root)
}
