//! Template ingestion.

use crate::ids::{timestamp_millis, IdGenerator};
use crate::transform::components_to_layers;
use crate::tree::reassign_ids;
use nudge_schema::{Layer, TemplateDocument};
use tracing::debug;

/// Turns a template's component tree into a fresh layer list. Every layer
/// gets a new timestamp-salted id so the same template can be instantiated
/// repeatedly in one design.
pub fn instantiate_template(template: &TemplateDocument) -> Vec<Layer> {
    instantiate_template_at(template, timestamp_millis())
}

pub fn instantiate_template_at(template: &TemplateDocument, millis: u64) -> Vec<Layer> {
    let mut ids = IdGenerator::at(millis);
    let mut layers = components_to_layers(&template.config.components, &mut ids);
    reassign_ids(&mut layers, &mut ids);
    debug!(
        template = template.name.as_deref().unwrap_or("unnamed"),
        layers = layers.len(),
        "instantiated template"
    );
    layers
}
