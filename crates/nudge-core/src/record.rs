//! Persisted record handling.
//!
//! A saved campaign always carries the flat `config` for renderers, and the
//! full layer list (hidden layers included) for re-editing.

use crate::errors::RecordError;
use crate::transform::{flatten, read_settings, reconstruct, Design};
use crate::tree::sanitize_layers;
use nudge_schema::{PersistedRecord, RecordMeta};
use serde_json::Value;
use tracing::{debug, instrument};

#[instrument(level = "debug", skip_all, fields(kind = %meta.kind, layers = design.layers.len()))]
pub fn build_record(meta: &RecordMeta, design: &Design) -> PersistedRecord {
    PersistedRecord {
        kind: meta.kind.clone(),
        status: meta.status.clone(),
        trigger: meta.trigger.clone(),
        rules: meta.rules.clone(),
        targeting: meta.targeting.clone(),
        tags: meta.tags.clone(),
        schedule: meta.schedule.clone(),
        config: flatten(design),
        layers: (!design.layers.is_empty()).then(|| design.layers.clone()),
    }
}

/// Loads the design of a record. A non-empty `layers` list is
/// authoritative; otherwise the design is reconstructed from `config`.
#[instrument(level = "debug", skip_all, fields(kind = %record.kind))]
pub fn load_record(record: &PersistedRecord) -> Design {
    match record.layers.as_deref() {
        Some(layers) if !layers.is_empty() => {
            debug!(layers = layers.len(), "loading stored layer list");
            Design {
                layers: sanitize_layers(layers.to_vec()),
                settings: read_settings(&record.config),
            }
        }
        _ => reconstruct(&record.config),
    }
}

/// Parses and validates a record from JSON text.
pub fn parse_record(json: &str) -> Result<PersistedRecord, RecordError> {
    let value: Value = serde_json::from_str(json)?;
    let object = value.as_object().ok_or(RecordError::NotAnObject)?;
    if !object.contains_key("config") && !object.contains_key("layers") {
        return Err(RecordError::MissingPayload);
    }
    Ok(serde_json::from_value(value)?)
}
