//! Layer id generation.
//!
//! Fresh ids are `{type}-{unix millis}-{salt}` so that layers created or
//! duplicated in the same millisecond still differ. Reconstructed role
//! layers use `layer-{base + offset}` instead, which is deterministic for a
//! given base.

use nudge_schema::LayerType;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the unix epoch, `0` if the clock is before it.
pub fn timestamp_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

pub fn role_layer_id(base: u64, offset: u64) -> String {
    format!("layer-{}", base.saturating_add(offset))
}

/// Hands out timestamp-salted ids, never the same one twice.
pub struct IdGenerator {
    millis: u64,
    rng: ThreadRng,
    issued: HashSet<String>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::at(timestamp_millis())
    }

    /// A generator pinned to a fixed timestamp.
    pub fn at(millis: u64) -> Self {
        Self {
            millis,
            rng: rand::thread_rng(),
            issued: HashSet::new(),
        }
    }

    pub fn next(&mut self, kind: LayerType) -> String {
        loop {
            let salt: u16 = self.rng.gen();
            let id = format!("{}-{}-{:04x}", kind, self.millis, salt);
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ids_are_unique_within_a_generator() {
        let mut ids = IdGenerator::at(1_700_000_000_000);
        let issued: HashSet<String> = (0..500).map(|_| ids.next(LayerType::Text)).collect();
        assert_eq!(issued.len(), 500);
        assert!(issued.iter().all(|id| id.starts_with("text-1700000000000-")));
    }

    #[test]
    fn test_role_ids() {
        assert_eq!(role_layer_id(1000, 0), "layer-1000");
        assert_eq!(role_layer_id(1000, 7), "layer-1007");
    }
}
