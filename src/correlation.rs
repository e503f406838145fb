use std::collections::HashMap;

use log::trace;

use crate::config::ExtendedConfig;

/// Carries per-slot configuration between the two phases of a drop episode:
/// list generation (which decides what drops and with which config) and item
/// instantiation (which needs that config back for the spawned object).
///
/// The batch is an explicit scope value: the generation call site creates
/// it, threads it to the instantiation call site, and drops it when the
/// episode ends. Entry lifetime is exactly the batch's lifetime; there is no
/// delete operation and no global table to sweep.
#[derive(Debug, Default)]
pub struct DropBatch {
    configs: HashMap<usize, ExtendedConfig>,
}

impl DropBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the config for a slot, silently overwriting any previous one.
    pub fn set(&mut self, slot: usize, config: ExtendedConfig) {
        trace!("caching config for drop slot {}", slot);
        self.configs.insert(slot, config);
    }

    /// Returns the config stored for a slot. Absence is a normal outcome:
    /// the slot may simply never have been configured.
    pub fn get(&self, slot: usize) -> Option<&ExtendedConfig> {
        self.configs.get(&slot)
    }

    /// Every configured slot in this batch.
    pub fn configs(&self) -> &HashMap<usize, ExtendedConfig> {
        &self.configs
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}
