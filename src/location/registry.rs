use std::collections::HashMap;

use super::records::{LocationInstance, SimpleLocation};
use super::zone::{Vec3, ZoneCoordinate};

/// Two-tier lookup from zone to location metadata.
///
/// The authoritative tier is computed locally by the engine and carries the
/// full record shape. The replicated tier is what a remote peer sent us in
/// reduced form. Authoritative data strictly takes precedence when both
/// tiers hold the same zone.
#[derive(Debug, Default)]
pub struct LocationRegistry {
    authoritative: HashMap<ZoneCoordinate, LocationInstance>,
    replicated: HashMap<ZoneCoordinate, SimpleLocation>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the authoritative tier wholesale. Called when the local
    /// engine exposes its location table, once per world session.
    pub fn set_authoritative(&mut self, records: HashMap<ZoneCoordinate, LocationInstance>) {
        self.authoritative = records;
    }

    /// Upserts reduced records into the replicated tier. Last write per
    /// zone wins; additive across calls.
    pub fn merge_replicated(&mut self, records: impl IntoIterator<Item = SimpleLocation>) {
        for record in records {
            self.replicated.insert(record.zone, record);
        }
    }

    /// Resolves a world position to a location record, authoritative tier
    /// first. An authoritative record with an empty prefab name is treated
    /// as unusable and falls through to the replicated tier. `None` means
    /// "location unknown" and is normal control flow, not an error.
    pub fn find(&self, position: Vec3) -> Option<SimpleLocation> {
        let zone = ZoneCoordinate::from_position(position);

        if let Some(instance) = self.authoritative.get(&zone) {
            if !instance.prefab.name.is_empty() {
                return Some(instance.reduce(zone));
            }
        }

        self.replicated.get(&zone).cloned()
    }

    /// Clears both tiers back to "absent".
    pub fn clear(&mut self) {
        self.authoritative.clear();
        self.replicated.clear();
    }

    pub fn authoritative_len(&self) -> usize {
        self.authoritative.len()
    }

    pub fn replicated_len(&self) -> usize {
        self.replicated.len()
    }
}
