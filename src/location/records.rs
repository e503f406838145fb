use std::sync::Arc;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::zone::{Vec3, ZoneCoordinate};

bitflags! {
    /// Biome membership mask for a location prefab. A prefab may span
    /// multiple biomes; an empty mask means the prefab declares none.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Biome: u32 {
        const MEADOWS = 1;
        const SWAMP = 1 << 1;
        const MOUNTAIN = 1 << 2;
        const BLACK_FOREST = 1 << 3;
        const PLAINS = 1 << 4;
        const ASHLANDS = 1 << 5;
        const DEEP_NORTH = 1 << 6;
        const OCEAN = 1 << 8;
        const MISTLANDS = 1 << 9;
    }
}

const BIOME_LABELS: &[(Biome, &str)] = &[
    (Biome::MEADOWS, "Meadows"),
    (Biome::SWAMP, "Swamp"),
    (Biome::MOUNTAIN, "Mountain"),
    (Biome::BLACK_FOREST, "BlackForest"),
    (Biome::PLAINS, "Plains"),
    (Biome::ASHLANDS, "Ashlands"),
    (Biome::DEEP_NORTH, "DeepNorth"),
    (Biome::OCEAN, "Ocean"),
    (Biome::MISTLANDS, "Mistlands"),
];

impl Biome {
    /// Decomposes a mask into its constituent single-bit biomes. The
    /// all-zero mask is its own group, kept distinct so biome-less
    /// locations still show up when grouping by biome.
    pub fn split(self) -> Vec<Biome> {
        if self.is_empty() {
            return vec![Biome::empty()];
        }
        self.iter().collect()
    }

    /// Display label for a single-bit (or empty) mask.
    pub fn label(self) -> &'static str {
        if self.is_empty() {
            return "None";
        }
        for (flag, label) in BIOME_LABELS {
            if self == *flag {
                return label;
            }
        }
        "Mixed"
    }
}

/// Engine-side location template. Shared between every placed instance of
/// the location, and never sent over the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationPrefab {
    pub name: String,
    pub biome: Biome,
}

impl LocationPrefab {
    pub fn new(name: impl Into<String>, biome: Biome) -> Self {
        Self {
            name: name.into(),
            biome,
        }
    }
}

/// Authoritative location record: a placed instance of a prefab, as the
/// local engine knows it.
#[derive(Debug, Clone)]
pub struct LocationInstance {
    pub prefab: Arc<LocationPrefab>,
    pub position: Vec3,
}

impl LocationInstance {
    pub fn new(prefab: Arc<LocationPrefab>, position: Vec3) -> Self {
        Self { prefab, position }
    }

    /// Projects this instance down to the wire-safe shape. Only the name,
    /// position and zone survive; the prefab reference stays behind.
    pub fn reduce(&self, zone: ZoneCoordinate) -> SimpleLocation {
        SimpleLocation {
            name: self.prefab.name.clone(),
            position: self.position,
            zone,
        }
    }
}

/// Reduced location record: the subset of fields that survives
/// serialization across the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleLocation {
    pub name: String,
    pub position: Vec3,
    pub zone: ZoneCoordinate,
}
