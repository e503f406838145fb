//! Configuration section tree.
//!
//! The host's loader parses whatever file format it likes and fills this
//! tree; the core only ever consumes a resolved [`ExtendedConfig`] per drop
//! slot. Subsections spring into existence on first access and are cached
//! thereafter.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A named configuration section that can be created on demand.
pub trait Section {
    fn named(name: &str) -> Self;
}

/// Keyed collection of subsections with lazy creation.
#[derive(Debug)]
pub struct SectionMap<T: Section> {
    entries: HashMap<String, T>,
}

impl<T: Section> Default for SectionMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Section> SectionMap<T> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Returns the subsection with the given name, creating and caching it
    /// on first access.
    pub fn get_or_create(&mut self, name: &str) -> &mut T {
        self.entries
            .entry(name.to_string())
            .or_insert_with(|| T::named(name))
    }

    pub fn try_get(&self, name: &str) -> Option<&T> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &T)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-slot modification settings resolved from configuration. Opaque to
/// the correlation layer; consumed by the modifier pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtendedConfig {
    pub set_quality_level: Option<i32>,
    pub set_durability: Option<f32>,
    pub set_stack_size: Option<u32>,
}

/// One slot entry inside a drop table section, named by its slot index.
#[derive(Debug)]
pub struct SlotSection {
    pub name: String,
    pub extended: ExtendedConfig,
}

impl Section for SlotSection {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            extended: ExtendedConfig::default(),
        }
    }
}

/// One drop table section, keyed by table (entity) name, holding slot
/// subsections.
#[derive(Debug)]
pub struct DropTableSection {
    pub name: String,
    pub slots: SectionMap<SlotSection>,
}

impl Section for DropTableSection {
    fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            slots: SectionMap::new(),
        }
    }
}

/// Root of the drop configuration tree.
#[derive(Debug, Default)]
pub struct DropConfig {
    tables: SectionMap<DropTableSection>,
}

impl DropConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(&mut self, name: &str) -> &mut DropTableSection {
        self.tables.get_or_create(name)
    }

    /// Looks up the extended config for a specific slot of a table, if one
    /// was ever configured.
    pub fn resolve_slot(&self, table: &str, slot: usize) -> Option<&ExtendedConfig> {
        self.tables
            .try_get(table)
            .and_then(|table| table.slots.try_get(&slot.to_string()))
            .map(|slot| &slot.extended)
    }
}

#[cfg(test)]
mod section_map_tests {
    use super::{DropConfig, ExtendedConfig, Section, SectionMap, SlotSection};

    #[test]
    fn get_or_create_caches_the_subsection() {
        let mut map: SectionMap<SlotSection> = SectionMap::new();

        map.get_or_create("0").extended.set_quality_level = Some(3);
        let again = map.get_or_create("0");

        assert_eq!(again.extended.set_quality_level, Some(3));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn try_get_does_not_create() {
        let map: SectionMap<SlotSection> = SectionMap::new();

        assert!(map.try_get("0").is_none());
        assert!(map.is_empty());
    }

    #[test]
    fn named_sets_the_section_name() {
        let slot = SlotSection::named("2");

        assert_eq!(slot.name, "2");
        assert_eq!(slot.extended, ExtendedConfig::default());
    }

    #[test]
    fn resolve_slot_walks_the_tree() {
        let mut config = DropConfig::new();
        config
            .table("Draugr")
            .slots
            .get_or_create("1")
            .extended
            .set_durability = Some(80.0);

        let resolved = config.resolve_slot("Draugr", 1).expect("slot was configured");
        assert_eq!(resolved.set_durability, Some(80.0));
        assert!(config.resolve_slot("Draugr", 2).is_none());
        assert!(config.resolve_slot("Greyling", 1).is_none());
    }
}
