use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;

use crate::location::LocationPrefab;

pub const LOCATIONS_FILE_NAME: &str = "dropforge_locations.txt";

/// Writes a human-readable overview of known location prefabs, grouped by
/// biome, to `dropforge_locations.txt` under the given directory.
///
/// Multi-biome prefabs appear once per constituent biome; prefabs with an
/// empty biome mask land in the `[None]` section. Sections are ordered
/// alphabetically by biome name, names de-duplicated per biome.
pub fn write_location_overview(dir: &Path, prefabs: &[LocationPrefab]) -> io::Result<PathBuf> {
    let mut by_biome: BTreeMap<&'static str, Vec<&str>> = BTreeMap::new();

    for prefab in prefabs {
        for biome in prefab.biome.split() {
            by_biome
                .entry(biome.label())
                .or_default()
                .push(&prefab.name);
        }
    }

    let mut printed: HashSet<String> = HashSet::new();
    let mut output = String::new();

    for (label, names) in &by_biome {
        output.push('\n');
        output.push_str(&format!("[{}]\n", label));

        for name in names {
            let key = format!("{}.{}", name, label);
            if printed.insert(key) {
                output.push_str(name);
                output.push('\n');
            }
        }
    }

    let path = dir.join(LOCATIONS_FILE_NAME);

    info!("Writing locations to {}", path.display());

    fs::write(&path, output)?;

    Ok(path)
}

#[cfg(test)]
mod locations_file_tests {
    use crate::location::{Biome, LocationPrefab};

    use super::write_location_overview;

    fn write(prefabs: &[LocationPrefab]) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = write_location_overview(dir.path(), prefabs).unwrap();
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn sections_are_alphabetical_by_biome_name() {
        let output = write(&[
            LocationPrefab::new("Crypt3", Biome::SWAMP),
            LocationPrefab::new("StoneTowerRuins04", Biome::BLACK_FOREST),
            LocationPrefab::new("WoodHouse1", Biome::MEADOWS),
        ]);

        let black_forest = output.find("[BlackForest]").unwrap();
        let meadows = output.find("[Meadows]").unwrap();
        let swamp = output.find("[Swamp]").unwrap();

        assert!(black_forest < meadows);
        assert!(meadows < swamp);
    }

    #[test]
    fn multi_biome_prefab_appears_under_each_biome() {
        let output = write(&[LocationPrefab::new(
            "Runestone_Boars",
            Biome::MEADOWS | Biome::BLACK_FOREST,
        )]);

        assert!(output.contains("[Meadows]"));
        assert!(output.contains("[BlackForest]"));
        assert_eq!(output.matches("Runestone_Boars").count(), 2);
    }

    #[test]
    fn duplicates_are_collapsed_per_biome() {
        let output = write(&[
            LocationPrefab::new("WoodHouse1", Biome::MEADOWS),
            LocationPrefab::new("WoodHouse1", Biome::MEADOWS),
        ]);

        assert_eq!(output.matches("WoodHouse1").count(), 1);
    }

    #[test]
    fn zero_mask_prefabs_are_listed_under_none() {
        let output = write(&[LocationPrefab::new("StartTemple", Biome::empty())]);

        assert!(output.contains("[None]"));
        assert!(output.contains("StartTemple"));
    }
}
