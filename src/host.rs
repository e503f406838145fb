//! Integration boundary toward the hosting engine.

use std::collections::HashMap;

use crate::location::{LocationInstance, ZoneCoordinate};

/// Narrow accessor over the engine's authoritative location table.
///
/// The host integration layer implements this against however the engine
/// exposes its placed locations; the core never reaches into engine
/// internals itself. `None` means the engine has not made the table
/// available yet (e.g. the world is still loading).
pub trait LocationSource {
    fn authoritative_locations(&self) -> Option<&HashMap<ZoneCoordinate, LocationInstance>>;
}

impl LocationSource for HashMap<ZoneCoordinate, LocationInstance> {
    fn authoritative_locations(&self) -> Option<&HashMap<ZoneCoordinate, LocationInstance>> {
        Some(self)
    }
}
