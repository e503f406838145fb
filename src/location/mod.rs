mod records;
mod registry;
mod zone;

pub use records::{Biome, LocationInstance, LocationPrefab, SimpleLocation};
pub use registry::LocationRegistry;
pub use zone::{Vec3, ZoneCoordinate, ZONE_SIZE};
