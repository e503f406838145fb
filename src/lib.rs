//! # Dropforge
//! Configuration-driven, location-aware modification of procedurally
//! generated loot drops, with one-shot replication of world location
//! metadata from server to client.
//!
//! The crate is transport-agnostic: the host's RPC layer carries
//! [`OutboundMessage`] values between peers and feeds received calls back
//! into [`WorldSession`]. Every failure path degrades to "feature not
//! applied this time" and is logged through the `log` facade.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub mod config;
mod correlation;
pub mod debugging;
mod host;
pub mod location;
pub mod modifier;
pub mod replication;
mod session;

pub use config::{DropConfig, DropTableSection, ExtendedConfig, Section, SectionMap, SlotSection};
pub use correlation::DropBatch;
pub use host::LocationSource;
pub use location::{
    Biome, LocationInstance, LocationPrefab, LocationRegistry, SimpleLocation, Vec3,
    ZoneCoordinate, ZONE_SIZE,
};
pub use modifier::{
    CachedComponent, DropContext, DropItem, DropModifier, DurabilityModifier, ItemComponent,
    ItemStatus, ModifierError, ModifierPipeline, QualityModifier, StackSizeModifier,
};
pub use replication::{ReplicationError, TransferState};
pub use session::{OutboundMessage, PeerId, WorldRole, WorldSession};
