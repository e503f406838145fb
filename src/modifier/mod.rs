//! Drop item model and the modification pipeline applied to spawned drops.

mod builtin;
mod pipeline;

pub use builtin::{DurabilityModifier, QualityModifier, StackSizeModifier};
pub use pipeline::ModifierPipeline;

use thiserror::Error;

use crate::config::ExtendedConfig;
use crate::location::{SimpleLocation, Vec3};

/// A modifier failed for one drop. Logged by the pipeline; never aborts the
/// surrounding flow.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct ModifierError(pub String);

/// Mutable state of a spawned item that modifiers operate on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStatus {
    pub quality: i32,
    pub durability: f32,
    pub stack_size: u32,
}

impl Default for ItemStatus {
    fn default() -> Self {
        Self {
            quality: 1,
            durability: 100.0,
            stack_size: 1,
        }
    }
}

/// Something the engine attached to a spawned drop object.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemComponent {
    Status(ItemStatus),
    Script(String),
}

/// Memoizing single-shot component lookup: the first access resolves and
/// caches, every later access returns the cached answer. A lookup that
/// resolves to "missing" is cached as missing and not retried.
#[derive(Debug)]
pub struct CachedComponent<T> {
    value: Option<T>,
    resolved: bool,
}

impl<T> CachedComponent<T> {
    pub fn new() -> Self {
        Self {
            value: None,
            resolved: false,
        }
    }

    pub fn get_or_resolve(&mut self, resolve: impl FnOnce() -> Option<T>) -> Option<&T> {
        if !self.resolved {
            self.value = resolve();
            self.resolved = true;
        }
        self.value.as_ref()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

impl<T> Default for CachedComponent<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// An instantiated drop, as handed to the pipeline by the host after the
/// engine spawned it.
#[derive(Debug)]
pub struct DropItem {
    pub prefab_name: String,
    components: Vec<ItemComponent>,
    status_slot: CachedComponent<usize>,
}

impl DropItem {
    pub fn new(prefab_name: impl Into<String>) -> Self {
        Self {
            prefab_name: prefab_name.into(),
            components: Vec::new(),
            status_slot: CachedComponent::new(),
        }
    }

    pub fn with_status(prefab_name: impl Into<String>, status: ItemStatus) -> Self {
        let mut item = Self::new(prefab_name);
        item.push_component(ItemComponent::Status(status));
        item
    }

    pub fn push_component(&mut self, component: ItemComponent) {
        self.components.push(component);
    }

    /// The item's status component, if it has one. The component position
    /// is resolved once and memoized.
    pub fn status_mut(&mut self) -> Option<&mut ItemStatus> {
        let components = &self.components;
        let slot = self
            .status_slot
            .get_or_resolve(|| {
                components
                    .iter()
                    .position(|component| matches!(component, ItemComponent::Status(_)))
            })
            .copied()?;

        match self.components.get_mut(slot) {
            Some(ItemComponent::Status(status)) => Some(status),
            _ => None,
        }
    }
}

/// One shared mutation context handed, identity unchanged, to every
/// modifier for a single drop.
#[derive(Debug)]
pub struct DropContext<'a> {
    pub item: &'a mut DropItem,
    pub config: &'a ExtendedConfig,
    pub position: Vec3,
    pub location: Option<SimpleLocation>,
}

/// A single, independent drop modification. Modifiers form an unordered
/// set: no modifier may rely on another modifier's mutation being visible
/// in a particular order.
pub trait DropModifier {
    fn name(&self) -> &'static str;

    fn modify(&self, context: &mut DropContext) -> Result<(), ModifierError>;
}
