//! Built-in modifiers driven by [`ExtendedConfig`] fields. Each one is a
//! no-op when its field is unset or when the drop carries no status
//! component.
//!
//! [`ExtendedConfig`]: crate::config::ExtendedConfig

use super::{DropContext, DropModifier, ModifierError};

/// Applies `set_quality_level`.
#[derive(Debug, Default)]
pub struct QualityModifier;

impl DropModifier for QualityModifier {
    fn name(&self) -> &'static str {
        "SetQualityLevel"
    }

    fn modify(&self, context: &mut DropContext) -> Result<(), ModifierError> {
        let Some(level) = context.config.set_quality_level else {
            return Ok(());
        };
        if let Some(status) = context.item.status_mut() {
            status.quality = level;
        }
        Ok(())
    }
}

/// Applies `set_durability`.
#[derive(Debug, Default)]
pub struct DurabilityModifier;

impl DropModifier for DurabilityModifier {
    fn name(&self) -> &'static str {
        "SetDurability"
    }

    fn modify(&self, context: &mut DropContext) -> Result<(), ModifierError> {
        let Some(durability) = context.config.set_durability else {
            return Ok(());
        };
        if let Some(status) = context.item.status_mut() {
            status.durability = durability;
        }
        Ok(())
    }
}

/// Applies `set_stack_size`, clamped to at least one.
#[derive(Debug, Default)]
pub struct StackSizeModifier;

impl DropModifier for StackSizeModifier {
    fn name(&self) -> &'static str {
        "SetStackSize"
    }

    fn modify(&self, context: &mut DropContext) -> Result<(), ModifierError> {
        let Some(stack_size) = context.config.set_stack_size else {
            return Ok(());
        };
        if let Some(status) = context.item.status_mut() {
            status.stack_size = stack_size.max(1);
        }
        Ok(())
    }
}
