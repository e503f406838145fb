use log::{debug, error};

use crate::config::ExtendedConfig;
use crate::location::{LocationRegistry, Vec3};

use super::builtin::{DurabilityModifier, QualityModifier, StackSizeModifier};
use super::{DropContext, DropItem, DropModifier};

/// Applies the registered set of modifiers to an instantiated drop.
pub struct ModifierPipeline {
    modifiers: Vec<Box<dyn DropModifier>>,
}

impl ModifierPipeline {
    pub fn new() -> Self {
        Self {
            modifiers: Vec::new(),
        }
    }

    /// A pipeline with the built-in config-driven modifiers registered.
    pub fn with_defaults() -> Self {
        let mut pipeline = Self::new();
        pipeline.register(Box::new(QualityModifier));
        pipeline.register(Box::new(DurabilityModifier));
        pipeline.register(Box::new(StackSizeModifier));
        pipeline
    }

    pub fn register(&mut self, modifier: Box<dyn DropModifier>) {
        self.modifiers.push(modifier);
    }

    pub fn len(&self) -> usize {
        self.modifiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty()
    }

    /// Runs every modifier over one shared context for the drop.
    ///
    /// A missing item or missing config makes the whole call a no-op. The
    /// drop's location is resolved once, and may be unknown; modifiers get
    /// `None` and fall back to generic behavior. A failing modifier is
    /// logged with the item and modifier identity and does not prevent the
    /// remaining modifiers from running.
    pub fn apply(
        &self,
        item: Option<&mut DropItem>,
        config: Option<&ExtendedConfig>,
        position: Vec3,
        locations: &LocationRegistry,
    ) {
        let (Some(item), Some(config)) = (item, config) else {
            return;
        };

        let location = locations.find(position);

        debug!("Applying modifiers to drop {}", item.prefab_name);

        let mut context = DropContext {
            item,
            config,
            position,
            location,
        };

        for modifier in &self.modifiers {
            if let Err(err) = modifier.modify(&mut context) {
                error!(
                    "Error while attempting to modify item drop {} with {}: {}",
                    context.item.prefab_name,
                    modifier.name(),
                    err
                );
            }
        }
    }
}

impl Default for ModifierPipeline {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod pipeline_tests {
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;
    use std::sync::Arc;

    use crate::config::ExtendedConfig;
    use crate::location::{
        Biome, LocationInstance, LocationPrefab, LocationRegistry, Vec3, ZoneCoordinate,
    };
    use crate::modifier::{DropContext, DropItem, DropModifier, ItemStatus, ModifierError};

    use super::ModifierPipeline;

    struct FailingModifier;

    impl DropModifier for FailingModifier {
        fn name(&self) -> &'static str {
            "AlwaysFails"
        }

        fn modify(&self, _: &mut DropContext) -> Result<(), ModifierError> {
            Err(ModifierError("deliberate failure".to_string()))
        }
    }

    struct QualityBump;

    impl DropModifier for QualityBump {
        fn name(&self) -> &'static str {
            "QualityBump"
        }

        fn modify(&self, context: &mut DropContext) -> Result<(), ModifierError> {
            if let Some(status) = context.item.status_mut() {
                status.quality += 1;
            }
            Ok(())
        }
    }

    struct LocationProbe {
        saw_location: Rc<Cell<bool>>,
    }

    impl DropModifier for LocationProbe {
        fn name(&self) -> &'static str {
            "LocationProbe"
        }

        fn modify(&self, context: &mut DropContext) -> Result<(), ModifierError> {
            self.saw_location.set(context.location.is_some());
            Ok(())
        }
    }

    #[test]
    fn failing_modifier_does_not_stop_the_rest() {
        let mut pipeline = ModifierPipeline::new();
        pipeline.register(Box::new(FailingModifier));
        pipeline.register(Box::new(QualityBump));

        let mut item = DropItem::with_status("SwordBronze", ItemStatus::default());
        let config = ExtendedConfig::default();
        let registry = LocationRegistry::new();

        pipeline.apply(Some(&mut item), Some(&config), Vec3::default(), &registry);

        assert_eq!(
            item.status_mut().unwrap().quality,
            2,
            "modifier after the failing one must still run"
        );
    }

    #[test]
    fn missing_item_or_config_is_a_no_op() {
        let pipeline = ModifierPipeline::with_defaults();
        let registry = LocationRegistry::new();

        pipeline.apply(None, Some(&ExtendedConfig::default()), Vec3::default(), &registry);

        let mut item = DropItem::with_status("SwordBronze", ItemStatus::default());
        pipeline.apply(Some(&mut item), None, Vec3::default(), &registry);

        assert_eq!(*item.status_mut().unwrap(), ItemStatus::default());
    }

    #[test]
    fn location_is_resolved_and_shared_with_modifiers() {
        let saw_location = Rc::new(Cell::new(false));
        let mut pipeline = ModifierPipeline::new();
        pipeline.register(Box::new(LocationProbe {
            saw_location: Rc::clone(&saw_location),
        }));

        let position = Vec3::new(10.0, 0.0, 10.0);
        let zone = ZoneCoordinate::from_position(position);
        let mut registry = LocationRegistry::new();
        registry.set_authoritative(HashMap::from([(
            zone,
            LocationInstance::new(
                Arc::new(LocationPrefab::new("Crypt3", Biome::BLACK_FOREST)),
                position,
            ),
        )]));

        let mut item = DropItem::new("Coins");
        pipeline.apply(
            Some(&mut item),
            Some(&ExtendedConfig::default()),
            position,
            &registry,
        );

        assert!(saw_location.get());
    }

    #[test]
    fn unknown_location_still_applies_modifiers() {
        let pipeline = ModifierPipeline::with_defaults();
        let registry = LocationRegistry::new();
        let config = ExtendedConfig {
            set_quality_level: Some(3),
            ..ExtendedConfig::default()
        };

        let mut item = DropItem::with_status("SwordBronze", ItemStatus::default());
        pipeline.apply(Some(&mut item), Some(&config), Vec3::new(999.0, 0.0, 999.0), &registry);

        assert_eq!(item.status_mut().unwrap().quality, 3);
    }
}
