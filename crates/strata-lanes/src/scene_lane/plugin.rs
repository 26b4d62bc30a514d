// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Custom-property plugins.
//!
//! Scene items may carry a custom property `type`. When they do, the loader
//! looks the type name up here and hands the entity to the matching
//! [`CustomPropertyHandler`] so that game code can attach its own components.
//!
//! Handlers are registered explicitly with [`PluginRegistry::register`], or
//! statically from anywhere in the binary:
//!
//! ```ignore
//! struct DoorHandler;
//! impl CustomPropertyHandler for DoorHandler { /* ... */ }
//!
//! inventory::submit! {
//!     PluginRegistration::new("door", &DoorHandler)
//! }
//! ```
//!
//! and then picked up by [`PluginRegistry::with_registered`].

use std::sync::Arc;

use ahash::AHashMap;
use strata_data::ecs::EntityId;
use strata_data::Scene;

use super::custom_properties::CustomProperties;

/// Extends entity assembly for one custom `type`.
pub trait CustomPropertyHandler: Send + Sync {
    /// Called once the entity and its built-in components exist.
    fn apply(
        &self,
        scene: &mut Scene,
        entity: EntityId,
        properties: &CustomProperties,
    ) -> anyhow::Result<()>;
}

/// A statically submitted handler, collected with `inventory`.
pub struct PluginRegistration {
    /// The custom `type` value the handler answers to.
    pub type_name: &'static str,
    /// The handler.
    pub handler: &'static dyn CustomPropertyHandler,
}

impl PluginRegistration {
    /// Creates a registration; usable inside `inventory::submit!`.
    pub const fn new(type_name: &'static str, handler: &'static dyn CustomPropertyHandler) -> Self {
        Self { type_name, handler }
    }
}

inventory::collect!(PluginRegistration);

struct StaticHandler(&'static dyn CustomPropertyHandler);

impl CustomPropertyHandler for StaticHandler {
    fn apply(
        &self,
        scene: &mut Scene,
        entity: EntityId,
        properties: &CustomProperties,
    ) -> anyhow::Result<()> {
        self.0.apply(scene, entity, properties)
    }
}

/// Maps custom `type` names to their handlers.
///
/// Populated at startup, read-only while scenes load.
#[derive(Default, Clone)]
pub struct PluginRegistry {
    handlers: AHashMap<String, Arc<dyn CustomPropertyHandler>>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every handler submitted with `inventory`.
    pub fn with_registered() -> Self {
        let mut registry = Self::new();
        for registration in inventory::iter::<PluginRegistration> {
            log::debug!("registering custom property handler '{}'", registration.type_name);
            registry.register(registration.type_name, StaticHandler(registration.handler));
        }
        registry
    }

    /// Registers a handler, replacing any previous one for `type_name`.
    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        handler: impl CustomPropertyHandler + 'static,
    ) {
        self.handlers.insert(type_name.into(), Arc::new(handler));
    }

    /// The handler for `type_name`.
    pub fn get(&self, type_name: &str) -> Option<&dyn CustomPropertyHandler> {
        self.handlers.get(type_name).map(|h| h.as_ref())
    }

    /// Whether a handler is registered for `type_name`.
    pub fn contains(&self, type_name: &str) -> bool {
        self.handlers.contains_key(type_name)
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// True when no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_data::ecs::{Component, World};

    struct Tagged(String);
    impl Component for Tagged {}

    struct TagHandler;

    impl CustomPropertyHandler for TagHandler {
        fn apply(
            &self,
            scene: &mut Scene,
            entity: EntityId,
            properties: &CustomProperties,
        ) -> anyhow::Result<()> {
            let tag = properties.get("tag").cloned().unwrap_or_default();
            scene.world.add_component(entity, Tagged(tag))?;
            Ok(())
        }
    }

    inventory::submit! {
        PluginRegistration::new("tagged", &TagHandler)
    }

    #[test]
    fn test_register_and_apply() {
        // --- 1. ARRANGE ---
        let mut registry = PluginRegistry::new();
        registry.register("tagged", TagHandler);
        let mut world = World::new();
        let entity = world.spawn(());
        let mut scene = Scene::new("test", entity, world);
        let mut props = CustomProperties::new();
        props.insert("tag".into(), "door".into());

        // --- 2. ACT ---
        let handler = registry.get("tagged").unwrap();
        handler.apply(&mut scene, entity, &props).unwrap();

        // --- 3. ASSERT ---
        assert_eq!(scene.world.get::<Tagged>(entity).unwrap().0, "door");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_with_registered_collects_submissions() {
        let registry = PluginRegistry::with_registered();
        assert!(registry.contains("tagged"));
    }
}
