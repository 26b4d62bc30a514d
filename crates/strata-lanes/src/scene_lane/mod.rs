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

//! Lanes that turn external scene documents into live entities.
//!
//! The central contract is [`SceneLoadingStrategy`]: a two-pass loader that
//! first reports the external assets a document depends on, then, once the
//! caller has resolved them, assembles the scene synchronously.

mod custom_properties;
mod node_propagation;
mod overlap;
mod plugin;

pub use custom_properties::*;
pub use node_propagation::*;
pub use overlap::*;
pub use plugin::*;

use std::sync::{Arc, Mutex};

use strata_core::asset::AssetDescriptor;
use strata_core::lighting::LightingProvider;
use strata_core::physics::PhysicsProvider;
use strata_data::assets::AssetStore;
use strata_data::document::DocNode;
use strata_data::registry::CategoryRegistry;
use strata_data::Scene;

use crate::SceneError;

/// A physics world shared between the loader and the simulation.
pub type SharedPhysics = Arc<Mutex<dyn PhysicsProvider>>;

/// A lighting subsystem shared between the loader and the renderer.
pub type SharedLighting = Arc<Mutex<dyn LightingProvider>>;

/// Per-load inputs.
///
/// Physics is optional: without both a physics world and a category
/// registry, shapes are ignored and no bodies are created.
#[derive(Clone)]
pub struct SceneLoadParameters {
    /// Multiplies every length read from the document.
    pub units: f32,
    /// Path of the texture atlas the scene's images live in.
    pub atlas: String,
    /// The physics world bodies are created in.
    pub physics: Option<SharedPhysics>,
    /// Collision categories for fixture filters.
    pub categories: Option<Arc<CategoryRegistry>>,
    /// The lighting subsystem lights are registered with.
    pub lighting: Option<SharedLighting>,
}

impl Default for SceneLoadParameters {
    fn default() -> Self {
        Self {
            units: 1.0,
            atlas: String::new(),
            physics: None,
            categories: None,
            lighting: None,
        }
    }
}

impl SceneLoadParameters {
    /// Parameters for a scene without physics or lighting.
    pub fn new(units: f32, atlas: impl Into<String>) -> Self {
        Self {
            units,
            atlas: atlas.into(),
            ..Self::default()
        }
    }

    /// Enables physics.
    pub fn with_physics(mut self, physics: SharedPhysics, categories: Arc<CategoryRegistry>) -> Self {
        self.physics = Some(physics);
        self.categories = Some(categories);
        self
    }

    /// Enables lighting.
    pub fn with_lighting(mut self, lighting: SharedLighting) -> Self {
        self.lighting = Some(lighting);
        self
    }
}

/// The abstract contract for a scene loading `Lane`.
pub trait SceneLoadingStrategy: Send + Sync {
    /// Returns the unique, versioned identifier of the document format.
    fn strategy_id(&self) -> &'static str;

    /// Lists every external asset `document` needs, in discovery order.
    ///
    /// Repeated references produce repeated descriptors; the asset store is
    /// expected to cache by path.
    fn find_dependencies(
        &self,
        document: &DocNode,
        params: &SceneLoadParameters,
    ) -> Vec<AssetDescriptor>;

    /// Assembles the scene. Every descriptor returned by
    /// [`SceneLoadingStrategy::find_dependencies`] must be resolved in `assets`.
    fn load(
        &self,
        document: &DocNode,
        params: &SceneLoadParameters,
        assets: &AssetStore,
    ) -> Result<Scene, SceneError>;
}
