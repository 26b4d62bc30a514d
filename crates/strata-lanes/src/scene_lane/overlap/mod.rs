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

//! Loader for scenes exported by the Overlap2D editor.
//!
//! An Overlap2D document is a tree of composites. Each composite may hold
//! images, nested composites, particle emitters, lights and skeletal
//! animations, plus optional collision polygons and custom properties.

mod assembly;
mod dependencies;
mod lights;
mod physics;
mod spine;

use std::sync::Arc;

use log::{debug, info};
use strata_core::asset::{AssetDescriptor, AssetKind, ParticleEffectSource, TextureAtlas};
use strata_data::assets::AssetStore;
use strata_data::config::LoaderConfig;
use strata_data::document::{self, DocNode};
use strata_data::ecs::{Node, Root, Transform, World};
use strata_data::registry::MaterialRegistry;
use strata_data::Scene;

use self::assembly::Assembly;
use super::{PluginRegistry, SceneLoadParameters, SceneLoadingStrategy};
use crate::SceneError;

// Document keys shared by discovery and assembly.
pub(crate) const COMPOSITE: &str = "composite";
pub(crate) const COMPOSITES: &str = "sComposites";
pub(crate) const IMAGES: &str = "sImages";
pub(crate) const PARTICLES: &str = "sParticleEffects";
pub(crate) const LIGHTS: &str = "sLights";
pub(crate) const SPINE_ANIMATIONS: &str = "sSpineAnimations";
pub(crate) const LAYERS: &str = "layers";
pub(crate) const CUSTOM_VARS: &str = "customVars";

/// Stand-in for keys that are absent from the document.
static EMPTY: DocNode = DocNode::Null;

/// The scene loading lane for Overlap2D documents.
///
/// A lane is cheap to share and holds only read-only tables, but one load
/// runs start to finish on a single thread.
pub struct OverlapSceneLane {
    config: LoaderConfig,
    spine_dir: String,
    particles_dir: String,
    materials: Arc<MaterialRegistry>,
    plugins: Arc<PluginRegistry>,
    particles: Arc<dyn ParticleEffectSource>,
}

impl OverlapSceneLane {
    /// Creates a lane over the given configuration and shared tables.
    pub fn new(
        config: LoaderConfig,
        materials: Arc<MaterialRegistry>,
        plugins: Arc<PluginRegistry>,
        particles: Arc<dyn ParticleEffectSource>,
    ) -> Self {
        let spine_dir = config.spine_dir();
        let particles_dir = config.particles_dir();
        debug!("overlap lane: spine in '{spine_dir}', particles in '{particles_dir}'");
        Self {
            spine_dir,
            particles_dir,
            config,
            materials,
            plugins,
            particles,
        }
    }

    /// The configuration this lane was built with.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Parses `text` and lists its dependencies.
    pub fn dependencies_from_str(
        &self,
        text: &str,
        params: &SceneLoadParameters,
    ) -> Result<Vec<AssetDescriptor>, SceneError> {
        let document = document::parse(text)?;
        Ok(self.find_dependencies(&document, params))
    }

    /// Parses `text` and assembles the scene.
    pub fn load_from_str(
        &self,
        text: &str,
        params: &SceneLoadParameters,
        assets: &AssetStore,
    ) -> Result<Scene, SceneError> {
        let document = document::parse(text)?;
        self.load(&document, params, assets)
    }
}

impl SceneLoadingStrategy for OverlapSceneLane {
    fn strategy_id(&self) -> &'static str {
        "OVERLAP2D_JSON_V1"
    }

    fn find_dependencies(
        &self,
        document: &DocNode,
        params: &SceneLoadParameters,
    ) -> Vec<AssetDescriptor> {
        let mut dependencies = vec![AssetDescriptor::atlas(params.atlas.clone())];
        dependencies::find_spine_animations(document, &self.spine_dir, &mut dependencies);
        dependencies
    }

    fn load(
        &self,
        document: &DocNode,
        params: &SceneLoadParameters,
        assets: &AssetStore,
    ) -> Result<Scene, SceneError> {
        let atlas = assets
            .get::<TextureAtlas>(&params.atlas)
            .ok_or_else(|| SceneError::MissingAsset {
                path: params.atlas.clone(),
                kind: AssetKind::TextureAtlas,
            })?;

        info!("parsing scene");

        let mut world = World::new();
        let root = world.spawn((Root, Node::default(), Transform::default()));
        let name = document.get_str("sceneName", "");
        let scene = Scene::new(name, root, world);

        let mut assembly = Assembly {
            lane: self,
            params,
            assets,
            atlas,
            scene,
        };
        assembly.load_root(root, document.get(COMPOSITE).unwrap_or(&EMPTY))?;

        Ok(assembly.scene)
    }
}
