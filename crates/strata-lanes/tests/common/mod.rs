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

//! Stub collaborators shared by the loader integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use strata_core::asset::{
    AnimationData, AtlasRegion, ParticleEffect, ParticleEffectSource, ParticleError, SkeletonData,
    SkinData, TextureAtlas,
};
use strata_core::ecs::entity::EntityId;
use strata_core::lighting::{LightDesc, LightHandle, LightingProvider};
use strata_core::math::{Aabb2, Vec2};
use strata_core::physics::{
    BodyDesc, BodyHandle, FixtureDesc, FixtureHandle, PhysicsError, PhysicsProvider,
};
use strata_data::assets::AssetStore;
use strata_data::config::LoaderConfig;
use strata_data::registry::{CategoryRegistry, Material, MaterialRegistry};
use strata_lanes::scene_lane::{OverlapSceneLane, PluginRegistry, SceneLoadParameters};

pub const ATLAS: &str = "level.atlas";

/// A body as seen by the recording physics world.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedBody {
    pub desc: BodyDesc,
    pub fixtures: Vec<FixtureDesc>,
    pub position: Vec2,
    pub angle: f32,
    pub user_data: Option<EntityId>,
}

/// A physics world that only records what it is asked to do.
#[derive(Debug, Default)]
pub struct RecordingPhysics {
    pub bodies: Vec<RecordedBody>,
    pub gravity: Vec2,
}

impl RecordingPhysics {
    fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut RecordedBody, PhysicsError> {
        self.bodies
            .get_mut(handle.0 as usize)
            .ok_or(PhysicsError::UnknownBody(handle))
    }
}

impl PhysicsProvider for RecordingPhysics {
    fn step(&mut self, _dt: f32) {}

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = gravity;
    }

    fn create_body(&mut self, desc: &BodyDesc) -> BodyHandle {
        self.bodies.push(RecordedBody {
            desc: *desc,
            fixtures: Vec::new(),
            position: Vec2::ZERO,
            angle: 0.0,
            user_data: None,
        });
        BodyHandle(self.bodies.len() as u64 - 1)
    }

    fn remove_body(&mut self, _handle: BodyHandle) {}

    fn create_fixture(
        &mut self,
        body: BodyHandle,
        desc: &FixtureDesc,
    ) -> Result<FixtureHandle, PhysicsError> {
        let body = self.body_mut(body)?;
        body.fixtures.push(desc.clone());
        Ok(FixtureHandle(body.fixtures.len() as u64 - 1))
    }

    fn set_body_transform(
        &mut self,
        body: BodyHandle,
        position: Vec2,
        angle: f32,
    ) -> Result<(), PhysicsError> {
        let body = self.body_mut(body)?;
        body.position = position;
        body.angle = angle;
        Ok(())
    }

    fn body_transform(&self, body: BodyHandle) -> Option<(Vec2, f32)> {
        self.bodies
            .get(body.0 as usize)
            .map(|b| (b.position, b.angle))
    }

    fn set_body_user_data(&mut self, body: BodyHandle, entity: EntityId) -> Result<(), PhysicsError> {
        self.body_mut(body)?.user_data = Some(entity);
        Ok(())
    }

    fn body_user_data(&self, body: BodyHandle) -> Option<EntityId> {
        self.bodies.get(body.0 as usize).and_then(|b| b.user_data)
    }
}

/// A lighting subsystem that keeps every light in a list.
#[derive(Debug, Default)]
pub struct RecordingLights {
    pub lights: Vec<LightDesc>,
}

impl LightingProvider for RecordingLights {
    fn create_light(&mut self, desc: LightDesc) -> LightHandle {
        self.lights.push(desc);
        LightHandle(self.lights.len() as u64 - 1)
    }

    fn light(&self, handle: LightHandle) -> Option<&LightDesc> {
        self.lights.get(handle.0 as usize)
    }

    fn set_light_position(&mut self, handle: LightHandle, position: Vec2) -> bool {
        match self.lights.get_mut(handle.0 as usize) {
            Some(light) => {
                light.position = position;
                true
            }
            None => false,
        }
    }

    fn remove_light(&mut self, _handle: LightHandle) -> Option<LightDesc> {
        None
    }
}

/// Serves particle effects from a fixed table keyed by path.
#[derive(Default)]
pub struct StubParticles {
    pub effects: HashMap<String, ParticleEffect>,
}

impl ParticleEffectSource for StubParticles {
    fn load_effect(&self, path: &str, _atlas: &TextureAtlas) -> Result<ParticleEffect, ParticleError> {
        self.effects
            .get(path)
            .cloned()
            .ok_or_else(|| ParticleError::NotFound {
                path: path.to_owned(),
            })
    }
}

/// An atlas with a 64x32 `logo` region and a 10x20 `crate` region.
pub fn atlas() -> TextureAtlas {
    TextureAtlas::new(vec![
        AtlasRegion {
            name: "logo".into(),
            page: "level.png".into(),
            x: 0,
            y: 0,
            width: 64,
            height: 32,
        },
        AtlasRegion {
            name: "crate".into(),
            page: "level.png".into(),
            x: 64,
            y: 0,
            width: 10,
            height: 20,
        },
    ])
}

/// A skeleton with one 4x10 skin and an `idle` clip.
pub fn hero_skeleton() -> SkeletonData {
    SkeletonData {
        skins: vec![SkinData {
            name: "default".into(),
            bounds: Aabb2::from_origin_size(Vec2::new(-2.0, 0.0), Vec2::new(4.0, 10.0)),
        }],
        animations: vec![AnimationData {
            name: "idle".into(),
            duration: 1.0,
        }],
    }
}

pub fn assets() -> AssetStore {
    let mut store = AssetStore::new();
    store.insert(ATLAS, atlas());
    store
}

pub fn materials() -> MaterialRegistry {
    let mut materials = MaterialRegistry::new();
    materials.register("ice", Material::new(0.9, 0.02, 0.1));
    materials
}

pub fn particles() -> StubParticles {
    let mut particles = StubParticles::default();
    particles.effects.insert(
        "overlap/assets/orig/particles/fire".into(),
        ParticleEffect::new(
            "fire",
            Aabb2::from_origin_size(Vec2::new(-5.0, -5.0), Vec2::new(10.0, 30.0)),
            2.0,
            false,
        ),
    );
    particles
}

pub fn lane_with(config: LoaderConfig, plugins: PluginRegistry) -> OverlapSceneLane {
    OverlapSceneLane::new(
        config,
        Arc::new(materials()),
        Arc::new(plugins),
        Arc::new(particles()),
    )
}

pub fn lane() -> OverlapSceneLane {
    lane_with(LoaderConfig::default(), PluginRegistry::new())
}

pub fn params(units: f32) -> SceneLoadParameters {
    SceneLoadParameters::new(units, ATLAS)
}

/// Parameters with a recording physics world and lighting subsystem attached.
pub fn params_with_collaborators(
    units: f32,
) -> (
    SceneLoadParameters,
    Arc<Mutex<RecordingPhysics>>,
    Arc<Mutex<RecordingLights>>,
) {
    let physics = Arc::new(Mutex::new(RecordingPhysics::default()));
    let lights = Arc::new(Mutex::new(RecordingLights::default()));
    let categories = Arc::new(CategoryRegistry::from_names(["player", "level"]).unwrap());
    let params = params(units)
        .with_physics(physics.clone(), categories)
        .with_lighting(lights.clone());
    (params, physics, lights)
}
