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

use std::sync::{Arc, Mutex};

use strata_agents::{AgentError, SceneAgent};
use strata_core::asset::{AtlasRegion, ParticleEffectSource, TextureAtlas};
use strata_core::lighting::LightingProvider;
use strata_core::math::{Aabb2, Vec2};
use strata_core::physics::PhysicsProvider;
use strata_data::assets::AssetStore;
use strata_data::config::LoaderConfig;
use strata_data::ecs::{Family, Light, Node, Particle, PhysicsBody};
use strata_data::registry::{CategoryRegistry, Material, MaterialRegistry};
use strata_infra::{ParticleLibrary, ParticleTemplate, RapierPhysicsWorld, RayLightWorld};
use strata_lanes::scene_lane::{
    node_propagation_system, OverlapSceneLane, PluginRegistry, SceneLoadParameters,
};
use strata_lanes::SceneError;

const LEVEL: &str = r#"{
    "sceneName": "cave",
    "composite": {
        "sComposites": [
            {
                "itemIdentifier": "ledge", "x": 10, "y": 20,
                "customVars": "material:rock",
                "shape": { "polygons": [ [ {"x":0,"y":0}, {"x":8,"y":0}, {"x":8,"y":2}, {"x":0,"y":2} ] ] },
                "composite": {
                    "sImages": [ { "imageName": "moss", "x": 1, "y": 2 } ],
                    "sParticleEffects": [ { "particleName": "drip", "x": 3, "y": 0 } ]
                }
            }
        ],
        "sLights": [ { "type": "CONE", "x": 5, "y": 5, "directionDegree": 270 } ]
    }
}"#;

fn atlas() -> TextureAtlas {
    TextureAtlas::new(vec![AtlasRegion {
        name: "moss".into(),
        page: "cave.png".into(),
        x: 0,
        y: 0,
        width: 16,
        height: 8,
    }])
}

fn agent() -> SceneAgent {
    let mut materials = MaterialRegistry::new();
    materials.register("rock", Material::new(2.5, 0.9, 0.0));

    let mut particles = ParticleLibrary::new();
    particles.insert(
        "overlap/assets/orig/particles/drip",
        ParticleTemplate {
            bounds: Aabb2::from_origin_size(Vec2::ZERO, Vec2::new(2.0, 12.0)),
            duration: 0.5,
            continuous: false,
            images: vec!["moss".into()],
        },
    );
    let particles: Arc<dyn ParticleEffectSource> = Arc::new(particles);

    let lane = OverlapSceneLane::new(
        LoaderConfig::default(),
        Arc::new(materials),
        Arc::new(PluginRegistry::new()),
        particles,
    );
    SceneAgent::new(Arc::new(lane))
}

#[test]
fn test_background_load_into_rapier_world() {
    // --- 1. ARRANGE ---
    let mut agent = agent();
    let physics = Arc::new(Mutex::new(RapierPhysicsWorld::new()));
    let lights = Arc::new(Mutex::new(RayLightWorld::new()));
    let categories = Arc::new(CategoryRegistry::from_names(["level"]).unwrap());
    let params = SceneLoadParameters::new(1.0, "cave.atlas")
        .with_physics(physics.clone(), categories)
        .with_lighting(lights.clone());

    let dependencies = agent.dependencies(LEVEL, &params).unwrap();
    let mut assets = AssetStore::new();
    assets.insert("cave.atlas", atlas());
    assert!(assets.unresolved(&dependencies).is_empty());

    // --- 2. ACT ---
    agent
        .begin_load_background(LEVEL.to_owned(), params, Arc::new(assets))
        .unwrap();
    let mut scene = agent.finish_load().unwrap();
    node_propagation_system(&mut scene.world);

    // --- 3. ASSERT ---
    assert_eq!(scene.name, "cave");
    assert_eq!(scene.world.entity_count(), 5);

    let ledge = scene.children(scene.root)[0];
    let body = scene.world.get::<PhysicsBody>(ledge).unwrap().body;
    let physics = physics.lock().unwrap();
    assert_eq!(physics.body_count(), 1);
    assert_eq!(physics.body_transform(body).unwrap().0, Vec2::new(10.0, 20.0));
    assert_eq!(physics.body_user_data(body), Some(ledge));

    let moss = scene.children(ledge)[0];
    let moss_node = scene.world.get::<Node>(moss).unwrap();
    assert_eq!(moss_node.world_position, Vec2::new(11.0, 22.0));

    let particle_entities = scene.world.entities_for(&Family::all::<Particle>());
    assert_eq!(particle_entities.len(), 1);

    let light = scene.children(scene.root)[1];
    let handle = scene.world.get::<Light>(light).unwrap().handle;
    let lights = lights.lock().unwrap();
    assert_eq!(lights.light(handle).unwrap().position, Vec2::new(5.0, 5.0));
    assert_eq!(lights.lights_reaching(Vec2::new(5.0, -20.0)).count(), 1);
}

#[test]
fn test_unresolved_atlas_fails_at_finish() {
    let mut agent = agent();

    agent
        .begin_load_background(
            LEVEL.to_owned(),
            SceneLoadParameters::new(1.0, "cave.atlas"),
            Arc::new(AssetStore::new()),
        )
        .unwrap();

    assert!(matches!(
        agent.finish_load(),
        Err(AgentError::Scene(SceneError::MissingAsset { .. }))
    ));
}
