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

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail, Context, Result};
use log::info;
use strata_agents::SceneAgent;
use strata_core::asset::{AssetDescriptor, AssetKind, SkeletonData, TextureAtlas};
use strata_core::physics::PhysicsProvider;
use strata_data::assets::AssetStore;
use strata_data::ecs::{
    EntityId, Id, Light, Node, Particle, PhysicsBody, Spine, Texture, ZIndex,
};
use strata_data::registry::{CategoryRegistry, MaterialRegistry};
use strata_data::Scene;
use strata_infra::{ParticleLibrary, RapierPhysicsWorld, RayLightWorld};
use strata_lanes::particle_lane::particle_update_system;
use strata_lanes::scene_lane::{node_propagation_system, SceneLoadParameters};

use crate::helpers::{build_lane, load_config, read_text};

const FRAME_TIME: f32 = 1.0 / 60.0;

pub struct LoadArgs {
    pub scene: PathBuf,
    pub atlas_manifest: PathBuf,
    pub config: Option<PathBuf>,
    pub materials: Option<PathBuf>,
    pub categories: Option<PathBuf>,
    pub particles: Option<PathBuf>,
    pub units: f32,
    pub frames: u32,
}

pub fn run(args: LoadArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let materials = match &args.materials {
        Some(path) => MaterialRegistry::from_ron(&read_text(path)?)
            .with_context(|| format!("invalid material manifest {}", path.display()))?,
        None => MaterialRegistry::new(),
    };
    let categories = match &args.categories {
        Some(path) => CategoryRegistry::from_ron(&read_text(path)?)
            .with_context(|| format!("invalid category manifest {}", path.display()))?,
        None => CategoryRegistry::from_names([config.level_category.clone()])?,
    };
    let particles = match &args.particles {
        Some(path) => ParticleLibrary::from_ron(&read_text(path)?)?,
        None => ParticleLibrary::new(),
    };

    let physics = Arc::new(Mutex::new(RapierPhysicsWorld::new()));
    let lights = Arc::new(Mutex::new(RayLightWorld::new()));
    let params = SceneLoadParameters::new(args.units, args.atlas_manifest.display().to_string())
        .with_physics(physics.clone(), Arc::new(categories))
        .with_lighting(lights.clone());

    let mut agent = SceneAgent::new(Arc::new(build_lane(config, materials, particles)));
    let text = read_text(&args.scene)?;

    let dependencies = agent.dependencies(&text, &params)?;
    let assets = resolve(&dependencies, &args.atlas_manifest)?;

    agent.begin_load_background(text, params, Arc::new(assets))?;
    let mut scene = agent
        .finish_load()
        .with_context(|| format!("failed to load {}", args.scene.display()))?;
    node_propagation_system(&mut scene.world);

    if args.frames > 0 {
        simulate(&mut scene, &physics, args.frames, args.units)?;
    }

    let lights = lights.lock().map_err(|_| anyhow!("lighting poisoned"))?;
    info!(
        "scene '{}': {} entities, {} lights",
        scene.name,
        scene.world.entity_count(),
        lights.len()
    );
    print_tree(&scene, scene.root, 0);
    Ok(())
}

/// Resolves every descriptor from disk. The atlas comes from its manifest.
fn resolve(dependencies: &[AssetDescriptor], atlas_manifest: &Path) -> Result<AssetStore> {
    let mut store = AssetStore::new();
    for descriptor in dependencies {
        if store.is_resolved(descriptor) {
            continue;
        }
        match descriptor.kind {
            AssetKind::TextureAtlas => {
                let atlas: TextureAtlas = ron::from_str(&read_text(atlas_manifest)?)
                    .with_context(|| format!("invalid atlas manifest {}", atlas_manifest.display()))?;
                store.insert(descriptor.path.clone(), atlas);
            }
            AssetKind::SkeletonData => {
                let path = Path::new(&descriptor.path);
                let data: SkeletonData = serde_json::from_str(&read_text(path)?)
                    .with_context(|| format!("invalid skeleton {}", path.display()))?;
                store.insert(descriptor.path.clone(), data);
            }
        }
    }

    let missing = store.unresolved(dependencies);
    if !missing.is_empty() {
        bail!("{} dependencies left unresolved", missing.len());
    }
    Ok(store)
}

fn simulate(
    scene: &mut Scene,
    physics: &Mutex<RapierPhysicsWorld>,
    frames: u32,
    units: f32,
) -> Result<()> {
    let mut despawned = 0;
    for _ in 0..frames {
        physics
            .lock()
            .map_err(|_| anyhow!("physics world poisoned"))?
            .step(FRAME_TIME);
        despawned += particle_update_system(&mut scene.world, FRAME_TIME, units);
    }
    node_propagation_system(&mut scene.world);
    info!("simulated {frames} frames, {despawned} particle effects finished");
    Ok(())
}

fn print_tree(scene: &Scene, entity: EntityId, depth: usize) {
    println!("{:indent$}{}", "", describe(scene, entity), indent = depth * 2);
    for child in scene.children(entity) {
        print_tree(scene, *child, depth + 1);
    }
}

fn describe(scene: &Scene, entity: EntityId) -> String {
    let world = &scene.world;
    let kind = if entity == scene.root {
        format!("scene '{}'", scene.name)
    } else if let Some(texture) = world.get::<Texture>(entity) {
        format!("image '{}'", texture.region.name)
    } else if world.has::<Spine>(entity) {
        "spine".to_owned()
    } else if let Some(particle) = world.get::<Particle>(entity) {
        format!("particle '{}'", particle.effect.path)
    } else if world.has::<Light>(entity) {
        "light".to_owned()
    } else {
        "composite".to_owned()
    };

    let mut line = format!("{entity} {kind}");
    if let Some(id) = world.get::<Id>(entity) {
        line.push_str(&format!(" #{}", id.value));
    }
    if let Some(z) = world.get::<ZIndex>(entity).filter(|z| !z.layer.is_empty()) {
        line.push_str(&format!(" layer={}", z.layer));
    }
    if let Some(node) = world.get::<Node>(entity) {
        line.push_str(&format!(
            " at ({:.2}, {:.2})",
            node.world_position.x, node.world_position.y
        ));
    }
    if world.has::<PhysicsBody>(entity) {
        line.push_str(" [body]");
    }
    line
}
