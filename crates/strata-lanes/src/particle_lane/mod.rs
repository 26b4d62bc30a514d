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

//! Per-frame particle effect maintenance.

use strata_core::math::Vec2;
use strata_data::ecs::{Family, Node, Particle, Transform, World};

/// A system over every entity with a [`Particle`].
///
/// - On first visit the effect is scaled by `scale` and marked as scaled.
/// - Completed effects are despawned together with their entity.
/// - Running effects are advanced by `dt`. Effects on scene-graph nodes are
///   positioned at the origin (the renderer applies the node transform);
///   free-standing effects follow their own transform.
///
/// Returns the number of despawned entities.
pub fn particle_update_system(world: &mut World, dt: f32, scale: f32) -> usize {
    let mut despawned = 0;

    for entity in world.entities_for(&Family::all::<Particle>()) {
        let position = if world.has::<Node>(entity) {
            Vec2::ZERO
        } else {
            world
                .get::<Transform>(entity)
                .map(|t| t.position)
                .unwrap_or(Vec2::ZERO)
        };

        let Some(particle) = world.get_mut::<Particle>(entity) else {
            continue;
        };

        if !particle.scaled {
            particle.effect.scale_effect(scale);
            particle.scaled = true;
        }

        if particle.effect.is_complete() {
            world.despawn(entity);
            despawned += 1;
            continue;
        }

        particle.effect.set_position(position);
        particle.effect.update(dt);
    }

    if despawned > 0 {
        log::debug!("removed {} completed particle effects", despawned);
    }
    despawned
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::asset::ParticleEffect;
    use strata_core::math::Aabb2;

    fn effect(duration: f32) -> Particle {
        Particle::new(ParticleEffect::new(
            "fx",
            Aabb2::from_origin_size(Vec2::ZERO, Vec2::ONE),
            duration,
            false,
        ))
    }

    #[test]
    fn test_first_update_scales_once() {
        // --- 1. ARRANGE ---
        let mut world = World::new();
        let entity = world.spawn(effect(10.0));

        // --- 2. ACT ---
        particle_update_system(&mut world, 0.1, 0.5);
        particle_update_system(&mut world, 0.1, 0.5);

        // --- 3. ASSERT ---
        let particle = world.get::<Particle>(entity).unwrap();
        assert!(particle.scaled);
        assert_eq!(particle.effect.scale(), 0.5);
        assert!((particle.effect.elapsed() - 0.2).abs() < 1e-5);
    }

    #[test]
    fn test_completed_effects_are_despawned() {
        let mut world = World::new();
        let short = world.spawn(effect(0.1));
        let long = world.spawn(effect(5.0));

        assert_eq!(particle_update_system(&mut world, 0.2, 1.0), 0);
        assert_eq!(particle_update_system(&mut world, 0.2, 1.0), 1);

        assert!(!world.is_alive(short));
        assert!(world.is_alive(long));
    }

    #[test]
    fn test_position_depends_on_node() {
        let mut world = World::new();
        let transform = Transform {
            position: Vec2::new(3.0, 4.0),
            ..Default::default()
        };
        let free = world.spawn((effect(5.0), transform));
        let attached = world.spawn((effect(5.0), transform, Node::default()));

        particle_update_system(&mut world, 0.1, 1.0);

        let free_pos = world.get::<Particle>(free).unwrap().effect.position();
        let attached_pos = world.get::<Particle>(attached).unwrap().effect.position();
        assert_eq!(free_pos, Vec2::new(3.0, 4.0));
        assert_eq!(attached_pos, Vec2::ZERO);
    }
}
