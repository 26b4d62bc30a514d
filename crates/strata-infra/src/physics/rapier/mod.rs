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

//! Rapier implementation of the physics provider.

mod conversions;

use conversions::*;
use log::debug;
use rapier2d::prelude::*;
use strata_core::ecs::entity::EntityId;
use strata_core::math::{degrees_to_radians, radians_to_degrees, Vec2};
use strata_core::physics::{
    BodyDesc, BodyHandle, FixtureDesc, FixtureHandle, PhysicsError, PhysicsProvider,
};

/// Marks `user_data` as holding an entity, so entity `0v0` is told apart
/// from "nothing stored".
const USER_DATA_TAG: u128 = 1 << 64;

/// Implementation of the `PhysicsProvider` trait using the Rapier2D physics engine.
///
/// Angles cross the trait boundary in degrees, the unit scene documents are
/// authored in, and are converted to radians for rapier.
pub struct RapierPhysicsWorld {
    rigid_body_set: RigidBodySet,
    collider_set: ColliderSet,
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: BroadPhase,
    narrow_phase: NarrowPhase,
    impulse_joint_set: ImpulseJointSet,
    multibody_joint_set: MultibodyJointSet,
    ccd_solver: CCDSolver,
    query_pipeline: QueryPipeline,
}

impl Default for RapierPhysicsWorld {
    fn default() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            gravity: vector![0.0, -9.81],
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joint_set: ImpulseJointSet::new(),
            multibody_joint_set: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }
}

impl RapierPhysicsWorld {
    /// Creates an empty world with earth-like gravity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rigid bodies in the world.
    pub fn body_count(&self) -> usize {
        self.rigid_body_set.len()
    }

    /// Number of colliders in the world.
    pub fn fixture_count(&self) -> usize {
        self.collider_set.len()
    }

    /// The collider behind a fixture handle, for inspection.
    pub fn fixture(&self, handle: FixtureHandle) -> Option<&Collider> {
        self.collider_set
            .get(ColliderHandle::from_raw_parts(handle.0 as u32, (handle.0 >> 32) as u32))
    }

    /// The rigid body behind a body handle, for inspection.
    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.rigid_body_set.get(from_body_handle(handle))
    }

    fn body_mut(&mut self, handle: BodyHandle) -> Result<&mut RigidBody, PhysicsError> {
        self.rigid_body_set
            .get_mut(from_body_handle(handle))
            .ok_or(PhysicsError::UnknownBody(handle))
    }
}

impl PhysicsProvider for RapierPhysicsWorld {
    fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_body_set,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            &mut self.ccd_solver,
            Some(&mut self.query_pipeline),
            &(),
            &(),
        );
    }

    fn set_gravity(&mut self, gravity: Vec2) {
        self.gravity = to_rapier_vec(gravity);
    }

    fn create_body(&mut self, desc: &BodyDesc) -> BodyHandle {
        let rigid_body = RigidBodyBuilder::new(to_rapier_body_type(desc.body_type))
            .can_sleep(desc.allow_sleep)
            .sleeping(!desc.awake)
            .build();

        let handle = to_body_handle(self.rigid_body_set.insert(rigid_body));
        debug!("rapier: created {:?} body {:?}", desc.body_type, handle);
        handle
    }

    fn remove_body(&mut self, handle: BodyHandle) {
        self.rigid_body_set.remove(
            from_body_handle(handle),
            &mut self.island_manager,
            &mut self.collider_set,
            &mut self.impulse_joint_set,
            &mut self.multibody_joint_set,
            true,
        );
    }

    fn create_fixture(
        &mut self,
        body: BodyHandle,
        desc: &FixtureDesc,
    ) -> Result<FixtureHandle, PhysicsError> {
        let parent = from_body_handle(body);
        if !self.rigid_body_set.contains(parent) {
            return Err(PhysicsError::UnknownBody(body));
        }

        let invalid = PhysicsError::InvalidPolygon {
            vertex_count: desc.vertices.len(),
        };
        if desc.vertices.len() < 3 {
            return Err(invalid);
        }

        let points = desc.vertices.iter().copied().map(to_rapier_point).collect();
        let collider = ColliderBuilder::convex_polyline(points)
            .ok_or(invalid)?
            .density(desc.density)
            .friction(desc.friction)
            .restitution(desc.restitution)
            .collision_groups(to_interaction_groups(&desc.filter))
            .build();

        let handle = self
            .collider_set
            .insert_with_parent(collider, parent, &mut self.rigid_body_set);
        Ok(to_fixture_handle(handle))
    }

    fn set_body_transform(
        &mut self,
        body: BodyHandle,
        position: Vec2,
        angle: f32,
    ) -> Result<(), PhysicsError> {
        let rb = self.body_mut(body)?;
        rb.set_position(
            Isometry::new(to_rapier_vec(position), degrees_to_radians(angle)),
            true,
        );
        Ok(())
    }

    fn body_transform(&self, body: BodyHandle) -> Option<(Vec2, f32)> {
        let rb = self.rigid_body_set.get(from_body_handle(body))?;
        Some((
            from_rapier_vec(rb.translation()),
            radians_to_degrees(rb.rotation().angle()),
        ))
    }

    fn set_body_user_data(
        &mut self,
        body: BodyHandle,
        entity: EntityId,
    ) -> Result<(), PhysicsError> {
        self.body_mut(body)?.user_data = USER_DATA_TAG | entity.to_bits() as u128;
        Ok(())
    }

    fn body_user_data(&self, body: BodyHandle) -> Option<EntityId> {
        let rb = self.rigid_body_set.get(from_body_handle(body))?;
        (rb.user_data & USER_DATA_TAG != 0).then(|| EntityId::from_bits(rb.user_data as u64))
    }
}
