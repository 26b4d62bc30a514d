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

//! # Physics Abstractions
//!
//! Traits and types for the 2D rigid-body engine the scene loader talks to.
//! The loader only ever creates bodies, attaches polygon fixtures and places
//! the body once; everything after that belongs to the engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ecs::entity::EntityId;
use crate::math::Vec2;

/// Opaque handle to a rigid body in the physics engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BodyHandle(pub u64);

/// Opaque handle to a fixture (collision shape) attached to a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixtureHandle(pub u64);

/// Defines the type of a rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BodyType {
    /// Fixed in place, does not move.
    #[default]
    Static,
    /// Controlled by the user, not by forces.
    Kinematic,
    /// Responds to forces and collisions.
    Dynamic,
}

impl BodyType {
    /// Maps the integer encoding used by scene documents (0, 1, 2).
    ///
    /// Out-of-range values fall back to `Static`.
    pub fn from_index(index: i32) -> Self {
        match index {
            1 => BodyType::Kinematic,
            2 => BodyType::Dynamic,
            _ => BodyType::Static,
        }
    }
}

/// Description for creating a rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyDesc {
    /// Body type.
    pub body_type: BodyType,
    /// Whether the engine may put the body to sleep.
    pub allow_sleep: bool,
    /// Whether the body starts awake.
    pub awake: bool,
}

impl Default for BodyDesc {
    fn default() -> Self {
        Self {
            body_type: BodyType::Static,
            allow_sleep: true,
            awake: true,
        }
    }
}

/// Collision filtering data for a fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// The category bits this fixture belongs to.
    pub category_bits: u16,
    /// The categories this fixture collides with.
    pub mask_bits: u16,
    /// Collision group index. Negative groups never collide with each other.
    pub group_index: i16,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            category_bits: 0x0001,
            mask_bits: 0xFFFF,
            group_index: 0,
        }
    }
}

/// Description for creating a polygon fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureDesc {
    /// Polygon vertices in body-local coordinates.
    pub vertices: Vec<Vec2>,
    /// Mass density.
    pub density: f32,
    /// Coulomb friction coefficient.
    pub friction: f32,
    /// Bounciness.
    pub restitution: f32,
    /// Collision filter.
    pub filter: Filter,
}

/// Errors reported by a physics provider.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhysicsError {
    /// The handle does not name a live body.
    #[error("unknown rigid body {0:?}")]
    UnknownBody(BodyHandle),
    /// The vertex ring cannot form a polygon shape.
    #[error("invalid polygon with {vertex_count} vertices")]
    InvalidPolygon {
        /// Number of vertices that were supplied.
        vertex_count: usize,
    },
}

/// Interface contract for any 2D physics engine implementation (e.g., Rapier).
pub trait PhysicsProvider: Send + Sync {
    /// Advances the simulation by `dt` seconds.
    fn step(&mut self, dt: f32);

    /// Sets the global gravity vector.
    fn set_gravity(&mut self, gravity: Vec2);

    /// Adds a rigid body to the simulation.
    fn create_body(&mut self, desc: &BodyDesc) -> BodyHandle;

    /// Removes a rigid body and every fixture attached to it.
    fn remove_body(&mut self, handle: BodyHandle);

    /// Attaches a polygon fixture to an existing body.
    fn create_fixture(
        &mut self,
        body: BodyHandle,
        desc: &FixtureDesc,
    ) -> Result<FixtureHandle, PhysicsError>;

    /// Places a body in the world (position in world units, angle as stored
    /// on the owning entity).
    fn set_body_transform(
        &mut self,
        body: BodyHandle,
        position: Vec2,
        angle: f32,
    ) -> Result<(), PhysicsError>;

    /// Current position and angle of a body.
    fn body_transform(&self, body: BodyHandle) -> Option<(Vec2, f32)>;

    /// Stores the owning entity on the body for collision correlation.
    fn set_body_user_data(&mut self, body: BodyHandle, entity: EntityId)
        -> Result<(), PhysicsError>;

    /// Reads back the entity stored with [`PhysicsProvider::set_body_user_data`].
    fn body_user_data(&self, body: BodyHandle) -> Option<EntityId>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_type_from_index() {
        assert_eq!(BodyType::from_index(0), BodyType::Static);
        assert_eq!(BodyType::from_index(1), BodyType::Kinematic);
        assert_eq!(BodyType::from_index(2), BodyType::Dynamic);
        assert_eq!(BodyType::from_index(7), BodyType::Static);
    }

    #[test]
    fn test_body_desc_default() {
        let desc = BodyDesc::default();
        assert_eq!(desc.body_type, BodyType::Static);
        assert!(desc.allow_sleep);
        assert!(desc.awake);
    }
}
