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

use rapier2d::dynamics::{RigidBodyHandle, RigidBodyType};
use rapier2d::geometry::{ColliderHandle, Group, InteractionGroups};
use rapier2d::na::{Point2, Vector2};
use rapier2d::prelude::Real;
use strata_core::math::Vec2;
use strata_core::physics::{BodyHandle, BodyType, Filter, FixtureHandle};

pub fn to_rapier_vec(v: Vec2) -> Vector2<Real> {
    Vector2::new(v.x, v.y)
}

pub fn to_rapier_point(v: Vec2) -> Point2<Real> {
    Point2::new(v.x, v.y)
}

pub fn from_rapier_vec(v: &Vector2<Real>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

pub fn to_rapier_body_type(body_type: BodyType) -> RigidBodyType {
    match body_type {
        BodyType::Static => RigidBodyType::Fixed,
        BodyType::Kinematic => RigidBodyType::KinematicPositionBased,
        BodyType::Dynamic => RigidBodyType::Dynamic,
    }
}

/// Category bits become memberships and mask bits the filter.
pub fn to_interaction_groups(filter: &Filter) -> InteractionGroups {
    InteractionGroups::new(
        Group::from_bits_truncate(filter.category_bits as u32),
        Group::from_bits_truncate(filter.mask_bits as u32),
    )
}

// Handles keep both halves of rapier's arena index so stale ids never alias
// a recycled slot.

pub fn to_body_handle(handle: RigidBodyHandle) -> BodyHandle {
    let (index, generation) = handle.into_raw_parts();
    BodyHandle(((generation as u64) << 32) | index as u64)
}

pub fn from_body_handle(handle: BodyHandle) -> RigidBodyHandle {
    RigidBodyHandle::from_raw_parts(handle.0 as u32, (handle.0 >> 32) as u32)
}

pub fn to_fixture_handle(handle: ColliderHandle) -> FixtureHandle {
    let (index, generation) = handle.into_raw_parts();
    FixtureHandle(((generation as u64) << 32) | index as u64)
}
