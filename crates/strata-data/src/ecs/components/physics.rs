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

use strata_core::physics::BodyHandle;

use crate::ecs::Component;

/// The rigid body owned by an entity.
///
/// Fixtures belong to the body. Once created, the body's motion is owned by
/// the physics engine and is never re-synced from the entity's transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Component)]
pub struct PhysicsBody {
    /// Handle into the physics provider.
    pub body: BodyHandle,
}
