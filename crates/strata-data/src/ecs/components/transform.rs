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

use strata_core::math::Vec2;

use crate::ecs::Component;

/// Local placement of an entity relative to its parent node.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct Transform {
    /// Local position in world units.
    pub position: Vec2,
    /// Pivot for rotation and scaling, in world units.
    pub origin: Vec2,
    /// Per-axis scale factor.
    pub scale: Vec2,
    /// Rotation angle in degrees, as authored by the editor.
    ///
    /// Physics providers convert to radians at their own boundary.
    pub angle: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            origin: Vec2::ZERO,
            scale: Vec2::ONE,
            angle: 0.0,
        }
    }
}
