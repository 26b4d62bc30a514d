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

use crate::ecs::{Component, EntityId};

/// An entity's place in the scene graph.
///
/// The parent link is a non-owning back-reference; the graph is defined by
/// the ordered `children` list of each node. `world_position` is filled in by
/// the node propagation system and is stale until it runs.
#[derive(Debug, Clone, Default, PartialEq, Component)]
pub struct Node {
    /// The entity this node hangs under. `None` for the scene root.
    pub parent: Option<EntityId>,
    /// Children in document order.
    pub children: Vec<EntityId>,
    /// Resolved world-space position.
    pub world_position: Vec2,
}

impl Node {
    /// Creates a node under `parent`.
    pub fn with_parent(parent: EntityId) -> Self {
        Self {
            parent: Some(parent),
            ..Self::default()
        }
    }
}
