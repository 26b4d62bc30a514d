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

//! The result of loading a scene document.

use std::fmt;

use strata_core::ecs::entity::EntityId;

use crate::ecs::{Node, World};

/// A loaded scene: a named root entity and the world holding its graph.
pub struct Scene {
    /// The `sceneName` of the document, empty if it has none.
    pub name: String,
    /// The root entity.
    pub root: EntityId,
    /// Every entity of the scene.
    pub world: World,
}

impl Scene {
    /// Wraps an already populated world.
    pub fn new(name: impl Into<String>, root: EntityId, world: World) -> Self {
        Self {
            name: name.into(),
            root,
            world,
        }
    }

    /// Children of `entity` in document order. Empty if it has no [`Node`].
    pub fn children(&self, entity: EntityId) -> &[EntityId] {
        self.world
            .get::<Node>(entity)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Every entity reachable from the root, depth-first, parents first.
    pub fn descendants(&self) -> Vec<EntityId> {
        let mut out = Vec::new();
        let mut stack = vec![self.root];
        while let Some(entity) = stack.pop() {
            out.push(entity);
            stack.extend(self.children(entity).iter().rev());
        }
        out
    }
}

impl fmt::Debug for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("root", &self.root)
            .field("entities", &self.world.entity_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descendants_are_depth_first_in_child_order() {
        // --- 1. ARRANGE ---
        let mut world = World::new();
        let root = world.spawn(Node::default());
        let a = world.spawn(Node::with_parent(root));
        let a1 = world.spawn(Node::with_parent(a));
        let b = world.spawn(Node::with_parent(root));
        world.get_mut::<Node>(root).unwrap().children = vec![a, b];
        world.get_mut::<Node>(a).unwrap().children = vec![a1];

        // --- 2. ACT ---
        let scene = Scene::new("test", root, world);

        // --- 3. ASSERT ---
        assert_eq!(scene.descendants(), vec![root, a, a1, b]);
        assert_eq!(scene.children(root), &[a, b]);
        assert!(scene.children(b).is_empty());
    }

    #[test]
    fn test_debug_summarises_the_world() {
        let mut world = World::new();
        let root = world.spawn(Node::default());
        world.spawn(Node::with_parent(root));

        let scene = Scene::new("cave", root, world);

        assert_eq!(
            format!("{scene:?}"),
            format!("Scene {{ name: \"cave\", root: {root:?}, entities: 2 }}")
        );
    }
}
