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

use std::collections::VecDeque;

use strata_core::{ecs::entity::EntityId, math::Vec2};
use strata_data::ecs::{Node, Transform, World};

/// A system that resolves [`Node::world_position`] for every node in the world.
///
/// A root (a node without parent) sits at its own transform position; every
/// child sits at its parent's world position plus its own local position.
/// Nodes are visited breadth-first from the roots, so a parent is always
/// resolved before its children. Entities without a `Transform` contribute a
/// zero offset.
pub fn node_propagation_system(world: &mut World) {
    // Stage 1: seed the queue with every root.
    let mut queue: VecDeque<(EntityId, Vec2)> = world
        .query::<(EntityId, &Node)>()
        .filter(|(_, node)| node.parent.is_none())
        .map(|(id, _)| (id, Vec2::ZERO))
        .collect();

    // Stage 2: walk down, accumulating positions.
    while let Some((id, parent_position)) = queue.pop_front() {
        let local = world
            .get::<Transform>(id)
            .map(|t| t.position)
            .unwrap_or(Vec2::ZERO);
        let world_position = parent_position + local;

        let Some(node) = world.get_mut::<Node>(id) else {
            continue;
        };
        node.world_position = world_position;
        queue.extend(node.children.iter().map(|&child| (child, world_position)));
    }
}

/// Computes the world position of one entity by walking its ancestor chain.
///
/// Works without [`node_propagation_system`] having run. The walk stops at
/// the first ancestor without a `Node`, and is bounded by the number of
/// entities so a malformed graph cannot loop forever.
pub fn resolve_world_position(world: &World, entity: EntityId) -> Vec2 {
    let mut position = Vec2::ZERO;
    let mut current = Some(entity);
    let mut remaining = world.entity_count();

    while let Some(id) = current {
        if remaining == 0 {
            log::warn!("node graph above {} contains a cycle", entity);
            break;
        }
        remaining -= 1;

        if let Some(transform) = world.get::<Transform>(id) {
            position += transform.position;
        }
        current = world.get::<Node>(id).and_then(|node| node.parent);
    }

    position
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32) -> Transform {
        Transform {
            position: Vec2::new(x, y),
            ..Default::default()
        }
    }

    #[test]
    fn test_node_propagation_simple_hierarchy() {
        // --- 1. ARRANGE ---
        let mut world = World::default();
        let root = world.spawn((Node::default(), at(10.0, 0.0)));
        let child = world.spawn((Node::with_parent(root), at(0.0, 2.0)));
        let grandchild = world.spawn((Node::with_parent(child), at(1.0, 1.0)));
        world.get_mut::<Node>(root).unwrap().children.push(child);
        world.get_mut::<Node>(child).unwrap().children.push(grandchild);

        // --- 2. ACT ---
        node_propagation_system(&mut world);

        // --- 3. ASSERT ---
        assert_eq!(world.get::<Node>(root).unwrap().world_position, Vec2::new(10.0, 0.0));
        assert_eq!(world.get::<Node>(child).unwrap().world_position, Vec2::new(10.0, 2.0));
        assert_eq!(
            world.get::<Node>(grandchild).unwrap().world_position,
            Vec2::new(11.0, 3.0)
        );
    }

    #[test]
    fn test_resolve_matches_system() {
        let mut world = World::default();
        let root = world.spawn((Node::default(), at(5.0, 5.0)));
        let child = world.spawn((Node::with_parent(root), at(-1.0, 0.5)));
        world.get_mut::<Node>(root).unwrap().children.push(child);

        let on_demand = resolve_world_position(&world, child);
        node_propagation_system(&mut world);

        assert_eq!(on_demand, Vec2::new(4.0, 5.5));
        assert_eq!(world.get::<Node>(child).unwrap().world_position, on_demand);
    }

    #[test]
    fn test_resolve_survives_cycles() {
        let mut world = World::default();
        let a = world.spawn((Node::default(), at(1.0, 0.0)));
        let b = world.spawn((Node::with_parent(a), at(1.0, 0.0)));
        world.get_mut::<Node>(a).unwrap().parent = Some(b);

        // Two entities: the walk is cut after two steps.
        assert_eq!(resolve_world_position(&world, b), Vec2::new(2.0, 0.0));
    }
}
