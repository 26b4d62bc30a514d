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

use super::component::Component;
use super::world::{EcsError, World};
use super::{EntityId, Family, Without};

// --- DUMMY COMPONENTS FOR TESTING ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Position(i32);
impl Component for Position {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Velocity(i32);
impl Component for Velocity {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, super::Component)]
struct Frozen;

// --- TESTS ---

#[test]
fn test_spawn_single_entity() {
    // --- 1. SETUP ---
    let mut world = World::default();

    // --- 2. ACTION ---
    let entity_id = world.spawn((Position(10), Velocity(-5)));

    // --- 3. ASSERTIONS ---
    assert_eq!(entity_id.index, 0, "The first entity should have index 0");
    assert_eq!(
        entity_id.generation, 0,
        "The first entity should have generation 0"
    );
    assert_eq!(world.entity_count(), 1);
    assert_eq!(world.get::<Position>(entity_id), Some(&Position(10)));
    assert_eq!(world.get::<Velocity>(entity_id), Some(&Velocity(-5)));
    assert!(!world.has::<Frozen>(entity_id));
}

#[test]
fn test_spawn_empty_bundle_then_attach() {
    let mut world = World::new();
    let entity = world.spawn(());
    assert!(world.is_alive(entity));

    let replaced = world.add_component(entity, Position(1)).unwrap();
    assert_eq!(replaced, None);
    let replaced = world.add_component(entity, Position(2)).unwrap();
    assert_eq!(replaced, Some(Position(1)), "attach should replace");
    assert_eq!(world.get::<Position>(entity), Some(&Position(2)));
}

#[test]
fn test_despawn_recycles_slot_with_new_generation() {
    // --- 1. SETUP ---
    let mut world = World::new();
    let first = world.spawn(Position(1));

    // --- 2. ACTION ---
    assert!(world.despawn(first));
    let second = world.spawn(Velocity(3));

    // --- 3. ASSERTIONS ---
    assert_eq!(second.index, first.index, "the slot should be reused");
    assert_eq!(second.generation, first.generation + 1);
    assert!(!world.is_alive(first));
    assert_eq!(world.get::<Position>(first), None, "stale id must not resolve");
    assert_eq!(
        world.get::<Position>(second),
        None,
        "components of the old occupant must be gone"
    );
    assert!(!world.despawn(first), "double despawn should be rejected");
}

#[test]
fn test_add_component_to_dead_entity_fails() {
    let mut world = World::new();
    let entity = world.spawn(());
    world.despawn(entity);

    assert_eq!(
        world.add_component(entity, Frozen),
        Err(EcsError::EntityNotFound(entity))
    );
}

#[test]
fn test_get_mut_and_remove() {
    let mut world = World::new();
    let entity = world.spawn(Position(5));

    if let Some(position) = world.get_mut::<Position>(entity) {
        position.0 += 1;
    }
    assert_eq!(world.remove_component::<Position>(entity), Some(Position(6)));
    assert!(!world.has::<Position>(entity));
    assert!(world.is_alive(entity), "removing a component keeps the entity");
}

#[test]
fn test_query_with_tuple_and_filter() {
    // --- 1. SETUP ---
    let mut world = World::new();
    let moving = world.spawn((Position(1), Velocity(1)));
    let _frozen = world.spawn((Position(2), Velocity(0), Frozen));
    let _still = world.spawn(Position(3));

    // --- 2. ACTION ---
    let matched: Vec<(EntityId, i32)> = world
        .query::<(EntityId, &Position, &Velocity, Without<Frozen>)>()
        .map(|(id, position, _, ())| (id, position.0))
        .collect();

    // --- 3. ASSERTIONS ---
    assert_eq!(matched, vec![(moving, 1)]);
    assert_eq!(world.query::<&Position>().count(), 3);
}

#[test]
fn test_family_membership() {
    let mut world = World::new();
    let a = world.spawn((Position(0), Velocity(0)));
    let b = world.spawn((Position(0), Frozen));
    let c = world.spawn(Velocity(0));

    let all_positions = world.entities_for(&Family::all::<Position>());
    assert_eq!(all_positions, vec![a, b]);

    let not_frozen = world.entities_for(&Family::all::<Position>().exclude::<Frozen>());
    assert_eq!(not_frozen, vec![a]);

    let either = world.entities_for(&Family::all::<()>().one::<(Frozen, Velocity)>());
    assert_eq!(either, vec![a, b, c]);
}
