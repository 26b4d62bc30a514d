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

use strata_core::ecs::entity::EntityId;

use crate::ecs::{Component, World};
use std::{any::TypeId, marker::PhantomData};

/// A trait implemented by types that can be used to query data from the `World`.
///
/// Implemented for component references (`&T`), `EntityId`, the `Without<T>`
/// filter, and tuples of other `WorldQuery` types. Queries are read-only;
/// systems that mutate collect the matching ids first and then go through
/// [`World::get_mut`].
pub trait WorldQuery {
    /// The type of item yielded for each matching entity.
    type Item<'w>;

    /// Components an entity must have to match.
    fn type_ids() -> Vec<TypeId>;

    /// Components an entity must NOT have to match.
    fn without_type_ids() -> Vec<TypeId> {
        Vec::new()
    }

    /// Fetches the item for one entity, or `None` if it does not match.
    fn fetch(world: &World, entity: EntityId) -> Option<Self::Item<'_>>;
}

impl<T: Component> WorldQuery for &T {
    type Item<'w> = &'w T;

    fn type_ids() -> Vec<TypeId> {
        vec![TypeId::of::<T>()]
    }

    fn fetch(world: &World, entity: EntityId) -> Option<Self::Item<'_>> {
        world.get::<T>(entity)
    }
}

impl WorldQuery for EntityId {
    type Item<'w> = EntityId;

    fn type_ids() -> Vec<TypeId> {
        Vec::new()
    }

    fn fetch(_world: &World, entity: EntityId) -> Option<Self::Item<'_>> {
        Some(entity)
    }
}

/// A query filter that excludes entities having component `T`.
pub struct Without<T: Component>(PhantomData<T>);

impl<T: Component> WorldQuery for Without<T> {
    type Item<'w> = ();

    fn type_ids() -> Vec<TypeId> {
        Vec::new()
    }

    fn without_type_ids() -> Vec<TypeId> {
        vec![TypeId::of::<T>()]
    }

    fn fetch(world: &World, entity: EntityId) -> Option<Self::Item<'_>> {
        if world.has::<T>(entity) {
            None
        } else {
            Some(())
        }
    }
}

macro_rules! impl_query_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: WorldQuery),+> WorldQuery for ($($name,)+) {
            type Item<'w> = ($($name::Item<'w>,)+);

            fn type_ids() -> Vec<TypeId> {
                let mut ids = Vec::new();
                $(ids.extend($name::type_ids());)+
                ids
            }

            fn without_type_ids() -> Vec<TypeId> {
                let mut ids = Vec::new();
                $(ids.extend($name::without_type_ids());)+
                ids
            }

            fn fetch(world: &World, entity: EntityId) -> Option<Self::Item<'_>> {
                Some(($($name::fetch(world, entity)?,)+))
            }
        }
    };
}

impl_query_for_tuple!(A, B);
impl_query_for_tuple!(A, B, C);
impl_query_for_tuple!(A, B, C, D);
impl_query_for_tuple!(A, B, C, D, E);

/// An iterator over every entity matching the query `Q`.
///
/// Matching entities are captured when the query is created, in slot order.
pub struct Query<'w, Q: WorldQuery> {
    world: &'w World,
    entities: std::vec::IntoIter<EntityId>,
    _marker: PhantomData<Q>,
}

impl<'w, Q: WorldQuery> Query<'w, Q> {
    pub(crate) fn new(world: &'w World) -> Self {
        let entities: Vec<EntityId> = world.iter_entities().collect();
        Self {
            world,
            entities: entities.into_iter(),
            _marker: PhantomData,
        }
    }
}

impl<'w, Q: WorldQuery> Iterator for Query<'w, Q> {
    type Item = Q::Item<'w>;

    fn next(&mut self) -> Option<Self::Item> {
        let world = self.world;
        self.entities.by_ref().find_map(|entity| Q::fetch(world, entity))
    }
}
