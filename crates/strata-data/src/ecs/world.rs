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

use std::any::TypeId;

use strata_core::ecs::entity::EntityId;
use thiserror::Error;

use super::entity_store::EntityStore;
use super::storage::ComponentColumns;
use super::{Component, ComponentBundle, Family, Query, WorldQuery};

/// Errors returned by structural changes on the [`World`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EcsError {
    /// The id is stale or was never handed out by this world.
    #[error("entity {0} does not exist")]
    EntityNotFound(EntityId),
}

/// The central container for the ECS: every entity and all of their components.
#[derive(Default)]
pub struct World {
    entities: EntityStore,
    columns: ComponentColumns,
}

impl World {
    /// Creates a new, empty `World`.
    pub fn new() -> Self {
        Self {
            entities: EntityStore::new(),
            columns: ComponentColumns::default(),
        }
    }

    /// Spawns a new entity carrying the given bundle of components.
    ///
    /// Pass `()` to create a bare entity.
    pub fn spawn<B: ComponentBundle>(&mut self, bundle: B) -> EntityId {
        let id = self.entities.create_entity();
        bundle.insert_into(&mut self.columns, id.index);
        id
    }

    /// Despawns an entity and drops all of its components.
    ///
    /// Returns `false` if the entity was already gone.
    pub fn despawn(&mut self, entity: EntityId) -> bool {
        if !self.entities.destroy_entity(entity) {
            return false;
        }
        self.columns.clear_slot(entity.index);
        true
    }

    /// Attaches `component` to `entity`, replacing any previous value of that type.
    ///
    /// Returns the replaced value, if any.
    pub fn add_component<T: Component>(
        &mut self,
        entity: EntityId,
        component: T,
    ) -> Result<Option<T>, EcsError> {
        if !self.entities.is_alive(entity) {
            return Err(EcsError::EntityNotFound(entity));
        }
        Ok(self.columns.insert(entity.index, component))
    }

    /// Detaches and returns the component `T` of `entity`.
    pub fn remove_component<T: Component>(&mut self, entity: EntityId) -> Option<T> {
        if !self.entities.is_alive(entity) {
            return None;
        }
        self.columns.take::<T>(entity.index)
    }

    /// Gets an immutable reference to a component `T` of `entity`.
    pub fn get<T: Component>(&self, entity: EntityId) -> Option<&T> {
        if !self.entities.is_alive(entity) {
            return None;
        }
        self.columns.get::<T>(entity.index)
    }

    /// Gets a mutable reference to a component `T` of `entity`.
    pub fn get_mut<T: Component>(&mut self, entity: EntityId) -> Option<&mut T> {
        if !self.entities.is_alive(entity) {
            return None;
        }
        self.columns.get_mut::<T>(entity.index)
    }

    /// Returns true if `entity` is alive and has a component `T`.
    pub fn has<T: Component>(&self, entity: EntityId) -> bool {
        self.has_type(entity, TypeId::of::<T>())
    }

    fn has_type(&self, entity: EntityId, type_id: TypeId) -> bool {
        self.entities.is_alive(entity) && self.columns.contains(type_id, entity.index)
    }

    /// Returns true if the id refers to a live entity.
    pub fn is_alive(&self, entity: EntityId) -> bool {
        self.entities.is_alive(entity)
    }

    /// Number of live entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Iterates every live entity id in slot order.
    pub fn iter_entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.iter()
    }

    /// Creates a read-only query over every entity matching `Q`.
    pub fn query<Q: WorldQuery>(&self) -> Query<'_, Q> {
        Query::new(self)
    }

    /// Collects the ids of every entity that belongs to `family`.
    pub fn entities_for(&self, family: &Family) -> Vec<EntityId> {
        self.entities
            .iter()
            .filter(|id| family.matches(|t| self.columns.contains(t, id.index)))
            .collect()
    }
}
