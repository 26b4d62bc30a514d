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

//! Internal entity storage and ID management.

use strata_core::ecs::entity::EntityId;

/// Internal manager for entity slots.
///
/// Slots are recycled through a free list; recycling bumps the slot's
/// generation so stale ids stop resolving.
#[derive(Debug, Clone, Default)]
pub(crate) struct EntityStore {
    /// Current id of every slot ever created, and whether it is alive.
    entities: Vec<(EntityId, bool)>,
    /// Slot indices available for reuse.
    freed: Vec<u32>,
    alive: usize,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a new or recycled `EntityId`.
    pub fn create_entity(&mut self) -> EntityId {
        self.alive += 1;
        if let Some(index) = self.freed.pop() {
            let (id, alive) = &mut self.entities[index as usize];
            id.generation += 1;
            *alive = true;
            *id
        } else {
            let id = EntityId {
                index: self.entities.len() as u32,
                generation: 0,
            };
            self.entities.push((id, true));
            id
        }
    }

    /// Marks the slot free. Returns false for dead or stale ids.
    pub fn destroy_entity(&mut self, id: EntityId) -> bool {
        if !self.is_alive(id) {
            return false;
        }
        self.entities[id.index as usize].1 = false;
        self.freed.push(id.index);
        self.alive -= 1;
        true
    }

    /// The generation of `id` must match the slot's current generation.
    pub fn is_alive(&self, id: EntityId) -> bool {
        matches!(
            self.entities.get(id.index as usize),
            Some((slot, true)) if slot.generation == id.generation
        )
    }

    /// Number of live entities.
    pub fn len(&self) -> usize {
        self.alive
    }

    /// Iterates live entity ids in slot order.
    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities
            .iter()
            .filter(|(_, alive)| *alive)
            .map(|(id, _)| *id)
    }
}
