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

//! Type-erased, per-component-type column storage.
//!
//! Each component type owns one sparse column indexed by entity slot. The
//! world checks generations before touching a column, so columns only ever
//! see slot indices of live entities.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use super::Component;

/// Vector operations on a type-erased column.
pub(crate) trait AnyColumn: Send + Sync {
    /// Casts the trait object to `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
    /// Casts the trait object to `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
    /// Drops whatever the slot holds.
    fn clear_slot(&mut self, index: u32);
    /// Whether the slot holds a value.
    fn contains(&self, index: u32) -> bool;
}

/// A sparse column of `T`, one optional value per entity slot.
pub(crate) struct Column<T> {
    slots: Vec<Option<T>>,
}

impl<T> Column<T> {
    fn new() -> Self {
        Self { slots: Vec::new() }
    }

    fn insert(&mut self, index: u32, value: T) -> Option<T> {
        let index = index as usize;
        if self.slots.len() <= index {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index].replace(value)
    }

    fn get(&self, index: u32) -> Option<&T> {
        self.slots.get(index as usize).and_then(Option::as_ref)
    }

    fn get_mut(&mut self, index: u32) -> Option<&mut T> {
        self.slots.get_mut(index as usize).and_then(Option::as_mut)
    }

    fn take(&mut self, index: u32) -> Option<T> {
        self.slots.get_mut(index as usize).and_then(Option::take)
    }
}

impl<T: Component> AnyColumn for Column<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn clear_slot(&mut self, index: u32) {
        self.take(index);
    }

    fn contains(&self, index: u32) -> bool {
        self.get(index).is_some()
    }
}

/// All component columns of a world, keyed by component type.
#[derive(Default)]
pub(crate) struct ComponentColumns {
    columns: HashMap<TypeId, Box<dyn AnyColumn>>,
}

impl ComponentColumns {
    fn column<T: Component>(&self) -> Option<&Column<T>> {
        self.columns
            .get(&TypeId::of::<T>())
            .and_then(|c| c.as_any().downcast_ref::<Column<T>>())
    }

    fn column_mut<T: Component>(&mut self) -> Option<&mut Column<T>> {
        self.columns
            .get_mut(&TypeId::of::<T>())
            .and_then(|c| c.as_any_mut().downcast_mut::<Column<T>>())
    }

    /// Stores `value` in slot `index`, returning the value it replaced.
    pub fn insert<T: Component>(&mut self, index: u32, value: T) -> Option<T> {
        let column = self
            .columns
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(Column::<T>::new()));
        match column.as_any_mut().downcast_mut::<Column<T>>() {
            Some(column) => column.insert(index, value),
            // The map is keyed by `TypeId::of::<T>()`, so the downcast always matches.
            None => None,
        }
    }

    pub fn get<T: Component>(&self, index: u32) -> Option<&T> {
        self.column::<T>().and_then(|c| c.get(index))
    }

    pub fn get_mut<T: Component>(&mut self, index: u32) -> Option<&mut T> {
        self.column_mut::<T>().and_then(|c| c.get_mut(index))
    }

    pub fn take<T: Component>(&mut self, index: u32) -> Option<T> {
        self.column_mut::<T>().and_then(|c| c.take(index))
    }

    /// Whether slot `index` holds a component of the given type.
    pub fn contains(&self, type_id: TypeId, index: u32) -> bool {
        self.columns
            .get(&type_id)
            .is_some_and(|c| c.contains(index))
    }

    /// Drops every component stored for slot `index`.
    pub fn clear_slot(&mut self, index: u32) {
        for column in self.columns.values_mut() {
            column.clear_slot(index);
        }
    }
}
