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

//! The entity/component store.
//!
//! Entities are generational slot ids; components live in one sparse column
//! per component type. The store favours simple, fully safe access over raw
//! iteration speed: scenes are built once, and the per-frame systems that run
//! over them touch comparatively few entities.
//!
//! The primary entry point is the [`World`] struct.

mod bundle;
mod component;
mod components;
mod entity_store;
mod family;
mod query;
mod storage;
mod world;

pub use bundle::ComponentBundle;
pub use component::Component;
pub use components::*;
pub use family::Family;
pub use query::*;
pub use strata_core::ecs::entity::EntityId;
pub use strata_macros::Component;
pub use world::*;

#[cfg(test)]
mod tests;
