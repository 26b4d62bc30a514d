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

//! # Strata Core
//!
//! Foundational crate containing the primitive types and the interface
//! contracts that every other layer of the runtime builds on.
//!
//! Nothing in here knows about the ECS. Physics, lighting and asset
//! collaborators are described only at their boundary so that concrete
//! engines can live in `strata-infra` or in the application.

#![warn(missing_docs)]

pub mod asset;
pub mod ecs;
pub mod lighting;
pub mod math;
pub mod physics;

pub use ecs::entity::EntityId;
