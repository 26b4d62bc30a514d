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

//! # Strata Data
//!
//! Owns every piece of data the runtime works on:
//! - [`ecs`]: the entity/component store and the scene components.
//! - [`document`]: the lax, ordered tree the scene loader reads.
//! - [`registry`]: named physical materials and collision categories.
//! - [`assets`]: typed storage for resolved external assets.
//! - [`config`]: loader configuration.
//! - [`scene`]: the assembled scene handed back by the loader.

#![warn(missing_docs)]

// Lets `#[derive(Component)]` name `::strata_data` from inside this crate.
extern crate self as strata_data;

pub mod assets;
pub mod config;
pub mod document;
pub mod ecs;
pub mod registry;
pub mod scene;

pub use scene::Scene;
