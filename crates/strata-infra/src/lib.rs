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

//! Concrete implementations of the contracts declared in `strata-core`.
//!
//! Each module wraps one external dependency (or a plain in-memory table)
//! behind the corresponding provider trait, so the loader never sees the
//! concrete engine it drives.

#![warn(missing_docs)]

pub mod lighting;
pub mod particles;
#[cfg(feature = "physics")]
pub mod physics;

pub use lighting::RayLightWorld;
pub use particles::{ParticleLibrary, ParticleTemplate};
#[cfg(feature = "physics")]
pub use physics::rapier::RapierPhysicsWorld;
