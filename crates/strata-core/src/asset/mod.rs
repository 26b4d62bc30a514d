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

//! Provides the foundational traits and primitive types for the asset system.
//!
//! This module defines the common language for asset-related operations:
//! - The [`Asset`] marker trait and the shared [`AssetHandle`].
//! - [`AssetDescriptor`], the unit of work a scene hands to whatever loads
//!   its dependencies.
//! - The collaborator asset types a scene consumes (texture atlases,
//!   particle effects, skeleton data and their runtime instances).
//!
//! Nothing here knows how assets are read from disk or stored.

mod atlas;
mod descriptor;
mod handle;
mod particle;
mod skeleton;

pub use atlas::*;
pub use descriptor::*;
pub use handle::*;
pub use particle::*;
pub use skeleton::*;

/// A marker trait for types that can be managed by the asset system.
///
/// `Send + Sync + 'static` lets loaded assets be shared with background
/// loading threads.
///
/// # Examples
///
/// ```
/// use strata_core::asset::Asset;
///
/// struct Sound {
///     samples: Vec<f32>,
/// }
///
/// impl Asset for Sound {}
/// ```
pub trait Asset: Send + Sync + 'static {}
