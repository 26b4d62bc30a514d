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

//! Errors raised while loading a scene.

use strata_core::asset::{AnimationError, AssetKind, ParticleError};
use strata_core::physics::PhysicsError;
use strata_data::document::ParseError;
use strata_data::ecs::{EcsError, EntityId};
use strata_data::registry::RegistryError;
use thiserror::Error;

/// Everything that can abort a scene load.
///
/// Any of these leaves the partially built world behind; callers discard it.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The document text is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A dependency was not resolved before assembly.
    #[error("{kind} '{path}' was not loaded before assembling the scene")]
    MissingAsset {
        /// Path of the missing asset.
        path: String,
        /// Expected kind.
        kind: AssetKind,
    },
    /// The atlas has no region with this name.
    #[error("atlas has no region named '{0}'")]
    UnknownRegion(String),
    /// A material or collision category lookup failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
    /// No handler is registered for a custom-property `type`.
    #[error("no custom property handler registered for type '{0}'")]
    UnknownPlugin(String),
    /// A light names a type other than `CONE` or `POINT` under the strict policy.
    #[error("unknown light type '{0}'")]
    UnknownLightType(String),
    /// The physics provider rejected a body or fixture.
    #[error(transparent)]
    Physics(#[from] PhysicsError),
    /// Skeleton posing or animation setup failed.
    #[error(transparent)]
    Animation(#[from] AnimationError),
    /// A particle effect could not be loaded.
    #[error(transparent)]
    Particle(#[from] ParticleError),
    /// A custom-property handler failed.
    #[error("custom property handler '{type_name}' failed: {message}")]
    Plugin {
        /// The handler's type name.
        type_name: String,
        /// The handler's error, rendered with its causes.
        message: String,
    },
    /// An entity the loader just created is missing a component it relies on.
    #[error("entity {entity} is missing its {component} component")]
    MissingComponent {
        /// The entity.
        entity: EntityId,
        /// Name of the missing component type.
        component: &'static str,
    },
    /// A structural change on the world failed.
    #[error(transparent)]
    Ecs(#[from] EcsError),
    /// A shared collaborator's lock was poisoned by a panicking thread.
    #[error("the shared {0} lock is poisoned")]
    Poisoned(&'static str),
}
