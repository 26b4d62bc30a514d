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

use strata_core::asset::ParticleEffect;

use crate::ecs::Component;

/// A particle effect owned by an entity.
#[derive(Debug, Clone, PartialEq, Component)]
pub struct Particle {
    /// The effect instance.
    pub effect: ParticleEffect,
    /// Set once the world scale has been applied to the effect.
    pub scaled: bool,
}

impl Particle {
    /// Wraps a freshly loaded, unscaled effect.
    pub fn new(effect: ParticleEffect) -> Self {
        Self {
            effect,
            scaled: false,
        }
    }
}
