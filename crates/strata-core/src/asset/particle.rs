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

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Asset, TextureAtlas};
use crate::math::{Aabb2, Vec2};

/// A live particle-effect instance.
///
/// Simulation of individual particles belongs to the particle engine; this
/// type tracks what the runtime observes: the effect's bounds, its lifetime,
/// its placement and the scale applied to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleEffect {
    /// Path the definition was loaded from.
    pub path: String,
    bounding_box: Aabb2,
    /// Seconds until a non-continuous effect completes.
    duration: f32,
    /// Continuous effects never complete.
    continuous: bool,
    #[serde(default)]
    elapsed: f32,
    #[serde(default = "unit_scale")]
    scale: f32,
    #[serde(default)]
    position: Vec2,
}

fn unit_scale() -> f32 {
    1.0
}

impl ParticleEffect {
    /// Creates an effect instance from its definition.
    pub fn new(path: impl Into<String>, bounding_box: Aabb2, duration: f32, continuous: bool) -> Self {
        Self {
            path: path.into(),
            bounding_box,
            duration,
            continuous,
            elapsed: 0.0,
            scale: 1.0,
            position: Vec2::ZERO,
        }
    }

    /// Bounds of the effect in effect-local units, with the current scale applied.
    pub fn bounding_box(&self) -> Aabb2 {
        Aabb2 {
            min: self.bounding_box.min * self.scale,
            max: self.bounding_box.max * self.scale,
        }
    }

    /// Multiplies the effect's scale by `factor`.
    pub fn scale_effect(&mut self, factor: f32) {
        self.scale *= factor;
    }

    /// The accumulated scale factor.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Moves the emitter.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Current emitter position.
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Advances the effect by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Seconds the effect has been running.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// True once a non-continuous effect has outlived its duration.
    pub fn is_complete(&self) -> bool {
        !self.continuous && self.elapsed >= self.duration
    }
}

impl Asset for ParticleEffect {}

/// Errors raised while loading a particle-effect definition.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParticleError {
    /// No definition exists at the path.
    #[error("particle effect '{path}' not found")]
    NotFound {
        /// The requested path.
        path: String,
    },
    /// The definition exists but references data the atlas does not have.
    #[error("particle effect '{path}' is malformed: {message}")]
    Malformed {
        /// The requested path.
        path: String,
        /// What went wrong.
        message: String,
    },
}

/// Loads particle-effect definitions by file path.
pub trait ParticleEffectSource: Send + Sync {
    /// Instantiates the effect stored at `path`, resolving its sprites from `atlas`.
    fn load_effect(&self, path: &str, atlas: &TextureAtlas) -> Result<ParticleEffect, ParticleError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_continuous_effect_completes() {
        let mut effect = ParticleEffect::new("fire", Aabb2::default(), 1.0, false);
        effect.update(0.5);
        assert!(!effect.is_complete());
        effect.update(0.5);
        assert!(effect.is_complete());
    }

    #[test]
    fn test_continuous_effect_never_completes() {
        let mut effect = ParticleEffect::new("smoke", Aabb2::default(), 0.1, true);
        effect.update(10.0);
        assert!(!effect.is_complete());
    }

    #[test]
    fn test_scale_applies_to_bounds() {
        let bounds = Aabb2::from_origin_size(Vec2::new(-1.0, -1.0), Vec2::new(2.0, 4.0));
        let mut effect = ParticleEffect::new("rain", bounds, 1.0, false);
        effect.scale_effect(0.5);
        assert_eq!(effect.bounding_box().size(), Vec2::new(1.0, 2.0));
        assert_eq!(effect.scale(), 0.5);
    }
}
