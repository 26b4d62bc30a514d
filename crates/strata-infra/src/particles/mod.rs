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

//! Particle-effect definitions held in memory and keyed by path.

use std::collections::HashMap;

use log::debug;
use serde::{Deserialize, Serialize};
use strata_core::asset::{ParticleEffect, ParticleEffectSource, ParticleError, TextureAtlas};
use strata_core::math::Aabb2;
use thiserror::Error;

/// The authored description of an effect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleTemplate {
    /// Area covered by the effect at scale 1.
    pub bounds: Aabb2,
    /// Seconds until a one-shot effect completes.
    pub duration: f32,
    /// Continuous effects loop forever.
    #[serde(default)]
    pub continuous: bool,
    /// Atlas regions the emitters draw from.
    #[serde(default)]
    pub images: Vec<String>,
}

/// The manifest could not be read.
#[derive(Debug, Error)]
#[error("invalid particle manifest: {0}")]
pub struct ManifestError(#[from] ron::error::SpannedError);

/// A [`ParticleEffectSource`] over a table of templates.
#[derive(Debug, Default, Clone)]
pub struct ParticleLibrary {
    templates: HashMap<String, ParticleTemplate>,
}

impl ParticleLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a RON map of effect path to template.
    ///
    /// ```
    /// use strata_infra::ParticleLibrary;
    ///
    /// let library = ParticleLibrary::from_ron(r#"{
    ///     "particles/fire": (
    ///         bounds: (min: (x: -8.0, y: 0.0), max: (x: 8.0, y: 32.0)),
    ///         duration: 1.5,
    ///         images: ["flame"],
    ///     ),
    /// }"#).unwrap();
    /// assert_eq!(library.len(), 1);
    /// ```
    pub fn from_ron(text: &str) -> Result<Self, ManifestError> {
        let templates: HashMap<String, ParticleTemplate> = ron::from_str(text)?;
        debug!("particle library: {} templates", templates.len());
        Ok(Self { templates })
    }

    /// Adds or replaces the template at `path`.
    pub fn insert(&mut self, path: impl Into<String>, template: ParticleTemplate) {
        self.templates.insert(path.into(), template);
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the library holds no template.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl ParticleEffectSource for ParticleLibrary {
    fn load_effect(
        &self,
        path: &str,
        atlas: &TextureAtlas,
    ) -> Result<ParticleEffect, ParticleError> {
        let template = self
            .templates
            .get(path)
            .ok_or_else(|| ParticleError::NotFound {
                path: path.to_owned(),
            })?;

        if let Some(missing) = template
            .images
            .iter()
            .find(|image| atlas.find_region(image).is_none())
        {
            return Err(ParticleError::Malformed {
                path: path.to_owned(),
                message: format!("atlas has no region '{missing}'"),
            });
        }

        Ok(ParticleEffect::new(
            path,
            template.bounds,
            template.duration,
            template.continuous,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::asset::AtlasRegion;
    use strata_core::math::Vec2;

    fn template(images: &[&str]) -> ParticleTemplate {
        ParticleTemplate {
            bounds: Aabb2::from_origin_size(Vec2::ZERO, Vec2::new(4.0, 6.0)),
            duration: 2.0,
            continuous: false,
            images: images.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn atlas() -> TextureAtlas {
        TextureAtlas::new(vec![AtlasRegion {
            name: "spark".into(),
            page: "fx.png".into(),
            x: 0,
            y: 0,
            width: 8,
            height: 8,
        }])
    }

    #[test]
    fn test_effect_is_built_from_template() {
        // --- 1. ARRANGE ---
        let mut library = ParticleLibrary::new();
        library.insert("fx/sparks", template(&["spark"]));

        // --- 2. ACT ---
        let effect = library.load_effect("fx/sparks", &atlas()).unwrap();

        // --- 3. ASSERT ---
        assert_eq!(effect.path, "fx/sparks");
        assert_eq!(effect.bounding_box().size(), Vec2::new(4.0, 6.0));
        assert!(!effect.is_complete());
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let library = ParticleLibrary::new();

        let err = library.load_effect("fx/none", &atlas()).unwrap_err();

        assert_eq!(
            err,
            ParticleError::NotFound {
                path: "fx/none".into()
            }
        );
    }

    #[test]
    fn test_missing_region_is_malformed() {
        let mut library = ParticleLibrary::new();
        library.insert("fx/smoke", template(&["puff"]));

        let err = library.load_effect("fx/smoke", &atlas()).unwrap_err();

        assert!(matches!(err, ParticleError::Malformed { message, .. } if message.contains("puff")));
    }

    #[test]
    fn test_manifest_defaults() {
        let library = ParticleLibrary::from_ron(
            r#"{ "fx/rain": (bounds: (min: (x: 0.0, y: 0.0), max: (x: 1.0, y: 1.0)), duration: 0.5) }"#,
        )
        .unwrap();

        let effect = library.load_effect("fx/rain", &TextureAtlas::default()).unwrap();

        assert_eq!(library.len(), 1);
        assert!(!effect.is_complete());
    }

    #[test]
    fn test_bad_manifest_is_rejected() {
        assert!(ParticleLibrary::from_ron("{ oops").is_err());
    }
}
