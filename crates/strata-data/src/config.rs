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

//! Scene loader configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the loader does with a light whose `type` is neither `CONE` nor `POINT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnknownLightPolicy {
    /// Build the entity without a light and log a warning.
    #[default]
    Permissive,
    /// Abort the load.
    Strict,
}

/// How the `isStatic` and `isXRay` light keys are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LightFlagSemantics {
    /// Presence of the key turns the flag off; absence turns it on.
    ///
    /// This is how existing scene files were authored against, so it stays
    /// the default even though it reads backwards.
    #[default]
    PresenceInverts,
    /// The key's boolean value is used; absent keys leave the flag on.
    ValueBased,
}

/// Invalid configuration text.
#[derive(Debug, Error)]
#[error("invalid loader configuration: {0}")]
pub struct ConfigError(#[from] ron::error::SpannedError);

/// Paths and policies used by the scene loader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Root of the exported scene assets.
    pub assets_dir: String,
    /// Folder holding one sub-folder per skeletal animation.
    /// Defaults to `<assets_dir>spine-animations/`.
    pub spine_dir: Option<String>,
    /// Folder holding particle-effect definitions.
    /// Defaults to `<assets_dir>particles/`.
    pub particles_dir: Option<String>,
    /// Collision category given to every fixture the loader creates.
    pub level_category: String,
    /// See [`UnknownLightPolicy`].
    pub unknown_light_policy: UnknownLightPolicy,
    /// See [`LightFlagSemantics`].
    pub light_flag_semantics: LightFlagSemantics,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            assets_dir: "overlap/assets/orig/".to_owned(),
            spine_dir: None,
            particles_dir: None,
            level_category: "level".to_owned(),
            unknown_light_policy: UnknownLightPolicy::default(),
            light_flag_semantics: LightFlagSemantics::default(),
        }
    }
}

impl LoaderConfig {
    /// Parses a RON configuration. Missing fields take their defaults.
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    /// The skeletal animation folder.
    pub fn spine_dir(&self) -> String {
        self.spine_dir
            .clone()
            .unwrap_or_else(|| format!("{}spine-animations/", self.assets_dir))
    }

    /// The particle-effect folder.
    pub fn particles_dir(&self) -> String {
        self.particles_dir
            .clone()
            .unwrap_or_else(|| format!("{}particles/", self.assets_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LoaderConfig::default();
        assert_eq!(config.spine_dir(), "overlap/assets/orig/spine-animations/");
        assert_eq!(config.particles_dir(), "overlap/assets/orig/particles/");
        assert_eq!(config.level_category, "level");
        assert_eq!(config.unknown_light_policy, UnknownLightPolicy::Permissive);
        assert_eq!(config.light_flag_semantics, LightFlagSemantics::PresenceInverts);
    }

    #[test]
    fn test_partial_ron_keeps_defaults() {
        // --- 1. ARRANGE ---
        let text = r#"(
            assets_dir: "data/",
            unknown_light_policy: Strict,
        )"#;

        // --- 2. ACT ---
        let config = LoaderConfig::from_ron(text).unwrap();

        // --- 3. ASSERT ---
        assert_eq!(config.spine_dir(), "data/spine-animations/");
        assert_eq!(config.unknown_light_policy, UnknownLightPolicy::Strict);
        assert_eq!(config.level_category, "level");
    }

    #[test]
    fn test_explicit_dirs_win() {
        let config = LoaderConfig::from_ron(r#"(particles_dir: Some("fx/"))"#).unwrap();
        assert_eq!(config.particles_dir(), "fx/");
    }
}
