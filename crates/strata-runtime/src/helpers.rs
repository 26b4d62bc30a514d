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

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use strata_data::config::LoaderConfig;
use strata_infra::ParticleLibrary;
use strata_lanes::scene_lane::{OverlapSceneLane, PluginRegistry};
use strata_data::registry::MaterialRegistry;

/// Reads a whole file, naming it in the error.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// The loader configuration at `path`, or the defaults.
pub fn load_config(path: Option<&Path>) -> Result<LoaderConfig> {
    match path {
        Some(path) => LoaderConfig::from_ron(&read_text(path)?)
            .with_context(|| format!("invalid loader configuration {}", path.display())),
        None => Ok(LoaderConfig::default()),
    }
}

/// A lane over the given tables with every statically registered plugin.
pub fn build_lane(
    config: LoaderConfig,
    materials: MaterialRegistry,
    particles: ParticleLibrary,
) -> OverlapSceneLane {
    let plugins = PluginRegistry::with_registered();
    log::info!("{} custom property plugins registered", plugins.len());
    OverlapSceneLane::new(
        config,
        Arc::new(materials),
        Arc::new(plugins),
        Arc::new(particles),
    )
}
