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

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use strata_agents::SceneAgent;
use strata_data::registry::MaterialRegistry;
use strata_infra::ParticleLibrary;
use strata_lanes::scene_lane::SceneLoadParameters;

use crate::helpers::{build_lane, load_config, read_text};

pub fn run(scene: &Path, config: Option<&Path>, atlas: &str) -> Result<()> {
    let config = load_config(config)?;
    let lane = build_lane(config, MaterialRegistry::new(), ParticleLibrary::new());
    let agent = SceneAgent::new(Arc::new(lane));

    let text = read_text(scene)?;
    let params = SceneLoadParameters::new(1.0, atlas);
    let dependencies = agent
        .dependencies(&text, &params)
        .with_context(|| format!("failed to read dependencies of {}", scene.display()))?;

    for descriptor in &dependencies {
        println!("{descriptor}");
    }
    Ok(())
}
