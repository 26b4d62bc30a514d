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

//! Scene inspection tool.
//!
//! Usage:
//!   strata-runtime deps level.json                       # list what the scene needs
//!   strata-runtime load level.json --atlas-manifest a.ron # assemble and print the tree

mod commands;
mod helpers;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "strata-runtime")]
#[command(about = "Loads Overlap2D scenes into the Strata runtime", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the assets a scene depends on
    Deps {
        /// The scene document
        scene: PathBuf,
        /// Loader configuration (RON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Name of the texture atlas the scene's images live in
        #[arg(long, default_value = "level.atlas")]
        atlas: String,
    },
    /// Assemble a scene and print its entity tree
    Load {
        /// The scene document
        scene: PathBuf,
        /// Region table of the scene's texture atlas (RON)
        #[arg(long)]
        atlas_manifest: PathBuf,
        /// Loader configuration (RON)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Material manifest (RON map of name to material)
        #[arg(long)]
        materials: Option<PathBuf>,
        /// Collision category manifest (RON list of names)
        #[arg(long)]
        categories: Option<PathBuf>,
        /// Particle effect manifest (RON map of path to template)
        #[arg(long)]
        particles: Option<PathBuf>,
        /// Authoring units to world units
        #[arg(long, default_value_t = 1.0)]
        units: f32,
        /// Frames to simulate after loading
        #[arg(long, default_value_t = 0)]
        frames: u32,
    },
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Deps {
            scene,
            config,
            atlas,
        } => commands::deps::run(&scene, config.as_deref(), &atlas),
        Commands::Load {
            scene,
            atlas_manifest,
            config,
            materials,
            categories,
            particles,
            units,
            frames,
        } => commands::load::run(commands::load::LoadArgs {
            scene,
            atlas_manifest,
            config,
            materials,
            categories,
            particles,
            units,
            frames,
        }),
    }
}
