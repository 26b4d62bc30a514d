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

//! The agent responsible for the two-phase scene load.

mod agent;

pub use agent::*;

use strata_lanes::SceneError;
use thiserror::Error;

/// An error that can occur within the [`SceneAgent`].
#[derive(Debug, Error)]
pub enum AgentError {
    /// `finish_load` was called without a load in flight.
    #[error("no scene load has been started")]
    NotStarted,
    /// The loading side went away without producing a scene.
    #[error("the scene loader stopped before handing back a scene")]
    LoaderDisconnected,
    /// The lane failed to load the scene.
    #[error(transparent)]
    Scene(#[from] SceneError),
}
