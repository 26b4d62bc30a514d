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

//! Agents: the stateful drivers around the scene loading lanes.
//!
//! A lane knows how to turn a document into a scene. An agent owns the
//! protocol around it: dependency discovery, then a load that may run on a
//! background thread, then a synchronous handoff of the finished scene.

#![warn(missing_docs)]

pub mod scene_agent;

pub use scene_agent::{AgentError, SceneAgent};
