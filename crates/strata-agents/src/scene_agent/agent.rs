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

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{Receiver, Sender};
use log::{debug, info, warn};
use strata_core::asset::AssetDescriptor;
use strata_data::assets::AssetStore;
use strata_data::document;
use strata_data::Scene;
use strata_lanes::scene_lane::{SceneLoadParameters, SceneLoadingStrategy};
use strata_lanes::SceneError;

use super::AgentError;

type LoadResult = Result<Scene, SceneError>;

/// Drives one [`SceneLoadingStrategy`] through the two-phase load.
///
/// 1. [`SceneAgent::dependencies`] lists what the document needs. The caller
///    resolves every descriptor into an [`AssetStore`].
/// 2. [`SceneAgent::begin_load`] (or its background variant) assembles the
///    scene and parks it in a single slot.
/// 3. [`SceneAgent::finish_load`] hands the parked scene back.
///
/// The agent holds at most one load in flight. Starting another one drops
/// the previous, unclaimed result.
pub struct SceneAgent {
    strategy: Arc<dyn SceneLoadingStrategy>,
    pending: Option<Receiver<LoadResult>>,
}

impl SceneAgent {
    /// Creates an agent around a loading strategy.
    pub fn new(strategy: Arc<dyn SceneLoadingStrategy>) -> Self {
        debug!("scene agent using strategy '{}'", strategy.strategy_id());
        Self {
            strategy,
            pending: None,
        }
    }

    /// The strategy this agent drives.
    pub fn strategy(&self) -> &dyn SceneLoadingStrategy {
        self.strategy.as_ref()
    }

    /// Whether a load has been started and not yet finished.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Parses `text` and lists the assets that must be resolved before loading.
    pub fn dependencies(
        &self,
        text: &str,
        params: &SceneLoadParameters,
    ) -> Result<Vec<AssetDescriptor>, AgentError> {
        let document = document::parse(text).map_err(SceneError::from)?;
        Ok(self.strategy.find_dependencies(&document, params))
    }

    /// Assembles the scene on the calling thread and parks the result.
    pub fn begin_load(&mut self, text: &str, params: &SceneLoadParameters, assets: &AssetStore) {
        let (sender, receiver) = self.open_slot();
        deliver(&sender, load(self.strategy.as_ref(), text, params, assets));
        self.pending = Some(receiver);
    }

    /// Assembles the scene on a dedicated thread.
    ///
    /// [`SceneAgent::finish_load`] blocks until that thread is done.
    pub fn begin_load_background(
        &mut self,
        text: String,
        params: SceneLoadParameters,
        assets: Arc<AssetStore>,
    ) -> Result<(), AgentError> {
        let (sender, receiver) = self.open_slot();
        let strategy = Arc::clone(&self.strategy);

        thread::Builder::new()
            .name("scene-loader".into())
            .spawn(move || {
                deliver(&sender, load(strategy.as_ref(), &text, &params, &assets));
            })
            .map_err(|err| {
                warn!("could not spawn the scene loader thread: {err}");
                AgentError::LoaderDisconnected
            })?;

        self.pending = Some(receiver);
        Ok(())
    }

    /// Hands back the scene of the load in flight, waiting for it if needed.
    pub fn finish_load(&mut self) -> Result<Scene, AgentError> {
        let receiver = self.pending.take().ok_or(AgentError::NotStarted)?;
        let scene = receiver
            .recv()
            .map_err(|_| AgentError::LoaderDisconnected)??;
        info!("scene '{}' ready", scene.name);
        Ok(scene)
    }

    fn open_slot(&mut self) -> (Sender<LoadResult>, Receiver<LoadResult>) {
        if self.pending.take().is_some() {
            warn!("a scene load was still pending and has been discarded");
        }
        crossbeam_channel::bounded(1)
    }
}

fn load(
    strategy: &dyn SceneLoadingStrategy,
    text: &str,
    params: &SceneLoadParameters,
    assets: &AssetStore,
) -> LoadResult {
    let document = document::parse(text)?;
    strategy.load(&document, params, assets)
}

fn deliver(sender: &Sender<LoadResult>, result: LoadResult) {
    if sender.send(result).is_err() {
        debug!("scene load finished after its agent moved on");
    }
}
