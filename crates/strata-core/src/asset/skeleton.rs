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

use super::{Asset, AssetHandle};
use crate::math::{Aabb2, Vec2};

/// A named skin with the setup-pose bounds of its attachments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkinData {
    /// Skin name.
    pub name: String,
    /// Bounds of every visible attachment in the setup pose, skeleton-local.
    pub bounds: Aabb2,
}

/// A named animation clip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationData {
    /// Clip name.
    pub name: String,
    /// Length in seconds.
    pub duration: f32,
}

/// Shared skeleton definition, loaded once per path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkeletonData {
    /// Skins, the first being the default.
    pub skins: Vec<SkinData>,
    /// Animation clips.
    pub animations: Vec<AnimationData>,
}

impl SkeletonData {
    /// Finds an animation by name.
    pub fn find_animation(&self, name: &str) -> Option<&AnimationData> {
        self.animations.iter().find(|a| a.name == name)
    }
}

impl Asset for SkeletonData {}

/// Errors raised by skeleton posing and animation playback.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnimationError {
    /// The skeleton data has no clip with this name.
    #[error("unknown animation '{0}'")]
    UnknownAnimation(String),
    /// The skeleton data defines no skin at all.
    #[error("skeleton data has no skins")]
    NoSkins,
}

/// A posed instance of a [`SkeletonData`].
#[derive(Debug, Clone)]
pub struct Skeleton {
    data: AssetHandle<SkeletonData>,
    skin: Option<usize>,
    /// Root position of the skeleton.
    pub position: Vec2,
    world_bounds: Option<Aabb2>,
}

impl Skeleton {
    /// Creates a skeleton in the setup pose with no skin bound.
    pub fn new(data: AssetHandle<SkeletonData>) -> Self {
        Self {
            data,
            skin: None,
            position: Vec2::ZERO,
            world_bounds: None,
        }
    }

    /// The shared definition.
    pub fn data(&self) -> &AssetHandle<SkeletonData> {
        &self.data
    }

    /// Binds the first skin of the data.
    pub fn set_default_skin(&mut self) -> Result<(), AnimationError> {
        if self.data.skins.is_empty() {
            return Err(AnimationError::NoSkins);
        }
        self.skin = Some(0);
        Ok(())
    }

    /// Name of the bound skin, if any.
    pub fn skin_name(&self) -> Option<&str> {
        self.skin
            .and_then(|i| self.data.skins.get(i))
            .map(|s| s.name.as_str())
    }

    /// Recomputes the world-space pose.
    pub fn update_world_transform(&mut self) {
        self.world_bounds = self
            .skin
            .and_then(|i| self.data.skins.get(i))
            .map(|skin| skin.bounds.translated(self.position));
    }

    /// Returns `(offset, size)` of the posed skeleton's bounds.
    ///
    /// Both are zero until a skin is bound and the world transform updated.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        match self.world_bounds {
            Some(aabb) => (aabb.min, aabb.size()),
            None => (Vec2::ZERO, Vec2::ZERO),
        }
    }
}

/// The animation currently queued on a track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackEntry {
    /// Clip name.
    pub animation: String,
    /// Whether playback wraps around.
    pub looping: bool,
    /// Playback position in seconds.
    pub time: f32,
    /// Clip length in seconds.
    pub duration: f32,
}

/// Per-instance animation playback state.
#[derive(Debug, Clone)]
pub struct AnimationState {
    data: AssetHandle<SkeletonData>,
    tracks: Vec<Option<TrackEntry>>,
}

impl AnimationState {
    /// Creates an idle state for the given skeleton data.
    pub fn new(data: AssetHandle<SkeletonData>) -> Self {
        Self {
            data,
            tracks: Vec::new(),
        }
    }

    /// Replaces whatever plays on `track` with the named clip.
    pub fn set_animation(
        &mut self,
        track: usize,
        name: &str,
        looping: bool,
    ) -> Result<&TrackEntry, AnimationError> {
        let clip = self
            .data
            .find_animation(name)
            .ok_or_else(|| AnimationError::UnknownAnimation(name.to_owned()))?;
        if self.tracks.len() <= track {
            self.tracks.resize(track + 1, None);
        }
        let entry = self.tracks[track].insert(TrackEntry {
            animation: clip.name.clone(),
            looping,
            time: 0.0,
            duration: clip.duration,
        });
        Ok(&*entry)
    }

    /// The entry playing on `track`.
    pub fn current(&self, track: usize) -> Option<&TrackEntry> {
        self.tracks.get(track).and_then(Option::as_ref)
    }

    /// Advances every track by `dt`. Finished non-looping entries are cleared.
    pub fn update(&mut self, dt: f32) {
        for slot in &mut self.tracks {
            let finished = match slot {
                Some(entry) => {
                    entry.time += dt;
                    if entry.looping && entry.duration > 0.0 {
                        entry.time %= entry.duration;
                        false
                    } else {
                        entry.time >= entry.duration
                    }
                }
                None => false,
            };
            if finished {
                *slot = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> AssetHandle<SkeletonData> {
        AssetHandle::new(SkeletonData {
            skins: vec![SkinData {
                name: "default".into(),
                bounds: Aabb2::from_origin_size(Vec2::new(-2.0, 0.0), Vec2::new(4.0, 10.0)),
            }],
            animations: vec![AnimationData {
                name: "idle".into(),
                duration: 1.0,
            }],
        })
    }

    #[test]
    fn test_bounds_require_skin_and_world_update() {
        let mut skeleton = Skeleton::new(data());
        skeleton.update_world_transform();
        assert_eq!(skeleton.bounds(), (Vec2::ZERO, Vec2::ZERO));

        skeleton.set_default_skin().unwrap();
        skeleton.update_world_transform();
        assert_eq!(skeleton.bounds(), (Vec2::new(-2.0, 0.0), Vec2::new(4.0, 10.0)));
        assert_eq!(skeleton.skin_name(), Some("default"));
    }

    #[test]
    fn test_no_skins_is_an_error() {
        let mut skeleton = Skeleton::new(AssetHandle::new(SkeletonData::default()));
        assert_eq!(skeleton.set_default_skin(), Err(AnimationError::NoSkins));
    }

    #[test]
    fn test_set_animation_and_loop() {
        let mut state = AnimationState::new(data());
        state.set_animation(0, "idle", true).unwrap();
        state.update(1.5);
        let entry = state.current(0).unwrap();
        assert_eq!(entry.animation, "idle");
        assert!((entry.time - 0.5).abs() < 1e-5);

        assert_eq!(
            state.set_animation(0, "run", true).unwrap_err(),
            AnimationError::UnknownAnimation("run".into())
        );
    }

    #[test]
    fn test_non_looping_entry_clears() {
        let mut state = AnimationState::new(data());
        state.set_animation(1, "idle", false).unwrap();
        assert!(state.current(0).is_none());
        state.update(2.0);
        assert!(state.current(1).is_none());
    }
}
