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

//! Skeletal animations.

use log::info;
use strata_core::asset::{AnimationState, AssetKind, Skeleton, SkeletonData};
use strata_core::math::Vec2;
use strata_data::document::DocNode;
use strata_data::ecs::{EntityId, Size, Spine};

use super::assembly::Assembly;
use super::dependencies::skeleton_base_path;
use crate::SceneError;

/// Hand-tuned offset, as a fraction of the posed size, that lines exported
/// skeletons up with where the editor showed them.
const SPINE_POSITION_NUDGE: Vec2 = Vec2::new(0.5, 0.8);

impl Assembly<'_> {
    pub(super) fn build_spine(&mut self, value: &DocNode) -> Result<EntityId, SceneError> {
        let animation_name = value.get_str("animationName", "");
        info!("loading spine anim: {}", animation_name);

        let path = format!(
            "{}.json",
            skeleton_base_path(&self.lane.spine_dir, animation_name)
        );
        let data = self
            .assets
            .get::<SkeletonData>(&path)
            .ok_or(SceneError::MissingAsset {
                path,
                kind: AssetKind::SkeletonData,
            })?;

        let mut skeleton = Skeleton::new(data.clone());
        let mut state = AnimationState::new(data);
        skeleton.set_default_skin()?;
        state.set_animation(0, value.get_str("currentAnimationName", ""), true)?;

        skeleton.update_world_transform();
        let (offset, bounds) = skeleton.bounds();
        let size = Size {
            width: bounds.x,
            height: bounds.y,
        };

        let mut transform = self.read_transform(value);
        transform.origin = offset;
        transform.position += bounds.scale(SPINE_POSITION_NUDGE);

        let entity = self.spawn_item(value, transform);
        self.scene.world.add_component(entity, size)?;
        self.scene.world.add_component(entity, Spine { skeleton, state })?;
        Ok(entity)
    }
}
