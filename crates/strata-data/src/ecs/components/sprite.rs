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

use strata_core::asset::AtlasRegion;

use crate::ecs::Component;

/// Width and height of an entity in world units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Component)]
pub struct Size {
    /// Width in world units.
    pub width: f32,
    /// Height in world units.
    pub height: f32,
}

/// The atlas region an entity is drawn with.
#[derive(Debug, Clone, PartialEq, Component)]
pub struct Texture {
    /// A copy of the region's metadata; pixel data stays with the atlas.
    pub region: AtlasRegion,
}
