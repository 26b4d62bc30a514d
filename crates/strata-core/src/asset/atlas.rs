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

use super::Asset;

/// A named rectangle inside one page of a texture atlas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasRegion {
    /// Name the region is looked up by.
    pub name: String,
    /// Page (texture file) holding the region.
    #[serde(default)]
    pub page: String,
    /// Left edge in pixels.
    #[serde(default)]
    pub x: u32,
    /// Top edge in pixels.
    #[serde(default)]
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// A packed texture atlas, reduced to its region table.
///
/// Texture storage itself is a rendering concern; the scene only needs the
/// region metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureAtlas {
    /// All regions, in pack order.
    pub regions: Vec<AtlasRegion>,
}

impl TextureAtlas {
    /// Creates an atlas from its regions.
    pub fn new(regions: Vec<AtlasRegion>) -> Self {
        Self { regions }
    }

    /// Finds the first region with the given name.
    pub fn find_region(&self, name: &str) -> Option<&AtlasRegion> {
        self.regions.iter().find(|r| r.name == name)
    }
}

impl Asset for TextureAtlas {}
