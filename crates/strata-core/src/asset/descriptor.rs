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
use std::fmt;

/// The kinds of external assets a scene can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    /// A packed texture atlas.
    TextureAtlas,
    /// Skeleton (pose and animation) data for a skeletal animation.
    SkeletonData,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::TextureAtlas => f.write_str("texture atlas"),
            AssetKind::SkeletonData => f.write_str("skeleton data"),
        }
    }
}

/// Sub-parameters attached to a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetParams {
    /// Atlas that the skeleton's attachments are packed into.
    pub atlas_path: String,
}

/// One external asset that must be resolved before a scene can be assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    /// Path of the asset, relative to the asset root.
    pub path: String,
    /// What kind of asset lives at `path`.
    pub kind: AssetKind,
    /// Optional loading parameters.
    pub params: Option<AssetParams>,
}

impl AssetDescriptor {
    /// Descriptor for a texture atlas.
    pub fn atlas(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: AssetKind::TextureAtlas,
            params: None,
        }
    }

    /// Descriptor for skeleton data packed into `atlas_path`.
    pub fn skeleton(path: impl Into<String>, atlas_path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: AssetKind::SkeletonData,
            params: Some(AssetParams {
                atlas_path: atlas_path.into(),
            }),
        }
    }
}

impl fmt::Display for AssetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.path, self.kind)?;
        if let Some(params) = &self.params {
            write!(f, " [atlas: {}]", params.atlas_path)?;
        }
        Ok(())
    }
}
