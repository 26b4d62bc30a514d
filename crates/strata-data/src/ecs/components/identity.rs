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

use crate::ecs::Component;

/// The scene-author-assigned identifier of an item.
///
/// Unique within one scene document by convention only; nothing checks it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Component)]
pub struct Id {
    /// The authored `uniqueId`.
    pub value: i32,
}

/// Marks the root entity of a loaded scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Component)]
pub struct Root;
