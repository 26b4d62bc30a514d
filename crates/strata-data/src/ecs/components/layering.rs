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

/// The named layer an entity is drawn in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Component)]
pub struct ZIndex {
    /// Layer name as authored; empty when the item names none.
    pub layer: String,
}

/// Layers declared by a composite, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Component)]
pub struct Layer {
    /// Layer names.
    pub names: Vec<String>,
}
