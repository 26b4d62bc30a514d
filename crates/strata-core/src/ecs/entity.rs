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

//! Defines the identifier handed out for every entity in a world.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A unique identifier for an entity in the world.
///
/// It combines a slot index with a generation count. When an entity is
/// despawned its slot can be recycled, but the generation is incremented so
/// that stale handles to the old occupant stop resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId {
    /// The slot index inside the owning entity store.
    pub index: u32,
    /// Incremented each time the slot is recycled.
    pub generation: u32,
}

impl EntityId {
    /// Packs the identifier into a single `u64` (generation in the high bits).
    ///
    /// Physics engines usually only offer an integer user-data slot, so the
    /// back-reference from a body to its entity travels in this form.
    pub fn to_bits(self) -> u64 {
        ((self.generation as u64) << 32) | self.index as u64
    }

    /// Inverse of [`EntityId::to_bits`].
    pub fn from_bits(bits: u64) -> Self {
        Self {
            index: bits as u32,
            generation: (bits >> 32) as u32,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_round_trip_keeps_generation() {
        let id = EntityId {
            index: 42,
            generation: 7,
        };
        let bits = id.to_bits();
        assert_eq!(bits >> 32, 7);
        assert_eq!(EntityId::from_bits(bits), id);
    }

    #[test]
    fn test_display_format() {
        let id = EntityId {
            index: 3,
            generation: 1,
        };
        assert_eq!(id.to_string(), "3v1");
    }
}
