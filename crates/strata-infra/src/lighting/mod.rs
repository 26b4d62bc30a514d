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

//! An in-memory registry of 2D ray-cast lights.
//!
//! The registry stores light parameters and answers reach queries; casting
//! the rays against occluders is left to whichever renderer consumes it.

use log::debug;
use strata_core::lighting::{LightDesc, LightHandle, LightKind, LightingProvider};
use strata_core::math::{radians_to_degrees, Vec2};

/// Slot-based storage of lights. Handles of removed lights are recycled.
#[derive(Debug, Default)]
pub struct RayLightWorld {
    slots: Vec<Option<LightDesc>>,
    free: Vec<usize>,
}

impl RayLightWorld {
    /// Creates an empty light world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live lights.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Whether no light is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every live light.
    pub fn iter(&self) -> impl Iterator<Item = (LightHandle, &LightDesc)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|desc| (LightHandle(i as u64), desc)))
    }

    /// Lights whose reach covers `point`, ignoring occluders.
    pub fn lights_reaching(&self, point: Vec2) -> impl Iterator<Item = LightHandle> + '_ {
        self.iter()
            .filter(move |(_, desc)| reaches(desc, point))
            .map(|(handle, _)| handle)
    }
}

/// Whether `point` lies within the light's distance and, for cones, within
/// half the cone angle either side of its direction.
fn reaches(desc: &LightDesc, point: Vec2) -> bool {
    let offset = point - desc.position;
    if offset.length_squared() > desc.distance * desc.distance {
        return false;
    }

    match desc.kind {
        LightKind::Point => true,
        LightKind::Cone {
            direction_degrees,
            cone_degrees,
        } => {
            if offset.length_squared() == 0.0 {
                return true;
            }
            let bearing = radians_to_degrees(offset.y.atan2(offset.x));
            let delta = (bearing - direction_degrees + 180.0).rem_euclid(360.0) - 180.0;
            delta.abs() <= cone_degrees
        }
    }
}

impl LightingProvider for RayLightWorld {
    fn create_light(&mut self, desc: LightDesc) -> LightHandle {
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index] = Some(desc);
                index
            }
            None => {
                self.slots.push(Some(desc));
                self.slots.len() - 1
            }
        };
        debug!("light {} created: {:?} with {} rays", index, desc.kind, desc.rays);
        LightHandle(index as u64)
    }

    fn light(&self, handle: LightHandle) -> Option<&LightDesc> {
        self.slots.get(handle.0 as usize)?.as_ref()
    }

    fn set_light_position(&mut self, handle: LightHandle, position: Vec2) -> bool {
        match self.slots.get_mut(handle.0 as usize) {
            Some(Some(desc)) => {
                desc.position = position;
                true
            }
            _ => false,
        }
    }

    fn remove_light(&mut self, handle: LightHandle) -> Option<LightDesc> {
        let index = handle.0 as usize;
        let removed = self.slots.get_mut(index)?.take()?;
        self.free.push(index);
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cone(direction_degrees: f32, cone_degrees: f32) -> LightDesc {
        LightDesc {
            kind: LightKind::Cone {
                direction_degrees,
                cone_degrees,
            },
            distance: 10.0,
            ..LightDesc::default()
        }
    }

    #[test]
    fn test_handles_are_recycled() {
        // --- 1. ARRANGE ---
        let mut lights = RayLightWorld::new();
        let first = lights.create_light(LightDesc::default());
        let second = lights.create_light(LightDesc::default());

        // --- 2. ACT ---
        assert!(lights.remove_light(first).is_some());
        let third = lights.create_light(LightDesc::default());

        // --- 3. ASSERT ---
        assert_eq!(third, first);
        assert_ne!(third, second);
        assert_eq!(lights.len(), 2);
    }

    #[test]
    fn test_removed_light_is_gone() {
        let mut lights = RayLightWorld::new();
        let handle = lights.create_light(LightDesc::default());

        lights.remove_light(handle);

        assert!(lights.light(handle).is_none());
        assert!(!lights.set_light_position(handle, Vec2::ONE));
        assert!(lights.remove_light(handle).is_none());
        assert!(lights.is_empty());
    }

    #[test]
    fn test_moving_a_light() {
        let mut lights = RayLightWorld::new();
        let handle = lights.create_light(LightDesc::default());

        assert!(lights.set_light_position(handle, Vec2::new(4.0, 2.0)));

        assert_eq!(lights.light(handle).unwrap().position, Vec2::new(4.0, 2.0));
    }

    #[test]
    fn test_point_light_reach_is_its_distance() {
        let mut lights = RayLightWorld::new();
        let handle = lights.create_light(LightDesc {
            distance: 5.0,
            ..LightDesc::default()
        });

        assert_eq!(lights.lights_reaching(Vec2::new(3.0, 4.0)).collect::<Vec<_>>(), vec![handle]);
        assert_eq!(lights.lights_reaching(Vec2::new(3.0, 4.1)).count(), 0);
    }

    #[test]
    fn test_cone_light_reach_wraps_around() {
        // --- 1. ARRANGE ---
        let mut lights = RayLightWorld::new();
        lights.create_light(cone(350.0, 20.0));

        // --- 2. ACT & 3. ASSERT ---
        // 10 degrees above the +x axis is 20 degrees from 350.
        assert_eq!(lights.lights_reaching(Vec2::new(5.0, 0.88)).count(), 1);
        assert_eq!(lights.lights_reaching(Vec2::new(0.0, 5.0)).count(), 0);
    }
}
