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

//! Defines the ray-cast light types and the lighting provider contract.
//!
//! Lights are owned by a lighting subsystem (a "ray handler"); the ECS only
//! keeps a [`LightHandle`] to the instance it registered.

use serde::{Deserialize, Serialize};

use crate::math::{LinearRgba, Vec2};

/// Opaque handle to a light registered with a [`LightingProvider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LightHandle(pub u64);

/// The closed set of light shapes a scene may describe.
///
/// # Examples
///
/// ```
/// use strata_core::lighting::LightKind;
///
/// let cone = LightKind::from_type_name("CONE", 90.0, 30.0);
/// assert!(matches!(cone, Some(LightKind::Cone { .. })));
/// assert_eq!(LightKind::from_type_name("cone", 0.0, 45.0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LightKind {
    /// A light emitting in every direction from its position.
    Point,
    /// A light restricted to a cone.
    Cone {
        /// Direction the cone points to, in degrees.
        direction_degrees: f32,
        /// Half-angle of the cone, in degrees.
        cone_degrees: f32,
    },
}

impl LightKind {
    /// Resolves the type names used by scene documents (`"POINT"`, `"CONE"`).
    ///
    /// Matching is case-exact. Unknown names yield `None`.
    pub fn from_type_name(name: &str, direction_degrees: f32, cone_degrees: f32) -> Option<Self> {
        match name {
            "POINT" => Some(LightKind::Point),
            "CONE" => Some(LightKind::Cone {
                direction_degrees,
                cone_degrees,
            }),
            _ => None,
        }
    }
}

/// Every parameter needed to register a light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightDesc {
    /// Shape of the light.
    pub kind: LightKind,
    /// Number of rays cast per update.
    pub rays: u32,
    /// The color of the light.
    pub color: LinearRgba,
    /// Maximum reach of the rays in world units.
    pub distance: f32,
    /// World position of the light.
    pub position: Vec2,
    /// Static lights are not re-cast every frame.
    pub static_light: bool,
    /// X-ray lights ignore occluders.
    pub xray: bool,
    /// Length of the soft shadow tail.
    pub softness_length: f32,
}

impl Default for LightDesc {
    fn default() -> Self {
        Self {
            kind: LightKind::Point,
            rays: 12,
            color: LinearRgba::WHITE,
            distance: 300.0,
            position: Vec2::ZERO,
            static_light: true,
            xray: true,
            softness_length: 1.5,
        }
    }
}

/// Interface contract for a lighting subsystem.
pub trait LightingProvider: Send + Sync {
    /// Registers a light and returns its handle.
    fn create_light(&mut self, desc: LightDesc) -> LightHandle;

    /// Looks up the parameters of a registered light.
    fn light(&self, handle: LightHandle) -> Option<&LightDesc>;

    /// Moves a registered light.
    fn set_light_position(&mut self, handle: LightHandle, position: Vec2) -> bool;

    /// Unregisters a light.
    fn remove_light(&mut self, handle: LightHandle) -> Option<LightDesc>;
}
