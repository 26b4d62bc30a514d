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

//! Ray-cast lights.

use log::{error, info, warn};
use strata_core::lighting::{LightDesc, LightHandle, LightKind};
use strata_core::math::LinearRgba;
use strata_data::config::{LightFlagSemantics, UnknownLightPolicy};
use strata_data::document::DocNode;
use strata_data::ecs::{EntityId, Light, Transform};

use super::assembly::Assembly;
use crate::SceneError;

const DEFAULT_RAYS: i32 = 12;
const DEFAULT_DISTANCE: f32 = 300.0;
const DEFAULT_CONE_DEGREES: f32 = 45.0;
const DEFAULT_SOFTNESS_LENGTH: f32 = 1.5;

impl Assembly<'_> {
    pub(super) fn build_light(&mut self, value: &DocNode) -> Result<EntityId, SceneError> {
        info!(
            "loading light: {}",
            value.get_str("itemIdentifier", "default")
        );

        let mut transform = self.read_transform(value);
        let handle = self.create_light(&mut transform, value)?;

        let entity = self.spawn_item(value, transform);
        if let Some(handle) = handle {
            self.scene.world.add_component(entity, Light { handle })?;
        }
        Ok(entity)
    }

    /// Registers the light described by `params` at the transform position.
    ///
    /// Overwrites the transform angle with the light direction. Returns
    /// `None` when no light is created (no lighting subsystem, or an unknown
    /// type under the permissive policy).
    fn create_light(
        &self,
        transform: &mut Transform,
        params: &DocNode,
    ) -> Result<Option<LightHandle>, SceneError> {
        let color = match params.get("tint") {
            Some(tint) => LinearRgba::from_slice(&tint.as_f32_array()).unwrap_or_else(|| {
                error!("light color couldn't be parsed, using white");
                LinearRgba::WHITE
            }),
            None => LinearRgba::WHITE,
        };
        let rays = params.get_i32("rays", DEFAULT_RAYS).max(0) as u32;
        let distance = params.get_f32("distance", DEFAULT_DISTANCE);

        transform.angle = params.get_f32("directionDegree", 0.0);

        let type_name = params.get_str("type", "");
        let cone_degrees = params.get_f32("coneDegree", DEFAULT_CONE_DEGREES);
        let Some(kind) = LightKind::from_type_name(type_name, transform.angle, cone_degrees) else {
            return match self.lane.config.unknown_light_policy {
                UnknownLightPolicy::Permissive => {
                    warn!("unknown light type '{}', no light created", type_name);
                    Ok(None)
                }
                UnknownLightPolicy::Strict => {
                    Err(SceneError::UnknownLightType(type_name.to_owned()))
                }
            };
        };

        let semantics = self.lane.config.light_flag_semantics;
        let desc = LightDesc {
            kind,
            rays,
            color,
            distance,
            position: transform.position,
            static_light: light_flag(params, "isStatic", semantics),
            xray: light_flag(params, "isXRay", semantics),
            softness_length: params.get_f32("softnessLength", DEFAULT_SOFTNESS_LENGTH),
        };

        let Some(lighting) = &self.params.lighting else {
            warn!("no lighting subsystem for this load, light skipped");
            return Ok(None);
        };
        let mut lighting = lighting
            .lock()
            .map_err(|_| SceneError::Poisoned("lighting"))?;
        Ok(Some(lighting.create_light(desc)))
    }
}

/// Reads a boolean light flag.
///
/// Scene files were authored against presence-inverted flags: the key being
/// present at all turns the flag off, whatever its value.
fn light_flag(params: &DocNode, key: &str, semantics: LightFlagSemantics) -> bool {
    match semantics {
        LightFlagSemantics::PresenceInverts => !params.has(key),
        LightFlagSemantics::ValueBased => params.get_bool(key, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_data::document::parse;

    #[test]
    fn test_presence_inverts_flags() {
        let params = parse(r#"{"isStatic": true}"#).unwrap();
        assert!(!light_flag(&params, "isStatic", LightFlagSemantics::PresenceInverts));
        assert!(light_flag(&params, "isXRay", LightFlagSemantics::PresenceInverts));
    }

    #[test]
    fn test_value_based_flags() {
        let params = parse(r#"{"isStatic": true, "isXRay": false}"#).unwrap();
        assert!(light_flag(&params, "isStatic", LightFlagSemantics::ValueBased));
        assert!(!light_flag(&params, "isXRay", LightFlagSemantics::ValueBased));
        assert!(light_flag(&params, "missing", LightFlagSemantics::ValueBased));
    }
}
