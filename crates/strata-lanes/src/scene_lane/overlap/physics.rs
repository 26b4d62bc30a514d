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

//! Collision polygons: bodies and fixtures for images and composites.

use log::info;
use strata_core::math::Vec2;
use strata_core::physics::{BodyDesc, BodyType, Filter, FixtureDesc};
use strata_data::document::DocNode;
use strata_data::ecs::{EntityId, PhysicsBody, Transform};
use strata_data::registry::Material;

use super::assembly::Assembly;
use super::CUSTOM_VARS;
use crate::scene_lane::{parse_custom_vars, CustomProperties};
use crate::SceneError;

impl Assembly<'_> {
    /// Creates a body for the item's `shape.polygons`, one fixture per ring.
    ///
    /// Does nothing when the load has no physics world or no category
    /// registry, or when the item has no shape.
    pub(super) fn load_polygon(
        &mut self,
        entity: EntityId,
        transform: &Transform,
        value: &DocNode,
    ) -> Result<(), SceneError> {
        let params = self.params;
        let (Some(physics), Some(categories)) = (&params.physics, &params.categories) else {
            return Ok(());
        };

        info!("loading physic body: {}", value.get_str("layerName", ""));

        let properties = parse_custom_vars(value.get(CUSTOM_VARS).and_then(DocNode::as_str));

        let Some(shape) = value.get("shape").filter(|shape| !shape.is_empty()) else {
            return Ok(());
        };
        let physics_info = value.get("physics").filter(|info| !info.is_empty());

        let body_desc = match physics_info {
            None => BodyDesc::default(),
            Some(info) => BodyDesc {
                body_type: BodyType::from_index(info.get_i32("bodyType", 0)),
                allow_sleep: info.get_bool("allowSleep", true),
                awake: info.get_bool("awake", true),
            },
        };
        let material = self.fixture_material(physics_info, &properties)?;
        let filter = Filter {
            category_bits: categories.bits(&self.lane.config.level_category)?,
            ..Filter::default()
        };

        let units = params.units;
        let mut world = physics
            .lock()
            .map_err(|_| SceneError::Poisoned("physics world"))?;

        let body = world.create_body(&body_desc);
        world.set_body_user_data(body, entity)?;

        for ring in shape.get("polygons").into_iter().flat_map(DocNode::iter) {
            let vertices = ring
                .iter()
                .map(|vertex| {
                    Vec2::new(vertex.get_f32("x", 0.0), vertex.get_f32("y", 0.0)) * units
                })
                .collect();
            world.create_fixture(
                body,
                &FixtureDesc {
                    vertices,
                    density: material.density,
                    friction: material.friction,
                    restitution: material.restitution,
                    filter,
                },
            )?;
        }

        world.set_body_transform(body, transform.position, transform.angle)?;
        drop(world);

        self.scene.world.add_component(entity, PhysicsBody { body })?;
        Ok(())
    }

    /// Picks the fixture material.
    ///
    /// A `material` custom property always wins. Otherwise items without a
    /// `physics` block use the default material, and items with one use its
    /// raw `density`/`friction`/`restitution`, each defaulting to zero.
    fn fixture_material(
        &self,
        physics_info: Option<&DocNode>,
        properties: &CustomProperties,
    ) -> Result<Material, SceneError> {
        if let Some(name) = properties.get("material") {
            return Ok(self.lane.materials.get(name)?);
        }

        Ok(match physics_info {
            None => self.lane.materials.default_material(),
            Some(info) => Material::new(
                info.get_f32("density", 0.0),
                info.get_f32("friction", 0.0),
                info.get_f32("restitution", 0.0),
            ),
        })
    }
}
