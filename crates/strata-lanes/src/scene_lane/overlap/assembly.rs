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

//! The synchronous assembly pass: document nodes to entities.

use log::info;
use strata_core::asset::{AssetHandle, TextureAtlas};
use strata_core::math::Vec2;
use strata_data::assets::AssetStore;
use strata_data::document::DocNode;
use strata_data::ecs::{EntityId, Id, Layer, Node, Particle, Size, Texture, Transform, ZIndex};
use strata_data::Scene;

use super::{
    OverlapSceneLane, COMPOSITE, COMPOSITES, CUSTOM_VARS, IMAGES, LAYERS, LIGHTS, PARTICLES,
    SPINE_ANIMATIONS,
};
use crate::scene_lane::{parse_custom_vars, SceneLoadParameters};
use crate::SceneError;

type BuildFn<'a> = fn(&mut Assembly<'a>, &DocNode) -> Result<EntityId, SceneError>;

/// State of one in-flight load.
pub(super) struct Assembly<'a> {
    pub lane: &'a OverlapSceneLane,
    pub params: &'a SceneLoadParameters,
    pub assets: &'a AssetStore,
    pub atlas: AssetHandle<TextureAtlas>,
    pub scene: Scene,
}

impl<'a> Assembly<'a> {
    /// Fills the already spawned root entity from the top-level composite.
    pub fn load_root(&mut self, root: EntityId, value: &DocNode) -> Result<(), SceneError> {
        info!("loading root");
        self.load_layers(root, value.get(LAYERS))?;
        self.load_collections(root, value)
    }

    /// Builds the children of `parent` from every collection of `container`.
    ///
    /// The collection order is part of the observable result: it decides the
    /// order of `Node::children`.
    fn load_collections(&mut self, parent: EntityId, container: &DocNode) -> Result<(), SceneError> {
        self.load_children(parent, container.get(IMAGES), Self::build_image)?;
        self.load_children(parent, container.get(SPINE_ANIMATIONS), Self::build_spine)?;
        self.load_children(parent, container.get(COMPOSITES), Self::build_composite)?;
        self.load_children(parent, container.get(PARTICLES), Self::build_particle)?;
        self.load_children(parent, container.get(LIGHTS), Self::build_light)
    }

    fn load_children(
        &mut self,
        parent: EntityId,
        items: Option<&DocNode>,
        build: BuildFn<'a>,
    ) -> Result<(), SceneError> {
        let Some(items) = items.filter(|items| !items.is_empty()) else {
            return Ok(());
        };

        for item in items.iter() {
            let child = build(self, item)?;
            self.attach_child(parent, child)?;
        }
        Ok(())
    }

    fn attach_child(&mut self, parent: EntityId, child: EntityId) -> Result<(), SceneError> {
        self.node_mut(parent)?.children.push(child);
        self.node_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn node_mut(&mut self, entity: EntityId) -> Result<&mut Node, SceneError> {
        self.scene
            .world
            .get_mut::<Node>(entity)
            .ok_or(SceneError::MissingComponent {
                entity,
                component: "Node",
            })
    }

    fn load_layers(&mut self, entity: EntityId, value: Option<&DocNode>) -> Result<(), SceneError> {
        let Some(layers) = value.filter(|layers| !layers.is_empty()) else {
            return Ok(());
        };

        let names = layers
            .iter()
            .map(|layer| layer.get_str("layerName", "").to_owned())
            .collect();
        self.scene.world.add_component(entity, Layer { names })?;
        Ok(())
    }

    /// Reads the placement of an item. Lengths are scaled by `units`;
    /// scale factors and the angle are not.
    pub fn read_transform(&self, value: &DocNode) -> Transform {
        let units = self.params.units;
        Transform {
            position: Vec2::new(value.get_f32("x", 0.0), value.get_f32("y", 0.0)) * units,
            origin: Vec2::new(value.get_f32("originX", 0.0), value.get_f32("originY", 0.0)) * units,
            scale: Vec2::new(value.get_f32("scaleX", 1.0), value.get_f32("scaleY", 1.0)),
            angle: value.get_f32("rotation", 0.0),
        }
    }

    /// Spawns an item with the components every item carries.
    pub fn spawn_item(&mut self, value: &DocNode, transform: Transform) -> EntityId {
        let z_index = ZIndex {
            layer: value.get_str("layerName", "").to_owned(),
        };
        let id = Id {
            value: value.get_i32("uniqueId", 0),
        };
        self.scene
            .world
            .spawn((Node::default(), transform, z_index, id))
    }

    fn build_composite(&mut self, value: &DocNode) -> Result<EntityId, SceneError> {
        let identifier = value
            .get("itemIdentifier")
            .and_then(DocNode::as_str)
            .map(str::to_owned)
            .unwrap_or_else(|| value.get_i32("uniqueId", 0).to_string());
        info!("loading composite: {}", identifier);

        let transform = self.read_transform(value);
        let entity = self.spawn_item(value, transform);

        self.load_layers(entity, value.get(LAYERS))?;
        self.load_polygon(entity, &transform, value)?;

        if let Some(composite) = value.get(COMPOSITE) {
            self.load_collections(entity, composite)?;
        }

        self.dispatch_custom_properties(entity, value)?;
        Ok(entity)
    }

    fn build_image(&mut self, value: &DocNode) -> Result<EntityId, SceneError> {
        let image_name = value.get_str("imageName", "");
        info!("loading image: {}", image_name);

        let region = self
            .atlas
            .find_region(image_name)
            .cloned()
            .ok_or_else(|| SceneError::UnknownRegion(image_name.to_owned()))?;
        let units = self.params.units;
        let size = Size {
            width: region.width as f32 * units,
            height: region.height as f32 * units,
        };

        let transform = self.read_transform(value);
        let entity = self.spawn_item(value, transform);
        self.scene.world.add_component(entity, size)?;

        // The polygon only reads the transform; the texture can come after.
        self.load_polygon(entity, &transform, value)?;
        self.scene.world.add_component(entity, Texture { region })?;

        self.dispatch_custom_properties(entity, value)?;
        Ok(entity)
    }

    fn build_particle(&mut self, value: &DocNode) -> Result<EntityId, SceneError> {
        let particle_name = value.get_str("particleName", "");
        info!(
            "loading particle: {} {}",
            particle_name,
            value.get_str("itemIdentifier", "")
        );

        let path = format!("{}{}", self.lane.particles_dir, particle_name);
        let effect = self.lane.particles.load_effect(&path, &self.atlas)?;
        let bounds = effect.bounding_box();
        let units = self.params.units;
        let size = Size {
            width: bounds.width() * units,
            height: bounds.height() * units,
        };

        let transform = self.read_transform(value);
        let entity = self.spawn_item(value, transform);
        self.scene.world.add_component(entity, size)?;
        self.scene.world.add_component(entity, Particle::new(effect))?;
        Ok(entity)
    }

    /// Hands the entity to the plugin named by its custom `type` property.
    fn dispatch_custom_properties(
        &mut self,
        entity: EntityId,
        value: &DocNode,
    ) -> Result<(), SceneError> {
        let Some(text) = value.get(CUSTOM_VARS).and_then(DocNode::as_str) else {
            return Ok(());
        };
        let properties = parse_custom_vars(Some(text));
        let Some(type_name) = properties.get("type") else {
            return Ok(());
        };

        let handler = self
            .lane
            .plugins
            .get(type_name)
            .ok_or_else(|| SceneError::UnknownPlugin(type_name.clone()))?;
        handler
            .apply(&mut self.scene, entity, &properties)
            .map_err(|err| SceneError::Plugin {
                type_name: type_name.clone(),
                message: format!("{err:#}"),
            })
    }
}
