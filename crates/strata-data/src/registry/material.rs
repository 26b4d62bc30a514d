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

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::RegistryError;

/// A named bundle of physical properties reused across fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Mass density.
    pub density: f32,
    /// Coulomb friction coefficient.
    pub friction: f32,
    /// Bounciness.
    pub restitution: f32,
}

impl Material {
    /// The material used when a shape names none.
    pub const DEFAULT: Material = Material {
        density: 1.0,
        friction: 1.0,
        restitution: 0.0,
    };

    /// Creates a material.
    pub const fn new(density: f32, friction: f32, restitution: f32) -> Self {
        Self {
            density,
            friction,
            restitution,
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Maps material names to their physical properties.
///
/// Always contains [`MaterialRegistry::DEFAULT_NAME`].
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRegistry {
    materials: HashMap<String, Material>,
}

impl Default for MaterialRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MaterialRegistry {
    /// Name of the fallback material.
    pub const DEFAULT_NAME: &'static str = "default";

    /// Creates a registry holding only the default material.
    pub fn new() -> Self {
        let mut materials = HashMap::new();
        materials.insert(Self::DEFAULT_NAME.to_owned(), Material::DEFAULT);
        Self { materials }
    }

    /// Parses a RON map of name to material, e.g.
    /// `{"ice": (density: 0.9, friction: 0.02, restitution: 0.0)}`.
    ///
    /// Entries are added on top of the default material; a `"default"` entry
    /// overrides it.
    pub fn from_ron(text: &str) -> Result<Self, RegistryError> {
        let entries: HashMap<String, Material> = ron::from_str(text)?;
        let mut registry = Self::new();
        for (name, material) in entries {
            registry.register(name, material);
        }
        Ok(registry)
    }

    /// Registers (or replaces) a material.
    pub fn register(&mut self, name: impl Into<String>, material: Material) {
        self.materials.insert(name.into(), material);
    }

    /// Looks a material up by name.
    pub fn get(&self, name: &str) -> Result<Material, RegistryError> {
        self.materials
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownMaterial(name.to_owned()))
    }

    /// The fallback material.
    pub fn default_material(&self) -> Material {
        self.materials
            .get(Self::DEFAULT_NAME)
            .copied()
            .unwrap_or(Material::DEFAULT)
    }

    /// Number of registered materials, the default included.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Always false: the default material is always present.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material_always_present() {
        let registry = MaterialRegistry::new();
        assert_eq!(registry.get("default"), Ok(Material::DEFAULT));
        assert_eq!(registry.default_material(), Material::DEFAULT);
    }

    #[test]
    fn test_unknown_material_is_an_error() {
        let registry = MaterialRegistry::new();
        assert_eq!(
            registry.get("lava"),
            Err(RegistryError::UnknownMaterial("lava".into()))
        );
    }

    #[test]
    fn test_from_ron_manifest() {
        // --- 1. ARRANGE ---
        let manifest = r#"{
            "ice": (density: 0.9, friction: 0.02, restitution: 0.1),
            "default": (density: 2.0, friction: 0.5, restitution: 0.0),
        }"#;

        // --- 2. ACT ---
        let registry = MaterialRegistry::from_ron(manifest).unwrap();

        // --- 3. ASSERT ---
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("ice").unwrap(), Material::new(0.9, 0.02, 0.1));
        assert_eq!(registry.default_material().density, 2.0);
    }

    #[test]
    fn test_malformed_manifest() {
        let err = MaterialRegistry::from_ron("{ \"ice\": (density: ) }").unwrap_err();
        assert!(matches!(err, RegistryError::Config(_)));
    }
}
