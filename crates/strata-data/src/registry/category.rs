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

use super::RegistryError;

/// Assigns collision-category bits to names.
///
/// Bits are handed out in registration order: the first category gets
/// `0x0001`, the second `0x0002`, and so on up to sixteen categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryRegistry {
    names: Vec<String>,
}

impl CategoryRegistry {
    /// How many categories fit in a 16-bit filter.
    pub const MAX_CATEGORIES: usize = 16;

    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every name in order.
    pub fn from_names<I, S>(names: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.register(name)?;
        }
        Ok(registry)
    }

    /// Parses a RON list of names, e.g. `["level", "player"]`.
    pub fn from_ron(text: &str) -> Result<Self, RegistryError> {
        let names: Vec<String> = ron::from_str(text)?;
        Self::from_names(names)
    }

    /// Registers a category and returns its bit. Registering a known name
    /// returns its existing bit.
    pub fn register(&mut self, name: impl Into<String>) -> Result<u16, RegistryError> {
        let name = name.into();
        if let Ok(bits) = self.bits(&name) {
            return Ok(bits);
        }
        if self.names.len() >= Self::MAX_CATEGORIES {
            return Err(RegistryError::TooManyCategories {
                name,
                limit: Self::MAX_CATEGORIES,
            });
        }
        self.names.push(name);
        Ok(1 << (self.names.len() - 1))
    }

    /// The bit of a registered category.
    pub fn bits(&self, name: &str) -> Result<u16, RegistryError> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| 1u16 << i)
            .ok_or_else(|| RegistryError::UnknownCategory(name.to_owned()))
    }

    /// Registered names, in bit order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_follow_registration_order() {
        let registry = CategoryRegistry::from_names(["level", "player", "enemy"]).unwrap();
        assert_eq!(registry.bits("level"), Ok(0x0001));
        assert_eq!(registry.bits("player"), Ok(0x0002));
        assert_eq!(registry.bits("enemy"), Ok(0x0004));
        assert_eq!(
            registry.bits("water"),
            Err(RegistryError::UnknownCategory("water".into()))
        );
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = CategoryRegistry::new();
        assert_eq!(registry.register("level"), Ok(1));
        assert_eq!(registry.register("level"), Ok(1));
        assert_eq!(registry.names().len(), 1);
    }

    #[test]
    fn test_seventeenth_category_is_rejected() {
        let mut registry = CategoryRegistry::from_names((0..16).map(|i| format!("c{i}"))).unwrap();
        assert_eq!(registry.bits("c15"), Ok(0x8000));
        assert!(matches!(
            registry.register("overflow"),
            Err(RegistryError::TooManyCategories { limit: 16, .. })
        ));
    }

    #[test]
    fn test_from_ron_list() {
        let registry = CategoryRegistry::from_ron(r#"["level", "sensor"]"#).unwrap();
        assert_eq!(registry.bits("sensor"), Ok(2));
    }
}
