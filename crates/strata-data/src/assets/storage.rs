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

//! Type-safe storage for loaded asset handles, keyed by asset path.

use std::any::{Any, TypeId};
use std::collections::HashMap;

use strata_core::asset::{
    Asset, AssetDescriptor, AssetHandle, AssetKind, SkeletonData, TextureAtlas,
};

/// An in-memory cache for one asset type `A`, keyed by path.
///
/// Inserting the same path twice replaces the handle, so loading a
/// dependency list with repeated entries stays idempotent.
pub struct Assets<A: Asset> {
    storage: HashMap<String, AssetHandle<A>>,
}

impl<A: Asset> Default for Assets<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Asset> Clone for Assets<A> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

impl<A: Asset> Assets<A> {
    /// Creates a new, empty asset storage.
    pub fn new() -> Self {
        Self {
            storage: HashMap::new(),
        }
    }

    /// Stores a handle under `path`, replacing any previous one.
    pub fn insert(&mut self, path: impl Into<String>, handle: AssetHandle<A>) {
        self.storage.insert(path.into(), handle);
    }

    /// The handle stored under `path`.
    pub fn get(&self, path: &str) -> Option<&AssetHandle<A>> {
        self.storage.get(path)
    }

    /// Whether something is stored under `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.storage.contains_key(path)
    }

    /// Number of stored assets.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// True when nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

/// The asset manager a scene resolves its dependencies against.
///
/// Holds one [`Assets`] table per asset type.
#[derive(Default)]
pub struct AssetStore {
    tables: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl AssetStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn table<A: Asset>(&self) -> Option<&Assets<A>> {
        self.tables
            .get(&TypeId::of::<A>())
            .and_then(|t| t.downcast_ref::<Assets<A>>())
    }

    fn table_mut<A: Asset>(&mut self) -> Option<&mut Assets<A>> {
        self.tables
            .entry(TypeId::of::<A>())
            .or_insert_with(|| Box::new(Assets::<A>::new()))
            .downcast_mut::<Assets<A>>()
    }

    /// Stores `asset` under `path` and returns its handle.
    pub fn insert<A: Asset>(&mut self, path: impl Into<String>, asset: A) -> AssetHandle<A> {
        let handle = AssetHandle::new(asset);
        if let Some(table) = self.table_mut::<A>() {
            table.insert(path, handle.clone());
        }
        handle
    }

    /// The handle of type `A` stored under `path`.
    pub fn get<A: Asset>(&self, path: &str) -> Option<AssetHandle<A>> {
        self.table::<A>().and_then(|t| t.get(path)).cloned()
    }

    /// Whether an asset of type `A` is stored under `path`.
    pub fn contains<A: Asset>(&self, path: &str) -> bool {
        self.table::<A>().is_some_and(|t| t.contains(path))
    }

    /// Whether the asset a descriptor names has been resolved.
    pub fn is_resolved(&self, descriptor: &AssetDescriptor) -> bool {
        match descriptor.kind {
            AssetKind::TextureAtlas => self.contains::<TextureAtlas>(&descriptor.path),
            AssetKind::SkeletonData => self.contains::<SkeletonData>(&descriptor.path),
        }
    }

    /// The descriptors that are not resolved yet, in input order.
    pub fn unresolved<'a>(&self, descriptors: &'a [AssetDescriptor]) -> Vec<&'a AssetDescriptor> {
        descriptors.iter().filter(|d| !self.is_resolved(d)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get_by_type_and_path() {
        // --- 1. ARRANGE ---
        let mut store = AssetStore::new();

        // --- 2. ACT ---
        store.insert("level.atlas", TextureAtlas::default());

        // --- 3. ASSERT ---
        assert!(store.get::<TextureAtlas>("level.atlas").is_some());
        assert!(store.get::<SkeletonData>("level.atlas").is_none());
        assert!(store.get::<TextureAtlas>("other.atlas").is_none());
    }

    #[test]
    fn test_unresolved_descriptors() {
        let mut store = AssetStore::new();
        store.insert("a.atlas", TextureAtlas::default());
        let deps = vec![
            AssetDescriptor::atlas("a.atlas"),
            AssetDescriptor::skeleton("hero/hero.json", "hero/hero.atlas"),
        ];

        let missing = store.unresolved(&deps);
        assert_eq!(missing.len(), 1);
        assert_eq!(missing[0].path, "hero/hero.json");

        store.insert("hero/hero.json", SkeletonData::default());
        assert!(store.unresolved(&deps).is_empty());
    }

    #[test]
    fn test_reinserting_replaces_handle() {
        let mut assets = Assets::<TextureAtlas>::new();
        let first = AssetHandle::new(TextureAtlas::default());
        let second = AssetHandle::new(TextureAtlas::default());
        assets.insert("x", first.clone());
        assets.insert("x", second.clone());
        assert_eq!(assets.len(), 1);
        assert!(assets.get("x").unwrap().ptr_eq(&second));
        assert!(!assets.get("x").unwrap().ptr_eq(&first));
    }
}
