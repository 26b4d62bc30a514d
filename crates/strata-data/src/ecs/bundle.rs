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

//! Groups of components inserted or matched together.

use std::any::TypeId;

use super::storage::ComponentColumns;
use super::Component;

/// A set of components that can be spawned as one unit.
///
/// Implemented for every component type and for tuples of up to eight
/// components. Bundles are also how a [`Family`](super::Family) names the
/// component set it requires or excludes.
pub trait ComponentBundle: Send + Sync + 'static {
    /// The `TypeId`s of the components in the bundle, in declaration order.
    fn type_ids() -> Vec<TypeId>;

    /// Moves the components into slot `index`.
    #[doc(hidden)]
    fn insert_into(self, columns: &mut ComponentColumns, index: u32);
}

impl ComponentBundle for () {
    fn type_ids() -> Vec<TypeId> {
        Vec::new()
    }

    fn insert_into(self, _columns: &mut ComponentColumns, _index: u32) {}
}

impl<C: Component> ComponentBundle for C {
    fn type_ids() -> Vec<TypeId> {
        vec![TypeId::of::<C>()]
    }

    fn insert_into(self, columns: &mut ComponentColumns, index: u32) {
        columns.insert(index, self);
    }
}

macro_rules! impl_bundle_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: Component),+> ComponentBundle for ($($name,)+) {
            fn type_ids() -> Vec<TypeId> {
                vec![$(TypeId::of::<$name>()),+]
            }

            #[allow(non_snake_case)]
            fn insert_into(self, columns: &mut ComponentColumns, index: u32) {
                let ($($name,)+) = self;
                $(columns.insert(index, $name);)+
            }
        }
    };
}

impl_bundle_for_tuple!(C1);
impl_bundle_for_tuple!(C1, C2);
impl_bundle_for_tuple!(C1, C2, C3);
impl_bundle_for_tuple!(C1, C2, C3, C4);
impl_bundle_for_tuple!(C1, C2, C3, C4, C5);
impl_bundle_for_tuple!(C1, C2, C3, C4, C5, C6);
impl_bundle_for_tuple!(C1, C2, C3, C4, C5, C6, C7);
impl_bundle_for_tuple!(C1, C2, C3, C4, C5, C6, C7, C8);
