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

//! Component families: named requirement sets used by runtime systems.

use std::any::TypeId;

use super::ComponentBundle;

/// Describes a set of entities by the components they carry.
///
/// An entity belongs to the family when it has every component of `all`, at
/// least one of `one` (if `one` is non-empty) and none of `exclude`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Family {
    all: Vec<TypeId>,
    one: Vec<TypeId>,
    exclude: Vec<TypeId>,
}

impl Family {
    /// A family requiring every component of `B`.
    pub fn all<B: ComponentBundle>() -> Self {
        Self {
            all: B::type_ids(),
            ..Self::default()
        }
    }

    /// Additionally requires at least one component of `B`.
    pub fn one<B: ComponentBundle>(mut self) -> Self {
        self.one = B::type_ids();
        self
    }

    /// Additionally rejects entities having any component of `B`.
    pub fn exclude<B: ComponentBundle>(mut self) -> Self {
        self.exclude = B::type_ids();
        self
    }

    /// Tests membership given a predicate answering "has component?".
    pub fn matches(&self, has: impl Fn(TypeId) -> bool) -> bool {
        self.all.iter().all(|t| has(*t))
            && (self.one.is_empty() || self.one.iter().any(|t| has(*t)))
            && !self.exclude.iter().any(|t| has(*t))
    }
}
