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

//! Process-wide lookup tables consulted while building physics bodies.
//!
//! Both registries are filled once at startup and only read afterwards, so
//! they are shared between loaders behind an `Arc` without locking.

mod category;
mod material;

pub use category::*;
pub use material::*;

use thiserror::Error;

/// Errors raised by registry lookups and manifest parsing.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    /// No material is registered under this name.
    #[error("unknown material '{0}'")]
    UnknownMaterial(String),
    /// No collision category is registered under this name.
    #[error("unknown collision category '{0}'")]
    UnknownCategory(String),
    /// Every category bit is already taken.
    #[error("cannot register category '{name}': all {limit} category bits are taken")]
    TooManyCategories {
        /// The rejected category.
        name: String,
        /// Number of available bits.
        limit: usize,
    },
    /// A RON manifest could not be parsed.
    #[error("invalid registry manifest: {0}")]
    Config(String),
}

impl From<ron::error::SpannedError> for RegistryError {
    fn from(err: ron::error::SpannedError) -> Self {
        RegistryError::Config(err.to_string())
    }
}
