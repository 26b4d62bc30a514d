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

//! The document model read by the scene loader.
//!
//! A document is an ordered tree of objects, arrays and scalars. Every
//! accessor is lax: absent keys and mistyped values resolve to the
//! caller-supplied default instead of failing, and numeric strings are read
//! as numbers. Only malformed text is an error.

mod node;

pub use node::DocNode;

use thiserror::Error;

/// Malformed document text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("malformed document at line {line}, column {column}: {message}")]
pub struct ParseError {
    /// What the parser complained about.
    pub message: String,
    /// 1-based line of the error.
    pub line: usize,
    /// 1-based column of the error.
    pub column: usize,
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Parses document text into a [`DocNode`] tree, keeping key order.
pub fn parse(text: &str) -> Result<DocNode, ParseError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    Ok(DocNode::from(value))
}
