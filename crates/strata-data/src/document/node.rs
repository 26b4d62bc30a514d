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

use serde_json::Value;

/// One node of a parsed document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DocNode {
    /// An explicit `null`.
    #[default]
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// A numeric scalar.
    Number(f64),
    /// A string scalar.
    String(String),
    /// An ordered sequence.
    Array(Vec<DocNode>),
    /// An ordered mapping.
    Object(Vec<(String, DocNode)>),
}

impl From<Value> for DocNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => DocNode::Null,
            Value::Bool(b) => DocNode::Bool(b),
            Value::Number(n) => DocNode::Number(n.as_f64().unwrap_or_default()),
            Value::String(s) => DocNode::String(s),
            Value::Array(items) => DocNode::Array(items.into_iter().map(DocNode::from).collect()),
            Value::Object(map) => {
                DocNode::Object(map.into_iter().map(|(k, v)| (k, DocNode::from(v))).collect())
            }
        }
    }
}

impl DocNode {
    /// Looks up a key. `None` when absent or when `self` is not an object.
    pub fn get(&self, key: &str) -> Option<&DocNode> {
        match self {
            DocNode::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Whether the key is present (even if its value is `null`).
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of children: array elements or object entries. Scalars have none.
    pub fn len(&self) -> usize {
        match self {
            DocNode::Array(items) => items.len(),
            DocNode::Object(entries) => entries.len(),
            _ => 0,
        }
    }

    /// True when the node has no children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates children in order: array elements, or object values.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &DocNode> + '_> {
        match self {
            DocNode::Array(items) => Box::new(items.iter()),
            DocNode::Object(entries) => Box::new(entries.iter().map(|(_, v)| v)),
            _ => Box::new(std::iter::empty()),
        }
    }

    /// Iterates object entries in order. Empty for anything but objects.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &DocNode)> + '_ {
        let entries: &[(String, DocNode)] = match self {
            DocNode::Object(entries) => entries,
            _ => &[],
        };
        entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Reads the node as a float. Numeric strings are accepted.
    pub fn as_f32(&self) -> Option<f32> {
        match self {
            DocNode::Number(n) => Some(*n as f32),
            DocNode::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Reads the node as an integer, truncating fractions.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            DocNode::Number(n) => Some(*n as i32),
            DocNode::String(s) => {
                let s = s.trim();
                s.parse::<i32>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().map(|f| f as i32))
            }
            _ => None,
        }
    }

    /// Reads the node as a boolean. `"true"`/`"false"` strings are accepted.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DocNode::Bool(b) => Some(*b),
            DocNode::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Reads the node as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DocNode::String(s) => Some(s),
            _ => None,
        }
    }

    /// Reads every element of an array as a float, skipping non-numeric ones.
    pub fn as_f32_array(&self) -> Vec<f32> {
        self.iter().filter_map(DocNode::as_f32).collect()
    }

    /// `get(key)` read as a float, or `default`.
    pub fn get_f32(&self, key: &str, default: f32) -> f32 {
        self.get(key).and_then(DocNode::as_f32).unwrap_or(default)
    }

    /// `get(key)` read as an integer, or `default`.
    pub fn get_i32(&self, key: &str, default: i32) -> i32 {
        self.get(key).and_then(DocNode::as_i32).unwrap_or(default)
    }

    /// `get(key)` read as a boolean, or `default`.
    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(DocNode::as_bool).unwrap_or(default)
    }

    /// `get(key)` read as a string, or `default`.
    pub fn get_str<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).and_then(DocNode::as_str).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse;

    #[test]
    fn test_missing_keys_resolve_to_defaults() {
        let node = parse(r#"{"x": 2.5}"#).unwrap();
        assert_eq!(node.get_f32("x", 0.0), 2.5);
        assert_eq!(node.get_f32("y", 7.0), 7.0);
        assert_eq!(node.get_i32("uniqueId", -1), -1);
        assert!(node.get_bool("awake", true));
        assert_eq!(node.get_str("layerName", "Default"), "Default");
    }

    #[test]
    fn test_mistyped_values_resolve_to_defaults() {
        let node = parse(r#"{"x": [1], "name": 5, "flag": {}}"#).unwrap();
        assert_eq!(node.get_f32("x", 3.0), 3.0);
        assert_eq!(node.get_str("name", "none"), "none");
        assert!(!node.get_bool("flag", false));
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let node = parse(r#"{"a": "1.5", "b": " 4 ", "c": "true", "d": "2.9"}"#).unwrap();
        assert_eq!(node.get_f32("a", 0.0), 1.5);
        assert_eq!(node.get_i32("b", 0), 4);
        assert!(node.get_bool("c", false));
        assert_eq!(node.get_i32("d", 0), 2);
    }

    #[test]
    fn test_len_and_iteration() {
        let node = parse(r#"{"arr": [1, "two", 3.5, null], "obj": {"k": 1}, "s": "x"}"#).unwrap();
        let arr = node.get("arr").unwrap();
        assert_eq!(arr.len(), 4);
        assert_eq!(arr.as_f32_array(), vec![1.0, 3.5]);
        assert_eq!(node.get("obj").unwrap().len(), 1);
        assert!(node.get("s").unwrap().is_empty());
        assert_eq!(node.iter().count(), 3);
    }

    #[test]
    fn test_null_key_is_present() {
        let node = parse(r#"{"isStatic": null}"#).unwrap();
        assert!(node.has("isStatic"));
        assert!(!node.has("isXRay"));
        assert!(node.get_bool("isStatic", true));
    }
}
