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

//! Parsing of the flat `key:value;key:value` custom property strings.

use std::collections::HashMap;

/// Custom properties of one scene item.
pub type CustomProperties = HashMap<String, String>;

/// Parses a `key1:value1;key2:value2` string.
///
/// Entries are split on `;` and each entry on its first `:`. Keys and values
/// are trimmed, empty entries are skipped and an entry without `:` maps its
/// key to the empty string. `None` yields an empty map.
pub fn parse_custom_vars(text: Option<&str>) -> CustomProperties {
    let mut properties = CustomProperties::new();
    let Some(text) = text else {
        return properties;
    };

    for entry in text.split(';') {
        let (key, value) = entry.split_once(':').unwrap_or((entry, ""));
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        properties.insert(key.to_owned(), value.trim().to_owned());
    }

    properties
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_pairs() {
        let props = parse_custom_vars(Some("type:door;material:ice"));
        assert_eq!(props.len(), 2);
        assert_eq!(props["type"], "door");
        assert_eq!(props["material"], "ice");
    }

    #[test]
    fn test_value_keeps_everything_after_first_colon() {
        let props = parse_custom_vars(Some("target:level:2"));
        assert_eq!(props["target"], "level:2");
    }

    #[test]
    fn test_empty_entries_and_bare_keys() {
        let props = parse_custom_vars(Some(";; solid ;type: crate ;"));
        assert_eq!(props.len(), 2);
        assert_eq!(props["solid"], "");
        assert_eq!(props["type"], "crate");
    }

    #[test]
    fn test_absent_text_is_empty() {
        assert!(parse_custom_vars(None).is_empty());
        assert!(parse_custom_vars(Some("")).is_empty());
    }
}
