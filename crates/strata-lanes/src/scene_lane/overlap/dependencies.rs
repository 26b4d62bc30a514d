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

use log::info;
use strata_core::asset::AssetDescriptor;
use strata_data::document::DocNode;

use super::{COMPOSITE, COMPOSITES, SPINE_ANIMATIONS};

/// Appends one skeleton descriptor per skeletal animation reachable from `node`.
///
/// Follows `composite` sub-objects and `sComposites` arrays at any depth.
/// Every occurrence yields its own descriptor, duplicates included.
pub(super) fn find_spine_animations(
    node: &DocNode,
    spine_dir: &str,
    dependencies: &mut Vec<AssetDescriptor>,
) {
    if let Some(composite) = node.get(COMPOSITE) {
        find_spine_animations(composite, spine_dir, dependencies);
    }

    if let Some(composites) = node.get(COMPOSITES) {
        for composite in composites.iter() {
            find_spine_animations(composite, spine_dir, dependencies);
        }
    }

    if let Some(animations) = node.get(SPINE_ANIMATIONS) {
        for animation in animations.iter() {
            let name = animation.get_str("animationName", "");
            info!("-- found spine animation: {}", name);

            let base = skeleton_base_path(spine_dir, name);
            dependencies.push(AssetDescriptor::skeleton(
                format!("{base}.json"),
                format!("{base}.atlas"),
            ));
        }
    }
}

/// `<spine_dir><name>/<name>`, the extension-less path of an animation's files.
pub(super) fn skeleton_base_path(spine_dir: &str, name: &str) -> String {
    format!("{spine_dir}{name}/{name}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_core::asset::AssetKind;
    use strata_data::document::parse;

    #[test]
    fn test_nested_composites_are_followed() {
        // --- 1. ARRANGE ---
        let doc = parse(
            r#"{"composite": {
                "sSpineAnimations": [{"animationName": "hero"}],
                "sComposites": [
                    {"composite": {"sComposites": [
                        {"composite": {"sSpineAnimations": [{"animationName": "bat"}]}}
                    ]}}
                ]
            }}"#,
        )
        .unwrap();
        let mut deps = Vec::new();

        // --- 2. ACT ---
        find_spine_animations(&doc, "anims/", &mut deps);

        // --- 3. ASSERT ---
        let paths: Vec<&str> = deps.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths, vec!["anims/hero/hero.json", "anims/bat/bat.json"]);
        assert!(deps.iter().all(|d| d.kind == AssetKind::SkeletonData));
        assert_eq!(
            deps[1].params.as_ref().unwrap().atlas_path,
            "anims/bat/bat.atlas"
        );
    }

    #[test]
    fn test_document_without_animations() {
        let doc = parse(r#"{"composite": {"sImages": [{"imageName": "a"}]}}"#).unwrap();
        let mut deps = Vec::new();
        find_spine_animations(&doc, "", &mut deps);
        assert!(deps.is_empty());
    }
}
