//! Property-based tests for path handling.
//!
//! These focus on the resolver's containment guarantee: whatever segments a
//! request path is built from, a successfully resolved key lies strictly
//! beneath the storage root.

use super::relationship::PathRelationship;
use super::resolver::PathResolver;
use proptest::prelude::*;
use std::path::{Component, Path, PathBuf};

const ROOT: &str = "/data/wiki";

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

// Segments including dot segments, empty segments, and a sibling of the root
fn hostile_segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => path_component_strategy(),
        2 => Just("..".to_string()),
        1 => Just(".".to_string()),
        1 => Just(String::new()),
        1 => Just("wiki-evil".to_string()),
    ]
}

fn request_path_strategy() -> impl Strategy<Value = String> {
    (any::<bool>(), prop::collection::vec(hostile_segment_strategy(), 0..10)).prop_map(
        |(leading, parts)| {
            let joined = parts.join("/");
            if leading {
                format!("/{joined}")
            } else {
                joined
            }
        },
    )
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // A resolved key always lies strictly beneath the root
    #[test]
    fn resolved_keys_stay_inside_root(request in request_path_strategy()) {
        let resolver = PathResolver::new(ROOT);
        if let Ok(key) = resolver.resolve(&request) {
            prop_assert!(PathRelationship::is_strictly_within(key.path(), Path::new(ROOT)));
            prop_assert!(key.path().to_string_lossy().ends_with(".html"));
        }
    }

    // Key names never carry dot segments or empty segments
    #[test]
    fn resolved_names_are_clean(request in request_path_strategy()) {
        let resolver = PathResolver::new(ROOT);
        if let Ok(key) = resolver.resolve(&request) {
            for segment in key.name().split('/') {
                prop_assert!(!segment.is_empty());
                prop_assert_ne!(segment, ".");
                prop_assert_ne!(segment, "..");
            }
            for component in key.path().components() {
                prop_assert_ne!(component, Component::ParentDir);
                prop_assert_ne!(component, Component::CurDir);
            }
        }
    }

    // Resolution is idempotent: the same input always yields the same key
    #[test]
    fn resolution_idempotent(request in request_path_strategy()) {
        let resolver = PathResolver::new(ROOT);
        let first = resolver.resolve(&request).ok();
        let second = resolver.resolve(&request).ok();
        prop_assert_eq!(first, second);
    }

    // Re-resolving a key's own name is a fixed point
    #[test]
    fn key_name_is_fixed_point(request in request_path_strategy()) {
        let resolver = PathResolver::new(ROOT);
        if let Ok(key) = resolver.resolve(&request) {
            let again = resolver.resolve(key.name()).unwrap();
            prop_assert_eq!(key, again);
        }
    }

    // Plain segments without dot segments always resolve
    #[test]
    fn plain_paths_always_resolve(parts in prop::collection::vec(path_component_strategy(), 1..6)) {
        let resolver = PathResolver::new(ROOT);
        let request = parts.join("/");
        let key = resolver.resolve(&request).unwrap();
        prop_assert_eq!(key.name(), request.as_str());
    }

    // Path relationship is reflexive
    #[test]
    fn path_relationship_reflexive(path in absolute_path_strategy()) {
        prop_assert_eq!(PathRelationship::between(&path, &path), PathRelationship::Same);
    }

    // Ancestor in one direction is descendant in the other
    #[test]
    fn path_relationship_symmetric(path1 in absolute_path_strategy(), path2 in absolute_path_strategy()) {
        let rel_12 = PathRelationship::between(&path1, &path2);
        let rel_21 = PathRelationship::between(&path2, &path1);

        let is_symmetric = matches!(
            (rel_12, rel_21),
            (PathRelationship::Ancestor, PathRelationship::Descendant)
                | (PathRelationship::Descendant, PathRelationship::Ancestor)
                | (PathRelationship::Same, PathRelationship::Same)
                | (PathRelationship::Unrelated, PathRelationship::Unrelated)
        );

        prop_assert!(is_symmetric, "Invalid symmetry: {:?} <-> {:?}", rel_12, rel_21);
    }
}
