//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Backend, Config, ServeConfig, StorageConfig};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn backend_strategy() -> impl Strategy<Value = Backend> {
    prop_oneof![Just(Backend::Files), Just(Backend::Sqlite)]
}

fn storage_strategy() -> impl Strategy<Value = StorageConfig> {
    (
        prop::option::of("/[a-z]{1,10}(/[a-z]{1,10}){0,3}"),
        prop::option::of(backend_strategy()),
        prop::option::of("\\.[a-z]{1,8}"),
        prop::option::of("[a-z]{1,10}(/[a-z_]{1,10}){0,2}"),
    )
        .prop_map(|(root, backend, extension, default_page)| StorageConfig {
            root,
            backend,
            extension,
            default_page,
        })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(storage_strategy()),
        prop::option::of(1u16..=65535),
        prop::option::of(1u64..=60_000),
    )
        .prop_map(|(storage, port, busy_timeout_ms)| Config {
            storage,
            serve: port.map(|p| ServeConfig {
                interface: None,
                port: Some(p),
            }),
            busy_timeout_ms,
            ..Default::default()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Values present in the higher-precedence config always survive the merge
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut result = low.clone();
        ConfigMerger::merge_into(&mut result, &high);

        if high.busy_timeout_ms.is_some() {
            prop_assert_eq!(result.busy_timeout_ms, high.busy_timeout_ms);
        } else {
            prop_assert_eq!(result.busy_timeout_ms, low.busy_timeout_ms);
        }

        if let Some(ref hs) = high.storage {
            let rs = result.storage.as_ref().unwrap();
            if hs.backend.is_some() {
                prop_assert_eq!(rs.backend, hs.backend);
            }
            if hs.root.is_some() {
                prop_assert_eq!(&rs.root, &hs.root);
            }
        }
    }

    // Merging into an empty config reproduces the source
    #[test]
    fn config_merge_identity(config in config_strategy()) {
        let mut result = Config::default();
        ConfigMerger::merge_into(&mut result, &config);
        prop_assert_eq!(result, config);
    }

    // Merging a config with itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut result = config.clone();
        ConfigMerger::merge_into(&mut result, &config);
        prop_assert_eq!(result, config);
    }

    // Generated configs are valid, and stay valid once merged
    #[test]
    fn valid_configs_stay_valid_after_merge(a in config_strategy(), b in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&a).is_ok());
        let mut merged = a;
        ConfigMerger::merge_into(&mut merged, &b);
        prop_assert!(ConfigValidator::validate(&merged).is_ok());
    }

    // YAML serialization preserves every field
    #[test]
    fn config_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(back, config);
    }
}
