//! # Configuration Tests

use mipsim_core::common::ConfigError;
use mipsim_core::common::constants::{SEGMENT_SIZE, TEXT_BASE};
use mipsim_core::config::{Config, RegionConfig, UnsupportedPolicy};
use rstest::rstest;

#[test]
fn test_default_config_is_valid() {
    let config = Config::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.memory.text_base, TEXT_BASE);
    assert_eq!(config.memory.regions.len(), 5);
    assert!(config.memory.regions.iter().all(|r| r.size == SEGMENT_SIZE));
    assert_eq!(config.general.on_unsupported, UnsupportedPolicy::Halt);
    assert_eq!(config.general.max_cycles, None);
    assert!(!config.general.trace_instructions);
}

#[test]
fn test_empty_document_takes_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.memory.regions, Config::default().memory.regions);
}

#[rstest]
#[case(r#""Skip""#, UnsupportedPolicy::Skip)]
#[case(r#""skip""#, UnsupportedPolicy::Skip)]
#[case(r#""halt""#, UnsupportedPolicy::Halt)]
fn test_policy_names(#[case] value: &str, #[case] expected: UnsupportedPolicy) {
    let json = format!(r#"{{ "general": {{ "on_unsupported": {value} }} }}"#);
    assert_eq!(Config::from_json(&json).unwrap().general.on_unsupported, expected);
}

#[test]
fn test_overlapping_regions_are_rejected() {
    let json = r#"{ "memory": { "regions": [
        { "name": "text", "begin": 4194304, "size": 4096 },
        { "name": "shadow", "begin": 4198399, "size": 16 }
    ] } }"#;
    match Config::from_json(json) {
        Err(ConfigError::OverlappingRegions { first, second }) => {
            assert_eq!(first, "text");
            assert_eq!(second, "shadow");
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_adjacent_regions_are_accepted() {
    let json = r#"{ "memory": { "regions": [
        { "name": "text", "begin": 4194304, "size": 4096 },
        { "name": "next", "begin": 4198400, "size": 16 }
    ] } }"#;
    assert!(Config::from_json(json).is_ok());
}

#[rstest]
#[case(0x1000, 0)]
#[case(0xFFFF_FFF0, 0x20)]
fn test_invalid_region_extent(#[case] begin: u32, #[case] size: u32) {
    let mut config = Config::default();
    config.memory.regions.push(RegionConfig {
        name: "bad".to_string(),
        begin,
        size,
    });
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidRegion { name }) if name == "bad"
    ));
}

#[test]
fn test_text_base_must_be_mapped() {
    let json = r#"{ "memory": { "text_base": 4096 } }"#;
    assert!(matches!(
        Config::from_json(json),
        Err(ConfigError::MissingTextRegion(4096))
    ));
}

#[test]
fn test_malformed_json() {
    let err = Config::from_json("{ \"general\": ").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid configuration"));
}

#[test]
fn test_region_end_is_inclusive() {
    let r = RegionConfig {
        name: "r".to_string(),
        begin: 0xFFFF_FFF0,
        size: 0x10,
    };
    assert_eq!(r.end(), Some(0xFFFF_FFFF));
}

#[test]
fn test_build_produces_configured_regions() {
    let memory = Config::default().memory.build();
    assert_eq!(memory.regions().len(), 5);
    assert_eq!(memory.regions()[0].begin(), TEXT_BASE);
}
