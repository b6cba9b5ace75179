// ==========================================
// 部署配置集成测试
// ==========================================
// 测试目标: 配置载入、缺省值与启动期校验
// 覆盖范围: fixture 全量载入、各类配置错误、默认项
// ==========================================


use bottling_qc::config::{ConfigError, ProductEntry, QcConfig};
use bottling_qc::domain::types::CheckKind;
use test_helpers::{load_fixture_config, small_config};

#[test]
fn test_fixture_config_loads_and_validates() {
    let config = load_fixture_config();

    assert_eq!(config.catalog.len(), 19);
    assert_eq!(config.supervisors.len(), 9);
    assert_eq!(config.lines.len(), 9);
    assert_eq!(config.torque_threshold_ftlbs, 8.0);
    assert_eq!(config.enabled_checks.len(), 5);
    assert!(config.validate().is_ok());

    let catalog = config.product_catalog();
    assert_eq!(
        catalog.get("32oz CVS Drain Opener").unwrap().target_fill_oz,
        32.0
    );
    assert_eq!(catalog.get("128oz Maxx Bubbles").unwrap().target_fill_oz, 128.0);
}

#[test]
fn test_omitted_fields_take_defaults() {
    // 只给目录与名单,阈值/倍率/检查项取默认
    let config = QcConfig::from_json_str(
        r#"{
            "catalog": [{ "name": "32oz CVS Drain Opener", "target_fill_oz": 32.0 }],
            "supervisors": ["Zach Courtney"],
            "lines": ["LINE_1"]
        }"#,
    )
    .unwrap();

    assert_eq!(config.torque_threshold_ftlbs, 8.0);
    assert_eq!(config.band_lower_multiplier, 0.95);
    assert_eq!(config.band_upper_multiplier, 1.05);
    assert!(config.is_check_enabled(CheckKind::Torque));
    assert!(config.is_check_enabled(CheckKind::Labor));
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_catalog_is_fatal() {
    let mut config = small_config();
    config.catalog.clear();
    assert!(matches!(config.validate(), Err(ConfigError::EmptyCatalog)));
}

#[test]
fn test_duplicate_product_is_fatal() {
    let mut config = small_config();
    config.catalog.push(ProductEntry {
        name: "32oz CVS Drain Opener".to_string(),
        target_fill_oz: 32.0,
    });
    assert!(matches!(
        config.validate(),
        Err(ConfigError::DuplicateProduct(_))
    ));
}

#[test]
fn test_nonpositive_target_fill_is_fatal() {
    let mut config = small_config();
    config.catalog[0].target_fill_oz = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidTargetFill { .. })
    ));
}

#[test]
fn test_nonpositive_threshold_is_fatal() {
    let mut config = small_config();
    config.torque_threshold_ftlbs = 0.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidThreshold(_))
    ));
}

#[test]
fn test_inverted_band_multipliers_are_fatal() {
    let mut config = small_config();
    config.band_lower_multiplier = 1.05;
    config.band_upper_multiplier = 0.95;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidBand { .. })));
}

#[test]
fn test_empty_rosters_are_fatal() {
    let mut config = small_config();
    config.supervisors.clear();
    assert!(matches!(config.validate(), Err(ConfigError::EmptyRoster(_))));

    let mut config = small_config();
    config.lines.clear();
    assert!(matches!(config.validate(), Err(ConfigError::EmptyRoster(_))));
}

#[test]
fn test_malformed_json_is_fatal() {
    assert!(matches!(
        QcConfig::from_json_str("{ not json"),
        Err(ConfigError::Parse(_))
    ));
}
