use riskq_core::config::*;

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = RiskqConfig::from_toml("").unwrap();

    assert_eq!(config.aggregation.consensus_tolerance, 0.0);
    assert_eq!(config.aggregation.total_weight(), 1.0);
    assert_eq!(config.persistence.debounce_ms, 500);
    assert_eq!(config.worker.queue_capacity, 16);
    assert_eq!(config.charts.track_width, 300.0);
    assert_eq!(config.charts.left_inset, 20.0);
    assert_eq!(config.charts.right_inset, 20.0);
    assert_eq!(config.report.blocks_per_page, 12);
    assert_eq!(config.cache.max_entries, 10_000);
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json_logs);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[aggregation]
consensus_tolerance = 0.5

[persistence]
debounce_ms = 1000
"#;
    let config = RiskqConfig::from_toml(toml).unwrap();
    assert_eq!(config.aggregation.consensus_tolerance, 0.5);
    assert_eq!(config.persistence.debounce_ms, 1000);
    // Non-overridden fields keep defaults
    assert_eq!(config.aggregation.human_weight, 0.25);
    assert_eq!(config.worker.queue_capacity, 16);
}

#[test]
fn config_rejects_negative_tolerance() {
    let err = RiskqConfig::from_toml("[aggregation]\nconsensus_tolerance = -1.0\n").unwrap_err();
    assert!(err.to_string().contains("consensus_tolerance"));
}

#[test]
fn config_rejects_insets_wider_than_track() {
    let toml = r#"
[charts]
track_width = 30.0
left_inset = 20.0
right_inset = 20.0
"#;
    assert!(RiskqConfig::from_toml(toml).is_err());
}

#[test]
fn config_rejects_all_zero_weights() {
    let toml = r#"
[aggregation]
human_weight = 0.0
societal_weight = 0.0
environmental_weight = 0.0
financial_weight = 0.0
"#;
    assert!(RiskqConfig::from_toml(toml).is_err());
}

#[test]
fn config_reports_parse_errors() {
    let err = RiskqConfig::from_toml("[aggregation\n").unwrap_err();
    assert!(matches!(err, riskq_core::errors::ConfigError::ParseError { .. }));
}

#[test]
fn config_load_missing_file_is_not_found() {
    let err = RiskqConfig::load("/definitely/not/here/riskq.toml").unwrap_err();
    assert!(matches!(err, riskq_core::errors::ConfigError::FileNotFound { .. }));
}

#[test]
fn config_serde_roundtrip() {
    let config = RiskqConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    let roundtripped = RiskqConfig::from_toml(&toml_str).unwrap();
    assert_eq!(
        roundtripped.persistence.debounce_ms,
        config.persistence.debounce_ms
    );
    assert_eq!(roundtripped.report.title_prefix, config.report.title_prefix);
}
