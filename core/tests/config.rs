use talentdesk_core::{
    config::{
        AnalyticsConfig, DEFAULT_GAP_AVERAGE_RANK_THRESHOLD, DEFAULT_GAP_COVERAGE_THRESHOLD_PCT,
        DEFAULT_STRONG_RANK_RATIO,
    },
    error::DeskError,
};

#[test]
fn defaults_match_published_thresholds() {
    let config = AnalyticsConfig::default();
    assert_eq!(config.strong_rank_ratio, DEFAULT_STRONG_RANK_RATIO);
    assert_eq!(config.strong_rank_ratio, 0.75);
    assert_eq!(config.gap_coverage_threshold_pct, DEFAULT_GAP_COVERAGE_THRESHOLD_PCT);
    assert_eq!(config.gap_coverage_threshold_pct, 50.0);
    assert_eq!(config.gap_average_rank_threshold, DEFAULT_GAP_AVERAGE_RANK_THRESHOLD);
    assert_eq!(config.gap_average_rank_threshold, 2.5);
    assert_eq!(config.top_performer_limit, 5);
    assert_eq!(config.sentinel_client_name, "Talent Pool");
    assert_eq!(config.unknown_member_name, "Unknown");
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_keeps_remaining_defaults() {
    let json = r#"{ "strong_rank_ratio": 0.8, "sentinel_client_name": "Bench" }"#;
    let config = AnalyticsConfig::from_json(json).expect("valid config");
    assert_eq!(config.strong_rank_ratio, 0.8);
    assert_eq!(config.sentinel_client_name, "Bench");
    assert_eq!(config.gap_average_rank_threshold, 2.5);
    assert_eq!(config.top_performer_limit, 5);
}

#[test]
fn out_of_range_ratio_is_rejected() {
    let err = AnalyticsConfig::from_json(r#"{ "strong_rank_ratio": 1.5 }"#).unwrap_err();
    match err {
        DeskError::InvalidConfig { field, .. } => assert_eq!(field, "strong_rank_ratio"),
        other => panic!("expected InvalidConfig, got {other:?}"),
    }
}

#[test]
fn empty_sentinel_name_is_rejected() {
    let config = AnalyticsConfig {
        sentinel_client_name: "  ".into(),
        ..AnalyticsConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(DeskError::InvalidConfig { ref field, .. }) if field == "sentinel_client_name"
    ));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = AnalyticsConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, DeskError::Serialization(_)), "got {err:?}");
}

#[test]
fn load_reads_file_from_disk() {
    let path = std::env::temp_dir().join(format!("talentdesk-config-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "gap_coverage_threshold_pct": 40.0 }"#).unwrap();

    let config = AnalyticsConfig::load(path.to_str().unwrap()).expect("load");
    assert_eq!(config.gap_coverage_threshold_pct, 40.0);

    std::fs::remove_file(&path).ok();
    assert!(AnalyticsConfig::load("/nonexistent/talentdesk/config.json").is_err());
}
