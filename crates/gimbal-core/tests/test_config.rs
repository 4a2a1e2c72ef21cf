use gimbal_core::pipeline::AlignConfig;

#[test]
fn test_default_values() {
    let config = AlignConfig::default();
    assert_eq!(config.threshold, 1.8);
    assert_eq!(config.cutoff, 0.05);
    assert_eq!(config.filter_order, 3);
    assert_eq!(config.target_frame, 0);
}

#[test]
fn test_partial_deserialization_fills_defaults() {
    let config: AlignConfig = serde_json::from_str(r#"{"threshold": 2.5}"#).unwrap();
    assert_eq!(config.threshold, 2.5);
    assert_eq!(config.cutoff, 0.05);
    assert_eq!(config.filter_order, 3);
    assert_eq!(config.target_frame, 0);
}

#[test]
fn test_serde_round_trip() {
    let config = AlignConfig {
        threshold: 2.0,
        cutoff: 0.1,
        filter_order: 4,
        target_frame: 3,
    };

    let json = serde_json::to_string(&config).unwrap();
    let back: AlignConfig = serde_json::from_str(&json).unwrap();

    assert_eq!(back.threshold, config.threshold);
    assert_eq!(back.cutoff, config.cutoff);
    assert_eq!(back.filter_order, config.filter_order);
    assert_eq!(back.target_frame, config.target_frame);
}
