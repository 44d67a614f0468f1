use super::*;

#[test]
fn empty_json_yields_defaults() {
    let cfg: PacerConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(cfg, PacerConfig::default());
    assert_eq!(cfg.sequence, "in 4 hold 7 out 8");
}

#[test]
fn partial_json_overrides_fields() {
    let cfg: PacerConfig =
        serde_json::from_str(r#"{"sequence":"in 3 out 6","theme":"light","fps":24,"ease":"linear"}"#)
            .unwrap();
    assert_eq!(cfg.sequence, "in 3 out 6");
    assert_eq!(cfg.theme, Theme::Light);
    assert_eq!(cfg.fps().unwrap().num, 24);
    assert_eq!(cfg.ease, Ease::Linear);
    assert_eq!(cfg.width, 512);
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<PacerConfig>(r#"{"repeat":3}"#).is_err());
}

#[test]
fn link_overlay_round_trips() {
    let mut cfg = PacerConfig::default();
    let link = ShareLink::parse("?sequence=hold+2&dark=false&controls=false");
    cfg.apply_link(&link);
    assert_eq!(cfg.theme, Theme::Light);
    assert!(!cfg.show_controls);
    assert_eq!(cfg.to_link(), link);
}

#[test]
fn scene_options_validate_canvas() {
    let cfg = PacerConfig {
        width: 0,
        ..PacerConfig::default()
    };
    assert!(cfg.scene_options().is_err());

    let opts = PacerConfig::default().scene_options().unwrap();
    assert_eq!(opts.canvas.width, 512);
    assert!(opts.show_controls);
}

#[test]
fn load_reports_missing_and_malformed_files() {
    let dir = std::path::PathBuf::from("target").join("config_unit");
    std::fs::create_dir_all(&dir).unwrap();

    assert!(PacerConfig::load(&dir.join("missing.json")).is_err());

    let bad = dir.join("bad.json");
    std::fs::write(&bad, "{not json").unwrap();
    assert!(matches!(
        PacerConfig::load(&bad),
        Err(PaceError::Serde(_))
    ));

    let good = dir.join("good.json");
    std::fs::write(&good, r#"{"show_cycle_count":true}"#).unwrap();
    assert!(PacerConfig::load(&good).unwrap().show_cycle_count);
}
