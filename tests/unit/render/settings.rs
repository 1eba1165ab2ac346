use super::*;

#[test]
fn defaults_match_reference_pacing() {
    let s = PlaybackSettings::default();
    assert_eq!(s.frame_pause(), Duration::from_millis(500));
    assert_eq!(s.compare_pause(), Duration::from_millis(3000));
    s.validate().unwrap();
}

#[test]
fn missing_fields_take_defaults() {
    let s = PlaybackSettings::from_json_str(r#"{ "frame_pause_ms": 40 }"#).unwrap();
    assert_eq!(s.frame_pause_ms, 40);
    assert_eq!(s.compare_pause_ms, 3000);
    assert_eq!(
        PlaybackSettings::from_json_str("{}").unwrap(),
        PlaybackSettings::default()
    );
}

#[test]
fn unknown_fields_and_bad_types_are_rejected() {
    assert!(PlaybackSettings::from_json_str(r#"{ "fps": 30 }"#).is_err());
    assert!(PlaybackSettings::from_json_str(r#"{ "frame_pause_ms": -1 }"#).is_err());
}

#[test]
fn absurd_pauses_fail_validation() {
    let s = PlaybackSettings {
        frame_pause_ms: MAX_PAUSE_MS + 1,
        ..PlaybackSettings::default()
    };
    assert!(matches!(s.validate(), Err(PixmorphError::Validation(_))));
}

#[test]
fn loads_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("playback.json");
    std::fs::write(&path, r#"{ "frame_pause_ms": 0, "compare_pause_ms": 10 }"#).unwrap();
    let s = PlaybackSettings::from_json_file(&path).unwrap();
    assert_eq!(s.frame_pause(), Duration::ZERO);
    assert_eq!(s.compare_pause_ms, 10);

    assert!(PlaybackSettings::from_json_file(&dir.path().join("nope.json")).is_err());
}
