use okulo_core::{blink_track, parse_track_json, Interpolation, Track, TrackError};

/// it should parse a stored track and sample it like a hand-built one
#[test]
fn parses_stored_track() {
    let json = r#"{
        "interpolation": "linear",
        "frames": [
            { "time": 0.0, "value": 0.0 },
            { "time": 0.25, "value": 2.0 },
            { "time": 1.0, "value": 3.0 }
        ]
    }"#;
    let track = parse_track_json(json).expect("valid stored track");
    assert_eq!(track.interpolation(), Interpolation::Linear);
    assert_eq!(track.number_of_frames(), 3);
    assert_eq!(track.sample(0.25, false), 2.0);
}

/// it should default missing slopes to zero
#[test]
fn missing_slopes_default_to_zero() {
    let json = r#"{
        "interpolation": "cubic",
        "frames": [
            { "time": 0.0, "value": 1.0 },
            { "time": 1.0, "value": 2.0, "inSlope": 0.5, "outSlope": -0.5 }
        ]
    }"#;
    let track = parse_track_json(json).expect("valid stored track");
    let first = track.frame(0);
    assert_eq!((first.in_slope, first.out_slope), (0.0, 0.0));
    let second = track.frame(1);
    assert_eq!((second.in_slope, second.out_slope), (0.5, -0.5));
}

/// it should reject unknown interpolation names
#[test]
fn rejects_unknown_interpolation() {
    let json = r#"{ "interpolation": "bezier", "frames": [] }"#;
    let err = parse_track_json(json).unwrap_err();
    assert_eq!(
        err,
        TrackError::UnknownInterpolation {
            name: "bezier".to_string()
        }
    );
}

/// it should reject out-of-order frame times
#[test]
fn rejects_decreasing_times() {
    let json = r#"{
        "interpolation": "linear",
        "frames": [
            { "time": 0.5, "value": 0.0 },
            { "time": 0.25, "value": 1.0 }
        ]
    }"#;
    assert!(matches!(
        parse_track_json(json).unwrap_err(),
        TrackError::DecreasingTime { index: 1, .. }
    ));
}

/// it should reject times that overflow to infinity
#[test]
fn rejects_non_finite_times() {
    let json = r#"{
        "interpolation": "linear",
        "frames": [ { "time": 1e200, "value": 0.0 } ]
    }"#;
    assert!(matches!(
        parse_track_json(json).unwrap_err(),
        TrackError::NonFiniteTime { index: 0, .. }
    ));
}

/// it should report malformed documents as parse errors
#[test]
fn rejects_malformed_json() {
    assert!(matches!(
        parse_track_json("{").unwrap_err(),
        TrackError::Parse { .. }
    ));
}

/// it should round-trip a track through serde
#[test]
fn track_serde_round_trip() {
    let track = blink_track();
    let json = serde_json::to_string(&track).unwrap();
    let back: Track = serde_json::from_str(&json).unwrap();
    assert_eq!(back, track);
}
