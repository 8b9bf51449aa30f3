//! Tests for CallDuration

use followup_core_rs::core::SECONDS_PER_TURN;
use followup_core_rs::CallDuration;

#[test]
fn test_duration_new() {
    let duration = CallDuration::from_seconds(0);
    assert_eq!(duration.seconds(), 0);
    assert_eq!(duration.whole_minutes(), 0);
    assert!(duration.is_zero());
}

#[test]
fn test_minute_boundary() {
    let duration = CallDuration::from_seconds(59);
    assert_eq!(duration.whole_minutes(), 0);
    assert_eq!(duration.seconds_within_minute(), 59);

    let duration = CallDuration::from_seconds(60);
    assert_eq!(duration.whole_minutes(), 1);
    assert_eq!(duration.seconds_within_minute(), 0);
}

#[test]
fn test_fractional_minutes() {
    assert_eq!(CallDuration::from_seconds(30).fractional_minutes(), 0.5);
    assert_eq!(CallDuration::from_seconds(180).fractional_minutes(), 3.0);
    assert!((CallDuration::from_seconds(61).fractional_minutes() - 61.0 / 60.0).abs() < 1e-12);
}

#[test]
fn test_display_matches_dashboard() {
    assert_eq!(CallDuration::from_seconds(185).to_string(), "3m 5s");
    assert_eq!(CallDuration::from_seconds(45).to_string(), "0m 45s");
    assert_eq!(CallDuration::from_seconds(3600).to_string(), "60m 0s");
}

#[test]
fn test_estimate_from_turns() {
    assert_eq!(SECONDS_PER_TURN, 15);
    assert_eq!(CallDuration::estimate_from_turns(4).seconds(), 60);
    assert_eq!(CallDuration::from(60_u64), CallDuration::estimate_from_turns(4));
}

#[test]
fn test_ordering() {
    assert!(CallDuration::from_seconds(30) < CallDuration::from_seconds(31));
}
