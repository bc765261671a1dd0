// Hex parsing and gradient ramp sampling.

use glam::Vec3;
use wavefield_core::*;

#[test]
fn parses_six_digit_hex() {
    let c = parse_hex("#0504aa");
    assert!((c.x - 5.0 / 255.0).abs() < 1e-6);
    assert!((c.y - 4.0 / 255.0).abs() < 1e-6);
    assert!((c.z - 170.0 / 255.0).abs() < 1e-6);
}

#[test]
fn parses_three_digit_shorthand() {
    assert_eq!(parse_hex("#fff"), Vec3::ONE);
    assert_eq!(parse_hex("#000"), Vec3::ZERO);
    let c = parse_hex("#f80");
    assert!((c.x - 1.0).abs() < 1e-6);
    assert!((c.y - 136.0 / 255.0).abs() < 1e-6);
    assert_eq!(c.z, 0.0);
}

#[test]
fn hash_prefix_is_optional_and_whitespace_is_trimmed() {
    assert_eq!(parse_hex(" 00ccff "), parse_hex("#00ccff"));
    assert_eq!(parse_hex("fff"), Vec3::ONE);
}

#[test]
fn unsupported_lengths_and_bad_digits_go_black() {
    assert_eq!(parse_hex(""), Vec3::ZERO);
    assert_eq!(parse_hex("#1234"), Vec3::ZERO);
    assert_eq!(parse_hex("#zzzzzz"), Vec3::ZERO);
    assert_eq!(parse_hex("not a color"), Vec3::ZERO);
    assert_eq!(parse_hex("#cafézz"), Vec3::ZERO);
}

#[test]
fn empty_ramp_samples_white() {
    let ramp = ColorRamp::from_hex_stops(&[]);
    assert!(ramp.is_empty());
    for i in 0..=10 {
        assert_eq!(ramp.sample(i as f32 / 10.0), Vec3::ONE);
    }
}

#[test]
fn single_stop_ramp_is_constant() {
    let stops: Vec<String> = vec!["#00ccff".into()];
    let ramp = ColorRamp::from_hex_stops(&stops);
    let expected = parse_hex("#00ccff");
    for i in 0..=10 {
        assert_eq!(ramp.sample(i as f32 / 10.0), expected);
    }
}

#[test]
fn ramp_endpoints_match_first_and_last_stops() {
    let stops: Vec<String> = vec!["#ff0000".into(), "#00ff00".into(), "#0000ff".into()];
    let ramp = ColorRamp::from_hex_stops(&stops);
    assert_eq!(ramp.sample(0.0), Vec3::new(1.0, 0.0, 0.0));
    // t clamps just below 1, so the last stop is approached within tolerance
    let end = ramp.sample(1.0);
    assert!((end - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-3);
}

#[test]
fn ramp_midpoint_interpolates_neighbouring_stops() {
    let stops: Vec<String> = vec!["#000000".into(), "#ffffff".into()];
    let ramp = ColorRamp::from_hex_stops(&stops);
    let mid = ramp.sample(0.5);
    assert!((mid - Vec3::splat(0.5)).length() < 1e-3);
}

#[test]
fn ramp_truncates_past_the_stop_limit() {
    let stops: Vec<String> = (0..12).map(|_| "#123456".to_string()).collect();
    let ramp = ColorRamp::from_hex_stops(&stops);
    assert_eq!(ramp.len(), MAX_GRADIENT_STOPS);
}

#[test]
fn sampling_is_monotone_between_two_stops() {
    let stops: Vec<String> = vec!["#000000".into(), "#ffffff".into()];
    let ramp = ColorRamp::from_hex_stops(&stops);
    let mut last = -1.0f32;
    for i in 0..=20 {
        let v = ramp.sample(i as f32 / 20.0).x;
        assert!(v >= last, "ramp went backwards at step {i}");
        last = v;
    }
}

#[test]
fn out_of_range_sample_positions_clamp() {
    let stops: Vec<String> = vec!["#ff0000".into(), "#0000ff".into()];
    let ramp = ColorRamp::from_hex_stops(&stops);
    assert_eq!(ramp.sample(-3.0), ramp.sample(0.0));
    assert!((ramp.sample(7.5) - ramp.sample(1.0)).length() < 1e-6);
}
