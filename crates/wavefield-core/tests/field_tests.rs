// CPU mirror of the fragment stage: end-to-end visual properties.

use glam::{Vec2, Vec3};
use wavefield_core::*;

fn quiet_sampler(cfg: &ResolvedConfig, resolution: Vec2, time: f32) -> FieldSampler<'_> {
    FieldSampler {
        cfg,
        resolution,
        time,
        pointer: Vec2::from(POINTER_REST),
        bend_influence: 0.0,
        parallax_offset: Vec2::ZERO,
    }
}

#[test]
fn a_single_band_draws_a_visible_line() {
    let config = WaveFieldConfig {
        enabled_bands: vec![WaveBand::Top],
        line_count: BandValue::Shared(1),
        gradient: vec!["#ffffff".into()],
        interactive: false,
        parallax: false,
        ..WaveFieldConfig::default()
    };
    let cfg = config.resolve();
    let res = Vec2::new(640.0, 360.0);
    let sampler = quiet_sampler(&cfg, res, 0.0);

    // scan a column; the line has to cross it somewhere
    let mut max_lum = 0.0f32;
    for y in 0..360 {
        let c = sampler.shade(Vec2::new(320.0, y as f32 + 0.5));
        max_lum = max_lum.max(c.max_element());
    }
    assert!(max_lum > 0.1, "expected a visible line, max luminance {max_lum}");
}

#[test]
fn empty_gradient_renders_lines_white() {
    let config = WaveFieldConfig {
        enabled_bands: vec![WaveBand::Top],
        line_count: BandValue::Shared(1),
        interactive: false,
        parallax: false,
        ..WaveFieldConfig::default()
    };
    let cfg = config.resolve();
    let sampler = quiet_sampler(&cfg, Vec2::new(640.0, 360.0), 0.0);
    for y in 0..360 {
        let c = sampler.shade(Vec2::new(320.0, y as f32 + 0.5));
        // mixing black toward white can only produce greys
        assert!((c.x - c.y).abs() < 1e-6 && (c.y - c.z).abs() < 1e-6);
    }
}

#[test]
fn disabled_bands_leave_the_background_untouched() {
    let config = WaveFieldConfig {
        enabled_bands: vec![],
        background: "#123456".into(),
        ..WaveFieldConfig::default()
    };
    let cfg = config.resolve();
    let sampler = quiet_sampler(&cfg, Vec2::new(64.0, 64.0), 1.0);
    let bg = parse_hex("#123456");
    for y in [0.5, 20.5, 63.5] {
        for x in [0.5, 32.5, 63.5] {
            assert_eq!(sampler.shade(Vec2::new(x, y)), bg);
        }
    }
}

#[test]
fn zero_line_count_is_equivalent_to_a_disabled_band() {
    let cfg_zero = WaveFieldConfig {
        line_count: BandValue::Shared(0),
        background: "#202020".into(),
        ..WaveFieldConfig::default()
    }
    .resolve();
    let sampler = quiet_sampler(&cfg_zero, Vec2::new(64.0, 64.0), 2.0);
    let bg = parse_hex("#202020");
    for y in [5.5, 31.5, 58.5] {
        assert_eq!(sampler.shade(Vec2::new(31.5, y)), bg);
    }
}

#[test]
fn shading_stays_within_channel_bounds() {
    let config = WaveFieldConfig {
        gradient: vec!["#0504aa".into(), "#00ccff".into(), "#000000".into()],
        ..WaveFieldConfig::default()
    };
    let cfg = config.resolve();
    let sampler = quiet_sampler(&cfg, Vec2::new(320.0, 180.0), 2.5);
    for y in 0..180 {
        for x in [40.0, 160.0, 280.0] {
            let c = sampler.shade(Vec2::new(x, y as f32 + 0.5));
            assert!(c.min_element() >= 0.0, "negative channel at y={y}");
            assert!(c.max_element() <= 1.0, "channel overflow at y={y}");
        }
    }
}

#[test]
fn pointer_bend_displaces_lines_near_the_pointer() {
    let config = WaveFieldConfig {
        enabled_bands: vec![WaveBand::Middle],
        line_count: BandValue::Shared(1),
        parallax: false,
        ..WaveFieldConfig::default()
    };
    let cfg = config.resolve();
    let res = Vec2::new(640.0, 360.0);
    let rest = quiet_sampler(&cfg, res, 0.0);
    let bent = FieldSampler {
        pointer: Vec2::new(320.0, 180.0),
        bend_influence: 1.0,
        ..rest
    };

    let mut changed = 0;
    for y in (0..360).step_by(4) {
        for x in (0..640).step_by(8) {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if (rest.shade(p) - bent.shade(p)).length() > 1e-3 {
                changed += 1;
            }
        }
    }
    assert!(changed > 0, "pointer bend had no visible effect");
}

#[test]
fn rest_pointer_with_full_influence_changes_nothing() {
    // At the rest position the gaussian is zero, so even full influence
    // leaves the field exactly as an untouched surface.
    let cfg = WaveFieldConfig::default().resolve();
    let res = Vec2::new(256.0, 256.0);
    let quiet = quiet_sampler(&cfg, res, 1.0);
    let touched = FieldSampler {
        bend_influence: 1.0,
        ..quiet
    };
    for y in (0..256).step_by(16) {
        for x in (0..256).step_by(16) {
            let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            assert_eq!(quiet.shade(p), touched.shade(p));
        }
    }
}

#[test]
fn parallax_offset_shifts_the_whole_field() {
    let config = WaveFieldConfig {
        enabled_bands: vec![WaveBand::Middle],
        line_count: BandValue::Shared(3),
        interactive: false,
        ..WaveFieldConfig::default()
    };
    let cfg = config.resolve();
    let res = Vec2::new(640.0, 360.0);
    let still = quiet_sampler(&cfg, res, 0.0);
    let shifted = FieldSampler {
        parallax_offset: Vec2::new(0.1, -0.05),
        ..still
    };

    let mut changed = 0;
    for y in (0..360).step_by(6) {
        let p = Vec2::new(321.5, y as f32 + 0.5);
        if (still.shade(p) - shifted.shade(p)).length() > 1e-4 {
            changed += 1;
        }
    }
    assert!(changed > 0, "parallax offset had no visible effect");
}

#[test]
fn rotation_helper_matches_the_shader_convention() {
    let v = rotate(Vec2::new(1.0, 0.0), 0.0);
    assert!((v - Vec2::new(1.0, 0.0)).length() < 1e-6);
    // a quarter turn maps +x onto -y under the row-vector convention
    let r = rotate(Vec2::new(1.0, 0.0), std::f32::consts::FRAC_PI_2);
    assert!((r - Vec2::new(0.0, -1.0)).length() < 1e-6);
    // rotation preserves length
    let w = rotate(Vec2::new(3.0, -4.0), 1.234);
    assert!((w.length() - 5.0).abs() < 1e-5);
}

#[test]
fn animation_speed_zero_freezes_the_field_in_time() {
    let config = WaveFieldConfig {
        animation_speed: 0.0,
        interactive: false,
        parallax: false,
        ..WaveFieldConfig::default()
    };
    let cfg = config.resolve();
    let res = Vec2::new(128.0, 128.0);
    let early = quiet_sampler(&cfg, res, 0.0);
    let late = quiet_sampler(&cfg, res, 1000.0);
    for y in (0..128).step_by(8) {
        let p = Vec2::new(64.5, y as f32 + 0.5);
        assert_eq!(early.shade(p), late.shade(p));
    }
}
