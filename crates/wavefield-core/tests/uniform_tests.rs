// Uniform block packing and the layout contract shared with the WGSL side.

use glam::Vec2;
use std::mem::{offset_of, size_of};
use wavefield_core::*;

#[test]
fn uniform_block_layout_matches_the_shader_struct() {
    assert_eq!(size_of::<BandUniform>(), 32);
    assert_eq!(size_of::<FieldUniforms>(), 304);
    // uniform buffers round struct sizes to 16
    assert_eq!(size_of::<FieldUniforms>() % 16, 0);

    assert_eq!(offset_of!(FieldUniforms, resolution), 0);
    assert_eq!(offset_of!(FieldUniforms, pointer), 16);
    assert_eq!(offset_of!(FieldUniforms, parallax_offset), 32);
    assert_eq!(offset_of!(FieldUniforms, background), 48);
    assert_eq!(offset_of!(FieldUniforms, bands), 64);
    assert_eq!(offset_of!(FieldUniforms, gradient), 160);
    assert_eq!(offset_of!(FieldUniforms, gradient_count), 288);
}

#[test]
fn pack_carries_bands_in_draw_order_with_flags() {
    let config = WaveFieldConfig {
        enabled_bands: vec![WaveBand::Top],
        line_count: BandValue::Shared(4),
        ..WaveFieldConfig::default()
    };
    let cfg = config.resolve();
    let u = FieldUniforms::pack(&cfg, &PointerTracker::new(), Vec2::new(800.0, 600.0));
    assert_eq!(u.resolution, [800.0, 600.0]);
    // draw order is bottom, middle, top
    assert_eq!(u.bands[2].placement[3], 4.0);
    assert_eq!(u.bands[2].shape[2], 1.0);
    assert_eq!(u.bands[0].shape[2], 0.0);
    assert_eq!(u.bands[0].placement[3], 0.0);
    assert_eq!(u.gradient_count, 0);
    assert_eq!(u.interactive, 1.0);
}

#[test]
fn pack_zeroes_parallax_when_disabled() {
    let mut config = WaveFieldConfig::default();
    config.parallax = false;
    let cfg = config.resolve();
    let mut tracker = PointerTracker::new();
    tracker.parallax.current = Vec2::new(0.3, 0.3);
    let u = FieldUniforms::pack(&cfg, &tracker, Vec2::new(100.0, 100.0));
    assert_eq!(u.parallax_offset, [0.0, 0.0]);
}

#[test]
fn pack_writes_gradient_stops_with_count() {
    let config = WaveFieldConfig {
        gradient: vec!["#ff0000".into(), "#00ff00".into()],
        ..WaveFieldConfig::default()
    };
    let cfg = config.resolve();
    let u = FieldUniforms::pack(&cfg, &PointerTracker::new(), Vec2::ONE);
    assert_eq!(u.gradient_count, 2);
    assert_eq!(u.gradient[0], [1.0, 0.0, 0.0, 1.0]);
    assert_eq!(u.gradient[1], [0.0, 1.0, 0.0, 1.0]);
    assert_eq!(u.gradient[2], [0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn pack_reflects_the_live_tracker_state() {
    let cfg = WaveFieldConfig::default().resolve();
    let mut tracker = PointerTracker::new();
    tracker.pointer.current = Vec2::new(120.0, 480.0);
    tracker.influence.current = 0.6;
    tracker.clock_sec = 2.5;
    let u = FieldUniforms::pack(&cfg, &tracker, Vec2::new(640.0, 480.0));
    assert_eq!(u.pointer, [120.0, 480.0]);
    assert_eq!(u.bend_influence, 0.6);
    assert_eq!(u.time, 2.5);
    assert_eq!(u.bend_radius, DEFAULT_BEND_RADIUS);
    assert_eq!(u.bend_strength, DEFAULT_BEND_STRENGTH);
}

#[test]
fn packed_bytes_have_the_uniform_buffer_size() {
    let cfg = WaveFieldConfig::default().resolve();
    let u = FieldUniforms::pack(&cfg, &PointerTracker::new(), Vec2::new(64.0, 64.0));
    let bytes = bytemuck::bytes_of(&u);
    assert_eq!(bytes.len(), 304);
}
