use crate::config::{ResolvedBand, ResolvedConfig};
use crate::constants::*;
use glam::{Vec2, Vec3};

/// Rotate a uv the way the shader does (row vector times the 2x2 matrix).
#[inline]
pub fn rotate(uv: Vec2, r: f32) -> Vec2 {
    let (s, c) = r.sin_cos();
    Vec2::new(uv.x * c + uv.y * s, -uv.x * s + uv.y * c)
}

/// CPU mirror of the fragment stage in `shaders/wavefield.wgsl`: a frame
/// snapshot that shades one pixel with the same math, so the visual
/// properties can be exercised in host tests without a GPU.
#[derive(Clone, Copy)]
pub struct FieldSampler<'a> {
    pub cfg: &'a ResolvedConfig,
    pub resolution: Vec2,
    pub time: f32,
    /// Smoothed pointer position in device pixels, bottom-left origin.
    pub pointer: Vec2,
    pub bend_influence: f32,
    pub parallax_offset: Vec2,
}

impl FieldSampler<'_> {
    /// Shade the pixel at framebuffer coordinates (top-left origin), running
    /// the same math as the fragment entry point.
    pub fn shade(&self, frag: Vec2) -> Vec3 {
        let res = self.resolution;
        let mut uv = (2.0 * frag - res) / res.y;
        uv += self.parallax_offset; // zero when parallax is off

        let mut pointer_uv = Vec2::ZERO;
        if self.cfg.interactive {
            pointer_uv = (2.0 * self.pointer - res) / res.y;
            pointer_uv.y = -pointer_uv.y;
        }

        let mut col = self.cfg.background;
        for band in &self.cfg.bands {
            if !band.enabled {
                continue;
            }
            col = self.draw_band(col, band, uv, pointer_uv);
        }
        col
    }

    fn draw_band(&self, mut col: Vec3, band: &ResolvedBand, uv: Vec2, pointer_uv: Vec2) -> Vec3 {
        for i in 0..band.line_count {
            let fi = i as f32;
            let t = fi / ((band.line_count - 1) as f32).max(1.0);
            let angle = band.placement.rotation * (uv.length() + 1.0).ln();
            let mut ruv = rotate(uv, angle);
            if band.placement.rotation < 0.0 {
                ruv.x = -ruv.x;
            }
            let local = ruv + Vec2::new(band.spacing * fi + band.placement.x, band.placement.y);
            let w = self.wave(local, band.phase_seed + LINE_PHASE_STEP * fi, uv, pointer_uv);
            col = col.lerp(self.cfg.ramp.sample(t), w.clamp(0.0, 1.0));
        }
        col
    }

    /// Intensity of one line at a wave-local uv: a drifting sine displaced
    /// by the pointer bend, with an inverse-distance falloff around it.
    fn wave(&self, uv: Vec2, offset: f32, screen_uv: Vec2, pointer_uv: Vec2) -> f32 {
        let time = self.time * self.cfg.animation_speed;
        let amp = (offset + time * AMPLITUDE_RATE).sin() * AMPLITUDE_SCALE;
        let mut y = (uv.x + offset + time * DRIFT_RATE).sin() * amp;

        if self.cfg.interactive {
            let d = screen_uv - pointer_uv;
            let influence = (-d.dot(d) * self.cfg.bend_radius).exp();
            y += (pointer_uv.y - screen_uv.y)
                * influence
                * self.cfg.bend_strength
                * self.bend_influence;
        }

        let m = uv.y - y;
        INTENSITY_NUMERATOR / (m.abs() + INTENSITY_SOFTNESS).max(INTENSITY_FLOOR)
    }
}
