//! Damped pointer state. Event handlers write targets; the frame loop calls
//! [`PointerTracker::advance`] once per tick and everything eases toward its
//! target at a rate that is independent of the display refresh rate.

use crate::config::ResolvedConfig;
use crate::constants::{POINTER_REST, REFERENCE_FRAME_RATE};
use glam::Vec2;

/// Convert a per-frame damping factor (defined at the reference frame rate)
/// into the blend factor for an arbitrary frame interval.
///
/// At exactly one reference-rate frame this returns `damping` unchanged, so
/// the stock 0.05 feels the same as a fixed-step filter at 60 Hz while
/// staying consistent on faster or slower displays. A factor of 1 snaps to
/// the target in a single step; out-of-range factors clamp.
#[inline]
pub fn smoothing_alpha(damping: f32, dt_sec: f32) -> f32 {
    let d = damping.clamp(0.0, 1.0);
    if d >= 1.0 {
        return 1.0;
    }
    1.0 - (1.0 - d).powf(dt_sec * REFERENCE_FRAME_RATE)
}

/// A 2d value chasing a target by exponential smoothing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DampedVec2 {
    pub current: Vec2,
    pub target: Vec2,
}

impl DampedVec2 {
    pub fn new(value: Vec2) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    pub fn step(&mut self, alpha: f32) {
        self.current += (self.target - self.current) * alpha;
    }
}

/// Scalar counterpart of [`DampedVec2`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DampedScalar {
    pub current: f32,
    pub target: f32,
}

impl DampedScalar {
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    pub fn step(&mut self, alpha: f32) {
        self.current += (self.target - self.current) * alpha;
    }
}

/// Transient interaction state: the damped pointer position (device pixels,
/// bottom-left origin), the bend influence, the parallax offset, and the
/// animation clock.
#[derive(Clone, Debug)]
pub struct PointerTracker {
    pub pointer: DampedVec2,
    pub influence: DampedScalar,
    pub parallax: DampedVec2,
    pub clock_sec: f32,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    /// State for a surface the pointer has never touched: the position rests
    /// far off-surface and the bend influence is zero.
    pub fn new() -> Self {
        Self {
            pointer: DampedVec2::new(Vec2::from(POINTER_REST)),
            influence: DampedScalar::new(0.0),
            parallax: DampedVec2::new(Vec2::ZERO),
            clock_sec: 0.0,
        }
    }

    /// Record a pointer position in surface-relative CSS pixels.
    ///
    /// The target is flipped to a bottom-left origin and scaled by the
    /// (already capped) pixel ratio so it lines up with the backing store
    /// the shader sees. The parallax target chases the offset from the
    /// surface center, vertical sign inverted.
    pub fn pointer_moved(
        &mut self,
        cfg: &ResolvedConfig,
        css: Vec2,
        surface_css: Vec2,
        pixel_ratio: f32,
    ) {
        self.pointer.target = Vec2::new(css.x, surface_css.y - css.y) * pixel_ratio;
        self.influence.target = 1.0;
        if cfg.parallax {
            let center = surface_css * 0.5;
            let size = surface_css.max(Vec2::ONE); // zero-sized surfaces must not divide
            self.parallax.target = Vec2::new(
                (css.x - center.x) / size.x,
                -(css.y - center.y) / size.y,
            ) * cfg.parallax_strength;
        }
    }

    /// The pointer left the surface. Only the influence target drops, so the
    /// bend fades out in place instead of sliding toward a rest position.
    pub fn pointer_leave(&mut self) {
        self.influence.target = 0.0;
    }

    /// Advance the clock and ease every follower toward its target. The
    /// pointer and influence only move while the field is interactive; the
    /// parallax offset only while parallax is on.
    pub fn advance(&mut self, cfg: &ResolvedConfig, dt_sec: f32) {
        self.clock_sec += dt_sec;
        let alpha = smoothing_alpha(cfg.pointer_damping, dt_sec);
        if cfg.interactive {
            self.pointer.step(alpha);
            self.influence.step(alpha);
        }
        if cfg.parallax {
            self.parallax.step(alpha);
        }
    }
}
