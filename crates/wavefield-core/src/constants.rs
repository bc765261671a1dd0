// Shared tuning constants for the wave-field renderer. Both front-ends and
// the WGSL pass derive their numbers from here; keep them in lockstep with
// `shaders/wavefield.wgsl`.

// Band layout
pub const DEFAULT_LINE_COUNT: i32 = 6; // per band, when a per-band entry is missing
pub const DEFAULT_LINE_SPACING: f32 = 0.1; // pre-scale spacing fallback
pub const LINE_SPACING_SCALE: f32 = 0.01; // config spacing -> uv offset per line

pub const DEFAULT_TOP_POSITION: [f32; 3] = [10.0, 0.5, -0.4]; // x, y, rotation
pub const DEFAULT_MIDDLE_POSITION: [f32; 3] = [5.0, 0.0, 0.2];
pub const DEFAULT_BOTTOM_POSITION: [f32; 3] = [2.0, -0.7, -1.0];

// Phase seeds keep the three bands from moving in unison.
pub const TOP_PHASE_SEED: f32 = 1.0;
pub const MIDDLE_PHASE_SEED: f32 = 2.0;
pub const BOTTOM_PHASE_SEED: f32 = 1.5;
pub const LINE_PHASE_STEP: f32 = 0.2; // extra phase per line index

// Wave shape
pub const AMPLITUDE_SCALE: f32 = 0.3;
pub const AMPLITUDE_RATE: f32 = 0.2; // amplitude envelope speed
pub const DRIFT_RATE: f32 = 0.1; // horizontal phase drift speed

// Line falloff
pub const INTENSITY_NUMERATOR: f32 = 0.005;
pub const INTENSITY_SOFTNESS: f32 = 0.01; // widens the falloff around the curve
pub const INTENSITY_FLOOR: f32 = 1e-3; // keeps the divisor away from zero

// Interaction
pub const DEFAULT_BEND_RADIUS: f32 = 5.0;
pub const DEFAULT_BEND_STRENGTH: f32 = -0.5;
pub const DEFAULT_POINTER_DAMPING: f32 = 0.05; // per-frame factor at the reference rate
pub const DEFAULT_PARALLAX_STRENGTH: f32 = 0.2;
pub const POINTER_REST: [f32; 2] = [-1000.0, -1000.0]; // far enough off-surface that the bend term vanishes
pub const REFERENCE_FRAME_RATE: f32 = 60.0; // damping factors are defined against this rate

// Display
pub const MAX_PIXEL_RATIO: f64 = 2.0; // backing-store cap on high-density screens
pub const MAX_GRADIENT_STOPS: usize = 8; // uniform array size in the shader

// Contact form
pub const BANNER_DISMISS_MS: i32 = 5000; // transient status banner lifetime
