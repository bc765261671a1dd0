use crate::config::ResolvedConfig;
use crate::pointer::PointerTracker;
use glam::Vec2;

/// One band as the shader sees it.
///
/// `placement` packs x offset, y offset, rotation and line count;
/// `shape` packs spacing, phase seed, the enabled flag and padding.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BandUniform {
    pub placement: [f32; 4],
    pub shape: [f32; 4],
}

/// Uniform block for the wave-field pass, written once per frame. Field
/// order and padding mirror the WGSL struct in `shaders/wavefield.wgsl`;
/// the layout tests pin the byte offsets.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FieldUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub animation_speed: f32,

    pub pointer: [f32; 2],
    pub bend_influence: f32,
    pub interactive: f32,

    pub parallax_offset: [f32; 2],
    pub bend_radius: f32,
    pub bend_strength: f32,

    pub background: [f32; 4],

    pub bands: [BandUniform; 3],

    pub gradient: [[f32; 4]; 8],
    pub gradient_count: u32,
    pub _pad: [u32; 3],
}

impl FieldUniforms {
    /// Pack the resolved configuration and live interaction state for one
    /// frame at the given backing resolution. The parallax offset is zeroed
    /// when parallax is off, so the shader can add it unconditionally.
    pub fn pack(cfg: &ResolvedConfig, tracker: &PointerTracker, resolution: Vec2) -> Self {
        let mut gradient = [[0.0; 4]; 8];
        for (slot, stop) in gradient.iter_mut().zip(cfg.ramp.stops()) {
            *slot = [stop.x, stop.y, stop.z, 1.0];
        }

        let bands = cfg.bands.map(|band| BandUniform {
            placement: [
                band.placement.x,
                band.placement.y,
                band.placement.rotation,
                band.line_count as f32,
            ],
            shape: [
                band.spacing,
                band.phase_seed,
                if band.enabled { 1.0 } else { 0.0 },
                0.0,
            ],
        });

        Self {
            resolution: resolution.to_array(),
            time: tracker.clock_sec,
            animation_speed: cfg.animation_speed,
            pointer: tracker.pointer.current.to_array(),
            bend_influence: tracker.influence.current,
            interactive: if cfg.interactive { 1.0 } else { 0.0 },
            parallax_offset: if cfg.parallax {
                tracker.parallax.current.to_array()
            } else {
                [0.0, 0.0]
            },
            bend_radius: cfg.bend_radius,
            bend_strength: cfg.bend_strength,
            background: [cfg.background.x, cfg.background.y, cfg.background.z, 1.0],
            bands,
            gradient,
            gradient_count: cfg.ramp.len() as u32,
            _pad: [0; 3],
        }
    }
}
