use crate::color::{parse_hex, ColorRamp};
use crate::constants::*;
use glam::Vec3;

/// Named horizontal wave band.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveBand {
    Top,
    Middle,
    Bottom,
}

impl WaveBand {
    /// All bands, bottom first so the top band is blended last.
    pub const DRAW_ORDER: [WaveBand; 3] = [WaveBand::Bottom, WaveBand::Middle, WaveBand::Top];

    /// Phase seed keeping this band out of sync with the others.
    pub fn phase_seed(self) -> f32 {
        match self {
            WaveBand::Top => TOP_PHASE_SEED,
            WaveBand::Middle => MIDDLE_PHASE_SEED,
            WaveBand::Bottom => BOTTOM_PHASE_SEED,
        }
    }
}

/// A per-band parameter: either one value shared by every band, or one entry
/// per enabled band (indexed by the band's position in `enabled_bands`).
#[derive(Clone, Debug, PartialEq)]
pub enum BandValue<T> {
    Shared(T),
    PerBand(Vec<T>),
}

/// Where a band sits: horizontal and vertical offset plus the log-radial
/// rotation coefficient. A negative rotation also mirrors the horizontal
/// axis, so the band leans the other way.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandPlacement {
    pub x: f32,
    pub y: f32,
    pub rotation: f32,
}

impl BandPlacement {
    pub const fn new(x: f32, y: f32, rotation: f32) -> Self {
        Self { x, y, rotation }
    }

    const fn from_parts(parts: [f32; 3]) -> Self {
        Self::new(parts[0], parts[1], parts[2])
    }
}

/// CSS composite mode the page applies to the background canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Lighten,
    Difference,
}

impl BlendMode {
    pub fn css_value(self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Lighten => "lighten",
            BlendMode::Difference => "difference",
        }
    }
}

/// Full renderer configuration. Compared by value so a host can diff two
/// configs and skip redundant re-applies. Out-of-range values degrade to
/// blank bands rather than erroring.
#[derive(Clone, Debug, PartialEq)]
pub struct WaveFieldConfig {
    pub enabled_bands: Vec<WaveBand>,
    pub line_count: BandValue<i32>,
    pub line_spacing: BandValue<f32>,
    pub top_position: BandPlacement,
    pub middle_position: BandPlacement,
    pub bottom_position: BandPlacement,
    pub animation_speed: f32,
    pub interactive: bool,
    pub bend_radius: f32,
    pub bend_strength: f32,
    pub pointer_damping: f32,
    pub parallax: bool,
    pub parallax_strength: f32,
    pub gradient: Vec<String>,
    pub background: String,
    pub blend_mode: BlendMode,
}

impl Default for WaveFieldConfig {
    fn default() -> Self {
        Self {
            enabled_bands: vec![WaveBand::Top, WaveBand::Middle, WaveBand::Bottom],
            line_count: BandValue::PerBand(vec![DEFAULT_LINE_COUNT]),
            line_spacing: BandValue::PerBand(vec![5.0]),
            top_position: BandPlacement::from_parts(DEFAULT_TOP_POSITION),
            middle_position: BandPlacement::from_parts(DEFAULT_MIDDLE_POSITION),
            bottom_position: BandPlacement::from_parts(DEFAULT_BOTTOM_POSITION),
            animation_speed: 1.0,
            interactive: true,
            bend_radius: DEFAULT_BEND_RADIUS,
            bend_strength: DEFAULT_BEND_STRENGTH,
            pointer_damping: DEFAULT_POINTER_DAMPING,
            parallax: true,
            parallax_strength: DEFAULT_PARALLAX_STRENGTH,
            gradient: Vec::new(),
            background: "#000000".into(),
            blend_mode: BlendMode::Normal,
        }
    }
}

/// One band normalized for rendering: count clamped, spacing scaled,
/// placement and phase seed attached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedBand {
    pub enabled: bool,
    pub line_count: i32,
    pub spacing: f32,
    pub placement: BandPlacement,
    pub phase_seed: f32,
}

/// Renderer-ready configuration: bands in draw order plus parsed colors and
/// the interaction scalars the frame loop reads every tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedConfig {
    pub bands: [ResolvedBand; 3],
    pub ramp: ColorRamp,
    pub background: Vec3,
    pub animation_speed: f32,
    pub interactive: bool,
    pub bend_radius: f32,
    pub bend_strength: f32,
    pub pointer_damping: f32,
    pub parallax: bool,
    pub parallax_strength: f32,
    pub blend_mode: BlendMode,
}

impl WaveFieldConfig {
    /// Normalize the configuration once, up front. `Shared` values apply to
    /// every enabled band; `PerBand` entries are indexed by the band's
    /// position within `enabled_bands`, with missing entries falling back
    /// to the documented defaults. Disabled bands resolve to zero lines and
    /// zero spacing, so nothing is drawn for them.
    pub fn resolve(&self) -> ResolvedConfig {
        ResolvedConfig {
            bands: WaveBand::DRAW_ORDER.map(|band| self.resolve_band(band)),
            ramp: ColorRamp::from_hex_stops(&self.gradient),
            background: parse_hex(&self.background),
            animation_speed: self.animation_speed,
            interactive: self.interactive,
            bend_radius: self.bend_radius,
            bend_strength: self.bend_strength,
            pointer_damping: self.pointer_damping,
            parallax: self.parallax,
            parallax_strength: self.parallax_strength,
            blend_mode: self.blend_mode,
        }
    }

    fn resolve_band(&self, band: WaveBand) -> ResolvedBand {
        let index = self.enabled_bands.iter().position(|b| *b == band);
        let enabled = index.is_some();

        let line_count = if enabled {
            match &self.line_count {
                BandValue::Shared(count) => *count,
                BandValue::PerBand(counts) => index
                    .and_then(|i| counts.get(i).copied())
                    .unwrap_or(DEFAULT_LINE_COUNT),
            }
        } else {
            0
        }
        .max(0);

        let raw_spacing = if enabled {
            match &self.line_spacing {
                BandValue::Shared(spacing) => *spacing,
                BandValue::PerBand(spacings) => index
                    .and_then(|i| spacings.get(i).copied())
                    .unwrap_or(DEFAULT_LINE_SPACING),
            }
        } else {
            0.0
        };

        ResolvedBand {
            enabled,
            line_count,
            spacing: raw_spacing * LINE_SPACING_SCALE,
            placement: self.placement(band),
            phase_seed: band.phase_seed(),
        }
    }

    fn placement(&self, band: WaveBand) -> BandPlacement {
        match band {
            WaveBand::Top => self.top_position,
            WaveBand::Middle => self.middle_position,
            WaveBand::Bottom => self.bottom_position,
        }
    }
}
