use crate::constants::MAX_GRADIENT_STOPS;
use glam::Vec3;
use smallvec::SmallVec;

/// Parse `#rgb` or `#rrggbb` (the `#` is optional) into 0..1 RGB.
///
/// Unsupported lengths and invalid digits resolve to black channels rather
/// than erroring, so a bad configuration color degrades instead of failing
/// the whole mount.
pub fn parse_hex(hex: &str) -> Vec3 {
    let value = hex.trim();
    let value = value.strip_prefix('#').unwrap_or(value);
    if !value.is_ascii() {
        return Vec3::ZERO;
    }
    let (r, g, b) = match value.len() {
        3 => {
            let d = |i: usize| hex_digit(value.as_bytes()[i]) * 17;
            (d(0), d(1), d(2))
        }
        6 => {
            let p = |i: usize| hex_pair(&value[i..i + 2]);
            (p(0), p(2), p(4))
        }
        _ => (0, 0, 0),
    };
    Vec3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

fn hex_digit(byte: u8) -> u32 {
    (byte as char).to_digit(16).unwrap_or(0)
}

fn hex_pair(pair: &str) -> u32 {
    u32::from_str_radix(pair, 16).unwrap_or(0)
}

/// Piecewise-linear color ramp over at most [`MAX_GRADIENT_STOPS`] stops.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorRamp {
    stops: SmallVec<[Vec3; MAX_GRADIENT_STOPS]>,
}

impl ColorRamp {
    /// Build a ramp from hex stops, truncating past the shader's limit.
    pub fn from_hex_stops(stops: &[String]) -> Self {
        if stops.len() > MAX_GRADIENT_STOPS {
            log::warn!(
                "gradient has {} stops; truncating to {}",
                stops.len(),
                MAX_GRADIENT_STOPS
            );
        }
        Self {
            stops: stops
                .iter()
                .take(MAX_GRADIENT_STOPS)
                .map(|s| parse_hex(s))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stops(&self) -> &[Vec3] {
        &self.stops
    }

    /// Sample at a normalized line index. An empty ramp leaves lines white;
    /// the index clamps just below 1 so the last stop is never overrun.
    pub fn sample(&self, t: f32) -> Vec3 {
        if self.stops.is_empty() {
            return Vec3::ONE;
        }
        let scaled = t.clamp(0.0, 0.9999) * (self.stops.len() - 1) as f32;
        let idx = scaled.floor() as usize;
        let next = (idx + 1).min(self.stops.len() - 1);
        self.stops[idx].lerp(self.stops[next], scaled.fract())
    }
}
