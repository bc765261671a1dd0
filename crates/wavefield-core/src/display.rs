use crate::constants::MAX_PIXEL_RATIO;

/// Cap the device pixel ratio used for backing-store sizing. Very dense
/// screens render at 2x at most; degenerate ratios fall back to 1.
#[inline]
pub fn capped_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio <= 0.0 {
        return 1.0;
    }
    device_pixel_ratio.min(MAX_PIXEL_RATIO)
}

/// Backing resolution for a surface with the given CSS size, never zero in
/// either dimension.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let ratio = capped_pixel_ratio(device_pixel_ratio);
    let width = (css_width * ratio) as u32;
    let height = (css_height * ratio) as u32;
    (width.max(1), height.max(1))
}
