//! Clamping of channel values into the displayable range.

use image::Rgb;

/// Largest value a channel can hold.
pub const CHANNEL_MAX: f64 = 255.0;

/// Restrict a channel value to `[0, 255]`.
///
/// Values below 0 become 0, values above 255 become 255 and everything in
/// between is returned unchanged. NaN maps to 0.
#[inline]
#[must_use]
pub fn truncate(value: f64) -> f64 {
    // `f64::max` returns the non-NaN operand
    value.max(0.0).min(CHANNEL_MAX)
}

/// Clamp three channel values and pack them into a pixel.
///
/// Fractional parts are dropped after clamping.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn truncate3(r: f64, g: f64, b: f64) -> Rgb<u8> {
    // Safe: every value is within [0, 255] after truncate
    Rgb([truncate(r) as u8, truncate(g) as u8, truncate(b) as u8])
}
