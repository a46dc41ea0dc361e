//! Pixel-wise colour filters: negative, brighten, colorize and the
//! red-green colorblindness simulation.
//!
//! Every filter leaves its input untouched and returns a new image of the
//! same size.

use image::{Rgb, RgbImage};

use super::clamp::{truncate3, CHANNEL_MAX};

/// Invert every channel (`255 - v`).
#[must_use]
pub fn negative(img: &RgbImage) -> RgbImage {
    let mut out = img.clone();
    for Rgb([r, g, b]) in out.pixels_mut() {
        *r = u8::MAX - *r;
        *g = u8::MAX - *g;
        *b = u8::MAX - *b;
    }
    out
}

/// Add `delta` to every channel, clamping the result to `[0, 255]`.
#[must_use]
pub fn brighten(img: &RgbImage, delta: i32) -> RgbImage {
    let delta = f64::from(delta);
    let mut out = img.clone();
    for pixel in out.pixels_mut() {
        let Rgb([r, g, b]) = *pixel;
        *pixel = truncate3(
            f64::from(r) + delta,
            f64::from(g) + delta,
            f64::from(b) + delta,
        );
    }
    out
}

/// Tint each pixel by pushing channels above the pixel average towards
/// white and the others towards black.
///
/// `alpha` is the blend weight: 0 leaves the image unchanged, 1 saturates
/// every channel to either 0 or 255.
#[must_use]
pub fn colorize(img: &RgbImage, alpha: f64) -> RgbImage {
    let mut out = img.clone();
    for pixel in out.pixels_mut() {
        let Rgb([r, g, b]) = *pixel;
        let mean = channel_mean(*pixel);
        let blend = |value: u8| {
            let above = u16::from(value) > mean;
            let value = f64::from(value);
            if above {
                value.mul_add(1.0 - alpha, CHANNEL_MAX * alpha)
            } else {
                value * (1.0 - alpha)
            }
        };
        *pixel = truncate3(blend(r), blend(g), blend(b));
    }
    out
}

/// Simulate red-green colorblindness by merging the red and green channels.
///
/// Both channels become `r / 2 + g / 2` (each half rounded down); blue is
/// kept as is.
#[must_use]
pub fn red_green_colorblindness(img: &RgbImage) -> RgbImage {
    let mut out = img.clone();
    for Rgb([r, g, _]) in out.pixels_mut() {
        let merged = *r / 2 + *g / 2;
        *r = merged;
        *g = merged;
    }
    out
}

/// Integer average of the three channels, rounded down.
#[inline]
pub(crate) fn channel_mean(Rgb([r, g, b]): Rgb<u8>) -> u16 {
    (u16::from(r) + u16::from(g) + u16::from(b)) / 3
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RgbImage {
        RgbImage::from_fn(5, 3, |x, y| {
            #[allow(clippy::cast_possible_truncation)]
            let v = (x * 50 + y * 17) as u8;
            Rgb([v, 255 - v, v / 3])
        })
    }

    #[test]
    fn test_negative_pixel() {
        let img = RgbImage::from_pixel(1, 1, Rgb([0, 100, 255]));
        assert_eq!(negative(&img).get_pixel(0, 0), &Rgb([255, 155, 0]));
    }

    #[test]
    fn test_negative_is_involutive() {
        let img = sample();
        assert_eq!(negative(&negative(&img)), img);
    }

    #[test]
    fn test_brighten_zero_is_identity() {
        let img = sample();
        assert_eq!(brighten(&img, 0), img);
    }

    #[test]
    fn test_brighten_clamps() {
        let img = RgbImage::from_pixel(2, 2, Rgb([10, 10, 10]));
        let out = brighten(&img, 300);
        assert!(out.pixels().all(|p| *p == Rgb([255, 255, 255])));

        let out = brighten(&img, -11);
        assert!(out.pixels().all(|p| *p == Rgb([0, 0, 0])));
    }

    #[test]
    fn test_brighten_extreme_delta() {
        let img = RgbImage::from_pixel(1, 1, Rgb([200, 0, 50]));
        assert_eq!(brighten(&img, i32::MAX).get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(brighten(&img, i32::MIN).get_pixel(0, 0), &Rgb([0, 0, 0]));
    }

    #[test]
    fn test_colorize_zero_is_identity() {
        let img = sample();
        assert_eq!(colorize(&img, 0.0), img);
    }

    #[test]
    fn test_colorize_full_alpha() {
        // mean = 100: red is above, green equal, blue below
        let img = RgbImage::from_pixel(1, 1, Rgb([200, 100, 0]));
        assert_eq!(colorize(&img, 1.0).get_pixel(0, 0), &Rgb([255, 0, 0]));
    }

    #[test]
    fn test_colorize_half_alpha() {
        let img = RgbImage::from_pixel(1, 1, Rgb([200, 100, 0]));
        // 200 * 0.5 + 127.5 = 227.5, 100 * 0.5 = 50
        assert_eq!(colorize(&img, 0.5).get_pixel(0, 0), &Rgb([227, 50, 0]));
    }

    #[test]
    fn test_colorize_out_of_range_alpha_is_clamped() {
        let img = RgbImage::from_pixel(1, 1, Rgb([200, 100, 0]));
        assert_eq!(colorize(&img, 2.0).get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(colorize(&img, -1.0).get_pixel(0, 0), &Rgb([145, 200, 0]));
    }

    #[test]
    fn test_colorblindness_pixel() {
        let img = RgbImage::from_pixel(1, 1, Rgb([100, 200, 50]));
        assert_eq!(
            red_green_colorblindness(&img).get_pixel(0, 0),
            &Rgb([150, 150, 50])
        );
    }

    #[test]
    fn test_colorblindness_merges_red_green() {
        let img = sample();
        let out = red_green_colorblindness(&img);
        for (before, after) in img.pixels().zip(out.pixels()) {
            assert_eq!(after[0], after[1]);
            assert_eq!(after[2], before[2]);
        }
    }

    #[test]
    fn test_odd_channels_round_each_half_down() {
        let img = RgbImage::from_pixel(1, 1, Rgb([255, 255, 7]));
        assert_eq!(
            red_green_colorblindness(&img).get_pixel(0, 0),
            &Rgb([254, 254, 7])
        );
    }

    #[test]
    fn test_channel_mean() {
        assert_eq!(channel_mean(Rgb([255, 255, 254])), 254);
        assert_eq!(channel_mean(Rgb([1, 1, 0])), 0);
    }
}
