//! Binary classification filters: black-and-white threshold and naive edge
//! detection.

use image::{Rgb, RgbImage};

use super::color::channel_mean;

/// Pure white.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Pure black.
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Turn every pixel white if its channel average reaches `cutoff`, black
/// otherwise.
#[must_use]
pub fn black_and_white(img: &RgbImage, cutoff: i32) -> RgbImage {
    let mut out = img.clone();
    for pixel in out.pixels_mut() {
        *pixel = if i32::from(channel_mean(*pixel)) >= cutoff {
            WHITE
        } else {
            BLACK
        };
    }
    out
}

/// Mark pixels that differ strongly from their right or lower neighbour.
///
/// For each pixel the sum of absolute channel differences to the right
/// neighbour and to the neighbour below are computed; if either exceeds
/// `threshold` the pixel becomes white, otherwise black. The last row and
/// the last column have no such neighbours and keep their original colour.
/// Neighbours are always read from `img`, so the result does not depend on
/// traversal order.
#[must_use]
pub fn edge_detect(img: &RgbImage, threshold: i32) -> RgbImage {
    let (width, height) = img.dimensions();
    let mut out = img.clone();

    for y in 0..height.saturating_sub(1) {
        for x in 0..width.saturating_sub(1) {
            let pixel = img.get_pixel(x, y);
            let diff_right = channel_distance(pixel, img.get_pixel(x + 1, y));
            let diff_below = channel_distance(pixel, img.get_pixel(x, y + 1));

            let edge = diff_right > threshold || diff_below > threshold;
            out.put_pixel(x, y, if edge { WHITE } else { BLACK });
        }
    }

    out
}

/// Sum of absolute per-channel differences.
#[inline]
fn channel_distance(a: &Rgb<u8>, b: &Rgb<u8>) -> i32 {
    a.0.iter()
        .zip(b.0.iter())
        .map(|(&p, &q)| i32::from(p.abs_diff(q)))
        .sum()
}
