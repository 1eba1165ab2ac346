//! Grayscale projection.
//!
//! Luminance is `floor(0.299 R + 0.587 G + 0.114 B)`. The weights are exact in thousandths, so
//! the sum is computed in integers and the floor is the true one. A gray pixel therefore maps
//! to itself and [`grayscale`] is idempotent.

use crate::foundation::core::Rgb8;
use crate::raster::buffer::Image;

const WEIGHT_R: u32 = 299;
const WEIGHT_G: u32 = 587;
const WEIGHT_B: u32 = 114;
const WEIGHT_SCALE: u32 = 1000;

/// Truncated luminance of one pixel.
#[inline]
pub fn luminance(px: Rgb8) -> u8 {
    let sum = WEIGHT_R * u32::from(px.r) + WEIGHT_G * u32::from(px.g) + WEIGHT_B * u32::from(px.b);
    // At most 255 * 1000 / 1000.
    (sum / WEIGHT_SCALE) as u8
}

/// Replace every pixel by `(L, L, L)` where `L` is its [`luminance`].
pub fn grayscale(img: &Image) -> Image {
    img.map_pixels(|px| Rgb8::gray(luminance(px)))
}

#[cfg(test)]
#[path = "../../tests/unit/transform/color.rs"]
mod tests;
