use crate::foundation::core::Rgb8;
use crate::foundation::error::{PixmorphError, PixmorphResult};
use crate::raster::buffer::Image;

/// Linear mix of two pixels: each channel is `floor(alpha * a + (1 - alpha) * b)`.
///
/// `alpha` is clamped to `[0, 1]`; a non-finite alpha counts as `0`.
pub fn blend(a: Rgb8, b: Rgb8, alpha: f64) -> Rgb8 {
    let alpha = if alpha.is_finite() {
        alpha.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let inv = 1.0 - alpha;
    let mix = |x: u8, y: u8| (alpha * f64::from(x) + inv * f64::from(y)) as u8;
    Rgb8::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
}

/// Pixel-wise [`blend`] of two equally sized images.
///
/// `alpha = 1` yields `a`, `alpha = 0` yields `b`. Images of different dimensions are rejected
/// with [`PixmorphError::DimensionMismatch`].
pub fn blend_images(a: &Image, b: &Image, alpha: f64) -> PixmorphResult<Image> {
    if a.dims() != b.dims() {
        return Err(PixmorphError::DimensionMismatch {
            expected: a.dims(),
            actual: b.dims(),
        });
    }
    Ok(blend_same_size(a, b, alpha))
}

/// [`blend_images`] for callers that already guarantee `a.dims() == b.dims()`.
pub(crate) fn blend_same_size(a: &Image, b: &Image, alpha: f64) -> Image {
    debug_assert_eq!(a.dims(), b.dims());
    let pixels = a
        .pixels()
        .iter()
        .zip(b.pixels())
        .map(|(&pa, &pb)| blend(pa, pb, alpha))
        .collect();
    Image::from_parts(a.width(), a.height(), pixels)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blend.rs"]
mod tests;
