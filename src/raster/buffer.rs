use std::io::Write;

use crate::foundation::core::Rgb8;
use crate::foundation::error::{PixmorphError, PixmorphResult};

/// Row-major grid of [`Rgb8`] pixels with fixed, non-zero dimensions.
///
/// Pixels live in one contiguous buffer of exactly `width * height` entries, so every row has
/// `width` pixels. Transforms never mutate an `Image`; they return a freshly allocated one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<Rgb8>,
}

impl Image {
    /// Wrap a row-major pixel buffer.
    ///
    /// Fails when either dimension is zero or `pixels.len() != width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb8>) -> PixmorphResult<Self> {
        let len = checked_len(width, height)?;
        if pixels.len() != len {
            return Err(PixmorphError::validation(format!(
                "pixel buffer holds {} pixels, expected {width}x{height} = {len}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// An image where every pixel is `px`.
    pub fn filled(width: u32, height: u32, px: Rgb8) -> PixmorphResult<Self> {
        let len = checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![px; len],
        })
    }

    /// Build an image by evaluating `f(row, col)` for every pixel, top row first.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut f: impl FnMut(u32, u32) -> Rgb8,
    ) -> PixmorphResult<Self> {
        let len = checked_len(width, height)?;
        let mut pixels = Vec::with_capacity(len);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Assemble an image from parts the caller has already validated.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<Rgb8>) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(pixels.len(), (width as usize) * (height as usize));
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Same dimensions, each pixel replaced by `f(px)`.
    pub fn map_pixels(&self, f: impl FnMut(Rgb8) -> Rgb8) -> Self {
        let pixels = self.pixels.iter().copied().map(f).collect();
        Self::from_parts(self.width, self.height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    pub fn dims(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Pixel at `(row, col)`. Panics when out of bounds, like slice indexing.
    #[inline]
    pub fn at(&self, row: u32, col: u32) -> Rgb8 {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) out of bounds for {}x{} image",
            self.width,
            self.height
        );
        self.pixels[(row as usize) * (self.width as usize) + (col as usize)]
    }

    /// Row-major pixel slice.
    pub fn pixels(&self) -> &[Rgb8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<Rgb8> {
        self.pixels
    }

    /// Iterate over rows, top row first.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, Rgb8> {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Tightly packed `rgb24` bytes, row-major.
    pub fn to_rgb24(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|px| px.channels()).collect()
    }

    pub fn to_rgb_image(&self) -> PixmorphResult<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.to_rgb24())
            .ok_or_else(|| PixmorphError::validation("rgb buffer does not match image dimensions"))
    }

    pub fn from_rgb_image(img: &image::RgbImage) -> PixmorphResult<Self> {
        let pixels = img.pixels().map(|&px| Rgb8::from(px)).collect();
        Self::new(img.width(), img.height(), pixels)
    }

    /// Print every pixel as `(rrr,ggg,bbb)  `, one image row per line.
    pub fn write_text<W: Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        for row in self.rows() {
            for px in row {
                write!(out, "({:>3},{:>3},{:>3})  ", px.r, px.g, px.b)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}

fn checked_len(width: u32, height: u32) -> PixmorphResult<usize> {
    if width == 0 || height == 0 {
        return Err(PixmorphError::validation(format!(
            "image dimensions must be non-zero, got {width}x{height}"
        )));
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| PixmorphError::validation("image dimensions overflow"))
}

#[cfg(test)]
#[path = "../../tests/unit/raster/buffer.rs"]
mod tests;
