//! Mirror transforms.

use crate::raster::buffer::Image;

/// Mirror left/right: output `(i, j)` is input `(i, width - 1 - j)`.
pub fn flip_horizontal(img: &Image) -> Image {
    let mut pixels = Vec::with_capacity(img.pixels().len());
    for row in img.rows() {
        pixels.extend(row.iter().rev().copied());
    }
    Image::from_parts(img.width(), img.height(), pixels)
}

/// Mirror top/bottom: output `(i, j)` is input `(height - 1 - i, j)`.
pub fn flip_vertical(img: &Image) -> Image {
    let mut pixels = Vec::with_capacity(img.pixels().len());
    for row in img.rows().rev() {
        pixels.extend_from_slice(row);
    }
    Image::from_parts(img.width(), img.height(), pixels)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/geometry.rs"]
mod tests;
