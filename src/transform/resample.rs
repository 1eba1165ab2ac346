//! Nearest-neighbor resize.

use crate::foundation::error::{PixmorphError, PixmorphResult};
use crate::raster::buffer::Image;

/// Resize `img` to `target_width` x `target_height` by nearest-neighbor sampling.
///
/// Output `(i, j)` takes source `(floor(i * h_src / h_dst), floor(j * w_src / w_dst))`. The same
/// formula both duplicates pixels (upscaling) and drops them (downscaling). No filtering.
pub fn resize(img: &Image, target_width: u32, target_height: u32) -> PixmorphResult<Image> {
    if target_width == 0 || target_height == 0 {
        return Err(PixmorphError::InvalidTargetDimension {
            width: target_width,
            height: target_height,
        });
    }
    if img.dims() == (target_width, target_height) {
        return Ok(img.clone());
    }

    let row_scale = f64::from(img.height()) / f64::from(target_height);
    let col_scale = f64::from(img.width()) / f64::from(target_width);

    // Column lookup is shared by every output row.
    let src_cols: Vec<usize> = (0..target_width)
        .map(|j| source_index(j, col_scale, img.width()))
        .collect();

    let src_width = img.width() as usize;
    let src = img.pixels();
    let mut pixels = Vec::with_capacity((target_width as usize) * (target_height as usize));
    for i in 0..target_height {
        let row_start = source_index(i, row_scale, img.height()) * src_width;
        pixels.extend(src_cols.iter().map(|&c| src[row_start + c]));
    }

    Ok(Image::from_parts(target_width, target_height, pixels))
}

/// `floor(dst * scale)`, clamped so float rounding can never step past the last source pixel.
#[inline]
fn source_index(dst: u32, scale: f64, src_len: u32) -> usize {
    let idx = (f64::from(dst) * scale) as usize;
    idx.min(src_len as usize - 1)
}

#[cfg(test)]
#[path = "../../tests/unit/transform/resample.rs"]
mod tests;
