//! Load/save by file extension: `.ppm` goes through the text codec, everything else through
//! the `image` crate.

use std::path::Path;

use anyhow::Context as _;

use crate::codec::ppm::{read_ppm, write_ppm};
use crate::foundation::error::PixmorphResult;
use crate::raster::buffer::Image;

fn is_ppm(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("ppm"))
}

/// Decode an image file into RGB8.
pub fn load_image(path: &Path) -> PixmorphResult<Image> {
    if is_ppm(path) {
        return read_ppm(path);
    }
    let rgb = image::open(path)
        .with_context(|| format!("decode image '{}'", path.display()))?
        .into_rgb8();
    Image::from_rgb_image(&rgb)
}

/// Encode `img` to `path`, creating parent directories as needed.
pub fn save_image(path: &Path, img: &Image) -> PixmorphResult<()> {
    if is_ppm(path) {
        return write_ppm(path, img);
    }
    ensure_parent_dir(path)?;
    img.to_rgb_image()?
        .save(path)
        .with_context(|| format!("write image '{}'", path.display()))?;
    tracing::info!(path = %path.display(), width = img.width(), height = img.height(), "wrote image");
    Ok(())
}

pub fn ensure_parent_dir(path: &Path) -> PixmorphResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/codec/file.rs"]
mod tests;
