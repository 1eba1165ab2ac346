use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::PixmorphResult;
use crate::raster::buffer::Image;
use crate::render::renderer::{Renderer, check_surface};

/// Writes each frame to `<dir>/frame_NNNNN.png`. Pauses are ignored.
#[derive(Debug)]
pub struct PngSequenceRenderer {
    dir: PathBuf,
    surface: Option<(u32, u32)>,
    next: FrameIndex,
    written: Vec<PathBuf>,
}

impl PngSequenceRenderer {
    /// Frames go to `dir`, which is created on the first `prepare_surface`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            surface: None,
            next: FrameIndex(0),
            written: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        self.dir.join(format!("frame_{:05}.png", idx.0))
    }
}

impl Renderer for PngSequenceRenderer {
    fn prepare_surface(&mut self, width: u32, height: u32) -> PixmorphResult<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create frame directory '{}'", self.dir.display()))?;
        self.surface = Some((width, height));
        Ok(())
    }

    fn render_frame(&mut self, frame: &Image) -> PixmorphResult<()> {
        check_surface(self.surface, frame)?;
        let path = self.frame_path(self.next);
        frame
            .to_rgb_image()?
            .save_with_format(&path, image::ImageFormat::Png)
            .with_context(|| format!("write frame '{}'", path.display()))?;
        tracing::debug!(frame = self.next.0, path = %path.display(), "wrote png frame");
        self.next = FrameIndex(self.next.0 + 1);
        self.written.push(path);
        Ok(())
    }

    fn pause(&mut self, _duration: Duration) -> PixmorphResult<()> {
        Ok(())
    }

    fn finish(&mut self) -> PixmorphResult<()> {
        tracing::info!(frames = self.written.len(), dir = %self.dir.display(), "png sequence complete");
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/png_sequence.rs"]
mod tests;
