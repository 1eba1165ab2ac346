use std::io::Write;
use std::time::Duration;

use crate::foundation::error::{PixmorphError, PixmorphResult};
use crate::raster::buffer::Image;

/// Consumer of rendered frames.
///
/// Call order contract: `prepare_surface` before the frames of a given size, then
/// `render_frame` once per frame, with `pause` between frames. `finish` is called once after
/// the last frame.
pub trait Renderer {
    /// Size the output surface for the frames that follow.
    fn prepare_surface(&mut self, width: u32, height: u32) -> PixmorphResult<()>;

    /// Present one frame. Frames are pushed one at a time, in order.
    fn render_frame(&mut self, frame: &Image) -> PixmorphResult<()>;

    /// Throttle playback. Blocks the calling thread by default.
    fn pause(&mut self, duration: Duration) -> PixmorphResult<()> {
        std::thread::sleep(duration);
        Ok(())
    }

    /// Flush and release output resources.
    fn finish(&mut self) -> PixmorphResult<()> {
        Ok(())
    }
}

/// One call made against an [`InMemoryRenderer`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderEvent {
    Surface { width: u32, height: u32 },
    Frame(Image),
    Pause(Duration),
    Finish,
}

/// Renderer that records every call for tests and debugging. Pauses never sleep.
#[derive(Debug, Default)]
pub struct InMemoryRenderer {
    events: Vec<RenderEvent>,
    surface: Option<(u32, u32)>,
}

impl InMemoryRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, in order.
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Recorded frames, in order.
    pub fn frames(&self) -> impl Iterator<Item = &Image> {
        self.events.iter().filter_map(|e| match e {
            RenderEvent::Frame(img) => Some(img),
            _ => None,
        })
    }

    /// Recorded pauses, in order.
    pub fn pauses(&self) -> impl Iterator<Item = Duration> + '_ {
        self.events.iter().filter_map(|e| match e {
            RenderEvent::Pause(d) => Some(*d),
            _ => None,
        })
    }
}

impl Renderer for InMemoryRenderer {
    fn prepare_surface(&mut self, width: u32, height: u32) -> PixmorphResult<()> {
        self.surface = Some((width, height));
        self.events.push(RenderEvent::Surface { width, height });
        Ok(())
    }

    fn render_frame(&mut self, frame: &Image) -> PixmorphResult<()> {
        check_surface(self.surface, frame)?;
        self.events.push(RenderEvent::Frame(frame.clone()));
        Ok(())
    }

    fn pause(&mut self, duration: Duration) -> PixmorphResult<()> {
        self.events.push(RenderEvent::Pause(duration));
        Ok(())
    }

    fn finish(&mut self) -> PixmorphResult<()> {
        self.events.push(RenderEvent::Finish);
        Ok(())
    }
}

/// Renderer that prints each frame as pixel triplets (see [`Image::write_text`]), with a
/// blank line between frames.
pub struct TextRenderer<W: Write> {
    out: W,
    surface: Option<(u32, u32)>,
    frames: u64,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            surface: None,
            frames: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn prepare_surface(&mut self, width: u32, height: u32) -> PixmorphResult<()> {
        self.surface = Some((width, height));
        Ok(())
    }

    fn render_frame(&mut self, frame: &Image) -> PixmorphResult<()> {
        check_surface(self.surface, frame)?;
        if self.frames > 0 {
            writeln!(self.out).map_err(io_err)?;
        }
        frame.write_text(&mut self.out).map_err(io_err)?;
        self.out.flush().map_err(io_err)?;
        self.frames += 1;
        Ok(())
    }
}

fn io_err(e: std::io::Error) -> PixmorphError {
    PixmorphError::render(format!("failed to write frame text: {e}"))
}

/// Reject frames that do not fit the prepared surface.
pub(crate) fn check_surface(surface: Option<(u32, u32)>, frame: &Image) -> PixmorphResult<()> {
    let Some((width, height)) = surface else {
        return Err(PixmorphError::render(
            "render_frame called before prepare_surface",
        ));
    };
    if frame.dims() != (width, height) {
        return Err(PixmorphError::DimensionMismatch {
            expected: (width, height),
            actual: frame.dims(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/renderer.rs"]
mod tests;
