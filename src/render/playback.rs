//! Drivers that feed images into a [`Renderer`] with the configured pacing.

use crate::foundation::error::PixmorphResult;
use crate::morph::engine::morph;
use crate::raster::buffer::Image;
use crate::render::renderer::Renderer;
use crate::render::settings::PlaybackSettings;
use crate::transform::resample::resize;

/// Animate a `steps`-frame morph from `source` into `target`.
///
/// The surface is sized to `source`. Each frame is blended, rendered, and followed by a
/// `frame_pause_ms` pause before the next one is computed, so only one frame is alive at a
/// time. Returns the number of frames rendered.
#[tracing::instrument(skip(source, target, renderer, settings))]
pub fn play_morph(
    source: &Image,
    target: &Image,
    steps: u32,
    renderer: &mut dyn Renderer,
    settings: &PlaybackSettings,
) -> PixmorphResult<u32> {
    settings.validate()?;
    let frames = morph(source, target, steps)?;

    renderer.prepare_surface(source.width(), source.height())?;
    let mut rendered = 0u32;
    for frame in frames {
        renderer.render_frame(&frame)?;
        renderer.pause(settings.frame_pause())?;
        rendered += 1;
    }
    renderer.finish()?;

    tracing::info!(frames = rendered, "morph complete");
    Ok(rendered)
}

/// Show a single image: size the surface to it and render it once.
pub fn show(image: &Image, renderer: &mut dyn Renderer) -> PixmorphResult<()> {
    renderer.prepare_surface(image.width(), image.height())?;
    renderer.render_frame(image)
}

/// Resize `input` and present before/after: show the input, pause `compare_pause_ms`, then
/// show the output on a surface of the new size. Returns the resized image.
#[tracing::instrument(skip(input, renderer, settings), fields(input = ?input.dims()))]
pub fn show_scaled(
    input: &Image,
    width: u32,
    height: u32,
    renderer: &mut dyn Renderer,
    settings: &PlaybackSettings,
) -> PixmorphResult<Image> {
    settings.validate()?;
    let output = resize(input, width, height)?;

    show(input, renderer)?;
    renderer.pause(settings.compare_pause())?;
    show(&output, renderer)?;
    renderer.finish()?;

    Ok(output)
}

#[cfg(test)]
#[path = "../../tests/unit/render/playback.rs"]
mod tests;
