//! Frame-by-frame morph from a source image into a target image.
//!
//! [`morph`] validates its inputs, resizes the target to the source's dimensions once, and
//! returns a [`Morph`] iterator. Each call to `next` blends exactly one frame; nothing is
//! precomputed or buffered. The iterator is consumed by value, so a morph runs at most once.

use std::iter::FusedIterator;

use crate::effects::blend::blend_same_size;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{PixmorphError, PixmorphResult};
use crate::raster::buffer::Image;
use crate::transform::resample::resize;

/// Source weight for frame `index` of a `steps`-frame morph: `(steps - index) / steps`.
///
/// Frame 0 is pure source (`1.0`). The last frame is `1 / steps`, so the sequence stops one
/// step short of the pure target. Indices at or past `steps`, and `steps == 0`, give `0.0`.
#[inline]
pub fn step_alpha(steps: u32, index: u32) -> f64 {
    if steps == 0 {
        return 0.0;
    }
    f64::from(steps.saturating_sub(index)) / f64::from(steps)
}

/// Lazy, finite sequence of morph frames. See [`morph`].
///
/// Each frame is `blend_images(source, adjusted_target, step_alpha(steps, i))`.
///
/// [`blend_images`]: crate::blend_images
#[derive(Debug)]
pub struct Morph<'a> {
    source: &'a Image,
    target: Image,
    steps: u32,
    next: u32,
}

/// Start a `steps`-frame morph from `source` into `target`.
///
/// `target` may have any dimensions; it is resampled to the source's size before the first
/// frame. Fails with [`PixmorphError::InvalidStepCount`] when `steps == 0`.
#[tracing::instrument(skip(source, target), fields(source = ?source.dims(), target = ?target.dims()))]
pub fn morph<'a>(source: &'a Image, target: &Image, steps: u32) -> PixmorphResult<Morph<'a>> {
    if steps == 0 {
        return Err(PixmorphError::InvalidStepCount(steps));
    }
    let target = resize(target, source.width(), source.height())?;
    Ok(Morph {
        source,
        target,
        steps,
        next: 0,
    })
}

impl<'a> Morph<'a> {
    /// Total number of frames this morph produces.
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// The target after resampling to the source's dimensions.
    pub fn adjusted_target(&self) -> &Image {
        &self.target
    }

    /// Index of the frame the next call to `next` yields, if any.
    pub fn next_index(&self) -> Option<FrameIndex> {
        (self.next < self.steps).then_some(FrameIndex(u64::from(self.next)))
    }
}

impl Iterator for Morph<'_> {
    type Item = Image;

    fn next(&mut self) -> Option<Image> {
        if self.next >= self.steps {
            return None;
        }
        let index = self.next;
        self.next += 1;

        let alpha = step_alpha(self.steps, index);
        tracing::debug!(index, alpha, "blend morph frame");
        // `morph` resized the target to the source's dimensions.
        Some(blend_same_size(self.source, &self.target, alpha))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.steps - self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Morph<'_> {}

impl FusedIterator for Morph<'_> {}

#[cfg(test)]
#[path = "../../tests/unit/morph/engine.rs"]
mod tests;
