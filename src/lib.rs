//! pixmorph applies pixel-level transforms to RGB images and morphs one image into another,
//! frame by frame.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: PPM text (or any format the `image` crate reads) -> [`Image`]
//! 2. **Transform**: [`flip_horizontal`], [`flip_vertical`], [`grayscale`], [`resize`],
//!    [`blend_images`]; each returns a new [`Image`] and leaves its input untouched
//! 3. **Morph**: [`morph`] resizes the target to the source's size once, then lazily yields
//!    `steps` blended frames
//! 4. **Render**: [`play_morph`] / [`show_scaled`] push frames into a [`Renderer`] with pauses
//!    between them
//!
//! Everything runs on the calling thread.
#![forbid(unsafe_code)]

mod codec;
mod effects;
mod foundation;
mod morph;
mod raster;

/// Output renderers, playback settings, and playback drivers.
pub mod render;
/// Flip, grayscale, and resize.
pub mod transform;

pub use codec::file::{ensure_parent_dir, load_image, save_image};
pub use codec::ppm::{decode_ppm, encode_ppm, read_ppm, write_ppm};
pub use effects::blend::{blend, blend_images};
pub use foundation::core::{FrameIndex, Rgb8};
pub use foundation::error::{PixmorphError, PixmorphResult};
pub use morph::engine::{Morph, morph, step_alpha};
pub use raster::buffer::Image;
pub use render::ffmpeg::{FfmpegConfig, FfmpegRenderer, is_ffmpeg_on_path};
pub use render::playback::{play_morph, show, show_scaled};
pub use render::png_sequence::PngSequenceRenderer;
pub use render::renderer::{InMemoryRenderer, RenderEvent, Renderer, TextRenderer};
pub use render::settings::PlaybackSettings;
pub use transform::color::{grayscale, luminance};
pub use transform::geometry::{flip_horizontal, flip_vertical};
pub use transform::resample::resize;
