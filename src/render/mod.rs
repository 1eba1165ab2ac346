//! Frame output: the [`Renderer`](crate::Renderer) contract, concrete renderers, and the
//! playback drivers that pace frames into them.

/// `ffmpeg`-based MP4 renderer.
pub mod ffmpeg;
/// Morph animation and one-shot display drivers.
pub mod playback;
/// Directory-of-PNGs renderer.
pub mod png_sequence;
/// Renderer trait plus in-memory and text renderers.
pub mod renderer;
/// Pause configuration.
pub mod settings;
