//! Pixel-level image transforms. Every function reads its input and returns a new [`Image`].
//!
//! [`Image`]: crate::Image

/// Luminance projection.
pub mod color;
/// Flips (pure index remapping).
pub mod geometry;
/// Nearest-neighbor resampling.
pub mod resample;
