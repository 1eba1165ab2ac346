/// Convenience result type used across pixmorph.
pub type PixmorphResult<T> = Result<T, PixmorphError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum PixmorphError {
    /// Malformed or truncated image input.
    #[error("decode error: {0}")]
    Decode(String),

    /// Two images that must share dimensions do not.
    #[error("dimension mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    DimensionMismatch {
        /// `(width, height)` required by the operation.
        expected: (u32, u32),
        /// `(width, height)` actually supplied.
        actual: (u32, u32),
    },

    /// A morph was requested with zero steps.
    #[error("invalid step count: {0} (must be >= 1)")]
    InvalidStepCount(u32),

    /// A resize target has a zero width or height.
    #[error("invalid target dimension: {width}x{height} (both must be >= 1)")]
    InvalidTargetDimension {
        /// Requested output width.
        width: u32,
        /// Requested output height.
        height: u32,
    },

    /// Invalid user-provided data or API misuse.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors raised by a renderer or encoder.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PixmorphError {
    /// Build a [`PixmorphError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`PixmorphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PixmorphError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
