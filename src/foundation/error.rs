/// Crate-wide result alias.
pub type LissajousResult<T> = Result<T, LissajousError>;

/// Error type for curve sampling, rendering, staging and encoding.
#[derive(thiserror::Error, Debug)]
pub enum LissajousError {
    /// Invalid parameters or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rasterization failure.
    #[error("render error: {0}")]
    Render(String),

    /// Frame staging or animation encoding failure.
    #[error("encode error: {0}")]
    Encode(String),

    /// Filesystem failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Image codec failure (PNG staging, GIF encoding).
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Any other error, with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LissajousError {
    /// Build a [`LissajousError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LissajousError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`LissajousError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
