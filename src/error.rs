use thiserror::Error;

/// Errors raised by the drawing surface and its snapshots
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The surface has no raster to read from yet
    #[error("drawing surface is not attached")]
    NotAttached,

    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] image::ImageError),

    #[error("snapshot payload is not a PNG data URL")]
    InvalidDataUrl,

    #[error("snapshot payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Errors raised while loading a character listing
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("failed to read character listing: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed character listing: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type SurfaceResult<T> = Result<T, SurfaceError>;
