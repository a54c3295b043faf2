//! Error types for the deck engine

use thiserror::Error;

/// Result type alias for deck operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while rendering or exporting slides
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A slide index outside the catalog, or a scene that could not be built
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Rasterization or PNG encoding of an export surface failed
    #[error("Capture failed: {0}")]
    CaptureError(String),

    /// Fetching font assets from the font service failed
    #[error("Font service error: {0}")]
    FontError(String),

    /// Delivering a finished export to its sink failed
    #[error("Download delivery failed: {0}")]
    DeliveryError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::DeliveryError(err.to_string())
    }
}
