//! Error types for texture input, image output and parameter validation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all rendering operations
///
/// Only the outer surfaces produce errors. Degenerate vectors, boundary exits
/// and exhausted step counts inside the convolution are resolved in place.
#[derive(Debug)]
pub enum LicError {
    /// Requested input texture does not exist
    TextureNotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// Failed to decode the input texture
    ImageLoad {
        /// Texture file that failed to decode
        path: PathBuf,
        /// Decoder error
        source: image::ImageError,
    },

    /// Failed to encode or save a rendered raster
    ImageExport {
        /// Destination of the raster
        path: PathBuf,
        /// Encoder error
        source: image::ImageError,
    },

    /// Directory creation or another I/O step failed
    FileSystem {
        /// File or directory being touched
        path: PathBuf,
        /// Verb phrase for the failed step, e.g. "create directory"
        operation: &'static str,
        /// I/O error reported by the OS
        source: std::io::Error,
    },

    /// Render parameter validation failed
    InvalidParameter {
        /// Parameter name as used in `RenderParams`
        parameter: &'static str,
        /// Rejected value, rendered as text
        value: String,
        /// Constraint the value violates
        reason: String,
    },

    /// Raw buffer does not match the declared raster dimensions
    DimensionMismatch {
        /// Expected number of samples (width * height)
        expected: usize,
        /// Number of samples actually supplied
        actual: usize,
    },
}

impl fmt::Display for LicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextureNotFound { path } => {
                write!(f, "Input texture '{}' not found", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Cannot decode texture '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(f, "Cannot write raster '{}': {source}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => write!(f, "Could not {operation} '{}': {source}", path.display()),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => write!(f, "Rejected {parameter} = {value} ({reason})"),
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "Raster buffer holds {actual} samples but dimensions require {expected}"
                )
            }
        }
    }
}

impl std::error::Error for LicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::TextureNotFound { .. }
            | Self::InvalidParameter { .. }
            | Self::DimensionMismatch { .. } => None,
        }
    }
}

/// Convenience type alias for rendering results
pub type Result<T> = std::result::Result<T, LicError>;

impl From<std::io::Error> for LicError {
    fn from(source: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::new(),
            operation: "complete I/O on",
            source,
        }
    }
}

/// Shorthand for [`LicError::InvalidParameter`]
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> LicError {
    LicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
