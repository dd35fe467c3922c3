use std::path::PathBuf;
use thiserror::Error;

/// Structured error types for the capture pipeline.
///
/// Each variant carries the path (or option name) it failed on so the
/// top-level error message can point the operator at the offending input
/// without having to parse strings.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Validation error: {field} {reason}")]
    Validation { field: String, reason: String },

    #[error("Not found: the file at the path '{}' does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("Filesystem error: {operation} failed for {path:?}")]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Decode error: could not decode image '{}'", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Encode error: could not write PNG to '{}'", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Processing error: {message}")]
    Processing { message: String },
}

pub type Result<T> = std::result::Result<T, CaptureError>;

impl CaptureError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Map an I/O error on `path`, keeping "not found" distinct from
    /// every other filesystem failure.
    pub fn from_io(path: impl Into<PathBuf>, operation: &str, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::FileSystem {
                path,
                operation: operation.to_string(),
                source,
            },
        }
    }
}

/// Convert anyhow errors from the pixel primitives into processing errors.
///
/// The `imageops` helpers report shape mismatches through `anyhow`; they
/// carry no path, so only the message survives the boundary.
impl From<anyhow::Error> for CaptureError {
    fn from(err: anyhow::Error) -> Self {
        Self::Processing {
            message: format!("{err:#}"),
        }
    }
}
