//! Error types and handling infrastructure for image to WebP conversion

use anyhow::Error;
use std::path::{Path, PathBuf};

/// Core error types for the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("Traversal error under {}: {message}", .root.display())]
    Traversal { message: String, root: PathBuf },

    #[error("Decode error in {}: {message}", .path.display())]
    Decode { message: String, path: PathBuf },

    #[error("WebP encode error for {}: {message}", .path.display())]
    Encode { message: String, path: PathBuf },

    #[error("Write error for {}: {message}", .path.display())]
    Write { message: String, path: PathBuf },

    #[error("{} and an earlier source both map to {}", .source_path.display(), .target.display())]
    Collision { source_path: PathBuf, target: PathBuf },

    #[error("Invalid root directory {}: {message}", .path.display())]
    InvalidRoot { message: String, path: PathBuf },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },
}

impl ConversionErrorKind {
    pub fn traversal(message: String, root: &Path) -> Self {
        Self::Traversal {
            message,
            root: root.to_path_buf(),
        }
    }

    pub fn decode(message: String, path: &Path) -> Self {
        Self::Decode {
            message,
            path: path.to_path_buf(),
        }
    }

    pub fn encode(message: String, path: &Path) -> Self {
        Self::Encode {
            message,
            path: path.to_path_buf(),
        }
    }

    pub fn write(message: String, path: &Path) -> Self {
        Self::Write {
            message,
            path: path.to_path_buf(),
        }
    }

    pub fn invalid_root(message: String, path: &Path) -> Self {
        Self::InvalidRoot {
            message,
            path: path.to_path_buf(),
        }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    /// Path of the file the error is about, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Traversal { root, .. } => Some(root),
            Self::Decode { path, .. }
            | Self::Encode { path, .. }
            | Self::Write { path, .. }
            | Self::InvalidRoot { path, .. } => Some(path),
            Self::Collision { source_path, .. } => Some(source_path),
            Self::Configuration { .. } => None,
            Self::Io { path, .. } => path.as_deref(),
        }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("{kind}")]
    Conversion {
        kind: ConversionErrorKind,
        source: Option<anyhow::Error>,
    },

    #[error("{failed} of {total} files failed to convert")]
    Incomplete { failed: usize, total: usize },

    #[error(transparent)]
    Other(#[from] Error),
}

impl ConversionError {
    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind, source: None }
    }

    pub fn conversion_with_source(kind: ConversionErrorKind, source: anyhow::Error) -> Self {
        Self::Conversion {
            kind,
            source: Some(source),
        }
    }

    pub fn other(error: Error) -> Self {
        Self::Other(error)
    }

    /// The structured kind, when this error came from the converter itself
    pub fn kind(&self) -> Option<&ConversionErrorKind> {
        match self {
            Self::Conversion { kind, .. } => Some(kind),
            _ => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Conversion { kind, .. } => match kind {
                ConversionErrorKind::Decode { path, .. } => {
                    format!(
                        "Could not decode {} as an image: it may be corrupt or not really a PNG/JPEG",
                        path.display()
                    )
                }
                ConversionErrorKind::Write { path, message } => {
                    format!("Could not write {}: {}", path.display(), message)
                }
                ConversionErrorKind::Collision { source_path, target } => {
                    format!(
                        "{} was not converted: {} was already produced from another file with the same stem",
                        source_path.display(),
                        target.display()
                    )
                }
                ConversionErrorKind::InvalidRoot { path, message } => {
                    format!("Cannot convert {}: {}", path.display(), message)
                }
                _ => self.to_string(),
            },
            Self::Incomplete { .. } => self.to_string(),
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

impl From<walkdir::Error> for ConversionError {
    fn from(err: walkdir::Error) -> Self {
        let root = err.path().map(Path::to_path_buf).unwrap_or_default();
        let message = err.to_string();
        Self::conversion_with_source(
            ConversionErrorKind::Traversal { message, root },
            err.into(),
        )
    }
}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
