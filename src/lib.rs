//! PNG/JPEG to WebP directory converter
//!
//! Walks a directory tree and writes a quality-80 WebP sibling next to every
//! PNG or JPEG image that does not have one yet.

pub mod cli;
pub mod codec;
pub mod conversion;
pub mod error;
pub mod scanner;

use std::path::Path;

// Re-export commonly used types
pub use codec::{ImageCodec, WebpCodec};
pub use conversion::{
    CollisionPolicy, ConversionReport, Converter, ConverterConfig, FileOutcome, WEBP_QUALITY,
};
pub use error::{ConversionError, ConversionErrorKind, ConversionResult};

/// Convert every image under `root` with the default configuration
pub fn convert_directory(root: impl AsRef<Path>) -> ConversionResult<ConversionReport> {
    convert_directory_with_config(root, &ConverterConfig::default())
}

/// Convert every image under `root` with a custom configuration
pub fn convert_directory_with_config(
    root: impl AsRef<Path>,
    config: &ConverterConfig,
) -> ConversionResult<ConversionReport> {
    Converter::new(config.clone()).run(root.as_ref())
}
