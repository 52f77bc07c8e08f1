//! Image to WebP conversion module
//!
//! This module contains the converter engine, its configuration, and run statistics.

pub mod config;
pub mod engine;
pub mod stats;

pub use config::{CollisionPolicy, ConverterConfig, WEBP_QUALITY};
pub use engine::{Converter, FileOutcome};
pub use stats::{ConversionReport, FailedFile};

pub use crate::error::ConversionResult;
