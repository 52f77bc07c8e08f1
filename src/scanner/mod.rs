//! Source image discovery
//!
//! Walks a root directory, keeps the files the converter can read and maps
//! each of them to its WebP sibling.

pub mod directory;
pub mod filter;
pub mod target;

pub use directory::{find_image_files, image_files};
pub use filter::{is_convertible_image, SOURCE_EXTENSIONS};
pub use target::target_path_for;
