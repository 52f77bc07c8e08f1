use std::path::{Path, PathBuf};

/// Extension written for converted images
pub const TARGET_EXTENSION: &str = "webp";

/// Map a source image to its WebP sibling: same directory, same stem.
pub fn target_path_for(source: &Path) -> PathBuf {
    source.with_extension(TARGET_EXTENSION)
}
