use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::ConversionResult;
use crate::scanner::filter::is_convertible_image;

/// Lazily walk `dir` and yield convertible images as they are reached. If recursive
/// is false, only the directory's own entries are visited.
///
/// Entries are yielded sorted by file name within each directory, so two sources
/// sharing a stem are always visited in the same order. A directory that cannot be
/// read yields an error at its place in the walk, after everything before it.
pub fn image_files(dir: &Path, recursive: bool) -> impl Iterator<Item = ConversionResult<PathBuf>> {
    let mut walker = WalkDir::new(dir).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    walker.into_iter().filter_map(|entry| match entry {
        Ok(entry) if is_convertible_image(entry.path()) => Some(Ok(entry.into_path())),
        Ok(_) => None,
        Err(e) => Some(Err(e.into())),
    })
}

/// Collect every convertible image under `dir`, failing on the first traversal error.
pub fn find_image_files(dir: &Path, recursive: bool) -> ConversionResult<Vec<PathBuf>> {
    image_files(dir, recursive).collect()
}
