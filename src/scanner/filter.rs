use std::path::Path;

/// File name suffixes accepted as conversion sources, lower-case
pub const SOURCE_EXTENSIONS: [&str; 3] = [".png", ".jpg", ".jpeg"];

/// Return true if the path is a regular file whose name ends in a source extension,
/// ignoring case
pub fn is_convertible_image(path: &Path) -> bool {
    path.is_file() && has_source_extension(path)
}

/// Name-only half of [`is_convertible_image`]; does not touch the filesystem
pub fn has_source_extension(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .is_some_and(|name| SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext)))
}
