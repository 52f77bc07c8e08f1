//! Integration tests for directory conversion with the real codec

use image::{ImageFormat, Rgb, RgbImage};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;
use towebp::{convert_directory, convert_directory_with_config, ConverterConfig};

fn write_image(path: &Path, format: ImageFormat, size: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let img = RgbImage::from_fn(size, size, |x, y| Rgb([(x * 20) as u8, (y * 20) as u8, 128]));
    img.save_with_format(path, format).unwrap();
}

fn quiet() -> ConverterConfig {
    ConverterConfig::quiet()
}

fn webp_files(root: &Path) -> Vec<String> {
    let mut found: Vec<String> = walkdir::WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "webp"))
        .map(|e| e.path().strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
        .collect();
    found.sort();
    found
}

#[test]
fn test_png_converted_and_text_ignored() {
    let dir = tempdir().unwrap();
    write_image(&dir.path().join("a.png"), ImageFormat::Png, 10);
    fs::write(dir.path().join("notes.txt"), "not an image").unwrap();

    let report = convert_directory_with_config(dir.path(), &quiet()).unwrap();
    assert_eq!(report.converted, 1);

    let webp = dir.path().join("a.webp");
    let bytes = fs::read(&webp).unwrap();
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WEBP");

    let decoded = image::open(&webp).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (10, 10));
    assert!(!dir.path().join("notes.webp").exists());
}

#[test]
fn test_uppercase_jpeg_converted() {
    let dir = tempdir().unwrap();
    write_image(&dir.path().join("PHOTO.JPG"), ImageFormat::Jpeg, 16);

    convert_directory_with_config(dir.path(), &quiet()).unwrap();

    assert!(dir.path().join("PHOTO.webp").exists());
    assert!(dir.path().join("PHOTO.JPG").exists());
}

#[test]
fn test_nested_targets_are_siblings() {
    let dir = tempdir().unwrap();
    write_image(&dir.path().join("level1/level2/level3/deep.jpeg"), ImageFormat::Jpeg, 8);
    write_image(&dir.path().join("level1/mid.png"), ImageFormat::Png, 8);

    convert_directory_with_config(dir.path(), &quiet()).unwrap();

    assert_eq!(
        webp_files(dir.path()),
        vec!["level1/level2/level3/deep.webp", "level1/mid.webp"]
    );
}

#[test]
fn test_second_run_is_idempotent() {
    let dir = tempdir().unwrap();
    write_image(&dir.path().join("a.png"), ImageFormat::Png, 10);
    write_image(&dir.path().join("sub/b.jpg"), ImageFormat::Jpeg, 10);

    let first = convert_directory_with_config(dir.path(), &quiet()).unwrap();
    let files_after_first = webp_files(dir.path());
    let bytes_after_first = fs::read(dir.path().join("a.webp")).unwrap();

    let second = convert_directory_with_config(dir.path(), &quiet()).unwrap();

    assert_eq!(first.converted, 2);
    assert_eq!(second.converted, 0);
    assert_eq!(second.skipped_existing, 2);
    assert_eq!(webp_files(dir.path()), files_after_first);
    assert_eq!(fs::read(dir.path().join("a.webp")).unwrap(), bytes_after_first);
}

#[test]
fn test_existing_webp_left_untouched() {
    let dir = tempdir().unwrap();
    write_image(&dir.path().join("img.png"), ImageFormat::Png, 10);
    fs::write(dir.path().join("img.webp"), b"hand-made").unwrap();

    let report = convert_directory_with_config(dir.path(), &quiet()).unwrap();

    assert_eq!(report.converted, 0);
    assert_eq!(fs::read(dir.path().join("img.webp")).unwrap(), b"hand-made");
}

#[test]
fn test_same_stem_yields_single_target() {
    let dir = tempdir().unwrap();
    write_image(&dir.path().join("x.png"), ImageFormat::Png, 10);
    write_image(&dir.path().join("x.jpg"), ImageFormat::Jpeg, 12);

    let report = convert_directory_with_config(dir.path(), &quiet()).unwrap();

    assert_eq!(webp_files(dir.path()), vec!["x.webp"]);
    assert_eq!(report.converted, 1);
    assert_eq!(report.collisions, 1);

    // x.jpg sorts first, so the target carries its 12x12 dimensions.
    let decoded = image::open(dir.path().join("x.webp")).unwrap();
    assert_eq!(decoded.width(), 12);
}

#[test]
fn test_report_counts_bytes() {
    let dir = tempdir().unwrap();
    write_image(&dir.path().join("a.png"), ImageFormat::Png, 32);

    let report = convert_directory_with_config(dir.path(), &quiet()).unwrap();

    assert_eq!(report.discovered, 1);
    assert_eq!(report.input_bytes, fs::metadata(dir.path().join("a.png")).unwrap().len());
    assert_eq!(report.output_bytes, fs::metadata(dir.path().join("a.webp")).unwrap().len());
}

#[test]
fn test_default_entry_point_converts() {
    let dir = tempdir().unwrap();
    write_image(&dir.path().join("plain.png"), ImageFormat::Png, 4);

    let report = convert_directory(dir.path()).unwrap();

    assert_eq!(report.converted, 1);
    assert!(dir.path().join("plain.webp").exists());
}
