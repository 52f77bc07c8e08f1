//! Core conversion engine for image to WebP transformation

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::codec::{CodecError, ImageCodec, WebpCodec};
use crate::conversion::config::{CollisionPolicy, ConverterConfig, WEBP_QUALITY};
use crate::conversion::stats::ConversionReport;
use crate::conversion::ConversionResult;
use crate::error::{ConversionError, ConversionErrorKind};
use crate::scanner::{image_files, target_path_for};

/// What happened to a single source image
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// Decoded, encoded and written to `target`
    Converted {
        source: PathBuf,
        target: PathBuf,
        input_bytes: u64,
        output_bytes: u64,
    },
    /// `target` was already on disk before this run touched it
    SkippedExisting { source: PathBuf, target: PathBuf },
    /// `target` was written earlier in this run from a different source
    SkippedCollision { source: PathBuf, target: PathBuf },
    /// Dry run: would have been converted
    Planned { source: PathBuf, target: PathBuf },
}

/// Main conversion engine
pub struct Converter<C = WebpCodec> {
    codec: C,
    config: ConverterConfig,
    /// Targets produced (or planned) during the current run
    produced: HashSet<PathBuf>,
}

impl Converter<WebpCodec> {
    /// Create a converter backed by the `image`/libwebp codec
    pub fn new(config: ConverterConfig) -> Self {
        Self::with_codec(WebpCodec::new(), config)
    }
}

impl<C: ImageCodec> Converter<C> {
    /// Create a converter around any codec implementation
    pub fn with_codec(codec: C, config: ConverterConfig) -> Self {
        Self {
            codec,
            config,
            produced: HashSet::new(),
        }
    }

    /// Convert every eligible image under `root`.
    ///
    /// Aborts on the first failing file unless `continue_on_error` is set, in which
    /// case failures are collected in the returned report.
    pub fn run(&mut self, root: &Path) -> ConversionResult<ConversionReport> {
        if !root.is_dir() {
            let message = if root.exists() {
                "not a directory"
            } else {
                "no such directory"
            };
            return Err(ConversionError::conversion(ConversionErrorKind::invalid_root(
                message.to_string(),
                root,
            )));
        }

        let start = Instant::now();
        self.produced.clear();

        let mut report = ConversionReport::new(root);

        if self.config.verbose {
            eprintln!("Scanning {} for images", root.display());
        }

        // Convert as the walk goes, so a traversal error leaves earlier files done.
        for source in image_files(root, self.config.recursive) {
            let source = source?;
            report.discovered += 1;

            match self.convert_file(&source) {
                Ok(outcome) => report.record(&outcome),
                Err(e) => {
                    if !self.config.continue_on_error {
                        return Err(e);
                    }
                    eprintln!("✗ Error converting {}: {}", source.display(), e.user_message());
                    report.record_failure(&source, &e);
                }
            }
        }

        report.finish(start.elapsed());
        Ok(report)
    }

    /// Convert one source image into its `.webp` sibling, unless that sibling exists.
    pub fn convert_file(&mut self, source: &Path) -> ConversionResult<FileOutcome> {
        let target = target_path_for(source);

        if self.produced.contains(&target) {
            return match self.config.collision {
                CollisionPolicy::Skip => {
                    if self.config.verbose {
                        eprintln!(
                            "⚠ {} maps to {}, already produced in this run; skipping",
                            source.display(),
                            target.display()
                        );
                    }
                    Ok(FileOutcome::SkippedCollision {
                        source: source.to_path_buf(),
                        target,
                    })
                }
                CollisionPolicy::Error => Err(ConversionError::conversion(
                    ConversionErrorKind::Collision {
                        source_path: source.to_path_buf(),
                        target,
                    },
                )),
            };
        }

        if target.exists() {
            if self.config.verbose {
                eprintln!("Skipping {}: {} exists", source.display(), target.display());
            }
            return Ok(FileOutcome::SkippedExisting {
                source: source.to_path_buf(),
                target,
            });
        }

        if self.config.dry_run {
            if !self.config.quiet {
                println!("Would convert: {}", source.display());
            }
            self.produced.insert(target.clone());
            return Ok(FileOutcome::Planned {
                source: source.to_path_buf(),
                target,
            });
        }

        if !self.config.quiet {
            println!("Converting: {}", source.display());
        }

        let input_bytes = fs::metadata(source)
            .map_err(|e| {
                ConversionError::conversion_with_source(
                    ConversionErrorKind::io(e.to_string(), Some(source.to_path_buf())),
                    e.into(),
                )
            })?
            .len();
        let image = self
            .codec
            .decode(source)
            .map_err(|e| codec_error(source, e))?;
        let encoded = self
            .codec
            .encode_webp(&image, WEBP_QUALITY)
            .map_err(|e| codec_error(source, e))?;

        match write_new_file(&target, &encoded) {
            Ok(()) => {}
            // Another process created the target between the check and the open.
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Ok(FileOutcome::SkippedExisting {
                    source: source.to_path_buf(),
                    target,
                });
            }
            Err(e) => {
                return Err(ConversionError::conversion_with_source(
                    ConversionErrorKind::write(e.to_string(), &target),
                    e.into(),
                ));
            }
        }

        self.produced.insert(target.clone());
        Ok(FileOutcome::Converted {
            source: source.to_path_buf(),
            target,
            input_bytes,
            output_bytes: encoded.len() as u64,
        })
    }
}

/// Create `path` (failing if it exists) and write `bytes` to it. A failed write
/// removes the partial file.
fn write_new_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    if let Err(e) = file.write_all(bytes).and_then(|_| file.sync_all()) {
        drop(file);
        let _ = fs::remove_file(path);
        return Err(e);
    }
    Ok(())
}

fn codec_error(source: &Path, err: CodecError) -> ConversionError {
    let kind = match &err {
        CodecError::Read(io) => ConversionErrorKind::io(io.to_string(), Some(source.to_path_buf())),
        CodecError::Decode(e) => ConversionErrorKind::decode(e.to_string(), source),
        CodecError::Encode(message) => ConversionErrorKind::encode(message.clone(), source),
    };
    ConversionError::conversion_with_source(kind, err.into())
}
