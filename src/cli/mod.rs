//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::conversion::{CollisionPolicy, ConversionReport, ConverterConfig};
use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "towebp")]
#[command(about = "Convert every PNG/JPEG under a directory to a WebP sibling (quality 80)")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Root directory to convert (default: current directory)
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Only convert images directly inside the root directory
    #[arg(long)]
    pub no_recursive: bool,

    /// Continue converting other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,

    /// What to do when two sources share a stem (x.png and x.jpg)
    #[arg(long, value_enum, default_value_t = Collision::Skip)]
    pub on_collision: Collision,

    /// List the images that would be converted without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output a summary when the run finishes
    #[arg(long)]
    pub stats: bool,

    /// Output the run report as JSON
    #[arg(long)]
    pub stats_json: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Collision policies for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    #[value(name = "skip")]
    Skip,
    #[value(name = "error")]
    Error,
}

impl From<Collision> for CollisionPolicy {
    fn from(collision: Collision) -> Self {
        match collision {
            Collision::Skip => CollisionPolicy::Skip,
            Collision::Error => CollisionPolicy::Error,
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub converter_config: ConverterConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let converter_config = Self::create_converter_config(&args)?;

        Ok(Self {
            args,
            converter_config,
        })
    }

    /// Create converter configuration from CLI arguments
    fn create_converter_config(args: &Args) -> ConversionResult<ConverterConfig> {
        let config = ConverterConfig {
            recursive: !args.no_recursive,
            continue_on_error: args.continue_on_error,
            collision: args.on_collision.into(),
            dry_run: args.dry_run,
            quiet: args.quiet,
            verbose: args.verbose,
        };

        config.validate().map_err(|message| {
            ConversionError::conversion(ConversionErrorKind::configuration(message))
        })?;

        Ok(config)
    }

    pub fn root(&self) -> &PathBuf {
        &self.args.root
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats || self.args.stats_json
    }

    /// One-line description of the resolved settings, for verbose mode
    pub fn describe(&self) -> String {
        let config = &self.converter_config;
        format!(
            "root: {}, recursive: {}, on collision: {}, continue on error: {}{}",
            self.args.root.display(),
            config.recursive,
            config.collision.as_str(),
            config.continue_on_error,
            if config.dry_run { ", dry run" } else { "" }
        )
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("✓ {}", message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("⚠ {}", message);
        }
    }

    /// Show a diagnostic line (only in verbose mode)
    pub fn show_verbose(message: &str, verbose: bool) {
        if verbose {
            eprintln!("{}", message);
        }
    }
}

/// Print the end-of-run report requested with --stats / --stats-json
pub fn output_statistics(report: &ConversionReport, config: &CliConfig) -> ConversionResult<()> {
    if config.args.stats_json {
        let json = report
            .to_json()
            .map_err(|e| ConversionError::other(e.into()))?;
        println!("{}", json);
        return Ok(());
    }

    if config.is_quiet() {
        return Ok(());
    }

    println!("\nConversion Statistics:");
    println!("{}", report.summary());
    println!(
        "Input size: {}",
        CliUtils::format_file_size(report.input_bytes)
    );
    println!(
        "Output size: {}",
        CliUtils::format_file_size(report.output_bytes)
    );
    println!(
        "Processing time: {}",
        CliUtils::format_duration(Duration::from_millis(report.processing_time_ms))
    );
    for failure in &report.failures {
        println!("  ✗ {}: {}", failure.path.display(), failure.message);
    }

    Ok(())
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    let message = error.user_message();
    CliUtils::show_error(&message);

    // Provide helpful suggestions
    if let Some(tip) = error.kind().and_then(error_tip) {
        eprintln!("\nTip: {}", tip);
    }
    if matches!(error, ConversionError::Incomplete { .. }) {
        eprintln!("\nRe-running skips every image already converted.");
    }

    // Show usage hint
    eprintln!("\nTry 'towebp --help' for usage information.");
}

/// Suggestion shown under an error, naming the offending path where there is one
fn error_tip(kind: &ConversionErrorKind) -> Option<String> {
    let path = kind.path().map(|p| p.display().to_string());
    match (kind, path) {
        (ConversionErrorKind::Decode { .. } | ConversionErrorKind::Encode { .. }, _) => Some(
            "Use --continue-on-error to convert the remaining images anyway".to_string(),
        ),
        (ConversionErrorKind::Collision { .. }, Some(path)) => Some(format!(
            "Rename {} or use --on-collision skip",
            path
        )),
        (ConversionErrorKind::Traversal { .. }, Some(path)) => Some(format!(
            "Check that {} is readable; images before it were already converted",
            path
        )),
        (ConversionErrorKind::Write { .. } | ConversionErrorKind::Io { .. }, Some(path)) => {
            Some(format!("Check permissions and free space for {}", path))
        }
        _ => None,
    }
}

/// Command execution result
pub type CliResult<T> = Result<T, ConversionError>;
