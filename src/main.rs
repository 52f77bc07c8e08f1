use clap::Parser;

use towebp::cli::{self, Args, CliConfig, CliResult, CliUtils};
use towebp::{ConversionError, Converter};

fn main() {
    if let Err(e) = run(Args::parse()) {
        cli::handle_error(&e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> CliResult<()> {
    let config = CliConfig::from_args(args)?;

    CliUtils::show_verbose(&format!("Settings: {}", config.describe()), config.is_verbose());

    let mut converter = Converter::new(config.converter_config.clone());
    let report = converter.run(config.root())?;

    if report.collisions > 0 && !config.is_verbose() {
        CliUtils::show_warning(
            &format!(
                "{} images shared a stem with an image converted earlier in this run and were skipped (use --verbose to list them)",
                report.collisions
            ),
            config.is_quiet(),
        );
    }

    if config.converter_config.dry_run {
        CliUtils::show_success(
            &format!("Dry run: {} images would be converted", report.planned),
            config.is_quiet(),
        );
    }

    if config.want_stats() {
        cli::output_statistics(&report, &config)?;
    }

    if !report.is_success() {
        return Err(ConversionError::Incomplete {
            failed: report.failed(),
            total: report.discovered,
        });
    }

    Ok(())
}
