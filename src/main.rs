//! mta100-footprints: KiCad footprint generator for MTA-100 connector headers
//!
//! Generates one `.kicad_mod` file per part into a `Connector_MTA-100.pretty`
//! library directory.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use mta100_footprints::config;
use mta100_footprints::mta100;

/// KiCad footprint generator for MTA-100 connector headers.
///
/// Writes the built-in part table (or the parts listed in the configuration
/// file) as a `Connector_MTA-100.pretty` footprint library.
#[derive(Parser, Debug)]
#[command(name = "mta100-footprints")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Directory to write the footprint library into
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Do not emit purpose text placeholders
    #[arg(long)]
    no_purpose_labels: bool,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the footprint generator.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let config_path = args.config.as_deref();
    let mut cfg = match config::load_config(config_path) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            if config_path.is_none() {
                if let Some(default_path) = config::default_config_path() {
                    eprintln!("\nConfig read from: {}", default_path.display());
                }
            }
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    // Command line flags win over the configuration file
    if let Some(dir) = args.output_dir {
        cfg.output_dir = Some(dir);
    }
    if args.no_purpose_labels {
        cfg.purpose_labels = false;
    }

    let parts = cfg.parts();
    let options = cfg.generator_options();
    let output_dir = cfg.output_dir();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        parts = parts.len(),
        output = %output_dir.display(),
        purpose_labels = options.purpose_labels,
        "Generating footprints"
    );

    match mta100::generate_all(&parts, &options, &output_dir) {
        Ok(paths) => {
            info!(files = paths.len(), "Done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Footprint generation failed");
            ExitCode::FAILURE
        }
    }
}
