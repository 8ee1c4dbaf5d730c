use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use price_report_core::{expand_home, Ingestor, ReportConfig, Result, Summary};

mod args;
use args::{Cli, OutputFormat};

const CONFIG_ENV: &str = "PRICE_REPORT_CONFIG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let input = expand_home(&cli.input)?;
    debug!(input = %input.display(), format = ?cli.format, "building report");

    let inventory = Ingestor::new(&config).ingest_file(&input)?;
    let summary = Summary::build(&inventory);

    match cli.format {
        OutputFormat::Text => print!("{}", summary.render()),
        OutputFormat::Json => {
            let stdout = io::stdout().lock();
            serde_json::to_writer_pretty(stdout, &summary).map_err(io::Error::from)?;
            println!();
        }
    }

    Ok(())
}

/// Priority: CLI options > config file > defaults
fn load_config(cli: &Cli) -> Result<ReportConfig> {
    let path = resolve_config_path(cli.config.clone());
    let mut config = ReportConfig::load_optional(path.as_deref())?;

    if let Some(min_quantity) = cli.min_quantity {
        config.filter.min_quantity = min_quantity;
    }

    Ok(config)
}

fn resolve_config_path(cli_config: Option<PathBuf>) -> Option<PathBuf> {
    if cli_config.is_some() {
        return cli_config;
    }

    std::env::var(CONFIG_ENV).ok().map(PathBuf::from)
}

/// RUST_LOG wins; otherwise -v/-q pick the level. Logs go to stderr so the
/// report on stdout stays clean.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
