//! Daycount CLI - Year fractions and business days from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Year fraction under one convention
//! daycount year-fraction 2007-12-28 2008-02-29 --convention ActualActualAFB
//!
//! # Year fraction under every convention
//! daycount year-fraction 2018-01-01 2018-07-31 --all
//!
//! # Business days, weekends excluded
//! daycount business-days 2020-01-01 2020-01-10 --list
//!
//! # Persist a default convention
//! daycount config set default_convention ThirtyThreeSixtyUS
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::config::{default_config_path, Config, Settings};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.quiet);
    output::set_quiet(cli.quiet);

    let config_path = match cli.config_file {
        Some(path) => path,
        None => default_config_path()?,
    };
    // An unreadable file must not block `config reset --all`
    let settings = match Config::load(&config_path) {
        Ok(config) => config.settings(),
        Err(err) => {
            tracing::warn!(path = %config_path.display(), %err, "using default configuration");
            Settings::default()
        }
    };
    tracing::debug!(path = %config_path.display(), ?settings, "loaded configuration");

    let format = cli.format.unwrap_or(settings.format);

    match cli.command {
        Commands::YearFraction(args) => commands::year_fraction::execute(args, format, &settings)?,
        Commands::BusinessDays(args) => commands::business_days::execute(args, format)?,
        Commands::Conventions => commands::conventions::execute(format)?,
        Commands::Config(args) => commands::config::execute(args, format, &config_path)?,
    }

    Ok(())
}

/// Installs the stderr log subscriber; `RUST_LOG` wins over the default level.
fn init_tracing(quiet: bool) {
    let default_level = if quiet { "error" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
