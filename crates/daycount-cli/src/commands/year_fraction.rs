//! Year fraction command implementation.

use anyhow::Result;
use clap::Args;
use daycount_core::prelude::*;
use serde::Serialize;
use tabled::Tabled;

use super::config::Settings;
use super::parse_date;
use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{format_fraction, print_header, print_output, print_single};

/// Arguments for the year-fraction command.
#[derive(Args, Debug)]
pub struct YearFractionArgs {
    /// Start date (YYYY-MM-DD)
    pub from: String,

    /// End date (YYYY-MM-DD)
    pub to: String,

    /// Day count convention, by canonical name (defaults to the configured one)
    #[arg(short, long, conflicts_with = "all")]
    pub convention: Option<String>,

    /// Compute under every supported convention
    #[arg(short, long)]
    pub all: bool,
}

/// One convention's result for a date pair.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct YearFractionRow {
    #[tabled(rename = "Convention")]
    pub convention: Convention,
    #[tabled(rename = "Code")]
    pub code: i64,
    #[tabled(skip)]
    pub from: Date,
    #[tabled(skip)]
    pub to: Date,
    #[tabled(rename = "Days")]
    pub days: i64,
    #[tabled(skip)]
    pub year_fraction: f64,
    #[serde(skip)]
    #[tabled(rename = "Year Fraction")]
    pub formatted: String,
}

impl YearFractionRow {
    fn compute(convention: Convention, from: Date, to: Date, precision: usize) -> Self {
        let year_fraction = convention.year_fraction(from, to);
        Self {
            convention,
            code: convention.code(),
            from,
            to,
            days: convention.implementation().day_count(from, to),
            year_fraction,
            formatted: format_fraction(year_fraction, precision),
        }
    }
}

/// Execute the year-fraction command.
pub fn execute(args: YearFractionArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let from = parse_date(&args.from)?;
    let to = parse_date(&args.to)?;

    let conventions: Vec<Convention> = if args.all {
        Convention::all().to_vec()
    } else {
        let convention = match args.convention.as_deref() {
            Some(name) => name.parse::<Convention>().map_err(CliError::from)?,
            None => settings.convention,
        };
        vec![convention]
    };

    tracing::debug!(%from, %to, count = conventions.len(), "computing year fractions");

    let rows: Vec<YearFractionRow> = conventions
        .into_iter()
        .map(|convention| YearFractionRow::compute(convention, from, to, settings.precision))
        .collect();

    output_results(&rows, args.all, format)
}

fn output_results(rows: &[YearFractionRow], all: bool, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            if let Some(first) = rows.first() {
                print_header(&format!("Year Fraction: {} to {}", first.from, first.to));
            }
            print_output(rows, format)?;
        }
        OutputFormat::Json => match rows {
            [single] if !all => print_single(single)?,
            _ => print_output(rows, format)?,
        },
        OutputFormat::Csv => {
            print_output(rows, format)?;
        }
        OutputFormat::Minimal => {
            for row in rows {
                if all {
                    println!("{} {}", row.convention, row.formatted);
                } else {
                    println!("{}", row.formatted);
                }
            }
        }
    }

    Ok(())
}
