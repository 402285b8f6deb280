//! Conventions command implementation.

use anyhow::Result;
use daycount_core::Convention;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::output::{print_header, print_output};

/// A supported convention and its integer code.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct ConventionRow {
    #[tabled(rename = "Code")]
    pub code: i64,
    #[tabled(rename = "Name")]
    pub name: &'static str,
}

/// Execute the conventions command.
pub fn execute(format: OutputFormat) -> Result<()> {
    let rows: Vec<ConventionRow> = Convention::all()
        .iter()
        .map(|convention| ConventionRow {
            code: convention.code(),
            name: convention.name(),
        })
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Day Count Conventions");
            print_output(&rows, format)?;
        }
        OutputFormat::Json | OutputFormat::Csv => {
            print_output(&rows, format)?;
        }
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{}", row.name);
            }
        }
    }

    Ok(())
}
