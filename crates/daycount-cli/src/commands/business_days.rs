//! Business days command implementation.

use anyhow::Result;
use clap::Args;
use daycount_core::calendars::{business_days_between_with, business_times_with, whole_days_between};
use daycount_core::prelude::*;
use serde::Serialize;
use tabled::Tabled;

use super::parse_date;
use crate::cli::OutputFormat;
use crate::output::{print_header, print_output, print_single, KeyValue};

/// Arguments for the business-days command.
#[derive(Args, Debug)]
pub struct BusinessDaysArgs {
    /// Start date (YYYY-MM-DD)
    pub from: String,

    /// End date (YYYY-MM-DD)
    pub to: String,

    /// Also list every business day in the range
    #[arg(short, long)]
    pub list: bool,
}

/// A single enumerated business day.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct BusinessDayRow {
    #[tabled(rename = "Date")]
    pub date: Date,
    #[tabled(rename = "Weekday")]
    pub weekday: String,
}

/// Summary of a business-day query.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessDaysSummary {
    pub from: Date,
    pub to: Date,
    pub calendar: &'static str,
    pub calendar_days: i64,
    pub business_days: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<Vec<Date>>,
}

impl BusinessDaysSummary {
    fn compute<C: Calendar>(from: Date, to: Date, calendar: &C, list: bool) -> Self {
        Self {
            from,
            to,
            calendar: calendar.name(),
            calendar_days: whole_days_between(from, to),
            business_days: business_days_between_with(from, to, calendar),
            dates: list.then(|| business_times_with(from, to, calendar)),
        }
    }

    fn rows(&self) -> Vec<BusinessDayRow> {
        self.dates
            .iter()
            .flatten()
            .map(|date| BusinessDayRow {
                date: *date,
                weekday: date.weekday().to_string(),
            })
            .collect()
    }
}

/// Execute the business-days command.
pub fn execute(args: BusinessDaysArgs, format: OutputFormat) -> Result<()> {
    let from = parse_date(&args.from)?;
    let to = parse_date(&args.to)?;

    let summary = BusinessDaysSummary::compute(from, to, &WeekendCalendar, args.list);
    tracing::debug!(%from, %to, business_days = summary.business_days, "counted business days");

    output_results(&summary, format)
}

fn output_results(summary: &BusinessDaysSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            print_header(&format!("Business Days: {} to {}", summary.from, summary.to));
            let results = vec![
                KeyValue::new("Calendar", summary.calendar),
                KeyValue::new("Calendar Days", summary.calendar_days.to_string()),
                KeyValue::new("Business Days", summary.business_days.to_string()),
            ];
            print_output(&results, format)?;

            if summary.dates.is_some() {
                print_header("Dates");
                print_output(&summary.rows(), format)?;
            }
        }
        OutputFormat::Json => {
            print_single(summary)?;
        }
        OutputFormat::Csv => {
            if summary.dates.is_some() {
                print_output(&summary.rows(), format)?;
            } else {
                let results = vec![
                    KeyValue::new("calendar", summary.calendar),
                    KeyValue::new("calendar_days", summary.calendar_days.to_string()),
                    KeyValue::new("business_days", summary.business_days.to_string()),
                ];
                print_output(&results, format)?;
            }
        }
        OutputFormat::Minimal => {
            println!("{}", summary.business_days);
            for date in summary.dates.iter().flatten() {
                println!("{date}");
            }
        }
    }

    Ok(())
}
