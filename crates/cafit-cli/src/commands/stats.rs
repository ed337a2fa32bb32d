use std::error::Error;

use cafit_core::{daily_report, top_beverages};
use chrono::{Duration, Utc};
use clap::Subcommand;

use crate::commands::Context;
use crate::journal::Journal;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Per-day intake totals over the trailing period
    Daily {
        /// Number of days to cover, ending today
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// Most frequently consumed beverages
    Top {
        /// Number of days to cover, ending today
        #[arg(long, default_value_t = 7)]
        days: u32,

        /// Maximum number of beverages to show
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
}

pub fn run(ctx: &Context, action: StatsAction) -> Result<(), Box<dyn Error>> {
    let settings = ctx.load_settings()?;
    let journal = Journal::load(ctx.journal_path())?;
    let end = Utc::now().date_naive();

    match action {
        StatsAction::Daily { days } => {
            let report = daily_report(&journal.intakes, &settings, end, days)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StatsAction::Top { days, limit } => {
            let start = end - Duration::days(i64::from(days.saturating_sub(1)));
            let top = top_beverages(&journal.intakes, start, end, limit);
            println!("{}", serde_json::to_string_pretty(&top)?);
        }
    }
    Ok(())
}
