use std::error::Error;

use cafit_core::hourly_forecast;
use chrono::Utc;
use clap::Args;

use crate::commands::Context;
use crate::journal::Journal;

#[derive(Args)]
pub struct TimelineArgs {
    /// Forecast horizon in hours
    #[arg(long, default_value_t = 12)]
    pub hours: u32,
}

pub fn run(ctx: &Context, args: TimelineArgs) -> Result<(), Box<dyn Error>> {
    let settings = ctx.load_settings()?;
    let journal = Journal::load(ctx.journal_path())?;

    let timeline = hourly_forecast(&journal.intakes, &settings, Utc::now(), args.hours)?;
    println!("{}", serde_json::to_string_pretty(&timeline)?);
    Ok(())
}
