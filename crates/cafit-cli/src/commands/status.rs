use std::error::Error;

use cafit_core::current_status;
use chrono::Utc;
use clap::Args;

use crate::commands::Context;
use crate::journal::Journal;

#[derive(Args)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(ctx: &Context, args: StatusArgs) -> Result<(), Box<dyn Error>> {
    let settings = ctx.load_settings()?;
    let journal = Journal::load(ctx.journal_path())?;

    let status = current_status(&journal.intakes, &settings, Utc::now())?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("Current level:  {:.1} mg", status.current_mg);
    println!(
        "Today's intake: {:.1} mg (limit {:.0} mg)",
        status.today_total_mg, settings.daily_limit_mg
    );
    println!(
        "At bedtime:     {:.1} mg in {:.1}h (target {:.0} mg)",
        status.predicted_at_bedtime_mg, status.hours_until_bedtime, settings.target_sleep_caffeine_mg
    );
    println!(
        "{}: {}",
        status.recommendation.label(),
        status.recommendation.description()
    );
    Ok(())
}
