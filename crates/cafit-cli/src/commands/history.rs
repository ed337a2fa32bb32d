use std::error::Error;

use chrono::Utc;
use clap::Args;

use crate::commands::Context;
use crate::journal::Journal;

#[derive(Args)]
pub struct HistoryArgs {
    /// Only show intakes from today
    #[arg(long)]
    pub today: bool,
}

pub fn run(ctx: &Context, args: HistoryArgs) -> Result<(), Box<dyn Error>> {
    let journal = Journal::load(ctx.journal_path())?;

    let mut intakes = journal.intakes;
    if args.today {
        let today = Utc::now().date_naive();
        intakes.retain(|i| i.consumed_at.date_naive() == today);
    }
    intakes.sort_by_key(|i| i.consumed_at);

    if intakes.is_empty() {
        println!("No intakes recorded.");
        return Ok(());
    }
    for intake in &intakes {
        println!(
            "{}  {}",
            intake.consumed_at.format("%Y-%m-%d %H:%M"),
            intake.display_name()
        );
    }
    Ok(())
}
