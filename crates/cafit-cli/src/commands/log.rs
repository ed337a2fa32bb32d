use std::error::Error;

use cafit_core::{BeverageCategory, BeverageInfo, BeverageSource, IntakeRecord};
use chrono::{DateTime, Utc};
use clap::Args;

use crate::commands::{parse_category, Context};
use crate::journal::Journal;

#[derive(Args)]
pub struct LogArgs {
    /// Beverage name
    #[arg(long)]
    pub name: String,

    /// Caffeine content in milligrams
    #[arg(long, allow_negative_numbers = true)]
    pub caffeine: f64,

    /// Brand name
    #[arg(long)]
    pub brand: Option<String>,

    /// Category: coffee, tea, energy_drink, soft_drink, chocolate, supplement, other
    #[arg(long, default_value = "coffee", value_parser = parse_category)]
    pub category: BeverageCategory,

    /// Serving volume in milliliters
    #[arg(long, default_value_t = 355)]
    pub volume: u32,

    /// Consumption time (RFC 3339); defaults to now
    #[arg(long)]
    pub at: Option<DateTime<Utc>>,
}

pub fn run(ctx: &Context, args: LogArgs) -> Result<(), Box<dyn Error>> {
    let beverage = BeverageInfo::new(
        args.name,
        args.brand,
        args.category,
        args.volume,
        args.caffeine,
    );
    beverage.validate()?;

    let mut journal = Journal::load(ctx.journal_path())?;
    let record = IntakeRecord::from_beverage(
        journal.user_id,
        &beverage,
        args.at.unwrap_or_else(Utc::now),
        BeverageSource::Custom,
        None,
    );
    println!("Recorded: {}", record.display_name());
    journal.intakes.push(record);
    journal.save(ctx.journal_path())?;
    Ok(())
}
