use std::error::Error;

use cafit_core::{check_drink, BeverageCategory, BeverageInfo};
use chrono::Utc;
use clap::Args;

use crate::commands::{parse_category, Context};
use crate::journal::Journal;

#[derive(Args)]
pub struct CheckArgs {
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
}

pub fn run(ctx: &Context, args: CheckArgs) -> Result<(), Box<dyn Error>> {
    let settings = ctx.load_settings()?;
    let journal = Journal::load(ctx.journal_path())?;

    let beverage = BeverageInfo::new(
        args.name,
        args.brand,
        args.category,
        args.volume,
        args.caffeine,
    );
    let check = check_drink(&beverage, &journal.intakes, &settings, Utc::now())?;
    println!("{}", serde_json::to_string_pretty(&check)?);
    Ok(())
}
