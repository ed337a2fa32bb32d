use std::error::Error;

use cafit_core::CaffeineSettings;
use clap::Subcommand;

use crate::commands::Context;

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Print the active settings
    Show,
    /// Write a default settings file
    Init,
}

pub fn run(ctx: &Context, action: SettingsAction) -> Result<(), Box<dyn Error>> {
    match action {
        SettingsAction::Show => {
            let settings = ctx.load_settings()?;
            print!("{}", toml::to_string_pretty(&settings)?);
        }
        SettingsAction::Init => {
            let path = ctx.settings_path();
            if path.exists() {
                return Err(format!("settings file already exists: {}", path.display()).into());
            }
            CaffeineSettings::default().save_to(path)?;
            println!("Settings written to {}", path.display());
        }
    }
    Ok(())
}
