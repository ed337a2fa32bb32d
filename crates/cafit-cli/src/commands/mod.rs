pub mod check;
pub mod history;
pub mod log;
pub mod settings;
pub mod stats;
pub mod status;
pub mod timeline;

use std::error::Error;
use std::path::{Path, PathBuf};

use cafit_core::{BeverageCategory, CaffeineSettings};

/// Resolved file locations shared by all commands.
pub struct Context {
    journal_path: PathBuf,
    settings_path: PathBuf,
}

impl Context {
    pub fn new(journal: Option<PathBuf>, settings: Option<PathBuf>) -> Self {
        Self {
            journal_path: journal.unwrap_or_else(default_journal_path),
            settings_path: settings.unwrap_or_else(default_settings_path),
        }
    }

    pub fn journal_path(&self) -> &Path {
        &self.journal_path
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Load settings from disk, falling back to defaults when no file exists.
    pub fn load_settings(&self) -> Result<CaffeineSettings, Box<dyn Error>> {
        if self.settings_path.exists() {
            Ok(CaffeineSettings::load_from(&self.settings_path)?)
        } else {
            Ok(CaffeineSettings::default())
        }
    }
}

fn default_journal_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cafit")
        .join("journal.json")
}

fn default_settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cafit")
        .join("settings.toml")
}

/// Parse a beverage category argument.
pub fn parse_category(value: &str) -> Result<BeverageCategory, String> {
    match value {
        "coffee" => Ok(BeverageCategory::Coffee),
        "tea" => Ok(BeverageCategory::Tea),
        "energy_drink" => Ok(BeverageCategory::EnergyDrink),
        "soft_drink" => Ok(BeverageCategory::SoftDrink),
        "chocolate" => Ok(BeverageCategory::Chocolate),
        "supplement" => Ok(BeverageCategory::Supplement),
        "other" => Ok(BeverageCategory::Other),
        _ => Err(format!(
            "unknown category '{value}' (expected coffee, tea, energy_drink, soft_drink, chocolate, supplement, other)"
        )),
    }
}
