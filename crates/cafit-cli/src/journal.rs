//! JSON intake journal.
//!
//! A flat file holding one local user's intake history. The engine never
//! touches this file; commands load it, pass the records in as a slice, and
//! save it back after a change.

use std::error::Error;
use std::path::Path;

use cafit_core::IntakeRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct Journal {
    pub user_id: Uuid,
    pub intakes: Vec<IntakeRecord>,
}

impl Journal {
    fn new() -> Self {
        Self {
            user_id: Uuid::new_v4(),
            intakes: Vec::new(),
        }
    }

    /// Load the journal, or start a fresh one if the file does not exist yet.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
