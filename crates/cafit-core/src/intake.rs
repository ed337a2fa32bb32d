//! Intake records and beverage identity.
//!
//! An [`IntakeRecord`] is an immutable snapshot of one consumption event.
//! Beverage details (name, brand, volume, caffeine content) are copied onto
//! the record at creation time so later edits to a beverage catalog never
//! rewrite history. The engine reads records, it never mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Category of a caffeinated beverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeverageCategory {
    Coffee,
    Tea,
    EnergyDrink,
    SoftDrink,
    Chocolate,
    Supplement,
    Other,
}

/// Where a recorded beverage came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeverageSource {
    /// Picked from the shared preset catalog
    Preset,
    /// A user-defined beverage
    Custom,
}

/// Beverage details used for intake snapshots and prospective drink checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeverageInfo {
    pub beverage_name: String,
    pub brand_name: Option<String>,
    pub category: BeverageCategory,
    pub volume_ml: u32,
    pub caffeine_mg: f64,
}

impl BeverageInfo {
    pub fn new(
        beverage_name: impl Into<String>,
        brand_name: Option<String>,
        category: BeverageCategory,
        volume_ml: u32,
        caffeine_mg: f64,
    ) -> Self {
        Self {
            beverage_name: beverage_name.into(),
            brand_name,
            category,
            volume_ml,
            caffeine_mg,
        }
    }

    /// Check the caffeine amount is usable for decay math.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.caffeine_mg.is_finite() {
            return Err(ValidationError::InvalidValue {
                field: "caffeine_mg".into(),
                message: "must be a finite number".into(),
            });
        }
        if self.caffeine_mg < 0.0 {
            return Err(ValidationError::InvalidValue {
                field: "caffeine_mg".into(),
                message: format!("must be non-negative, got {}", self.caffeine_mg),
            });
        }
        Ok(())
    }
}

/// One recorded consumption event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub beverage_name: String,
    pub brand_name: Option<String>,
    pub category: BeverageCategory,
    pub volume_ml: u32,
    pub caffeine_mg: f64,
    pub consumed_at: DateTime<Utc>,
    pub source: BeverageSource,
    pub source_beverage_id: Option<Uuid>,
}

impl IntakeRecord {
    /// Create a record by snapshotting a beverage at the consumption instant.
    pub fn from_beverage(
        user_id: Uuid,
        beverage: &BeverageInfo,
        consumed_at: DateTime<Utc>,
        source: BeverageSource,
        source_beverage_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            beverage_name: beverage.beverage_name.clone(),
            brand_name: beverage.brand_name.clone(),
            category: beverage.category,
            volume_ml: beverage.volume_ml,
            caffeine_mg: beverage.caffeine_mg,
            consumed_at,
            source,
            source_beverage_id,
        }
    }

    /// Human-readable label, e.g. `Americano(Starbucks) 355ml - 150mg`.
    pub fn display_name(&self) -> String {
        match &self.brand_name {
            Some(brand) => format!(
                "{}({}) {}ml - {:.0}mg",
                self.beverage_name, brand, self.volume_ml, self.caffeine_mg
            ),
            None => format!(
                "{} {}ml - {:.0}mg",
                self.beverage_name, self.volume_ml, self.caffeine_mg
            ),
        }
    }

    /// Check the record is usable for decay math.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.caffeine_mg.is_finite() {
            return Err(ValidationError::NonFiniteDose { intake_id: self.id });
        }
        if self.caffeine_mg < 0.0 {
            return Err(ValidationError::NegativeDose {
                intake_id: self.id,
                caffeine_mg: self.caffeine_mg,
            });
        }
        Ok(())
    }
}

/// Validate a whole history snapshot before it enters aggregation.
pub fn validate_intakes(intakes: &[IntakeRecord]) -> Result<(), ValidationError> {
    for intake in intakes {
        intake.validate()?;
    }
    Ok(())
}
