//! Calendar-day intake rollups.
//!
//! Daily totals are raw sums of the recorded doses; decay never applies here.
//! Days are calendar dates of the UTC consumption timestamp, and every day in
//! the requested period appears in the report, including days with no intakes.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::intake::{validate_intakes, IntakeRecord};
use crate::settings::CaffeineSettings;

/// Raw intake total and count for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStatistic {
    pub date: NaiveDate,
    pub total_caffeine_mg: f64,
    pub intake_count: usize,
}

/// Inclusive date range covered by a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Multi-day rollup with the period average and the configured daily limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub period: StatisticsPeriod,
    pub days: Vec<DailyStatistic>,
    /// Mean of the daily totals over the whole period, empty days included.
    pub period_average_mg: f64,
    pub daily_limit_mg: f64,
}

/// Roll up the `days` calendar days ending at `end_date` (inclusive).
pub fn daily_report(
    intakes: &[IntakeRecord],
    settings: &CaffeineSettings,
    end_date: NaiveDate,
    days: u32,
) -> Result<DailyReport> {
    settings.validate()?;
    validate_intakes(intakes)?;
    if days == 0 {
        return Err(ValidationError::InvalidValue {
            field: "days".into(),
            message: "must be at least 1".into(),
        }
        .into());
    }

    let start_date = end_date - Duration::days(days as i64 - 1);

    let mut day_stats = Vec::with_capacity(days as usize);
    let mut period_total = 0.0;
    for offset in 0..days {
        let date = start_date + Duration::days(offset as i64);
        let mut total_caffeine_mg = 0.0;
        let mut intake_count = 0;
        for intake in intakes {
            if intake.consumed_at.date_naive() == date {
                total_caffeine_mg += intake.caffeine_mg;
                intake_count += 1;
            }
        }
        period_total += total_caffeine_mg;
        day_stats.push(DailyStatistic {
            date,
            total_caffeine_mg,
            intake_count,
        });
    }

    Ok(DailyReport {
        period: StatisticsPeriod {
            start_date,
            end_date,
        },
        days: day_stats,
        period_average_mg: period_total / days as f64,
        daily_limit_mg: settings.daily_limit_mg,
    })
}
