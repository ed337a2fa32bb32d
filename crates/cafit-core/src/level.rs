//! Residual caffeine levels aggregated over an intake history.
//!
//! The aggregator is a pure function of (history snapshot, settings, query
//! instant): it holds no state and never mutates its inputs. Each intake
//! contributes its decayed residual independently, so the total level is the
//! superposition of single-dose decays. Intakes consumed after the query
//! instant contribute nothing.
//!
//! Correctness is defined over the unbounded sum. Callers may bound the
//! history they pass in (contributions beyond ~5 half-lives are below 3% of
//! the dose) but that is an efficiency policy, not something enforced here.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decay;
use crate::error::Result;
use crate::intake::{validate_intakes, BeverageInfo, IntakeRecord};
use crate::recommend::Recommendation;
use crate::settings::CaffeineSettings;

/// Snapshot of a user's caffeine situation at one instant. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaffeineStatus {
    /// Residual caffeine at the query instant (mg).
    pub current_mg: f64,
    /// Raw (undecayed) intake total for the query instant's calendar day (mg).
    pub today_total_mg: f64,
    /// Projected residual caffeine at the next bedtime (mg).
    pub predicted_at_bedtime_mg: f64,
    /// Fractional hours until the next bedtime; always non-negative.
    pub hours_until_bedtime: f64,
    pub recommendation: Recommendation,
}

/// Before/after comparison for a drink the user has not committed yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkCheck {
    pub beverage: BeverageInfo,
    pub before: CaffeineStatus,
    pub after: CaffeineStatus,
    pub recommendation: Recommendation,
    pub is_safe: bool,
}

/// Fractional hours from `from` to `to`, at second resolution.
pub fn hours_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_seconds() as f64 / 3600.0
}

/// Residual caffeine at `at`, summed over all intakes consumed by then.
pub fn level_at(intakes: &[IntakeRecord], at: DateTime<Utc>, half_life_hours: f64) -> f64 {
    intakes
        .iter()
        .filter(|intake| intake.consumed_at <= at)
        .map(|intake| {
            decay::remaining(
                intake.caffeine_mg,
                hours_between(intake.consumed_at, at),
                half_life_hours,
            )
        })
        .sum()
}

/// The next occurrence of `bedtime` at or after `now`.
///
/// If today's bedtime instant is already strictly in the past, this is
/// tonight's (tomorrow-dated) bedtime.
pub fn next_bedtime(now: DateTime<Utc>, bedtime: NaiveTime) -> DateTime<Utc> {
    let mut instant = now.date_naive().and_time(bedtime).and_utc();
    if now > instant {
        instant += Duration::days(1);
    }
    instant
}

/// Raw intake total for the calendar day containing `now` (no decay applied).
pub fn today_total(intakes: &[IntakeRecord], now: DateTime<Utc>) -> f64 {
    let today = now.date_naive();
    intakes
        .iter()
        .filter(|intake| intake.consumed_at.date_naive() == today)
        .map(|intake| intake.caffeine_mg)
        .sum()
}

/// Compute the full caffeine status for `now`.
pub fn current_status(
    intakes: &[IntakeRecord],
    settings: &CaffeineSettings,
    now: DateTime<Utc>,
) -> Result<CaffeineStatus> {
    settings.validate()?;
    validate_intakes(intakes)?;
    Ok(status_with_extra(intakes, settings, now, 0.0))
}

/// Evaluate a prospective drink without recording it.
///
/// `before` is the status as-is; `after` adds a synthetic dose of the
/// beverage's caffeine at `now`. The recommendation is classified against
/// `after`.
pub fn check_drink(
    beverage: &BeverageInfo,
    intakes: &[IntakeRecord],
    settings: &CaffeineSettings,
    now: DateTime<Utc>,
) -> Result<DrinkCheck> {
    settings.validate()?;
    validate_intakes(intakes)?;
    beverage.validate()?;

    let before = status_with_extra(intakes, settings, now, 0.0);
    let after = status_with_extra(intakes, settings, now, beverage.caffeine_mg);
    let recommendation = after.recommendation;

    Ok(DrinkCheck {
        beverage: beverage.clone(),
        before,
        after,
        recommendation,
        is_safe: recommendation == Recommendation::Safe,
    })
}

/// Status assembly shared by [`current_status`] and [`check_drink`].
///
/// `extra_mg` models a synthetic dose consumed exactly at `now`: it adds in
/// full to the current level and today's total, and decays over the hours
/// remaining until bedtime for the projection.
fn status_with_extra(
    intakes: &[IntakeRecord],
    settings: &CaffeineSettings,
    now: DateTime<Utc>,
    extra_mg: f64,
) -> CaffeineStatus {
    let half_life = settings.half_life_hours;
    let bedtime = next_bedtime(now, settings.bedtime);
    let hours_until_bedtime = hours_between(now, bedtime);

    let current_mg = level_at(intakes, now, half_life) + extra_mg;
    let predicted_at_bedtime_mg = level_at(intakes, bedtime, half_life)
        + decay::remaining(extra_mg, hours_until_bedtime, half_life);
    let today_total_mg = today_total(intakes, now) + extra_mg;

    let recommendation = Recommendation::determine(
        today_total_mg,
        settings.daily_limit_mg,
        predicted_at_bedtime_mg,
        settings.target_sleep_caffeine_mg,
    );

    CaffeineStatus {
        current_mg,
        today_total_mg,
        predicted_at_bedtime_mg,
        hours_until_bedtime,
        recommendation,
    }
}
