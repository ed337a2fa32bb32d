//! Three-level drink recommendation.
//!
//! Pure mapping from projected totals to SAFE / WARNING / DANGER. The daily
//! limit check runs first: a dose that both exceeds the daily limit and harms
//! sleep reports DANGER, never WARNING. Both comparisons are strict, so a
//! total exactly at a threshold is still inside it.

use serde::{Deserialize, Serialize};

/// Recommendation level for current or prospective caffeine intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    Safe,
    Warning,
    Danger,
}

impl Recommendation {
    /// Classify projected totals against the configured thresholds.
    pub fn determine(
        today_total_mg: f64,
        daily_limit_mg: f64,
        predicted_at_bedtime_mg: f64,
        target_sleep_caffeine_mg: f64,
    ) -> Self {
        if today_total_mg > daily_limit_mg {
            return Recommendation::Danger;
        }
        if predicted_at_bedtime_mg > target_sleep_caffeine_mg {
            return Recommendation::Warning;
        }
        Recommendation::Safe
    }

    /// Short user-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::Safe => "Safe",
            Recommendation::Warning => "Caution",
            Recommendation::Danger => "Over limit",
        }
    }

    /// One-line explanation of the level.
    pub fn description(&self) -> &'static str {
        match self {
            Recommendation::Safe => "Daily caffeine intake is within the recommended range",
            Recommendation::Warning => "Caffeine would still be above your sleep target at bedtime",
            Recommendation::Danger => "Daily caffeine intake exceeds the recommended limit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_at_daily_limit_is_not_danger() {
        let rec = Recommendation::determine(400.0, 400.0, 0.0, 50.0);
        assert_eq!(rec, Recommendation::Safe);
    }

    #[test]
    fn test_just_over_daily_limit_is_danger() {
        let rec = Recommendation::determine(400.01, 400.0, 0.0, 50.0);
        assert_eq!(rec, Recommendation::Danger);
    }

    #[test]
    fn test_exactly_at_sleep_target_is_safe() {
        let rec = Recommendation::determine(100.0, 400.0, 50.0, 50.0);
        assert_eq!(rec, Recommendation::Safe);
    }

    #[test]
    fn test_over_sleep_target_is_warning() {
        let rec = Recommendation::determine(100.0, 400.0, 50.01, 50.0);
        assert_eq!(rec, Recommendation::Warning);
    }

    #[test]
    fn test_danger_takes_precedence_over_warning() {
        // Both thresholds violated: daily limit wins.
        let rec = Recommendation::determine(475.0, 400.0, 120.0, 50.0);
        assert_eq!(rec, Recommendation::Danger);
    }

    #[test]
    fn test_prospective_dose_scenarios() {
        // 95mg dose pushing the daily total from 380 to 475
        assert_eq!(
            Recommendation::determine(475.0, 400.0, 0.0, 50.0),
            Recommendation::Danger
        );
        // same dose from 200 to 295, but 60mg left at bedtime
        assert_eq!(
            Recommendation::determine(295.0, 400.0, 60.0, 50.0),
            Recommendation::Warning
        );
        // from 50 to 145 with only 30mg at bedtime
        assert_eq!(
            Recommendation::determine(145.0, 400.0, 30.0, 50.0),
            Recommendation::Safe
        );
    }

    #[test]
    fn test_serializes_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&Recommendation::Danger).unwrap(),
            "\"DANGER\""
        );
        let back: Recommendation = serde_json::from_str("\"WARNING\"").unwrap();
        assert_eq!(back, Recommendation::Warning);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Recommendation::Safe.label(), "Safe");
        assert!(Recommendation::Danger.description().contains("exceeds"));
    }
}
