//! Projected residual-caffeine timeline.
//!
//! Samples the aggregated level at fixed steps across a window so callers can
//! render a decay curve. The sequence is recomputed fresh on every call; it is
//! not an incremental structure.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::intake::{validate_intakes, IntakeRecord};
use crate::level::{level_at, next_bedtime};
use crate::settings::CaffeineSettings;

/// Residual caffeine evaluated at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelinePoint {
    pub time: DateTime<Utc>,
    pub caffeine_mg: f64,
}

/// Chart-ready timeline: sampled points plus the reference lines callers draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaffeineTimeline {
    pub points: Vec<TimelinePoint>,
    pub generated_at: DateTime<Utc>,
    pub bedtime: DateTime<Utc>,
    pub target_sleep_caffeine_mg: f64,
}

/// Sample the residual level every `step_minutes` from `window_start` through
/// `window_end` inclusive.
///
/// Points are strictly ascending with uniform spacing. The final point lands
/// on `window_end` only when the window is a whole multiple of the step.
pub fn build_timeline(
    intakes: &[IntakeRecord],
    half_life_hours: f64,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    step_minutes: u32,
) -> Result<Vec<TimelinePoint>, ValidationError> {
    if step_minutes == 0 {
        return Err(ValidationError::InvalidValue {
            field: "step_minutes".into(),
            message: "must be at least 1".into(),
        });
    }
    if window_end < window_start {
        return Err(ValidationError::InvalidTimeRange {
            start: window_start,
            end: window_end,
        });
    }

    let step = Duration::minutes(step_minutes as i64);
    let mut points = Vec::new();
    let mut time = window_start;
    while time <= window_end {
        points.push(TimelinePoint {
            time,
            caffeine_mg: level_at(intakes, time, half_life_hours),
        });
        time += step;
    }
    Ok(points)
}

/// Hourly projection from `now` over the next `hours` hours.
///
/// One point per hour, endpoints inclusive, annotated with the next bedtime
/// and the sleep target so a chart can draw both reference lines.
pub fn hourly_forecast(
    intakes: &[IntakeRecord],
    settings: &CaffeineSettings,
    now: DateTime<Utc>,
    hours: u32,
) -> Result<CaffeineTimeline> {
    settings.validate()?;
    validate_intakes(intakes)?;

    let points = build_timeline(
        intakes,
        settings.half_life_hours,
        now,
        now + Duration::hours(hours as i64),
        60,
    )?;

    Ok(CaffeineTimeline {
        points,
        generated_at: now,
        bedtime: next_bedtime(now, settings.bedtime),
        target_sleep_caffeine_mg: settings.target_sleep_caffeine_mg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{BeverageCategory, BeverageInfo, BeverageSource};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn dose(mg: f64, consumed_at: DateTime<Utc>) -> IntakeRecord {
        let beverage = BeverageInfo::new("Espresso", None, BeverageCategory::Coffee, 60, mg);
        IntakeRecord::from_beverage(
            Uuid::nil(),
            &beverage,
            consumed_at,
            BeverageSource::Custom,
            None,
        )
    }

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, hour, min, 0).unwrap()
    }

    #[test]
    fn test_points_are_ascending_with_uniform_spacing() {
        let intakes = vec![dose(100.0, at(8, 0))];
        let points = build_timeline(&intakes, 5.0, at(9, 0), at(15, 0), 30).unwrap();

        assert_eq!(points.len(), 13); // both endpoints inclusive
        for pair in points.windows(2) {
            assert_eq!(pair[1].time - pair[0].time, Duration::minutes(30));
            assert!(pair[1].time > pair[0].time);
        }
        assert_eq!(points.first().unwrap().time, at(9, 0));
        assert_eq!(points.last().unwrap().time, at(15, 0));
    }

    #[test]
    fn test_levels_decay_along_the_curve() {
        let intakes = vec![dose(100.0, at(8, 0))];
        let points = build_timeline(&intakes, 5.0, at(8, 0), at(18, 0), 60).unwrap();

        assert_eq!(points[0].caffeine_mg, 100.0);
        for pair in points.windows(2) {
            assert!(pair[1].caffeine_mg < pair[0].caffeine_mg);
        }
        // One half-life later, half remains.
        assert!((points[5].caffeine_mg - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_point_window() {
        let points = build_timeline(&[], 5.0, at(9, 0), at(9, 0), 60).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].caffeine_mg, 0.0);
    }

    #[test]
    fn test_zero_step_rejected() {
        let err = build_timeline(&[], 5.0, at(9, 0), at(10, 0), 0).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { .. }));
    }

    #[test]
    fn test_inverted_window_rejected() {
        let err = build_timeline(&[], 5.0, at(10, 0), at(9, 0), 60).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTimeRange { .. }));
    }

    #[test]
    fn test_hourly_forecast_shape() {
        let settings = CaffeineSettings::default();
        let intakes = vec![dose(150.0, at(10, 0))];
        let timeline = hourly_forecast(&intakes, &settings, at(12, 0), 12).unwrap();

        assert_eq!(timeline.points.len(), 13);
        assert_eq!(timeline.generated_at, at(12, 0));
        assert_eq!(timeline.bedtime, at(23, 0));
        assert_eq!(timeline.target_sleep_caffeine_mg, 50.0);
        // First point is the current level.
        let expected = 150.0 * 0.5_f64.powf(2.0 / 5.0);
        assert!((timeline.points[0].caffeine_mg - expected).abs() < 1e-9);
    }

    #[test]
    fn test_hourly_forecast_validates_settings() {
        let mut settings = CaffeineSettings::default();
        settings.half_life_hours = 0.0;
        assert!(hourly_forecast(&[], &settings, at(12, 0), 12).is_err());
    }
}
