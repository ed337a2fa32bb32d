//! First-order exponential decay of a single caffeine dose.
//!
//! A dose loses half its residual amount every `half_life_hours`:
//!
//! ```text
//! remaining = initial_mg * 0.5 ^ (hours_elapsed / half_life_hours)
//! ```
//!
//! The model is pure f64 arithmetic with no internal rounding; rounding for
//! display belongs to presentation code. Aggregation over whole histories
//! lives in [`crate::level`].

/// Residual amount of a single dose after `hours_elapsed`.
///
/// Non-positive `hours_elapsed` returns the dose unchanged, so the result
/// never exceeds `initial_mg`. Callers guarantee `half_life_hours > 0` via
/// [`crate::settings::CaffeineSettings::validate`].
pub fn remaining(initial_mg: f64, hours_elapsed: f64, half_life_hours: f64) -> f64 {
    if hours_elapsed <= 0.0 {
        return initial_mg;
    }
    initial_mg * 0.5_f64.powf(hours_elapsed / half_life_hours)
}
