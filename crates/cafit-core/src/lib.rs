//! # Cafit Core Library
//!
//! This library provides the core business logic for Cafit, a personal
//! caffeine-intake tracker. It models residual body caffeine with first-order
//! exponential decay and turns a timestamped intake history into status
//! snapshots, projection timelines, daily statistics, and a three-level
//! drink recommendation.
//!
//! ## Architecture
//!
//! The engine is a pure function of (intake history, settings, query
//! instant). It owns no persistent state and performs no I/O beyond the
//! explicit TOML settings helpers; callers supply a consistent history
//! snapshot and receive plain data back. All instants are UTC-normalized
//! absolute timestamps.
//!
//! ## Key Components
//!
//! - [`decay::remaining`]: single-dose exponential decay
//! - [`level`]: level aggregation, [`CaffeineStatus`], prospective
//!   [`DrinkCheck`]
//! - [`Recommendation`]: SAFE / WARNING / DANGER classifier
//! - [`stats`]: timeline, daily rollups, top beverages
//! - [`CaffeineSettings`]: thresholds and half-life, TOML round-trip

pub mod decay;
pub mod error;
pub mod intake;
pub mod level;
pub mod recommend;
pub mod settings;
pub mod stats;

pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use intake::{BeverageCategory, BeverageInfo, BeverageSource, IntakeRecord};
pub use level::{check_drink, current_status, level_at, next_bedtime, CaffeineStatus, DrinkCheck};
pub use recommend::Recommendation;
pub use settings::CaffeineSettings;
pub use stats::{
    build_timeline, daily_report, hourly_forecast, top_beverages, CaffeineTimeline, DailyReport,
    DailyStatistic, StatisticsPeriod, TimelinePoint, TopBeverageStat,
};
