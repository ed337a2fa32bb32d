//! Statistics module for Cafit
//!
//! This module provides derived views over an intake history: the projected
//! residual-caffeine timeline, calendar-day rollups with a period average,
//! and the most-consumed beverages over a period.

mod daily;
mod timeline;
mod top_beverages;

pub use daily::{daily_report, DailyReport, DailyStatistic, StatisticsPeriod};

pub use timeline::{build_timeline, hourly_forecast, CaffeineTimeline, TimelinePoint};

pub use top_beverages::{top_beverages, TopBeverageStat};
