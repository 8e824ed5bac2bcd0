pub mod csv;
pub mod mock;
pub mod stats;

pub use crate::domain::model::{GrowthRecord, OccupancySample, TrendStats};
pub use crate::domain::ports::{ConfigProvider, HistoricalDataSource};
pub use crate::utils::error::Result;

/// Rounding used everywhere a rate or percentage is reported.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
