pub mod config;
pub mod core;
pub mod domain;
pub mod services;
pub mod utils;

pub use config::CliConfig;
pub use core::csv::process_population_csv;
pub use core::mock::generate_mock_historical_data;
pub use core::stats::calculate_trend_stats;
pub use domain::model::{
    DataOrigin, GrowthRecord, OccupancySample, Period, Sourced, TrendDirection, TrendStats,
};
pub use domain::ports::HistoricalDataSource;
pub use services::{AnalyticsService, ParkingService, SyntheticDataSource};
pub use utils::error::{Result, ServiceError};
