use crate::domain::model::{OccupancySample, Period, Sourced};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
}

/// Supplier of a chronological occupancy series for a look-back window.
///
/// Implemented by the live analytics wrapper (with synthetic fallback) and by
/// the pure mock source; downstream trend computation works identically over
/// either.
#[async_trait]
pub trait HistoricalDataSource: Send + Sync {
    async fn historical(&self, period: Period) -> Result<Sourced<Vec<OccupancySample>>>;
}
