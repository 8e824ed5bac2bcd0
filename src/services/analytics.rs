//! Analytics API wrapper: population growth, historical occupancy and
//! correlation endpoints, with a synthetic fallback for the historical path.

use crate::core::csv::process_population_csv;
use crate::core::mock::generate_mock_historical_data;
use crate::domain::model::{GrowthRecord, OccupancySample, Period, Sourced};
use crate::domain::ports::HistoricalDataSource;
use crate::utils::error::{Result, ServiceError};
use async_trait::async_trait;
use reqwest::Client;

pub struct AnalyticsService {
    client: Client,
    base_url: String,
}

impl AnalyticsService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Share one `reqwest::Client` across services; connection pooling lives
    /// in the client, not in a process-wide singleton.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch Victoria population growth records.
    pub async fn get_population_data(&self) -> Result<Vec<GrowthRecord>> {
        let url = format!("{}/analytics/population", self.base_url);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Error fetching population data: {}", e);
            e
        })?;
        check_status(&url, response.status())?;

        Ok(response.json().await?)
    }

    /// Fetch historical occupancy for a look-back window. On any transport or
    /// HTTP failure this falls back to the synthetic generator; the result is
    /// tagged so callers can tell live telemetry from mock data.
    pub async fn get_historical_data(
        &self,
        period: Period,
    ) -> Result<Sourced<Vec<OccupancySample>>> {
        match self.fetch_historical(period).await {
            Ok(samples) => Ok(Sourced::live(samples)),
            Err(e) => {
                tracing::warn!(
                    "Historical data fetch failed ({}), falling back to synthetic data",
                    e
                );
                Ok(Sourced::synthetic(generate_mock_historical_data(period)))
            }
        }
    }

    async fn fetch_historical(&self, period: Period) -> Result<Vec<OccupancySample>> {
        let url = format!("{}/analytics/historical", self.base_url);
        tracing::debug!("GET {} period={}", url, period);

        let response = self
            .client
            .get(&url)
            .query(&[("period", period.as_query())])
            .send()
            .await?;
        check_status(&url, response.status())?;

        Ok(response.json().await?)
    }

    /// Fetch the population/parking correlation analysis. The payload shape
    /// is owned by the backend, so it passes through as raw JSON.
    pub async fn get_population_parking_correlation(&self) -> Result<serde_json::Value> {
        let url = format!("{}/analytics/correlation", self.base_url);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::error!("Error fetching correlation data: {}", e);
            e
        })?;
        check_status(&url, response.status())?;

        Ok(response.json().await?)
    }

    /// Client-side fallback: process a raw population CSV blob directly when
    /// the backend cannot serve `/analytics/population`.
    pub fn process_population_csv(&self, csv_data: &str) -> Vec<GrowthRecord> {
        process_population_csv(csv_data)
    }
}

#[async_trait]
impl HistoricalDataSource for AnalyticsService {
    async fn historical(&self, period: Period) -> Result<Sourced<Vec<OccupancySample>>> {
        self.get_historical_data(period).await
    }
}

/// Historical source backed entirely by the mock generator, for development
/// and tests.
pub struct SyntheticDataSource;

#[async_trait]
impl HistoricalDataSource for SyntheticDataSource {
    async fn historical(&self, period: Period) -> Result<Sourced<Vec<OccupancySample>>> {
        Ok(Sourced::synthetic(generate_mock_historical_data(period)))
    }
}

pub(crate) fn check_status(endpoint: &str, status: reqwest::StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ServiceError::ApiStatusError {
            endpoint: endpoint.to_string(),
            status: status.as_u16(),
        })
    }
}
