//! Parking and statistics API wrapper. These endpoints pass their payloads
//! through untyped: the UI renders whatever the backend sends, and transport
//! failures propagate to the caller after being logged.

use crate::services::analytics::check_status;
use crate::utils::error::Result;
use reqwest::Client;
use serde_json::Value;

/// Default search radius in metres for nearby-parking lookups.
pub const DEFAULT_NEARBY_RADIUS_M: u32 = 500;

pub struct ParkingService {
    client: Client,
    base_url: String,
}

impl ParkingService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn get_current_parking_status(&self) -> Result<Value> {
        self.get_json("/parking/current", &[]).await
    }

    pub async fn find_nearby_parking(
        &self,
        lat: f64,
        lng: f64,
        radius: Option<u32>,
    ) -> Result<Value> {
        let radius = radius.unwrap_or(DEFAULT_NEARBY_RADIUS_M);
        self.get_json(
            "/parking/nearby",
            &[
                ("lat", lat.to_string()),
                ("lng", lng.to_string()),
                ("radius", radius.to_string()),
            ],
        )
        .await
    }

    pub async fn get_streets_list(&self) -> Result<Value> {
        self.get_json("/parking/streets", &[]).await
    }

    pub async fn get_overview_stats(&self) -> Result<Value> {
        self.get_json("/statistics/overview", &[]).await
    }

    pub async fn get_zone_stats(&self) -> Result<Value> {
        self.get_json("/statistics/zones", &[]).await
    }

    async fn get_json(&self, path: &str, query: &[(&str, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("GET {}", url);

        let result: Result<Value> = async {
            let mut request = self.client.get(&url);
            if !query.is_empty() {
                request = request.query(query);
            }
            let response = request.send().await?;
            check_status(&url, response.status())?;
            Ok(response.json().await?)
        }
        .await;

        if let Err(e) = &result {
            tracing::error!("Request to {} failed: {}", url, e);
        }
        result
    }
}
