use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

use crate::constants::DAILY_FIELD;
use crate::error::PipelineError;
use crate::models::Coordinates;

/// Client for the Open-Meteo daily forecast endpoint
pub struct ForecastClient {
    client: Arc<Client>,
    base: String,
    timezone: String,
}

impl ForecastClient {
    pub fn new(client: Arc<Client>, base: impl Into<String>, timezone: impl Into<String>) -> Self {
        Self {
            client,
            base: base.into(),
            timezone: timezone.into(),
        }
    }

    /// Fetches the daily precipitation series and returns the body as-is.
    ///
    /// The status code is not inspected: an error body from the API reaches the
    /// normalizer, which rejects it for lacking the `daily` series.
    pub async fn fetch(&self, coordinates: Coordinates) -> Result<Value, PipelineError> {
        info!(
            "Fetching precipitation forecast for coordinates: {}, {}",
            coordinates.latitude, coordinates.longitude
        );

        let url = format!("{}/forecast", self.base);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("daily", DAILY_FIELD.to_string()),
                ("timezone", self.timezone.clone()),
            ])
            .send()
            .await?;

        debug!("Forecast API answered with status {}", response.status());

        let body = response.json::<Value>().await?;
        Ok(body)
    }
}
