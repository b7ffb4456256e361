use reqwest::Client;
use std::sync::Arc;
use tracing::{info, warn};

use crate::chart::render_svg;
use crate::config::Settings;
use crate::error::PipelineError;
use crate::forecast::ForecastClient;
use crate::formatters::format_rain_summary;
use crate::models::RenderedForecast;
use crate::normalizer::normalize;
use crate::resolver::CoordinateResolver;

/// City name in, chart out: resolve, fetch, normalize, render
pub struct RainPipeline {
    resolver: CoordinateResolver,
    forecast: ForecastClient,
    timezone: String,
}

impl RainPipeline {
    pub fn new(client: Arc<Client>, settings: &Settings) -> Self {
        Self {
            resolver: CoordinateResolver::new(
                Arc::clone(&client),
                settings.geocoding_base.clone(),
                settings.resolver_mode,
            ),
            forecast: ForecastClient::new(
                client,
                settings.forecast_base.clone(),
                settings.timezone.clone(),
            ),
            timezone: settings.timezone.clone(),
        }
    }

    pub async fn run(&self, city: &str) -> Result<RenderedForecast, PipelineError> {
        let city = city.trim();
        if city.is_empty() {
            warn!("Empty city name, nothing to look up");
            return Err(PipelineError::EmptyCity);
        }

        let coordinates = self.resolver.resolve(city).await?;
        let body = self.forecast.fetch(coordinates).await?;
        let table = normalize(&body)?;

        let title = format!("Precipitation forecast for {city}");
        let svg = render_svg(&table, &title)?;
        let summary = format_rain_summary(city, coordinates, &self.timezone, &table);

        info!(
            "Forecast for {}: {} days, {:.2} mm total",
            city,
            table.len(),
            table.total()
        );

        Ok(RenderedForecast {
            city: city.to_string(),
            coordinates,
            table,
            svg,
            summary,
        })
    }
}
