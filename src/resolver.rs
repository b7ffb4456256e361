use reqwest::Client;
use std::sync::Arc;
use tracing::{debug, error, info};

use crate::cities;
use crate::config::ResolverMode;
use crate::error::PipelineError;
use crate::models::{Coordinates, NominatimPlace};

/// Turns a city name into coordinates
pub struct CoordinateResolver {
    client: Arc<Client>,
    geocoding_base: String,
    mode: ResolverMode,
}

impl CoordinateResolver {
    pub fn new(client: Arc<Client>, geocoding_base: impl Into<String>, mode: ResolverMode) -> Self {
        Self {
            client,
            geocoding_base: geocoding_base.into(),
            mode,
        }
    }

    /// Resolves `city`, consulting the built-in table first when the mode allows it.
    ///
    /// An `Err` is the "no coordinates" signal: `CityNotFound` when the geocoder
    /// had no match, `Geocoding` when the lookup itself failed.
    pub async fn resolve(&self, city: &str) -> Result<Coordinates, PipelineError> {
        if self.mode == ResolverMode::Table {
            if let Some(coordinates) = cities::lookup(city) {
                debug!("Resolved {} from the city table", city);
                return Ok(coordinates);
            }
        }

        info!("Geocoding city: {}", city);
        let place = self.geocode(city).await.map_err(|e| {
            error!("Geocoding failed for {}: {}", city, e);
            PipelineError::Geocoding(e.to_string())
        })?;

        match place {
            Some(place) => parse_place(&place),
            None => {
                info!("No geocoding match for {}", city);
                Err(PipelineError::CityNotFound(city.to_string()))
            }
        }
    }

    /// Asks the geocoding service for the best match only
    async fn geocode(&self, city: &str) -> anyhow::Result<Option<NominatimPlace>> {
        let url = format!("{}/search", self.geocoding_base);
        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("format", "json"), ("limit", "1")])
            .send()
            .await?;

        if !response.status().is_success() {
            anyhow::bail!("Request failed with status: {}", response.status());
        }

        let places = response.json::<Vec<NominatimPlace>>().await?;
        Ok(places.into_iter().next())
    }
}

fn parse_place(place: &NominatimPlace) -> Result<Coordinates, PipelineError> {
    let latitude = place.lat.trim().parse::<f64>();
    let longitude = place.lon.trim().parse::<f64>();

    match (latitude, longitude) {
        (Ok(latitude), Ok(longitude)) => {
            debug!(
                "Geocoded to {} ({:.4}, {:.4})",
                place.display_name.as_deref().unwrap_or("?"),
                latitude,
                longitude
            );
            Ok(Coordinates::new(latitude, longitude))
        }
        _ => Err(PipelineError::Geocoding(format!(
            "invalid coordinates in geocoding result: {}, {}",
            place.lat, place.lon
        ))),
    }
}
