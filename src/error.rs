use thiserror::Error;

/// Failures of a single forecast request, from input to chart
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Nothing was entered; reported before any network call
    #[error("Please enter a city name.")]
    EmptyCity,

    /// The geocoding service had no match for the name
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// The geocoding service could not be queried or answered garbage
    #[error("Failed to get coordinates: {0}")]
    Geocoding(String),

    /// The forecast body has no `daily` series
    #[error("City not found or data unavailable.{}", reason_suffix(.reason))]
    MissingData { reason: Option<String> },

    /// The `daily` series is present but unusable
    #[error("Malformed forecast response: {0}")]
    MalformedResponse(String),

    /// Transport failure talking to the forecast API
    #[error("Forecast request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to draw chart: {0}")]
    Chart(String),
}

impl PipelineError {
    /// Warnings are shown inline and never involve a network call
    pub fn is_warning(&self) -> bool {
        matches!(self, PipelineError::EmptyCity)
    }
}

fn reason_suffix(reason: &Option<String>) -> String {
    reason
        .as_ref()
        .map(|r| format!(" ({r})"))
        .unwrap_or_default()
}

/// Invalid runtime configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown resolver mode '{0}', expected 'table' or 'geocoding'")]
    ResolverMode(String),
}
