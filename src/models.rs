use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Domain Models
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// One day of the forecast
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRow {
    pub date: NaiveDate,
    /// Precipitation sum in millimetres
    pub precipitation: f64,
}

impl ForecastRow {
    pub fn is_rainy(&self) -> bool {
        self.precipitation > 0.0
    }
}

/// Daily precipitation rows, in the order the API returned them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastTable {
    rows: Vec<ForecastRow>,
}

impl ForecastTable {
    pub fn new(rows: Vec<ForecastRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[ForecastRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.rows.iter().map(|r| r.precipitation).sum()
    }

    pub fn rainy_days(&self) -> usize {
        self.rows.iter().filter(|r| r.is_rainy()).count()
    }

    pub fn peak(&self) -> f64 {
        self.rows
            .iter()
            .map(|r| r.precipitation)
            .fold(0.0, f64::max)
    }
}

/// Everything produced by one successful pipeline run
#[derive(Debug, Clone)]
pub struct RenderedForecast {
    pub city: String,
    pub coordinates: Coordinates,
    pub table: ForecastTable,
    pub svg: String,
    pub summary: String,
}

// ============================================================================
// Nominatim API Models
// ============================================================================

/// Nominatim reports coordinates as decimal strings
#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetRainForecastRequest {
    /// City name, e.g. "Campinas"
    pub city: String,
}
