//! Daily precipitation forecast charts for a city, served over MCP.
//!
//! A city name is resolved to coordinates (built-in table or Nominatim), the
//! Open-Meteo daily `precipitation_sum` series is fetched for it, reshaped
//! into a table and drawn as an SVG bar chart.

pub mod chart;
pub mod cities;
pub mod config;
pub mod constants;
pub mod error;
pub mod forecast;
pub mod formatters;
pub mod models;
pub mod normalizer;
pub mod pipeline;
pub mod resolver;
pub mod service;

pub use config::{ResolverMode, Settings};
pub use error::PipelineError;
pub use pipeline::RainPipeline;
pub use service::RainChart;
