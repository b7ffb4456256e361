use std::env;
use std::str::FromStr;

use crate::constants::{FORECAST_TIMEZONE, NOMINATIM_API_BASE, OPEN_METEO_API_BASE};
use crate::error::ConfigError;

pub const ENV_FORECAST_URL: &str = "RAIN_CHART_FORECAST_URL";
pub const ENV_GEOCODING_URL: &str = "RAIN_CHART_GEOCODING_URL";
pub const ENV_TIMEZONE: &str = "RAIN_CHART_TIMEZONE";
pub const ENV_RESOLVER: &str = "RAIN_CHART_RESOLVER";

/// How city names are turned into coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolverMode {
    /// Built-in city table first, geocoding service for anything else
    #[default]
    Table,
    /// Always ask the geocoding service
    Geocoding,
}

impl FromStr for ResolverMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "table" => Ok(ResolverMode::Table),
            "geocoding" => Ok(ResolverMode::Geocoding),
            other => Err(ConfigError::ResolverMode(other.to_string())),
        }
    }
}

/// Runtime settings, read once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub forecast_base: String,
    pub geocoding_base: String,
    pub timezone: String,
    pub resolver_mode: ResolverMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            forecast_base: OPEN_METEO_API_BASE.to_string(),
            geocoding_base: NOMINATIM_API_BASE.to_string(),
            timezone: FORECAST_TIMEZONE.to_string(),
            resolver_mode: ResolverMode::default(),
        }
    }
}

impl Settings {
    /// Builds settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds settings from any key lookup, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let resolver_mode = match lookup(ENV_RESOLVER) {
            Some(mode) => mode.parse()?,
            None => defaults.resolver_mode,
        };

        Ok(Self {
            forecast_base: lookup(ENV_FORECAST_URL).unwrap_or(defaults.forecast_base),
            geocoding_base: lookup(ENV_GEOCODING_URL).unwrap_or(defaults.geocoding_base),
            timezone: lookup(ENV_TIMEZONE).unwrap_or(defaults.timezone),
            resolver_mode,
        })
    }
}

#[cfg(test)]
impl Settings {
    /// Points both collaborators at one mock server
    pub(crate) fn with_base(base: &str) -> Self {
        Self {
            forecast_base: base.to_string(),
            geocoding_base: base.to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.timezone, "America/Sao_Paulo");
        assert_eq!(settings.resolver_mode, ResolverMode::Table);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            (ENV_FORECAST_URL, "http://localhost:1"),
            (ENV_GEOCODING_URL, "http://localhost:2"),
            (ENV_TIMEZONE, "UTC"),
            (ENV_RESOLVER, "Geocoding"),
        ]))
        .unwrap();

        assert_eq!(settings.forecast_base, "http://localhost:1");
        assert_eq!(settings.geocoding_base, "http://localhost:2");
        assert_eq!(settings.timezone, "UTC");
        assert_eq!(settings.resolver_mode, ResolverMode::Geocoding);
    }

    #[test]
    fn test_unknown_resolver_mode_is_rejected() {
        let err = Settings::from_lookup(lookup_from(&[(ENV_RESOLVER, "fuzzy")])).unwrap_err();
        assert!(matches!(err, ConfigError::ResolverMode(ref m) if m == "fuzzy"));
    }
}
