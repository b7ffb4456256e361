/// User agent string for HTTP requests
pub const USER_AGENT: &str = "mcp-rain-chart/0.1.0";

/// Open-Meteo API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Nominatim (OpenStreetMap) geocoding base URL
pub const NOMINATIM_API_BASE: &str = "https://nominatim.openstreetmap.org";

/// Timezone the daily series is aggregated in
pub const FORECAST_TIMEZONE: &str = "America/Sao_Paulo";

/// Daily field requested from the forecast API
pub const DAILY_FIELD: &str = "precipitation_sum";

/// Chart canvas size in pixels
pub const CHART_SIZE: (u32, u32) = (1200, 600);

/// Default upper bound of the precipitation axis, in millimetres
pub const CHART_Y_LIMIT_MM: f64 = 100.0;

/// Spacing between precipitation axis ticks, in millimetres
pub const CHART_Y_STEP_MM: f64 = 10.0;

/// Most ticks ever requested on the precipitation axis
pub const CHART_MAX_Y_TICKS: usize = 21;

/// Largest daily precipitation accepted from the API, in millimetres
pub const MAX_DAILY_PRECIPITATION_MM: f64 = 2000.0;

/// Glyph drawn above days with precipitation
pub const RAIN_GLYPH: &str = "\u{2614}";

/// Glyph drawn above dry days
pub const SUN_GLYPH: &str = "\u{2600}";
