use anyhow::Result;
use base64::Engine;
use reqwest::Client;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::cities::CITIES;
use crate::config::Settings;
use crate::constants::USER_AGENT;
use crate::formatters::format_city_list;
use crate::models::GetRainForecastRequest;
use crate::pipeline::RainPipeline;

pub const SVG_MIME_TYPE: &str = "image/svg+xml";

/// Rain chart service that handles MCP requests
#[derive(Clone)]
pub struct RainChart {
    pipeline: Arc<RainPipeline>,
    tool_router: ToolRouter<Self>,
}

impl RainChart {
    /// Creates a new service instance with its own HTTP client
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            pipeline: Arc::new(RainPipeline::new(Arc::new(client), settings)),
            tool_router: Self::tool_router(),
        })
    }
}

#[tool_handler]
impl ServerHandler for RainChart {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-rain-chart".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: Some("Rain forecast chart".to_string()),
                website_url: None,
            },
            instructions: Some(
                "Daily precipitation forecasts powered by Open-Meteo. \
                Give a city name to get a bar chart of the coming days; \
                call list_cities for the cities known without geocoding."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl RainChart {
    /// Charts the daily precipitation forecast for a city
    #[tool(description = "Get a daily precipitation forecast chart for a city. Provide the city name (e.g., 'São Paulo' or 'Campinas'). Returns a text summary and an SVG bar chart with one bar per day.")]
    async fn get_rain_forecast(
        &self,
        Parameters(request): Parameters<GetRainForecastRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting rain forecast for city: {:?}", request.city);

        match self.pipeline.run(&request.city).await {
            Ok(rendered) => {
                let image =
                    base64::engine::general_purpose::STANDARD.encode(rendered.svg.as_bytes());
                Ok(CallToolResult::success(vec![
                    Content::text(rendered.summary),
                    Content::image(image, SVG_MIME_TYPE),
                ]))
            }
            Err(e) if e.is_warning() => {
                Ok(CallToolResult::success(vec![Content::text(format!("Warning: {}", e))]))
            }
            Err(e) => {
                tracing::error!("Rain forecast failed: {}", e);
                Ok(CallToolResult::error(vec![Content::text(e.to_string())]))
            }
        }
    }

    /// Lists the built-in cities
    #[tool(description = "List the cities whose coordinates are built in and resolve without geocoding.")]
    async fn list_cities(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(format_city_list(CITIES))]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn text_of(content: &Content) -> &str {
        match &content.raw {
            RawContent::Text(text) => &text.text,
            other => panic!("expected text content, got {:?}", other),
        }
    }

    fn request(city: &str) -> Parameters<GetRainForecastRequest> {
        Parameters(GetRainForecastRequest {
            city: city.to_string(),
        })
    }

    #[tokio::test]
    async fn test_success_returns_summary_and_svg_image() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "daily": {"time": ["2024-03-01", "2024-03-02"], "precipitation_sum": [5.0, 0.0]}
            })))
            .mount(&mock_server)
            .await;

        let service = RainChart::new(&Settings::with_base(&mock_server.uri())).unwrap();
        let result = service.get_rain_forecast(request("Limeira")).await.unwrap();

        assert_ne!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 2);
        assert!(text_of(&result.content[0]).contains("City: Limeira"));
        match &result.content[1].raw {
            RawContent::Image(image) => {
                assert_eq!(image.mime_type, SVG_MIME_TYPE);
                let svg = base64::engine::general_purpose::STANDARD
                    .decode(&image.data)
                    .unwrap();
                assert!(String::from_utf8(svg).unwrap().contains("<svg"));
            }
            other => panic!("expected image content, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_city_is_a_warning() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let service = RainChart::new(&Settings::with_base(&mock_server.uri())).unwrap();
        let result = service.get_rain_forecast(request("")).await.unwrap();

        assert_ne!(result.is_error, Some(true));
        assert_eq!(text_of(&result.content[0]), "Warning: Please enter a city name.");
    }

    #[tokio::test]
    async fn test_missing_data_is_an_error_result() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"latitude": 0.0})))
            .mount(&mock_server)
            .await;

        let service = RainChart::new(&Settings::with_base(&mock_server.uri())).unwrap();
        let result = service.get_rain_forecast(request("Mauá")).await.unwrap();

        assert_eq!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
        assert_eq!(
            text_of(&result.content[0]),
            "City not found or data unavailable."
        );
    }

    #[tokio::test]
    async fn test_list_cities() {
        let service = RainChart::new(&Settings::default()).unwrap();
        let result = service.list_cities().await.unwrap();

        assert!(text_of(&result.content[0]).contains("Ribeirão Preto"));
    }
}
