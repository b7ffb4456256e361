use anyhow::Result;
use mcp_rain_chart::{RainChart, Settings};
use rmcp::ServiceExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcp_rain_chart=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(
        "Starting MCP rain chart server (resolver: {:?}, timezone: {})",
        settings.resolver_mode,
        settings.timezone
    );

    let service = RainChart::new(&settings)?;
    let server = service.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
