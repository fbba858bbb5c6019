use anyhow::{Context, Result};
use portfolio_site::config::Config;
use portfolio_site::i18n::ContentValidator;
use portfolio_site::server::create_router;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("portfolio_site=info".parse()?),
        )
        .init();

    info!("Starting portfolio site");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Content parity is reported, never fatal
    let report = ContentValidator::validate_all();
    for error in &report.errors {
        warn!("Content parity error: {}", error);
    }
    for warning in &report.warnings {
        warn!("Content parity warning: {}", warning);
    }
    if report.is_clean() {
        info!("Content tables are in parity");
    }

    let app = create_router(config.site_options());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Listening on {} (base path {})", addr, config.base_path);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
