use greeter::{server, Config, Variant};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging first so configuration warnings are not dropped
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Greeter starting");
    tracing::info!("Variant: {}", config.variant);
    tracing::info!("Health route: {}", config.health_route);
    tracing::debug!(
        "Available variants: {}",
        Variant::all()
            .iter()
            .map(|v| v.name)
            .collect::<Vec<_>>()
            .join(", ")
    );

    server::start(config).await?;

    Ok(())
}
