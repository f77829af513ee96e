use clap::Parser;
use tracing_subscriber::EnvFilter;

use portal_pagination::config::{init_config, Config};
use portal_pagination::create_routes;

#[derive(Parser, Debug)]
#[command(version, about = "Pagination window service for the grant portals")]
struct Cli {
    /// Address to bind, overrides HOST
    #[arg(long)]
    host: Option<String>,
    /// Port to listen on, overrides PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let config = init_config(config);
    tracing::info!(
        "Page size default={} max={}",
        config.page_size(),
        config.max_items_per_page
    );

    let app = create_routes();

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
