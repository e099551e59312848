use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use k8s_client_kit::config::Config;
use k8s_client_kit::kube::ApiClient;
use k8s_client_kit::logger::{Json, DEFAULT_FILTER};
use k8s_client_kit::{k8s_error, k8s_info};

#[derive(Parser)]
#[command(name = "k8s-client")]
#[command(author, version, about = "Query the Kubernetes API and print the JSON response")]
struct Cli {
    /// API path to GET
    #[arg(default_value = "/version")]
    path: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting k8s-client v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    let client = ApiClient::new(&config.api).context("Failed to create API client")?;

    match client.get_json::<serde_json::Value>(&cli.path).await {
        Ok(body) => {
            k8s_info!(cli.path, Json(&body));
            Ok(())
        }
        Err(e) => {
            k8s_error!("GET", cli.path, "failed:", e);
            Err(e).with_context(|| format!("GET {} failed", cli.path))
        }
    }
}
