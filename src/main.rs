use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod schemas;
mod service;
#[cfg(test)]
mod tests;

/// Main entry point for the fluxo application.
#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fluxo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment configuration
    dotenvy::dotenv().ok();

    info!("fluxo starting up");
    cli::Cli::parse().run().await
}
