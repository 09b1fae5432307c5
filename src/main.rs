use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};
use crate::config::Config;

pub mod config;
pub mod controller;
pub mod helpers;
pub mod models;
pub mod repositories;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::parse();

    if config.api_key().is_none() {
        warn!("GOOGLE_MAPS_API_KEY is not set, data endpoints will report a configuration error");
    }
    info!(
        "Default search radius {}m, maximum radius {}m (not enforced)",
        config.default_radius,
        config.max_radius,
    );

    controller::serve(&config).await
}
