use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod models;
mod server;
mod services;
mod utils;

use config::Config;
use services::{CityCursor, ScreenshotService, StockService, WeatherService};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("epaper_dashboard=info".parse().unwrap()),
        )
        .with_target(true)
        .init();

    let config = Arc::new(Config::from_env());
    info!("starting e-paper dashboard backend");
    info!(
        "serving {} with {} holdings and {} cities",
        config.public_dir.display(),
        config.holdings.len(),
        config.cities.len()
    );

    let stocks = Arc::new(StockService::new(&config));
    services::spawn_periodic("stocks", config.stock_interval, move || {
        let stocks = stocks.clone();
        async move { stocks.run_cycle().await }
    });

    let weather = Arc::new(WeatherService::new(&config));
    let cursor = Arc::new(Mutex::new(CityCursor::new()));
    services::spawn_periodic("weather", config.weather_interval, move || {
        let weather = weather.clone();
        let cursor = cursor.clone();
        async move {
            let mut cursor = cursor.lock().await;
            weather.run_cycle(&mut cursor).await
        }
    });

    if config.screenshot.enabled {
        let screenshot = Arc::new(ScreenshotService::new(&config));
        services::spawn_periodic("screenshot", config.screenshot.interval, move || {
            let screenshot = screenshot.clone();
            async move { screenshot.run_cycle().await }
        });
    }

    if let Err(e) = server::serve(&config).await {
        error!("server error: {}", e);
    }
}
