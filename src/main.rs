use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod models;
mod services;

#[cfg(test)]
mod test_support;

use config::LoadTestConfig;
use services::load_test_service;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env()
            .add_directive("txn_loadtest=info".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap()))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let config = match LoadTestConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return;
        }
    };
    info!(
        "Loaded configuration: {} users against {}",
        config.num_users, config.api_url
    );

    match load_test_service::run_load_test(&config).await {
        Ok(summary) => println!("{}", summary),
        Err(e) => error!("Load test could not start: {}", e),
    }
}
