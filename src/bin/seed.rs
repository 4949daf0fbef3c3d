use std::process::ExitCode;

use emi_store::{
    config::DatabaseConfig,
    seed,
    store::{CatalogStore, PgCatalogStore},
    telemetry,
};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();

    telemetry::init_tracing();

    let config = match DatabaseConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Error seeding database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let store = match PgCatalogStore::connect(&config).await {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Error seeding database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = seed::run(&store).await;
    store.close().await;

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Error seeding database: {}", e);
            ExitCode::FAILURE
        }
    }
}
