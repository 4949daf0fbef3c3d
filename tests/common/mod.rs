#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use emi_store::{
    app,
    config::{AppConfig, CorsConfig, DatabaseConfig, ServerConfig},
    seed,
    store::{CatalogStore, MemoryCatalogStore},
};

pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            max_body_size: 1024 * 1024,
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            acquire_timeout_secs: 1,
        },
        cors: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    }
}

pub async fn seeded_store() -> Arc<MemoryCatalogStore> {
    let store = Arc::new(MemoryCatalogStore::new());
    seed::run(store.as_ref()).await.expect("seed memory store");
    store
}

pub fn router(store: Arc<dyn CatalogStore>) -> Router {
    app::build(&test_config(), store).expect("build router")
}
