mod health;
mod products;

use axum::{routing::get, Router};

use crate::AppState;

/// Prefix the catalog endpoints are served under.
pub const API_PREFIX: &str = "/api";

pub fn create_router() -> Router<AppState> {
    let catalog = Router::new()
        .route("/products", get(products::list_products))
        .route("/products/slug/{slug}", get(products::get_product_by_slug));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .nest(API_PREFIX, catalog)
}
