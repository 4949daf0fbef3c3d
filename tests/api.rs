//! Catalog API contract, served from the in-memory store.

mod common;

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use emi_store::models::{Product, ProductInput};
use emi_store::store::{CatalogStore, MemoryCatalogStore};
use emi_store::{AppError, Result};
use serde_json::Value;
use tower::ServiceExt;

async fn get(store: Arc<dyn CatalogStore>, uri: &str) -> (StatusCode, Value) {
    let response = common::router(store)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).expect("json parse");
    (status, json)
}

/// Store whose backend is gone: every call fails the way an exhausted pool does.
struct UnreachableStore;

fn unreachable() -> AppError {
    AppError::StoreUnavailable(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl CatalogStore for UnreachableStore {
    fn backend_tag(&self) -> &'static str {
        "unreachable"
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        Err(unreachable())
    }

    async fn get_product_by_slug(&self, _slug: &str) -> Result<Product> {
        Err(unreachable())
    }

    async fn replace_all(&self, _products: Vec<ProductInput>) -> Result<usize> {
        Err(unreachable())
    }

    async fn count_products(&self) -> Result<i64> {
        Err(unreachable())
    }

    async fn check_health(&self) -> Result<()> {
        Err(unreachable())
    }

    async fn close(&self) {}
}

#[tokio::test]
async fn list_returns_the_three_seeded_products() {
    let store = common::seeded_store().await;
    let (status, json) = get(store, "/api/products").await;

    assert_eq!(status, StatusCode::OK);
    let products = json.as_array().expect("array body");
    assert_eq!(products.len(), 3);

    let slugs: BTreeSet<&str> = products
        .iter()
        .map(|p| p["slug"].as_str().expect("slug"))
        .collect();
    assert_eq!(
        slugs,
        BTreeSet::from(["iphone-17-pro", "samsung-s24-ultra", "oneplus-12"])
    );
}

#[tokio::test]
async fn detail_returns_embedded_plans() {
    let store = common::seeded_store().await;
    let (status, json) = get(store, "/api/products/slug/iphone-17-pro").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["slug"], "iphone-17-pro");
    assert_eq!(json["badge"], "NEW");
    assert_eq!(json["colors"].as_array().expect("colors").len(), 4);

    let plans = json["emiPlans"].as_array().expect("emiPlans");
    assert_eq!(plans.len(), 7);
    assert_eq!(plans[0]["tenure"].as_u64(), Some(3));
    assert_eq!(plans[0]["monthlyPayment"].as_u64(), Some(44967));
    assert_eq!(plans[0]["interestRate"].as_u64(), Some(0));
    assert_eq!(plans[0]["cashback"].as_u64(), Some(0));
    assert_eq!(plans[6]["interestRate"].as_f64(), Some(10.5));
    assert_eq!(
        plans[0],
        serde_json::json!({ "tenure": 3, "monthlyPayment": 44967, "interestRate": 0, "cashback": 0 })
    );
    assert_eq!(plans[6]["cashback"].as_u64(), Some(7500));
}

#[tokio::test]
async fn detail_uses_camel_case_fields() {
    let store = common::seeded_store().await;
    let (_, json) = get(store, "/api/products/slug/oneplus-12").await;

    assert_eq!(json["originalPrice"].as_u64(), Some(69999));
    assert_eq!(json["price"].as_u64(), Some(64999));
    assert!(json.get("createdAt").is_some());
    assert!(json.get("updatedAt").is_some());
    assert!(json.get("original_price").is_none());
}

#[tokio::test]
async fn unknown_slug_is_404() {
    let store = common::seeded_store().await;
    let (status, json) = get(store, "/api/products/slug/nokia-3310").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Product 'nokia-3310' not found");
}

#[tokio::test]
async fn slug_lookup_is_case_sensitive() {
    let store = common::seeded_store().await;
    let (status, _) = get(store, "/api/products/slug/IPHONE-17-PRO").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_catalog_lists_nothing() {
    let (status, json) = get(Arc::new(MemoryCatalogStore::new()), "/api/products").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, Value::Array(Vec::new()));
}

#[tokio::test]
async fn reseeding_keeps_the_same_catalog() {
    let store = common::seeded_store().await;
    let (_, before) = get(store.clone(), "/api/products").await;

    emi_store::seed::run(store.as_ref()).await.expect("reseed");
    let (_, after) = get(store, "/api/products").await;

    let summary = |json: &Value| -> Vec<(String, usize)> {
        json.as_array()
            .expect("array")
            .iter()
            .map(|p| {
                (
                    p["slug"].as_str().expect("slug").to_string(),
                    p["emiPlans"].as_array().expect("plans").len(),
                )
            })
            .collect()
    };
    assert_eq!(summary(&before), summary(&after));
}

#[tokio::test]
async fn health_endpoints_report_store() {
    let store = common::seeded_store().await;

    let (status, json) = get(store.clone(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");

    let (status, json) = get(store, "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ready");
    assert_eq!(json["store"], "memory");
    assert_eq!(json["products"].as_u64(), Some(3));
}

#[tokio::test]
async fn readiness_counts_an_empty_catalog() {
    let (status, json) = get(Arc::new(MemoryCatalogStore::new()), "/health/ready").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["products"].as_u64(), Some(0));
}

#[tokio::test]
async fn store_outage_surfaces_as_500_on_every_route() {
    let store: Arc<dyn CatalogStore> = Arc::new(UnreachableStore);

    for uri in ["/api/products", "/api/products/slug/iphone-17-pro", "/health/ready"] {
        let (status, json) = get(store.clone(), uri).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(
            json,
            serde_json::json!({ "message": "Catalog store unavailable" }),
            "{}",
            uri
        );
    }
}

#[tokio::test]
async fn liveness_does_not_touch_the_store() {
    let (status, json) = get(Arc::new(UnreachableStore), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[test]
fn invalid_cors_origin_is_a_config_error() {
    let mut config = common::test_config();
    config.cors.allowed_origins = vec!["bad\norigin".to_string()];

    let result = emi_store::app::build(&config, Arc::new(MemoryCatalogStore::new()));
    assert!(matches!(result, Err(emi_store::AppError::ConfigError(_))));
}
