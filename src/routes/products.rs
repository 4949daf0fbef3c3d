use axum::{
    Json,
    extract::{Path, State},
};

use crate::{AppState, error::Result, models::Product};

pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    let products = state.store.list_products().await?;

    Ok(Json(products))
}

pub async fn get_product_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Product>> {
    let product = state.store.get_product_by_slug(&slug).await?;

    Ok(Json(product))
}
