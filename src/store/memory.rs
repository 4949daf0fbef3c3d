use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    error::Result,
    models::{Product, ProductInput, validate_catalog},
};

use super::{CatalogStore, not_found};

/// In-process catalog used by tests and local demos.
pub struct MemoryCatalogStore {
    state: RwLock<MemoryState>,
}

struct MemoryState {
    products: Vec<Product>,
    next_id: i32,
}

impl Default for MemoryCatalogStore {
    fn default() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                products: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl MemoryCatalogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalogStore {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.state.read().await.products.clone())
    }

    async fn get_product_by_slug(&self, slug: &str) -> Result<Product> {
        self.state
            .read()
            .await
            .products
            .iter()
            .find(|product| product.slug == slug)
            .cloned()
            .ok_or_else(|| not_found(slug))
    }

    async fn replace_all(&self, products: Vec<ProductInput>) -> Result<usize> {
        validate_catalog(&products)?;

        let now = Utc::now();
        let mut state = self.state.write().await;

        tracing::info!("Cleared {} existing products", state.products.len());

        let first_id = state.next_id;
        let replacement: Vec<Product> = products
            .into_iter()
            .zip(first_id..)
            .map(|(input, id)| input.into_product(id, now))
            .collect();

        let count = replacement.len();
        state.next_id = first_id + count as i32;
        state.products = replacement;

        Ok(count)
    }

    async fn count_products(&self) -> Result<i64> {
        Ok(self.state.read().await.products.len() as i64)
    }

    async fn check_health(&self) -> Result<()> {
        Ok(())
    }

    async fn close(&self) {}
}
