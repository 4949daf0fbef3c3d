use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    config::DatabaseConfig,
    database,
    error::Result,
    models::{Product, ProductInput, validate_catalog},
    queries::product_queries,
};

use super::{CatalogStore, not_found};

#[derive(Clone)]
pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    /// Opens the pool and applies pending migrations.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let pool = database::create_pool(config).await?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    fn backend_tag(&self) -> &'static str {
        "postgres"
    }

    async fn list_products(&self) -> Result<Vec<Product>> {
        product_queries::find_all(&self.pool).await
    }

    async fn get_product_by_slug(&self, slug: &str) -> Result<Product> {
        product_queries::find_by_slug(&self.pool, slug)
            .await?
            .ok_or_else(|| not_found(slug))
    }

    async fn replace_all(&self, products: Vec<ProductInput>) -> Result<usize> {
        validate_catalog(&products)?;
        product_queries::replace_all(&self.pool, &products).await
    }

    async fn count_products(&self) -> Result<i64> {
        product_queries::count_all(&self.pool).await
    }

    async fn check_health(&self) -> Result<()> {
        database::check_health(&self.pool).await
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
