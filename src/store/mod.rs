//! Catalog storage behind one trait, so the API layer never knows which
//! backend it is talking to.

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::{
    error::Result,
    models::{Product, ProductInput},
};

pub use memory::MemoryCatalogStore;
pub use postgres::PgCatalogStore;

#[async_trait]
pub trait CatalogStore: Send + Sync {
    fn backend_tag(&self) -> &'static str;

    /// All products in insertion order.
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Exact, case-sensitive slug lookup. Fails with `AppError::NotFound`.
    async fn get_product_by_slug(&self, slug: &str) -> Result<Product>;

    /// Replaces the whole catalog and returns the number of products inserted.
    /// The batch is validated before anything is removed.
    async fn replace_all(&self, products: Vec<ProductInput>) -> Result<usize>;

    async fn count_products(&self) -> Result<i64>;

    async fn check_health(&self) -> Result<()>;

    async fn close(&self);
}

pub(crate) fn not_found(slug: &str) -> crate::error::AppError {
    crate::error::AppError::NotFound(format!("Product '{}' not found", slug))
}
