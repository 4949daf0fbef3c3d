use sqlx::{PgPool, Postgres, QueryBuilder, types::Json};

use crate::{
    error::Result,
    models::{Product, ProductInput},
};

const PRODUCT_COLUMNS: &str = "id, name, slug, variant, price, original_price, mrp, image, badge, \
     colors, emi_plans, created_at, updated_at";

pub async fn find_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(&format!(
        "SELECT {} FROM products ORDER BY id ASC",
        PRODUCT_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(&format!(
        "SELECT {} FROM products WHERE slug = $1",
        PRODUCT_COLUMNS
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn count_all(pool: &PgPool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// Deletes every product and inserts `products` in their place.
///
/// Both steps share one transaction, so a failure part-way leaves the
/// previous catalog intact.
pub async fn replace_all(pool: &PgPool, products: &[ProductInput]) -> Result<usize> {
    let mut tx = pool.begin().await?;

    let deleted = sqlx::query("DELETE FROM products")
        .execute(&mut *tx)
        .await?
        .rows_affected();

    tracing::info!("Cleared {} existing products", deleted);

    if !products.is_empty() {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO products \
             (name, slug, variant, price, original_price, mrp, image, badge, colors, emi_plans) ",
        );

        query.push_values(products, |mut row, product| {
            row.push_bind(&product.name)
                .push_bind(&product.slug)
                .push_bind(&product.variant)
                .push_bind(product.price)
                .push_bind(product.original_price)
                .push_bind(product.mrp)
                .push_bind(&product.image)
                .push_bind(&product.badge)
                .push_bind(Json(&product.colors))
                .push_bind(Json(&product.emi_plans));
        });

        query.build().execute(&mut *tx).await?;
    }

    tx.commit().await?;

    Ok(products.len())
}
