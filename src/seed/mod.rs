mod fixture;

pub use fixture::fixture;

use crate::{error::Result, store::CatalogStore};

/// Replaces the catalog with the demonstration fixture. Called once per
/// seed run; errors are returned to the caller untouched.
pub async fn run(store: &dyn CatalogStore) -> Result<usize> {
    let count = store.replace_all(fixture()).await?;

    tracing::info!(
        "Database seeded successfully with {} products ({} store)",
        count,
        store.backend_tag()
    );

    Ok(count)
}
