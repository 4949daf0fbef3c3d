pub(crate) mod amount;
mod product;
mod validation;

pub use product::*;
pub use validation::{is_valid_slug, validate_catalog};
