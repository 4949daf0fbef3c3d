//! Terminal renditions of the storefront pages. Each view is a small state
//! machine fed by a [`ProductSource`](crate::client::ProductSource).

mod detail;
mod format;
mod list;

pub use detail::{
    DetailState, DetailView, EmiConfirmation, LoadedProduct, BACK_LINK, DETAIL_ERROR_MESSAGE,
};
pub use format::{format_inr, format_rate};
pub use list::{
    detail_route, ListState, ListView, ProductCard, LIST_ERROR_MESSAGE, LIST_TITLE,
};

#[cfg(test)]
pub(crate) mod testing;
