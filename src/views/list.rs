use std::fmt;

use rust_decimal::Decimal;

use crate::{
    client::{ClientError, ProductSource},
    models::Product,
};

use super::format::format_inr;

pub const LIST_TITLE: &str = "Smartphone Store - EMI Plans";
pub const LIST_ERROR_MESSAGE: &str =
    "Failed to fetch products. Please make sure the backend is running.";

/// Summary of one product as shown on the list page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub name: String,
    pub variant: String,
    pub image: String,
    pub price: Decimal,
    pub original_price: Decimal,
    pub badge: Option<String>,
    pub starting_emi: Option<Decimal>,
    pub plan_count: usize,
    pub href: String,
}

impl ProductCard {
    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            variant: product.variant.clone(),
            image: product.image.clone(),
            price: product.price,
            original_price: product.original_price,
            badge: (!product.badge.is_empty()).then(|| product.badge.clone()),
            starting_emi: product.starting_plan().map(|plan| plan.monthly_payment),
            plan_count: product.emi_plans.len(),
            href: detail_route(&product.slug),
        }
    }
}

impl fmt::Display for ProductCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(badge) = &self.badge {
            writeln!(f, "[{}]", badge)?;
        }
        writeln!(f, "{}", self.name)?;
        writeln!(f, "{}", self.variant)?;
        writeln!(
            f,
            "{}  ~~{}~~",
            format_inr(self.price),
            format_inr(self.original_price)
        )?;
        match self.starting_emi {
            Some(amount) => writeln!(f, "EMI starting from {}/month", format_inr(amount))?,
            None => writeln!(f, "No EMI plans available")?,
        }
        writeln!(f, "View {} EMI plans -> {}", self.plan_count, self.href)
    }
}

pub fn detail_route(slug: &str) -> String {
    format!("/products/{}", slug)
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Error(String),
    Loaded(Vec<ProductCard>),
}

/// Product list page: one fetch per load, manual retry on failure.
#[derive(Debug, Clone)]
pub struct ListView {
    state: ListState,
}

impl Default for ListView {
    fn default() -> Self {
        Self {
            state: ListState::Loading,
        }
    }
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn cards(&self) -> &[ProductCard] {
        match &self.state {
            ListState::Loaded(cards) => cards,
            _ => &[],
        }
    }

    pub fn apply(&mut self, result: Result<Vec<Product>, ClientError>) {
        self.state = match result {
            Ok(products) => {
                ListState::Loaded(products.iter().map(ProductCard::from_product).collect())
            }
            Err(e) => {
                tracing::warn!("Error fetching products: {}", e);
                ListState::Error(LIST_ERROR_MESSAGE.to_string())
            }
        };
    }

    pub async fn load(&mut self, source: &dyn ProductSource) {
        self.state = ListState::Loading;
        let result = source.fetch_products().await;
        self.apply(result);
    }

    /// Re-issues the fetch. Only meaningful from the error state; returns
    /// `false` and does nothing otherwise.
    pub async fn retry(&mut self, source: &dyn ProductSource) -> bool {
        if !matches!(self.state, ListState::Error(_)) {
            return false;
        }
        self.load(source).await;
        true
    }
}

impl fmt::Display for ListView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            ListState::Loading => writeln!(f, "Loading products..."),
            ListState::Error(message) => {
                writeln!(f, "{}", message)?;
                writeln!(f, "[Retry]")
            }
            ListState::Loaded(cards) => {
                writeln!(f, "{}", LIST_TITLE)?;
                for card in cards {
                    writeln!(f)?;
                    write!(f, "{}", card)?;
                }
                Ok(())
            }
        }
    }
}
