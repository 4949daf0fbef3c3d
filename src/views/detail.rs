use std::fmt;

use rust_decimal::Decimal;

use crate::{
    client::{ClientError, ProductSource},
    models::{Color, EmiPlan, Product},
};

use super::format::{format_inr, format_rate};

pub const DETAIL_ERROR_MESSAGE: &str = "Product not found or failed to load.";
pub const BACK_LINK: &str = "/";

/// What the shopper confirmed when proceeding with a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct EmiConfirmation {
    pub tenure: u32,
    pub monthly_payment: Decimal,
    pub interest_rate: Decimal,
}

impl fmt::Display for EmiConfirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Proceeding with {} months EMI plan", self.tenure)?;
        writeln!(f, "Monthly Payment: {}", format_inr(self.monthly_payment))?;
        write!(f, "Interest Rate: {}", format_rate(self.interest_rate))
    }
}

/// Loaded product plus the shopper's selection. Colors and plans are keyed
/// by position, since neither carries an identifier of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedProduct {
    pub product: Product,
    selected_color: Option<usize>,
    selected_plan: Option<usize>,
}

impl LoadedProduct {
    fn new(product: Product) -> Self {
        let selected_color = (!product.colors.is_empty()).then_some(0);
        Self {
            product,
            selected_color,
            selected_plan: None,
        }
    }

    pub fn selected_color_index(&self) -> Option<usize> {
        self.selected_color
    }

    pub fn selected_plan_index(&self) -> Option<usize> {
        self.selected_plan
    }

    pub fn selected_color(&self) -> Option<&Color> {
        self.selected_color.and_then(|i| self.product.colors.get(i))
    }

    pub fn selected_plan(&self) -> Option<&EmiPlan> {
        self.selected_plan.and_then(|i| self.product.emi_plans.get(i))
    }

    pub fn hero_image(&self) -> &str {
        self.selected_color()
            .and_then(|color| color.image.as_deref())
            .unwrap_or(&self.product.image)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Error(String),
    Loaded(LoadedProduct),
}

/// Product detail page for one slug at a time.
#[derive(Debug, Clone)]
pub struct DetailView {
    slug: String,
    state: DetailState,
}

impl DetailView {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            state: DetailState::Loading,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn loaded(&self) -> Option<&LoadedProduct> {
        match &self.state {
            DetailState::Loaded(loaded) => Some(loaded),
            _ => None,
        }
    }

    /// Navigates to `slug`, dropping the previous product and selection.
    pub fn enter(&mut self, slug: impl Into<String>) {
        self.slug = slug.into();
        self.state = DetailState::Loading;
    }

    /// Resolves the fetch issued for `slug`. A response for a slug the view
    /// has already navigated away from is discarded; returns whether it was
    /// applied.
    pub fn apply(&mut self, slug: &str, result: Result<Product, ClientError>) -> bool {
        if slug != self.slug {
            tracing::debug!("Discarding stale response for '{}'", slug);
            return false;
        }

        self.state = match result {
            Ok(product) => DetailState::Loaded(LoadedProduct::new(product)),
            Err(e) => {
                tracing::warn!("Error fetching product '{}': {}", slug, e);
                DetailState::Error(DETAIL_ERROR_MESSAGE.to_string())
            }
        };
        true
    }

    pub async fn load(&mut self, source: &dyn ProductSource) {
        let slug = self.slug.clone();
        self.state = DetailState::Loading;
        let result = source.fetch_product(&slug).await;
        self.apply(&slug, result);
    }

    fn loaded_mut(&mut self) -> Option<&mut LoadedProduct> {
        match &mut self.state {
            DetailState::Loaded(loaded) => Some(loaded),
            _ => None,
        }
    }

    pub fn select_color(&mut self, index: usize) -> bool {
        match self.loaded_mut() {
            Some(loaded) if index < loaded.product.colors.len() => {
                loaded.selected_color = Some(index);
                true
            }
            _ => false,
        }
    }

    pub fn select_plan(&mut self, index: usize) -> bool {
        match self.loaded_mut() {
            Some(loaded) if index < loaded.product.emi_plans.len() => {
                loaded.selected_plan = Some(index);
                true
            }
            _ => false,
        }
    }

    pub fn hero_image(&self) -> Option<&str> {
        self.loaded().map(LoadedProduct::hero_image)
    }

    pub fn can_proceed(&self) -> bool {
        self.loaded()
            .and_then(LoadedProduct::selected_plan)
            .is_some()
    }

    pub fn proceed(&self) -> Option<EmiConfirmation> {
        self.loaded()
            .and_then(LoadedProduct::selected_plan)
            .map(|plan| EmiConfirmation {
                tenure: plan.tenure,
                monthly_payment: plan.monthly_payment,
                interest_rate: plan.interest_rate,
            })
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            DetailState::Loading => writeln!(f, "Loading product..."),
            DetailState::Error(message) => {
                writeln!(f, "{}", message)?;
                writeln!(f, "Back to Products -> {}", BACK_LINK)
            }
            DetailState::Loaded(loaded) => write!(f, "{}", loaded),
        }
    }
}

impl fmt::Display for LoadedProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let product = &self.product;

        writeln!(f, "<- Back to all products ({})", BACK_LINK)?;
        writeln!(f)?;
        if !product.badge.is_empty() {
            writeln!(f, "[{}]", product.badge)?;
        }
        writeln!(f, "{}", product.name)?;
        writeln!(f, "{}", product.variant)?;
        writeln!(f, "Image: {}", self.hero_image())?;
        writeln!(f)?;
        writeln!(f, "{}", format_inr(product.price))?;
        writeln!(
            f,
            "~~{}~~  Save {}",
            format_inr(product.original_price),
            format_inr(product.savings())
        )?;
        writeln!(f, "MRP: {}", format_inr(product.mrp))?;

        if !product.colors.is_empty() {
            writeln!(f)?;
            writeln!(f, "Available in {} colors", product.colors.len())?;
            for (index, color) in product.colors.iter().enumerate() {
                let marker = if self.selected_color == Some(index) { '*' } else { ' ' };
                writeln!(f, " {} [{}] {} ({})", marker, index + 1, color.name, color.code)?;
            }
            if let Some(color) = self.selected_color() {
                writeln!(f, "Selected: {}", color.name)?;
            }
        }

        writeln!(f)?;
        writeln!(f, "EMI plans backed by mutual funds")?;
        for (index, plan) in product.emi_plans.iter().enumerate() {
            let marker = if self.selected_plan == Some(index) { '*' } else { ' ' };
            write!(
                f,
                " {} [{}] {} x {} months, {} interest",
                marker,
                index + 1,
                format_inr(plan.monthly_payment),
                plan.tenure,
                format_rate(plan.interest_rate)
            )?;
            if plan.has_cashback() {
                write!(f, " + {} cashback", format_inr(plan.cashback))?;
            }
            if plan.is_no_cost() {
                write!(f, " (No Cost EMI)")?;
            }
            writeln!(f)?;
        }

        if let Some(plan) = self.selected_plan() {
            writeln!(f)?;
            writeln!(f, "[Proceed with {} months EMI]", plan.tenure)?;
        }
        Ok(())
    }
}
