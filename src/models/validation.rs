use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::{
    error::{AppError, Result},
    models::ProductInput,
};

/// Lowercase ASCII letters and digits, separated by single hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .split('-')
            .all(|part| {
                !part.is_empty()
                    && part
                        .bytes()
                        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
            })
}

fn require_text(field: &str, value: &str, slug: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::ValidationFailure(format!(
            "product '{}': {} must not be blank",
            slug, field
        )));
    }
    Ok(())
}

fn require_non_negative(field: &str, value: Decimal, slug: &str) -> Result<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(AppError::ValidationFailure(format!(
            "product '{}': {} must not be negative",
            slug, field
        )));
    }
    Ok(())
}

impl ProductInput {
    pub fn validate(&self) -> Result<()> {
        if !is_valid_slug(&self.slug) {
            return Err(AppError::ValidationFailure(format!(
                "invalid slug '{}'",
                self.slug
            )));
        }

        require_text("name", &self.name, &self.slug)?;
        require_text("variant", &self.variant, &self.slug)?;
        require_text("image", &self.image, &self.slug)?;

        require_non_negative("price", self.price, &self.slug)?;
        require_non_negative("originalPrice", self.original_price, &self.slug)?;
        require_non_negative("mrp", self.mrp, &self.slug)?;

        if self.price > self.original_price || self.original_price > self.mrp {
            tracing::warn!(
                "product '{}' has unexpected price ordering: price {} / original {} / mrp {}",
                self.slug,
                self.price,
                self.original_price,
                self.mrp
            );
        }

        for color in &self.colors {
            require_text("color name", &color.name, &self.slug)?;
            require_text("color code", &color.code, &self.slug)?;
        }

        for plan in &self.emi_plans {
            if plan.tenure == 0 {
                return Err(AppError::ValidationFailure(format!(
                    "product '{}': EMI tenure must be at least one month",
                    self.slug
                )));
            }
            require_non_negative("monthlyPayment", plan.monthly_payment, &self.slug)?;
            require_non_negative("interestRate", plan.interest_rate, &self.slug)?;
            require_non_negative("cashback", plan.cashback, &self.slug)?;
        }

        Ok(())
    }
}

/// Validates a full replacement catalog, including slug uniqueness across it.
pub fn validate_catalog(products: &[ProductInput]) -> Result<()> {
    let mut seen = HashSet::with_capacity(products.len());

    for product in products {
        product.validate()?;

        if !seen.insert(product.slug.as_str()) {
            return Err(AppError::ValidationFailure(format!(
                "duplicate slug '{}'",
                product.slug
            )));
        }
    }

    Ok(())
}
