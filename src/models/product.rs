use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::amount;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub variant: String,
    #[serde(serialize_with = "amount::serialize")]
    pub price: Decimal,
    #[serde(serialize_with = "amount::serialize")]
    pub original_price: Decimal,
    #[serde(serialize_with = "amount::serialize")]
    pub mrp: Decimal,
    pub image: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    #[sqlx(json)]
    pub colors: Vec<Color>,
    #[serde(default)]
    #[sqlx(json)]
    pub emi_plans: Vec<EmiPlan>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A color variant. Embedded in its product, never addressed on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub name: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiPlan {
    pub tenure: u32,
    #[serde(serialize_with = "amount::serialize")]
    pub monthly_payment: Decimal,
    #[serde(serialize_with = "amount::serialize")]
    pub interest_rate: Decimal,
    #[serde(default, serialize_with = "amount::serialize")]
    pub cashback: Decimal,
}

impl EmiPlan {
    pub fn is_no_cost(&self) -> bool {
        self.interest_rate.is_zero()
    }

    pub fn has_cashback(&self) -> bool {
        self.cashback > Decimal::ZERO
    }
}

impl Product {
    /// Plan shown as "EMI starting from" in summaries.
    pub fn starting_plan(&self) -> Option<&EmiPlan> {
        self.emi_plans.first()
    }

    pub fn savings(&self) -> Decimal {
        self.original_price - self.price
    }
}

/// Write shape of a product: everything the store does not assign itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub slug: String,
    pub variant: String,
    #[serde(serialize_with = "amount::serialize")]
    pub price: Decimal,
    #[serde(serialize_with = "amount::serialize")]
    pub original_price: Decimal,
    #[serde(serialize_with = "amount::serialize")]
    pub mrp: Decimal,
    pub image: String,
    #[serde(default)]
    pub badge: String,
    #[serde(default)]
    pub colors: Vec<Color>,
    #[serde(default)]
    pub emi_plans: Vec<EmiPlan>,
}

impl ProductInput {
    pub fn into_product(self, id: i32, now: DateTime<Utc>) -> Product {
        Product {
            id,
            name: self.name,
            slug: self.slug,
            variant: self.variant,
            price: self.price,
            original_price: self.original_price,
            mrp: self.mrp,
            image: self.image,
            badge: self.badge,
            colors: self.colors,
            emi_plans: self.emi_plans,
            created_at: now,
            updated_at: now,
        }
    }
}
