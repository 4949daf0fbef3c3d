use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Mutex,
};

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use crate::{
    client::{ClientError, ProductSource},
    models::{Color, EmiPlan, Product},
};

pub fn sample_product(slug: &str) -> Product {
    let now = Utc::now();
    Product {
        id: 1,
        name: format!("Phone {}", slug),
        slug: slug.to_string(),
        variant: "128GB".to_string(),
        price: Decimal::from(59999),
        original_price: Decimal::from(64999),
        mrp: Decimal::from(69999),
        image: format!("https://cdn.example.com/{}.png", slug),
        badge: "NEW".to_string(),
        colors: vec![
            Color {
                name: "Obsidian".to_string(),
                code: "#202124".to_string(),
                image: Some(format!("https://cdn.example.com/{}-obsidian.png", slug)),
            },
            Color {
                name: "Porcelain".to_string(),
                code: "#f1efe9".to_string(),
                image: None,
            },
        ],
        emi_plans: vec![
            EmiPlan {
                tenure: 3,
                monthly_payment: Decimal::from(20000),
                interest_rate: Decimal::ZERO,
                cashback: Decimal::ZERO,
            },
            EmiPlan {
                tenure: 12,
                monthly_payment: Decimal::from(5400),
                interest_rate: Decimal::new(105, 1),
                cashback: Decimal::from(2000),
            },
        ],
        created_at: now,
        updated_at: now,
    }
}

/// In-memory source; `None` products means every fetch fails.
pub struct StubSource {
    products: Mutex<Option<Vec<Product>>>,
    list_calls: AtomicUsize,
}

impl StubSource {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(Some(products)),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            products: Mutex::new(None),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn set_products(&self, products: Vec<Product>) {
        *self.products.lock().unwrap() = Some(products);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn unavailable() -> ClientError {
        ClientError::Status {
            status: 503,
            url: "http://stub/api".to_string(),
        }
    }
}

#[async_trait]
impl ProductSource for StubSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.products
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(Self::unavailable)
    }

    async fn fetch_product(&self, slug: &str) -> Result<Product, ClientError> {
        let products = self.products.lock().unwrap().clone().ok_or_else(Self::unavailable)?;
        products
            .into_iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| ClientError::NotFound(slug.to_string()))
    }
}
