use rust_decimal::Decimal;

use crate::models::{Color, EmiPlan, ProductInput};

const IPHONE_17_PRO_IMAGE: &str = "https://store.storeimages.cdn-apple.com/1/as-images.apple.com/is/iphone-17-pro-model-unselect-gallery-2-202509_GEO_EMEA?wid=5120&hei=2880&fmt=webp&qlt=90&.v=dU9qRExIQUlQTzVKeDd1V1dtUE1MUWFRQXQ2R0JQTk5udUZxTkR3ZVlpTEJBSVhDREVhQVF4eThVb2E3Y2VibVB1OWIzMk5Pa05pM0VtRDBtTXRCK3dUMngwVnJycmY0WkN2ZnNvOUpFNFVySWdQb3VEUWpYcGVsTHFTOGJoTUlHSUJ3a0VmOGVMVEgzQ0RPMWN2TERB&traceId=1";

fn color(name: &str, code: &str, image: &str) -> Color {
    Color {
        name: name.to_string(),
        code: code.to_string(),
        image: Some(image.to_string()),
    }
}

fn no_cost_plan(tenure: u32, monthly_payment: i64) -> EmiPlan {
    EmiPlan {
        tenure,
        monthly_payment: Decimal::from(monthly_payment),
        interest_rate: Decimal::ZERO,
        cashback: Decimal::ZERO,
    }
}

/// 10.5% interest plan with cashback.
fn interest_plan(tenure: u32, monthly_payment: i64, cashback: i64) -> EmiPlan {
    EmiPlan {
        tenure,
        monthly_payment: Decimal::from(monthly_payment),
        interest_rate: Decimal::new(105, 1),
        cashback: Decimal::from(cashback),
    }
}

/// The demonstration catalog written by the seed loader.
pub fn fixture() -> Vec<ProductInput> {
    vec![
        ProductInput {
            name: "iPhone 17 Pro".to_string(),
            slug: "iphone-17-pro".to_string(),
            variant: "256GB".to_string(),
            price: Decimal::from(127400),
            original_price: Decimal::from(134900),
            mrp: Decimal::from(134900),
            image: IPHONE_17_PRO_IMAGE.to_string(),
            badge: "NEW".to_string(),
            colors: vec![
                color("Desert Titanium", "#e4a07c", IPHONE_17_PRO_IMAGE),
                color(
                    "Natural Titanium",
                    "#c0c0c0",
                    "https://images.unsplash.com/photo-1678685888221-cda773a3dcdb?w=800&q=80",
                ),
                color(
                    "White Titanium",
                    "#f5f5f5",
                    "https://electronicparadise.in/cdn/shop/files/ZHHBBe1CSj-apple-iphone-17-pro-494741637-i-1-1200wx1200h_1.avif?v=1760446769&width=1000",
                ),
                color(
                    "Black Titanium",
                    "#2c2c2c",
                    "https://images.unsplash.com/photo-1601784551446-20c9e07cdbdb?w=800&q=80",
                ),
            ],
            emi_plans: vec![
                no_cost_plan(3, 44967),
                no_cost_plan(6, 22483),
                no_cost_plan(12, 11242),
                no_cost_plan(24, 5621),
                interest_plan(36, 4297, 7500),
                interest_plan(48, 3385, 7500),
                interest_plan(60, 2842, 7500),
            ],
        },
        ProductInput {
            name: "Samsung Galaxy S24 Ultra".to_string(),
            slug: "samsung-s24-ultra".to_string(),
            variant: "512GB".to_string(),
            price: Decimal::from(119999),
            original_price: Decimal::from(129999),
            mrp: Decimal::from(129999),
            image: "https://images.unsplash.com/photo-1610945415295-d9bbf067e59c?w=800&q=80"
                .to_string(),
            badge: "BESTSELLER".to_string(),
            colors: vec![
                color(
                    "Titanium Gray",
                    "#8c8c8c",
                    "https://images.unsplash.com/photo-1610945415295-d9bbf067e59c?w=800&q=80",
                ),
                color(
                    "Titanium Black",
                    "#1a1a1a",
                    "https://images.unsplash.com/photo-1603921326210-6edd2d60ca68?w=800&q=80",
                ),
                color(
                    "Titanium Violet",
                    "#9b59b6",
                    "https://images.unsplash.com/photo-1591337676887-a217a6970a8a?w=800&q=80",
                ),
            ],
            emi_plans: vec![
                no_cost_plan(3, 40000),
                no_cost_plan(6, 20000),
                no_cost_plan(12, 10000),
                interest_plan(24, 5300, 5000),
                interest_plan(36, 3850, 6000),
                interest_plan(48, 3100, 6000),
            ],
        },
        ProductInput {
            name: "OnePlus 12".to_string(),
            slug: "oneplus-12".to_string(),
            variant: "256GB".to_string(),
            price: Decimal::from(64999),
            original_price: Decimal::from(69999),
            mrp: Decimal::from(69999),
            image: "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=800&q=80"
                .to_string(),
            badge: "HOT DEAL".to_string(),
            colors: vec![
                color(
                    "Flowy Emerald",
                    "#50c878",
                    "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=800&q=80",
                ),
                color(
                    "Silky Black",
                    "#000000",
                    "https://images.unsplash.com/photo-1581993192008-63e896f4f744?w=800&q=80",
                ),
            ],
            emi_plans: vec![
                no_cost_plan(3, 21666),
                no_cost_plan(6, 10833),
                no_cost_plan(12, 5417),
                interest_plan(24, 2900, 3000),
                interest_plan(36, 2100, 3500),
            ],
        },
    ]
}
