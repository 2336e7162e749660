//! Product entity model and DTOs.

use pricelist_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub artical_no: String,
    pub product_service: String,
    pub in_price: Decimal,
    pub price: Decimal,
    pub unit: String,
    pub in_stock: i32,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
///
/// `artical_no`, `product_service`, `price`, and `unit` are required by
/// deserialization; a body missing any of them is rejected before the
/// handler runs. A `price` of 0.00 is a legitimate value (free-of-charge
/// items) and passes.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProduct {
    pub artical_no: String,
    pub product_service: String,
    /// Defaults to 0.00 if omitted.
    pub in_price: Option<Decimal>,
    pub price: Decimal,
    pub unit: String,
    /// Defaults to 0 if omitted.
    pub in_stock: Option<i32>,
    pub description: Option<String>,
    /// Defaults to true if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing product. All fields are optional.
///
/// This is the whitelist of updatable columns: `id` and the timestamps are
/// system-managed and cannot be written through it.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProduct {
    pub artical_no: Option<String>,
    pub product_service: Option<String>,
    pub in_price: Option<Decimal>,
    pub price: Option<Decimal>,
    pub unit: Option<String>,
    pub in_stock: Option<i32>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

/// One page of products plus the total number of matching rows.
#[derive(Debug, Serialize)]
pub struct ProductPage {
    pub count: i64,
    pub rows: Vec<Product>,
}
