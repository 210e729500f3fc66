use chrono::NaiveDateTime;

use super::customer::Customer;
use super::errors::{DomainError, TOTAL_OUT_OF_RANGE};
use super::product::Product;

/// A persisted order with its customer and products materialised.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i64,
    pub date_created: NaiveDateTime,
    pub total_amount: f64,
    pub customer: Customer,
    /// Association order: ascending product id.
    pub products: Vec<Product>,
}

impl Order {
    pub fn product_names(&self) -> Vec<String> {
        self.products.iter().map(|p| p.name.clone()).collect()
    }
}

/// Everything needed to insert an order and its product links.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub customer_id: i64,
    pub product_ids: Vec<i64>,
    pub total_amount: f64,
    pub date_created: NaiveDateTime,
}

/// Replacement contents for an existing order. `date_created` is never touched.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderUpdate {
    pub customer_id: i64,
    pub product_ids: Vec<i64>,
    pub total_amount: f64,
}

/// Sum of the prices of the resolved product rows.
///
/// Rows are already deduplicated by the bulk lookup, so a product listed twice in
/// a request contributes its price once. A sum that overflows to infinity is a
/// validation failure.
pub fn order_total(products: &[Product]) -> Result<f64, DomainError> {
    let total: f64 = products.iter().map(|p| p.price).sum();
    if !total.is_finite() {
        return Err(DomainError::Validation(TOTAL_OUT_OF_RANGE.to_string()));
    }
    Ok(total)
}
