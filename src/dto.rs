use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

// ── Requests ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    #[validate(custom(function = "not_blank"), length(max = 255))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"), length(max = 255))]
    pub last_name: String,
    #[validate(email, length(max = 255))]
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[validate(custom(function = "not_blank"), length(max = 255))]
    pub name: String,
    #[validate(custom(function = "not_blank"), length(max = 255))]
    pub brand: String,
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub stock_quantity: i32,
    #[serde(default)]
    pub description: Option<String>,
    /// EDT, EDP or Parfum by convention.
    #[serde(default)]
    #[validate(length(max = 50))]
    pub concentration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_id: i64,
    /// Unknown ids are skipped; duplicates count once.
    pub product_ids: Vec<i64>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

// ── Responses ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub stock_quantity: i32,
    pub concentration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub customer_name: String,
    pub products: Vec<String>,
    pub total_amount: f64,
    pub date_created: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: i64,
    pub total_amount: f64,
    pub date_created: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerWithOrders {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub orders: Vec<OrderSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderWithCustomer {
    pub id: i64,
    pub customer: CustomerSummary,
    pub products: Vec<String>,
    pub total_amount: f64,
    pub date_created: NaiveDateTime,
}
