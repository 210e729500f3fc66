use thiserror::Error;

pub const CUSTOMER_NOT_FOUND: &str = "Customer not found";
pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const ORDER_NOT_FOUND: &str = "Order not found";
pub const NO_VALID_PRODUCTS: &str = "No valid products found";
pub const CUSTOMER_HAS_ORDERS: &str = "Customer has orders, cannot delete";
pub const PRODUCT_HAS_ORDERS: &str = "Product is referenced by orders, cannot delete";
pub const EMAIL_IN_USE: &str = "Email already in use";
pub const TOTAL_OUT_OF_RANGE: &str = "Order total is out of range";

#[derive(Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(msg: &str) -> Self {
        DomainError::NotFound(msg.to_string())
    }

    pub fn conflict(msg: &str) -> Self {
        DomainError::Conflict(msg.to_string())
    }
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> =
            errors.field_errors().keys().map(|f| f.to_string()).collect();
        fields.sort_unstable();
        DomainError::Validation(format!("Invalid fields: {}", fields.join(", ")))
    }
}
