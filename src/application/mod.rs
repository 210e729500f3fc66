pub mod customer_service;
pub mod mappers;
pub mod order_service;
pub mod product_service;

pub use customer_service::CustomerService;
pub use order_service::OrderService;
pub use product_service::ProductService;
