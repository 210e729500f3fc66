use super::customer::{Customer, NewCustomer};
use super::errors::DomainError;
use super::order::{NewOrder, Order, OrderUpdate};
use super::product::{NewProduct, Product};

pub trait CustomerRepository: Send + Sync + 'static {
    fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError>;
    fn find_all(&self) -> Result<Vec<Customer>, DomainError>;
    /// Fails with `Conflict` when the email is already taken.
    fn insert(&self, customer: &NewCustomer) -> Result<Customer, DomainError>;
    /// Returns `None` when no customer has this id.
    fn update(&self, id: i64, customer: &NewCustomer) -> Result<Option<Customer>, DomainError>;
    fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
    fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;
}

pub trait ProductRepository: Send + Sync + 'static {
    fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError>;
    /// Returns the products that exist among `ids`, deduplicated, in ascending id order.
    fn find_all_by_id(&self, ids: &[i64]) -> Result<Vec<Product>, DomainError>;
    fn find_all(&self) -> Result<Vec<Product>, DomainError>;
    fn insert(&self, product: &NewProduct) -> Result<Product, DomainError>;
    fn update(&self, id: i64, product: &NewProduct) -> Result<Option<Product>, DomainError>;
    fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
    fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;
}

pub trait OrderRepository: Send + Sync + 'static {
    fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError>;
    fn find_all(&self) -> Result<Vec<Order>, DomainError>;
    /// Inserts the order row and its product links in one transaction.
    fn insert(&self, order: &NewOrder) -> Result<Order, DomainError>;
    /// Replaces customer, product links and total in one transaction.
    fn update(&self, id: i64, order: &OrderUpdate) -> Result<Option<Order>, DomainError>;
    fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
    fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;
    fn find_by_customer_id(&self, customer_id: i64) -> Result<Vec<Order>, DomainError>;
    fn exists_by_customer_id(&self, customer_id: i64) -> Result<bool, DomainError>;
    /// The customer and all of its orders, read from one snapshot.
    fn find_customer_with_orders(
        &self,
        customer_id: i64,
    ) -> Result<Option<(Customer, Vec<Order>)>, DomainError>;
}
