use mockall::mock;

use super::customer::{Customer, NewCustomer};
use super::errors::DomainError;
use super::order::{NewOrder, Order, OrderUpdate};
use super::ports::{CustomerRepository, OrderRepository, ProductRepository};
use super::product::{NewProduct, Product};

mock! {
    pub CustomerRepository {}

    impl CustomerRepository for CustomerRepository {
        fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError>;
        fn find_all(&self) -> Result<Vec<Customer>, DomainError>;
        fn insert(&self, customer: &NewCustomer) -> Result<Customer, DomainError>;
        fn update(&self, id: i64, customer: &NewCustomer) -> Result<Option<Customer>, DomainError>;
        fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
        fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;
    }
}

mock! {
    pub ProductRepository {}

    impl ProductRepository for ProductRepository {
        fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError>;
        fn find_all_by_id(&self, ids: &[i64]) -> Result<Vec<Product>, DomainError>;
        fn find_all(&self) -> Result<Vec<Product>, DomainError>;
        fn insert(&self, product: &NewProduct) -> Result<Product, DomainError>;
        fn update(&self, id: i64, product: &NewProduct) -> Result<Option<Product>, DomainError>;
        fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
        fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;
    }
}

mock! {
    pub OrderRepository {}

    impl OrderRepository for OrderRepository {
        fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError>;
        fn find_all(&self) -> Result<Vec<Order>, DomainError>;
        fn insert(&self, order: &NewOrder) -> Result<Order, DomainError>;
        fn update(&self, id: i64, order: &OrderUpdate) -> Result<Option<Order>, DomainError>;
        fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
        fn exists_by_id(&self, id: i64) -> Result<bool, DomainError>;
        fn find_by_customer_id(&self, customer_id: i64) -> Result<Vec<Order>, DomainError>;
        fn exists_by_customer_id(&self, customer_id: i64) -> Result<bool, DomainError>;
        fn find_customer_with_orders(
            &self,
            customer_id: i64,
        ) -> Result<Option<(Customer, Vec<Order>)>, DomainError>;
    }
}
