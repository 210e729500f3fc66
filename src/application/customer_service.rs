use std::sync::Arc;

use validator::Validate;

use crate::domain::customer::NewCustomer;
use crate::domain::errors::{DomainError, CUSTOMER_HAS_ORDERS, CUSTOMER_NOT_FOUND};
use crate::domain::ports::{CustomerRepository, OrderRepository};
use crate::dto::{
    CustomerRequest, CustomerResponse, CustomerWithOrders, OrderResponse, OrderSummary,
};

pub struct CustomerService<C, O> {
    customers: Arc<C>,
    orders: Arc<O>,
}

impl<C: CustomerRepository, O: OrderRepository> CustomerService<C, O> {
    pub fn new(customers: Arc<C>, orders: Arc<O>) -> Self {
        Self { customers, orders }
    }

    pub fn list(&self) -> Result<Vec<CustomerResponse>, DomainError> {
        Ok(self
            .customers
            .find_all()?
            .into_iter()
            .map(CustomerResponse::from)
            .collect())
    }

    pub fn get(&self, id: i64) -> Result<CustomerResponse, DomainError> {
        self.customers
            .find_by_id(id)?
            .map(CustomerResponse::from)
            .ok_or_else(|| DomainError::not_found(CUSTOMER_NOT_FOUND))
    }

    pub fn create(&self, req: CustomerRequest) -> Result<CustomerResponse, DomainError> {
        req.validate()?;
        let saved = self.customers.insert(&NewCustomer::from(req))?;
        log::info!("Created customer {}", saved.id);
        Ok(saved.into())
    }

    pub fn update(&self, id: i64, req: CustomerRequest) -> Result<CustomerResponse, DomainError> {
        req.validate()?;
        let updated = self
            .customers
            .update(id, &NewCustomer::from(req))?
            .ok_or_else(|| DomainError::not_found(CUSTOMER_NOT_FOUND))?;
        log::info!("Updated customer {}", id);
        Ok(updated.into())
    }

    pub fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.customers.exists_by_id(id)? {
            return Err(DomainError::not_found(CUSTOMER_NOT_FOUND));
        }
        if self.orders.exists_by_customer_id(id)? {
            log::warn!("Refusing to delete customer {} with orders", id);
            return Err(DomainError::conflict(CUSTOMER_HAS_ORDERS));
        }
        self.customers.delete_by_id(id)?;
        log::info!("Deleted customer {}", id);
        Ok(())
    }

    /// Every order placed by the customer, in full.
    pub fn orders(&self, id: i64) -> Result<Vec<OrderResponse>, DomainError> {
        if !self.customers.exists_by_id(id)? {
            return Err(DomainError::not_found(CUSTOMER_NOT_FOUND));
        }
        Ok(self
            .orders
            .find_by_customer_id(id)?
            .into_iter()
            .map(OrderResponse::from)
            .collect())
    }

    pub fn summary(&self, id: i64) -> Result<CustomerWithOrders, DomainError> {
        let (customer, orders) = self
            .orders
            .find_customer_with_orders(id)?
            .ok_or_else(|| DomainError::not_found(CUSTOMER_NOT_FOUND))?;

        Ok(CustomerWithOrders {
            id: customer.id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            orders: orders.iter().map(OrderSummary::from).collect(),
        })
    }
}
