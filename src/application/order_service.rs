use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use crate::domain::customer::Customer;
use crate::domain::errors::{DomainError, CUSTOMER_NOT_FOUND, NO_VALID_PRODUCTS, ORDER_NOT_FOUND};
use crate::domain::order::{order_total, NewOrder, OrderUpdate};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::domain::product::Product;
use crate::dto::{CustomerSummary, OrderRequest, OrderResponse, OrderWithCustomer};

pub struct OrderService<O, C, P> {
    orders: Arc<O>,
    customers: Arc<C>,
    products: Arc<P>,
}

impl<O, C, P> OrderService<O, C, P>
where
    O: OrderRepository,
    C: CustomerRepository,
    P: ProductRepository,
{
    pub fn new(orders: Arc<O>, customers: Arc<C>, products: Arc<P>) -> Self {
        Self {
            orders,
            customers,
            products,
        }
    }

    pub fn list(&self) -> Result<Vec<OrderResponse>, DomainError> {
        Ok(self
            .orders
            .find_all()?
            .into_iter()
            .map(OrderResponse::from)
            .collect())
    }

    pub fn get(&self, id: i64) -> Result<OrderResponse, DomainError> {
        self.orders
            .find_by_id(id)?
            .map(OrderResponse::from)
            .ok_or_else(|| DomainError::not_found(ORDER_NOT_FOUND))
    }

    /// Places a new order for the request's customer and products.
    ///
    /// Unknown product ids are skipped and duplicates count once; the order is
    /// refused only when none of the ids resolve.
    pub fn place(&self, req: OrderRequest) -> Result<OrderResponse, DomainError> {
        let customer = self.resolve_customer(req.customer_id)?;
        let products = self.resolve_products(&req.product_ids)?;

        let new_order = NewOrder {
            customer_id: customer.id,
            product_ids: products.iter().map(|p| p.id).collect(),
            total_amount: order_total(&products)?,
            date_created: now(),
        };
        let saved = self.orders.insert(&new_order)?;
        log::info!(
            "Placed order {} for customer {} ({} products, total {})",
            saved.id,
            customer.id,
            saved.products.len(),
            saved.total_amount
        );
        Ok(saved.into())
    }

    /// Replaces customer and products of an existing order and recomputes its
    /// total. The creation timestamp is kept.
    pub fn update(&self, id: i64, req: OrderRequest) -> Result<OrderResponse, DomainError> {
        if !self.orders.exists_by_id(id)? {
            return Err(DomainError::not_found(ORDER_NOT_FOUND));
        }
        let customer = self.resolve_customer(req.customer_id)?;
        let products = self.resolve_products(&req.product_ids)?;

        let changes = OrderUpdate {
            customer_id: customer.id,
            product_ids: products.iter().map(|p| p.id).collect(),
            total_amount: order_total(&products)?,
        };
        let updated = self
            .orders
            .update(id, &changes)?
            .ok_or_else(|| DomainError::not_found(ORDER_NOT_FOUND))?;
        log::info!("Updated order {} (total {})", id, updated.total_amount);
        Ok(updated.into())
    }

    pub fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.orders.exists_by_id(id)? {
            return Err(DomainError::not_found(ORDER_NOT_FOUND));
        }
        self.orders.delete_by_id(id)?;
        log::info!("Deleted order {}", id);
        Ok(())
    }

    pub fn summary(&self, id: i64) -> Result<OrderWithCustomer, DomainError> {
        let order = self
            .orders
            .find_by_id(id)?
            .ok_or_else(|| DomainError::not_found(ORDER_NOT_FOUND))?;

        Ok(OrderWithCustomer {
            id: order.id,
            products: order.product_names(),
            total_amount: order.total_amount,
            date_created: order.date_created,
            customer: CustomerSummary::from(order.customer),
        })
    }

    fn resolve_customer(&self, id: i64) -> Result<Customer, DomainError> {
        self.customers
            .find_by_id(id)?
            .ok_or_else(|| DomainError::not_found(CUSTOMER_NOT_FOUND))
    }

    fn resolve_products(&self, ids: &[i64]) -> Result<Vec<Product>, DomainError> {
        let products = self.products.find_all_by_id(ids)?;
        if products.is_empty() {
            return Err(DomainError::not_found(NO_VALID_PRODUCTS));
        }
        Ok(products)
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
