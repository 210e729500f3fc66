pub mod customers;
pub mod health;
pub mod orders;
pub mod products;

use crate::application::{CustomerService, OrderService, ProductService};
use crate::infrastructure::{
    DieselCustomerRepository, DieselOrderRepository, DieselProductRepository,
};

pub type Customers = CustomerService<DieselCustomerRepository, DieselOrderRepository>;
pub type Products = ProductService<DieselProductRepository>;
pub type Orders =
    OrderService<DieselOrderRepository, DieselCustomerRepository, DieselProductRepository>;
