pub mod customer;
pub mod errors;
pub mod order;
pub mod ports;
pub mod product;

#[cfg(test)]
pub mod mock;
