use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::product::{NewProduct, Product};
use crate::schema::{customer, order_products, orders, product};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = customer)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CustomerRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = customer)]
pub struct NewCustomerRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = product)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub stock_quantity: i32,
    pub description: Option<String>,
    pub concentration: Option<String>,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = product)]
#[diesel(treat_none_as_null = true)]
pub struct NewProductRow<'a> {
    pub name: &'a str,
    pub brand: &'a str,
    pub price: f64,
    pub stock_quantity: i32,
    pub description: Option<&'a str>,
    pub concentration: Option<&'a str>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations)]
#[diesel(table_name = orders)]
#[diesel(belongs_to(CustomerRow, foreign_key = customer_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct OrderRow {
    pub id: i64,
    pub date_created: NaiveDateTime,
    pub total_amount: f64,
    pub customer_id: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = orders)]
pub struct NewOrderRow {
    pub date_created: NaiveDateTime,
    pub total_amount: f64,
    pub customer_id: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = order_products)]
pub struct OrderProductRow {
    pub order_id: i64,
    pub product_id: i64,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
        }
    }
}

impl<'a> From<&'a NewCustomer> for NewCustomerRow<'a> {
    fn from(c: &'a NewCustomer) -> Self {
        NewCustomerRow {
            first_name: &c.first_name,
            last_name: &c.last_name,
            email: &c.email,
        }
    }
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            brand: row.brand,
            price: row.price,
            stock_quantity: row.stock_quantity,
            description: row.description,
            concentration: row.concentration,
        }
    }
}

impl<'a> From<&'a NewProduct> for NewProductRow<'a> {
    fn from(p: &'a NewProduct) -> Self {
        NewProductRow {
            name: &p.name,
            brand: &p.brand,
            price: p.price,
            stock_quantity: p.stock_quantity,
            description: p.description.as_deref(),
            concentration: p.concentration.as_deref(),
        }
    }
}
