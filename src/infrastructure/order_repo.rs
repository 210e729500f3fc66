use std::collections::HashMap;

use diesel::dsl::exists;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::customer::Customer;
use crate::domain::errors::{DomainError, CUSTOMER_NOT_FOUND, NO_VALID_PRODUCTS};
use crate::domain::order::{NewOrder, Order, OrderUpdate};
use crate::domain::ports::OrderRepository;
use crate::domain::product::Product;
use crate::schema::{customer, order_products, orders, product};

use super::models::{CustomerRow, NewOrderRow, OrderProductRow, OrderRow, ProductRow};

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Takes a shared lock on the customer row for the rest of the transaction so
/// a concurrent delete cannot slip in between the check and the insert.
fn lock_customer(conn: &mut PgConnection, customer_id: i64) -> Result<(), DomainError> {
    let locked = customer::table
        .find(customer_id)
        .select(customer::id)
        .for_share()
        .get_result::<i64>(conn)
        .optional()?;

    match locked {
        Some(_) => Ok(()),
        None => Err(DomainError::not_found(CUSTOMER_NOT_FOUND)),
    }
}

/// Shares a lock on every product row the order will link to. If any of them
/// has disappeared since it was resolved, the write is refused.
fn lock_products(conn: &mut PgConnection, product_ids: &[i64]) -> Result<(), DomainError> {
    let mut wanted = product_ids.to_vec();
    wanted.sort_unstable();
    wanted.dedup();

    let locked: Vec<i64> = product::table
        .filter(product::id.eq_any(wanted.clone()))
        .select(product::id)
        .order(product::id.asc())
        .for_share()
        .load(conn)?;

    if locked.is_empty() || locked != wanted {
        return Err(DomainError::not_found(NO_VALID_PRODUCTS));
    }
    Ok(())
}

fn link_products(
    conn: &mut PgConnection,
    order_id: i64,
    product_ids: &[i64],
) -> QueryResult<usize> {
    let links: Vec<OrderProductRow> = product_ids
        .iter()
        .map(|&product_id| OrderProductRow {
            order_id,
            product_id,
        })
        .collect();

    diesel::insert_into(order_products::table)
        .values(&links)
        .execute(conn)
}

/// Materialises customer and products for each order row, preserving row order.
/// Three queries regardless of how many orders are loaded.
fn assemble(conn: &mut PgConnection, rows: Vec<OrderRow>) -> Result<Vec<Order>, DomainError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let mut customer_ids: Vec<i64> = rows.iter().map(|r| r.customer_id).collect();
    customer_ids.sort_unstable();
    customer_ids.dedup();
    let customers: HashMap<i64, Customer> = customer::table
        .filter(customer::id.eq_any(customer_ids))
        .select(CustomerRow::as_select())
        .load(conn)?
        .into_iter()
        .map(|c| (c.id, Customer::from(c)))
        .collect();

    let order_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    let links: Vec<(i64, ProductRow)> = order_products::table
        .inner_join(product::table)
        .filter(order_products::order_id.eq_any(order_ids))
        .order((order_products::order_id.asc(), order_products::product_id.asc()))
        .select((order_products::order_id, ProductRow::as_select()))
        .load(conn)?;

    let mut products: HashMap<i64, Vec<Product>> = HashMap::new();
    for (order_id, row) in links {
        products.entry(order_id).or_default().push(row.into());
    }

    rows.into_iter()
        .map(|row| -> Result<Order, DomainError> {
            let customer = customers.get(&row.customer_id).cloned().ok_or_else(|| {
                DomainError::Internal(format!("order {} has no customer row", row.id))
            })?;
            Ok(Order {
                id: row.id,
                date_created: row.date_created,
                total_amount: row.total_amount,
                customer,
                products: products.remove(&row.id).unwrap_or_default(),
            })
        })
        .collect()
}

fn assemble_one(conn: &mut PgConnection, row: OrderRow) -> Result<Order, DomainError> {
    let id = row.id;
    assemble(conn, vec![row])?
        .pop()
        .ok_or_else(|| DomainError::Internal(format!("order {} could not be loaded", id)))
}

impl OrderRepository for DieselOrderRepository {
    fn find_by_id(&self, id: i64) -> Result<Option<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.build_transaction()
            .read_only()
            .repeatable_read()
            .run::<_, DomainError, _>(|conn| {
                let row = orders::table
                    .find(id)
                    .select(OrderRow::as_select())
                    .first(conn)
                    .optional()?;

                row.map(|row| assemble_one(conn, row)).transpose()
            })
    }

    fn find_all(&self) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.build_transaction()
            .read_only()
            .repeatable_read()
            .run::<_, DomainError, _>(|conn| {
                let rows = orders::table
                    .order(orders::id.asc())
                    .select(OrderRow::as_select())
                    .load(conn)?;

                assemble(conn, rows)
            })
    }

    fn insert(&self, new_order: &NewOrder) -> Result<Order, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            lock_customer(conn, new_order.customer_id)?;
            lock_products(conn, &new_order.product_ids)?;

            let row = diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    date_created: new_order.date_created,
                    total_amount: new_order.total_amount,
                    customer_id: new_order.customer_id,
                })
                .returning(OrderRow::as_returning())
                .get_result(conn)?;

            link_products(conn, row.id, &new_order.product_ids)?;

            assemble_one(conn, row)
        })
    }

    fn update(&self, id: i64, changes: &OrderUpdate) -> Result<Option<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            lock_customer(conn, changes.customer_id)?;
            lock_products(conn, &changes.product_ids)?;

            let row = diesel::update(orders::table.find(id))
                .set((
                    orders::customer_id.eq(changes.customer_id),
                    orders::total_amount.eq(changes.total_amount),
                ))
                .returning(OrderRow::as_returning())
                .get_result(conn)
                .optional()?;

            let Some(row) = row else {
                return Ok(None);
            };

            diesel::delete(order_products::table.filter(order_products::order_id.eq(id)))
                .execute(conn)?;
            link_products(conn, id, &changes.product_ids)?;

            assemble_one(conn, row).map(Some)
        })
    }

    /// Product links go with the order through `ON DELETE CASCADE`.
    fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        diesel::delete(orders::table.find(id)).execute(&mut conn)?;

        Ok(())
    }

    fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        Ok(diesel::select(exists(orders::table.find(id))).get_result(&mut conn)?)
    }

    fn find_by_customer_id(&self, customer_id: i64) -> Result<Vec<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.build_transaction()
            .read_only()
            .repeatable_read()
            .run::<_, DomainError, _>(|conn| {
                let rows = orders::table
                    .filter(orders::customer_id.eq(customer_id))
                    .order(orders::id.asc())
                    .select(OrderRow::as_select())
                    .load(conn)?;

                assemble(conn, rows)
            })
    }

    fn exists_by_customer_id(&self, customer_id: i64) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        Ok(
            diesel::select(exists(orders::table.filter(orders::customer_id.eq(customer_id))))
                .get_result(&mut conn)?,
        )
    }

    fn find_customer_with_orders(
        &self,
        customer_id: i64,
    ) -> Result<Option<(Customer, Vec<Order>)>, DomainError> {
        let mut conn = self.pool.get()?;

        conn.build_transaction()
            .read_only()
            .repeatable_read()
            .run::<_, DomainError, _>(|conn| {
                let found = customer::table
                    .find(customer_id)
                    .select(CustomerRow::as_select())
                    .first(conn)
                    .optional()?;

                let Some(found) = found else {
                    return Ok(None);
                };

                let rows = OrderRow::belonging_to(&found)
                    .order(orders::id.asc())
                    .select(OrderRow::as_select())
                    .load(conn)?;
                let orders = assemble(conn, rows)?;

                Ok(Some((found.into(), orders)))
            })
    }
}
