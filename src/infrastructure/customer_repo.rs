use diesel::dsl::exists;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::errors::{DomainError, CUSTOMER_HAS_ORDERS, EMAIL_IN_USE};
use crate::domain::ports::CustomerRepository;
use crate::schema::customer;

use super::models::{CustomerRow, NewCustomerRow};
use super::{fk_violation_as, unique_violation_as};

pub struct DieselCustomerRepository {
    pool: DbPool,
}

impl DieselCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for DieselCustomerRepository {
    fn find_by_id(&self, id: i64) -> Result<Option<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = customer::table
            .find(id)
            .select(CustomerRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Customer::from))
    }

    fn find_all(&self) -> Result<Vec<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = customer::table
            .order(customer::id.asc())
            .select(CustomerRow::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Customer::from).collect())
    }

    fn insert(&self, new_customer: &NewCustomer) -> Result<Customer, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::insert_into(customer::table)
            .values(NewCustomerRow::from(new_customer))
            .returning(CustomerRow::as_returning())
            .get_result(&mut conn)
            .map_err(unique_violation_as(EMAIL_IN_USE))?;

        Ok(row.into())
    }

    fn update(&self, id: i64, changes: &NewCustomer) -> Result<Option<Customer>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::update(customer::table.find(id))
            .set(NewCustomerRow::from(changes))
            .returning(CustomerRow::as_returning())
            .get_result(&mut conn)
            .optional()
            .map_err(unique_violation_as(EMAIL_IN_USE))?;

        Ok(row.map(Customer::from))
    }

    /// An order placed after the service-level check still blocks the delete
    /// through the foreign key.
    fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        diesel::delete(customer::table.find(id))
            .execute(&mut conn)
            .map_err(fk_violation_as(CUSTOMER_HAS_ORDERS))?;

        Ok(())
    }

    fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        Ok(diesel::select(exists(customer::table.find(id))).get_result(&mut conn)?)
    }
}
