use diesel::dsl::exists;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::{DomainError, PRODUCT_HAS_ORDERS};
use crate::domain::ports::ProductRepository;
use crate::domain::product::{NewProduct, Product};
use crate::schema::product;

use super::fk_violation_as;
use super::models::{NewProductRow, ProductRow};

pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for DieselProductRepository {
    fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = product::table
            .find(id)
            .select(ProductRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Product::from))
    }

    fn find_all_by_id(&self, ids: &[i64]) -> Result<Vec<Product>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut conn = self.pool.get()?;

        let rows = product::table
            .filter(product::id.eq_any(ids.to_vec()))
            .order(product::id.asc())
            .select(ProductRow::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn find_all(&self) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = product::table
            .order(product::id.asc())
            .select(ProductRow::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn insert(&self, new_product: &NewProduct) -> Result<Product, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::insert_into(product::table)
            .values(NewProductRow::from(new_product))
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)?;

        Ok(row.into())
    }

    fn update(&self, id: i64, changes: &NewProduct) -> Result<Option<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::update(product::table.find(id))
            .set(NewProductRow::from(changes))
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)
            .optional()?;

        Ok(row.map(Product::from))
    }

    fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let mut conn = self.pool.get()?;

        diesel::delete(product::table.find(id))
            .execute(&mut conn)
            .map_err(fk_violation_as(PRODUCT_HAS_ORDERS))?;

        Ok(())
    }

    fn exists_by_id(&self, id: i64) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        Ok(diesel::select(exists(product::table.find(id))).get_result(&mut conn)?)
    }
}
