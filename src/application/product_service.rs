use std::sync::Arc;

use validator::Validate;

use crate::domain::errors::{DomainError, PRODUCT_NOT_FOUND};
use crate::domain::product::NewProduct;
use crate::domain::ports::ProductRepository;
use crate::dto::{ProductRequest, ProductResponse};

pub struct ProductService<P> {
    products: Arc<P>,
}

impl<P: ProductRepository> ProductService<P> {
    pub fn new(products: Arc<P>) -> Self {
        Self { products }
    }

    pub fn list(&self) -> Result<Vec<ProductResponse>, DomainError> {
        Ok(self
            .products
            .find_all()?
            .into_iter()
            .map(ProductResponse::from)
            .collect())
    }

    pub fn get(&self, id: i64) -> Result<ProductResponse, DomainError> {
        self.products
            .find_by_id(id)?
            .map(ProductResponse::from)
            .ok_or_else(|| DomainError::not_found(PRODUCT_NOT_FOUND))
    }

    pub fn create(&self, req: ProductRequest) -> Result<ProductResponse, DomainError> {
        req.validate()?;
        let saved = self.products.insert(&NewProduct::from(req))?;
        log::info!("Created product {}", saved.id);
        Ok(saved.into())
    }

    pub fn update(&self, id: i64, req: ProductRequest) -> Result<ProductResponse, DomainError> {
        req.validate()?;
        let updated = self
            .products
            .update(id, &NewProduct::from(req))?
            .ok_or_else(|| DomainError::not_found(PRODUCT_NOT_FOUND))?;
        log::info!("Updated product {}", id);
        Ok(updated.into())
    }

    /// Orders referencing the product are not checked here; the store refuses
    /// the delete and the repository reports it as a conflict.
    pub fn delete(&self, id: i64) -> Result<(), DomainError> {
        if !self.products.exists_by_id(id)? {
            return Err(DomainError::not_found(PRODUCT_NOT_FOUND));
        }
        self.products.delete_by_id(id)?;
        log::info!("Deleted product {}", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::mock::MockProductRepository;
    use crate::domain::product::Product;

    fn request() -> ProductRequest {
        ProductRequest {
            name: "Rose".to_string(),
            brand: "A".to_string(),
            price: 50.0,
            stock_quantity: 10,
            description: Some("Damask rose".to_string()),
            concentration: Some("EDP".to_string()),
        }
    }

    fn stored(id: i64, new: &NewProduct) -> Product {
        Product {
            id,
            name: new.name.clone(),
            brand: new.brand.clone(),
            price: new.price,
            stock_quantity: new.stock_quantity,
            description: new.description.clone(),
            concentration: new.concentration.clone(),
        }
    }

    #[test]
    fn create_persists_and_maps_response() {
        let mut repo = MockProductRepository::new();
        repo.expect_insert()
            .withf(|p| p.name == "Rose" && p.description.as_deref() == Some("Damask rose"))
            .times(1)
            .returning(|p| Ok(stored(1, p)));

        let svc = ProductService::new(Arc::new(repo));
        let resp = svc.create(request()).expect("create failed");

        assert_eq!(resp.id, 1);
        assert_eq!(resp.price, 50.0);
        assert_eq!(resp.concentration.as_deref(), Some("EDP"));
    }

    #[test]
    fn create_rejects_non_positive_price_without_touching_store() {
        let mut repo = MockProductRepository::new();
        repo.expect_insert().never();

        let svc = ProductService::new(Arc::new(repo));
        let mut req = request();
        req.price = 0.0;

        let err = svc.create(req).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("price")));
    }

    #[test]
    fn get_unknown_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_find_by_id().with(eq(42)).returning(|_| Ok(None));

        let svc = ProductService::new(Arc::new(repo));
        assert_eq!(
            svc.get(42).unwrap_err(),
            DomainError::NotFound("Product not found".to_string())
        );
    }

    #[test]
    fn update_unknown_product_is_not_found() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().returning(|_, _| Ok(None));

        let svc = ProductService::new(Arc::new(repo));
        assert!(matches!(
            svc.update(5, request()),
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn update_rejects_negative_stock() {
        let mut repo = MockProductRepository::new();
        repo.expect_update().never();

        let svc = ProductService::new(Arc::new(repo));
        let mut req = request();
        req.stock_quantity = -1;
        assert!(matches!(
            svc.update(1, req),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn delete_checks_existence_first() {
        let mut repo = MockProductRepository::new();
        repo.expect_exists_by_id().with(eq(9)).returning(|_| Ok(false));
        repo.expect_delete_by_id().never();

        let svc = ProductService::new(Arc::new(repo));
        assert!(matches!(svc.delete(9), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn delete_surfaces_store_conflict() {
        let mut repo = MockProductRepository::new();
        repo.expect_exists_by_id().returning(|_| Ok(true));
        repo.expect_delete_by_id()
            .with(eq(1))
            .returning(|_| Err(DomainError::conflict(crate::domain::errors::PRODUCT_HAS_ORDERS)));

        let svc = ProductService::new(Arc::new(repo));
        assert!(matches!(svc.delete(1), Err(DomainError::Conflict(_))));
    }
}
