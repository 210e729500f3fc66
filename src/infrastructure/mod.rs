pub mod customer_repo;
pub mod models;
pub mod order_repo;
pub mod product_repo;

#[cfg(test)]
pub(crate) mod testing;

use diesel::result::{DatabaseErrorKind, Error as DieselError};

use crate::domain::errors::DomainError;

pub use customer_repo::DieselCustomerRepository;
pub use order_repo::DieselOrderRepository;
pub use product_repo::DieselProductRepository;

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<DieselError> for DomainError {
    fn from(e: DieselError) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

/// Maps a unique-constraint violation to `Conflict(msg)`; anything else is internal.
pub(crate) fn unique_violation_as(msg: &'static str) -> impl Fn(DieselError) -> DomainError {
    move |e| match e {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            DomainError::conflict(msg)
        }
        other => other.into(),
    }
}

/// Maps a foreign-key violation to `Conflict(msg)`; anything else is internal.
pub(crate) fn fk_violation_as(msg: &'static str) -> impl Fn(DieselError) -> DomainError {
    move |e| match e {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
            DomainError::conflict(msg)
        }
        other => other.into(),
    }
}
