//! The store handle injected into HTTP handlers.
//!
//! [`DirectoryStore`] is the seam between the API and persistence. The
//! Postgres backend ([`PgStore`]) delegates to the repositories; the
//! in-memory backend ([`MemoryStore`]) keeps both collections behind a lock
//! and is used by the test suite and by runs without `DATABASE_URL`.

use async_trait::async_trait;
use roster_core::types::EntityId;

use crate::models::department::{Department, NewDepartment};
use crate::models::employee::{Employee, NewEmployee, UpdateEmployee};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Persistence failures surfaced by a [`DirectoryStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness rule was violated (department names).
    #[error("Duplicate {field}: {value}")]
    Duplicate { field: &'static str, value: String },

    /// The backend cannot serve requests right now.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// CRUD over the departments and employees collections.
///
/// Implementations store the employee's department reference verbatim and
/// never check that it resolves; see [`crate::join`] for the read-time
/// populate step.
#[async_trait]
pub trait DirectoryStore: Send + Sync {
    /// Short backend tag reported by the health endpoint.
    fn backend(&self) -> &'static str;

    async fn health_check(&self) -> Result<(), StoreError>;

    /// Insert a department. Fails with [`StoreError::Duplicate`] if the name is taken.
    async fn create_department(&self, input: &NewDepartment) -> Result<Department, StoreError>;

    /// All departments ordered by name.
    async fn list_departments(&self) -> Result<Vec<Department>, StoreError>;

    async fn find_department(&self, id: EntityId) -> Result<Option<Department>, StoreError>;

    /// Departments whose id is in `ids`; ids with no department are skipped.
    async fn find_departments_by_ids(&self, ids: &[EntityId]) -> Result<Vec<Department>, StoreError>;

    async fn create_employee(&self, input: &NewEmployee) -> Result<Employee, StoreError>;

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError>;

    async fn find_employee(&self, id: EntityId) -> Result<Option<Employee>, StoreError>;

    /// Apply the supplied fields. Returns `None` if no employee has `id`.
    async fn update_employee(
        &self,
        id: EntityId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, StoreError>;

    /// Returns `true` if an employee was removed.
    async fn delete_employee(&self, id: EntityId) -> Result<bool, StoreError>;

    /// Empty both collections.
    async fn clear(&self) -> Result<(), StoreError>;

    /// Release backend resources at shutdown.
    async fn close(&self) {}
}
