use async_trait::async_trait;
use roster_core::types::EntityId;

use super::{DirectoryStore, StoreError};
use crate::models::department::{Department, NewDepartment};
use crate::models::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::repositories::{DepartmentRepo, EmployeeRepo};
use crate::DbPool;

/// PostgreSQL unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

/// [`DirectoryStore`] backed by a Postgres pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DirectoryStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn create_department(&self, input: &NewDepartment) -> Result<Department, StoreError> {
        DepartmentRepo::create(&self.pool, input)
            .await
            .map_err(|err| map_unique_violation(err, "name", &input.name))
    }

    async fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
        Ok(DepartmentRepo::list(&self.pool).await?)
    }

    async fn find_department(&self, id: EntityId) -> Result<Option<Department>, StoreError> {
        Ok(DepartmentRepo::find_by_id(&self.pool, id).await?)
    }

    async fn find_departments_by_ids(&self, ids: &[EntityId]) -> Result<Vec<Department>, StoreError> {
        Ok(DepartmentRepo::find_by_ids(&self.pool, ids).await?)
    }

    async fn create_employee(&self, input: &NewEmployee) -> Result<Employee, StoreError> {
        Ok(EmployeeRepo::create(&self.pool, input).await?)
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(EmployeeRepo::list(&self.pool).await?)
    }

    async fn find_employee(&self, id: EntityId) -> Result<Option<Employee>, StoreError> {
        Ok(EmployeeRepo::find_by_id(&self.pool, id).await?)
    }

    async fn update_employee(
        &self,
        id: EntityId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, StoreError> {
        Ok(EmployeeRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_employee(&self, id: EntityId) -> Result<bool, StoreError> {
        Ok(EmployeeRepo::delete(&self.pool, id).await?)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let employees = EmployeeRepo::delete_all(&self.pool).await?;
        let departments = DepartmentRepo::delete_all(&self.pool).await?;
        tracing::debug!(employees, departments, "Cleared directory tables");
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}

/// Turn a unique violation into [`StoreError::Duplicate`]; pass anything else through.
fn map_unique_violation(err: sqlx::Error, field: &'static str, value: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
            return StoreError::Duplicate {
                field,
                value: value.to_string(),
            };
        }
    }
    StoreError::Database(err)
}
