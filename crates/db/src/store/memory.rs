use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use roster_core::types::EntityId;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{DirectoryStore, StoreError};
use crate::models::department::{Department, NewDepartment};
use crate::models::employee::{Employee, NewEmployee, UpdateEmployee};

#[derive(Default)]
struct Collections {
    departments: Vec<Department>,
    employees: Vec<Employee>,
}

/// [`DirectoryStore`] holding both collections in process memory.
///
/// Employees are kept in insertion order; departments are returned sorted by
/// name to match the Postgres backend.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<Collections>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::Relaxed);
    }

    fn ensure_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::Relaxed) {
            return Err(StoreError::Unavailable("memory store switched off".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl DirectoryStore for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        self.ensure_available()
    }

    async fn create_department(&self, input: &NewDepartment) -> Result<Department, StoreError> {
        self.ensure_available()?;
        let mut collections = self.collections.write().await;
        if collections.departments.iter().any(|d| d.name == input.name) {
            return Err(StoreError::Duplicate {
                field: "name",
                value: input.name.clone(),
            });
        }
        let department = Department {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            description: input.description.clone(),
        };
        collections.departments.push(department.clone());
        Ok(department)
    }

    async fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
        self.ensure_available()?;
        let mut departments = self.collections.read().await.departments.clone();
        departments.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(departments)
    }

    async fn find_department(&self, id: EntityId) -> Result<Option<Department>, StoreError> {
        self.ensure_available()?;
        let collections = self.collections.read().await;
        Ok(collections.departments.iter().find(|d| d.id == id).cloned())
    }

    async fn find_departments_by_ids(&self, ids: &[EntityId]) -> Result<Vec<Department>, StoreError> {
        self.ensure_available()?;
        let collections = self.collections.read().await;
        Ok(collections
            .departments
            .iter()
            .filter(|d| ids.contains(&d.id))
            .cloned()
            .collect())
    }

    async fn create_employee(&self, input: &NewEmployee) -> Result<Employee, StoreError> {
        self.ensure_available()?;
        let employee = Employee {
            id: Uuid::new_v4(),
            name: input.name.clone(),
            role: input.role.clone(),
            department_id: input.department_id,
            hire_date: input.hire_date,
        };
        self.collections.write().await.employees.push(employee.clone());
        Ok(employee)
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        self.ensure_available()?;
        Ok(self.collections.read().await.employees.clone())
    }

    async fn find_employee(&self, id: EntityId) -> Result<Option<Employee>, StoreError> {
        self.ensure_available()?;
        let collections = self.collections.read().await;
        Ok(collections.employees.iter().find(|e| e.id == id).cloned())
    }

    async fn update_employee(
        &self,
        id: EntityId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, StoreError> {
        self.ensure_available()?;
        let mut collections = self.collections.write().await;
        let Some(employee) = collections.employees.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        input.apply_to(employee);
        Ok(Some(employee.clone()))
    }

    async fn delete_employee(&self, id: EntityId) -> Result<bool, StoreError> {
        self.ensure_available()?;
        let mut collections = self.collections.write().await;
        let before = collections.employees.len();
        collections.employees.retain(|e| e.id != id);
        Ok(collections.employees.len() < before)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.ensure_available()?;
        let mut collections = self.collections.write().await;
        collections.departments.clear();
        collections.employees.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::Utc;

    fn new_employee(department_id: EntityId) -> NewEmployee {
        NewEmployee {
            name: "Constance Smith".into(),
            role: "Chief Orthodontist".into(),
            department_id,
            hire_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn duplicate_department_name_is_rejected() {
        let store = MemoryStore::new();
        store
            .create_department(&NewDepartment::new("Surgery", None))
            .await
            .unwrap();

        let result = store
            .create_department(&NewDepartment::new("Surgery", Some("again")))
            .await;

        assert_matches!(result, Err(StoreError::Duplicate { field: "name", value }) if value == "Surgery");
        assert_eq!(store.list_departments().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn departments_list_sorted_by_name() {
        let store = MemoryStore::new();
        for name in ["Surgery", "Orthodontics", "General Dentistry"] {
            store
                .create_department(&NewDepartment::new(name, None))
                .await
                .unwrap();
        }

        let names: Vec<String> = store
            .list_departments()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, ["General Dentistry", "Orthodontics", "Surgery"]);
    }

    #[tokio::test]
    async fn find_departments_by_ids_skips_unknown() {
        let store = MemoryStore::new();
        let surgery = store
            .create_department(&NewDepartment::new("Surgery", None))
            .await
            .unwrap();

        let found = store
            .find_departments_by_ids(&[surgery.id, Uuid::new_v4()])
            .await
            .unwrap();
        assert_eq!(found, vec![surgery]);
    }

    #[tokio::test]
    async fn update_missing_employee_returns_none() {
        let store = MemoryStore::new();
        let result = store
            .update_employee(Uuid::new_v4(), &UpdateEmployee::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn update_changes_supplied_fields_only() {
        let store = MemoryStore::new();
        let created = store.create_employee(&new_employee(Uuid::new_v4())).await.unwrap();

        let updated = store
            .update_employee(
                created.id,
                &UpdateEmployee {
                    name: Some("Constance Smith-Combs".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "Constance Smith-Combs");
        assert_eq!(updated.role, created.role);
        assert_eq!(store.find_employee(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_was_removed() {
        let store = MemoryStore::new();
        let created = store.create_employee(&new_employee(Uuid::new_v4())).await.unwrap();

        assert!(store.delete_employee(created.id).await.unwrap());
        assert!(!store.delete_employee(created.id).await.unwrap());
        assert!(store.list_employees().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn unavailable_store_fails_every_operation() {
        let store = MemoryStore::new();
        store.set_unavailable(true);

        assert_matches!(store.health_check().await, Err(StoreError::Unavailable(_)));
        assert_matches!(store.list_employees().await, Err(StoreError::Unavailable(_)));

        store.set_unavailable(false);
        assert!(store.list_employees().await.unwrap().is_empty());
    }
}
