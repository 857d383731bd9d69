//! Read-time populate of the employee → department reference.
//!
//! The join is done in the application: fetch employees, collect the distinct
//! department ids they reference, fetch those departments in one call, and
//! merge. Employees whose department no longer exists keep the raw id.

use std::collections::HashMap;

use roster_core::types::EntityId;

use crate::models::employee::EmployeeView;
use crate::store::{DirectoryStore, StoreError};

/// List every employee with its department populated.
pub async fn list_employees_populated(
    store: &dyn DirectoryStore,
) -> Result<Vec<EmployeeView>, StoreError> {
    let employees = store.list_employees().await?;
    let names = department_names(store, employees.iter().map(|e| e.department_id)).await?;
    Ok(employees
        .into_iter()
        .map(|employee| EmployeeView::populate(employee, &names))
        .collect())
}

/// Fetch one employee with its department populated.
pub async fn find_employee_populated(
    store: &dyn DirectoryStore,
    id: EntityId,
) -> Result<Option<EmployeeView>, StoreError> {
    let Some(employee) = store.find_employee(id).await? else {
        return Ok(None);
    };
    let names = department_names(store, std::iter::once(employee.department_id)).await?;
    Ok(Some(EmployeeView::populate(employee, &names)))
}

async fn department_names(
    store: &dyn DirectoryStore,
    ids: impl Iterator<Item = EntityId>,
) -> Result<HashMap<EntityId, String>, StoreError> {
    let mut ids: Vec<EntityId> = ids.collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let departments = store.find_departments_by_ids(&ids).await?;
    tracing::debug!(
        requested = ids.len(),
        resolved = departments.len(),
        "Resolved department references"
    );
    Ok(departments.into_iter().map(|d| (d.id, d.name)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use roster_core::reference::DepartmentRef;
    use uuid::Uuid;

    use crate::models::department::NewDepartment;
    use crate::models::employee::NewEmployee;
    use crate::store::MemoryStore;

    fn hire(name: &str, department_id: EntityId) -> NewEmployee {
        NewEmployee {
            name: name.into(),
            role: "Assistant".into(),
            department_id,
            hire_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn list_expands_known_departments_and_keeps_dangling_raw() {
        let store = MemoryStore::new();
        let surgery = store
            .create_department(&NewDepartment::new("Surgery", None))
            .await
            .unwrap();
        let missing = Uuid::new_v4();
        store.create_employee(&hire("Leslie Roche", surgery.id)).await.unwrap();
        store.create_employee(&hire("Orphan", missing)).await.unwrap();

        let views = list_employees_populated(&store).await.unwrap();

        assert_eq!(views.len(), 2);
        assert_eq!(views[0].department_id.name(), Some("Surgery"));
        assert_eq!(views[1].department_id, DepartmentRef::Raw(missing));
    }

    #[tokio::test]
    async fn list_of_empty_store_is_empty() {
        let store = MemoryStore::new();
        assert!(list_employees_populated(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_populates_single_employee() {
        let store = MemoryStore::new();
        let ortho = store
            .create_department(&NewDepartment::new("Orthodontics", None))
            .await
            .unwrap();
        let created = store.create_employee(&hire("Travis Combs", ortho.id)).await.unwrap();

        let view = find_employee_populated(&store, created.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(view.department_id.id(), ortho.id);
        assert_eq!(view.department_id.name(), Some("Orthodontics"));

        assert!(find_employee_populated(&store, Uuid::new_v4())
            .await
            .unwrap()
            .is_none());
    }
}
