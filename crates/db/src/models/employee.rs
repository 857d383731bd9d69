//! Employee entity model, DTOs and the populated read view.

use std::collections::HashMap;

use roster_core::error::CoreError;
use roster_core::reference::DepartmentRef;
use roster_core::types::{EntityId, Timestamp};
use roster_core::validation::{normalize_text, validate_input};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `employees` table. `department_id` is the raw reference.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EntityId,
    pub name: String,
    pub role: String,
    pub department_id: EntityId,
    pub hire_date: Timestamp,
}

/// An employee with its department reference populated for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeView {
    pub id: EntityId,
    pub name: String,
    pub role: String,
    pub department_id: DepartmentRef,
    pub hire_date: Timestamp,
}

impl EmployeeView {
    /// Merge an employee with the department names fetched for the join.
    pub fn populate(employee: Employee, department_names: &HashMap<EntityId, String>) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            role: employee.role,
            department_id: DepartmentRef::resolve(employee.department_id, department_names),
            hire_date: employee.hire_date,
        }
    }
}

/// Request body for creating an employee.
///
/// Every field is optional at the serde level so that a missing field is
/// reported as a validation error rather than a body parse failure.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployee {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "role is required"),
        length(min = 1, message = "role must not be empty")
    )]
    pub role: Option<String>,
    #[validate(required(message = "departmentId is required"))]
    pub department_id: Option<EntityId>,
    /// Defaults to the creation time if omitted.
    pub hire_date: Option<Timestamp>,
}

/// Validated insert payload for an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub role: String,
    pub department_id: EntityId,
    pub hire_date: Timestamp,
}

impl CreateEmployee {
    /// Trim, validate and convert into an insert payload, stamping
    /// `hire_date` with `now` when the caller did not supply one.
    pub fn into_new(self, now: Timestamp) -> Result<NewEmployee, CoreError> {
        let normalized = Self {
            name: normalize_text(self.name),
            role: normalize_text(self.role),
            ..self
        };
        validate_input(&normalized)?;

        match (normalized.name, normalized.role, normalized.department_id) {
            (Some(name), Some(role), Some(department_id)) => Ok(NewEmployee {
                name,
                role,
                department_id,
                hire_date: normalized.hire_date.unwrap_or(now),
            }),
            _ => Err(CoreError::Validation(
                "name, role and departmentId are required".into(),
            )),
        }
    }
}

/// Request body for updating an employee. Only supplied fields change.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployee {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "role must not be empty"))]
    pub role: Option<String>,
    pub department_id: Option<EntityId>,
    pub hire_date: Option<Timestamp>,
}

impl UpdateEmployee {
    /// Trim and validate the supplied fields.
    pub fn validated(self) -> Result<Self, CoreError> {
        let normalized = Self {
            name: normalize_text(self.name),
            role: normalize_text(self.role),
            ..self
        };
        validate_input(&normalized)?;
        Ok(normalized)
    }

    /// Apply the supplied fields onto `employee`.
    pub fn apply_to(&self, employee: &mut Employee) {
        if let Some(name) = &self.name {
            employee.name = name.clone();
        }
        if let Some(role) = &self.role {
            employee.role = role.clone();
        }
        if let Some(department_id) = self.department_id {
            employee.department_id = department_id;
        }
        if let Some(hire_date) = self.hire_date {
            employee.hire_date = hire_date;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};
    use serde_json::json;
    use uuid::Uuid;

    fn sample_employee(department_id: EntityId) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: "Leslie Roche".into(),
            role: "Oral Surgeon".into(),
            department_id,
            hire_date: Utc.with_ymd_and_hms(2023, 5, 2, 9, 0, 0).unwrap(),
        }
    }

    #[test]
    fn create_without_department_id_fails() {
        let input: CreateEmployee =
            serde_json::from_value(json!({ "name": "A", "role": "Surgeon" })).unwrap();
        assert_matches!(
            input.into_new(Utc::now()),
            Err(CoreError::Validation(msg)) if msg == "departmentId is required"
        );
    }

    #[test]
    fn create_defaults_hire_date_to_now() {
        let department_id = Uuid::new_v4();
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let input = CreateEmployee {
            name: Some(" Janet Doe ".into()),
            role: Some("Assistant".into()),
            department_id: Some(department_id),
            hire_date: None,
        };

        let new = input.into_new(now).unwrap();
        assert_eq!(new.name, "Janet Doe");
        assert_eq!(new.hire_date, now);
        assert_eq!(new.department_id, department_id);
    }

    #[test]
    fn create_keeps_supplied_hire_date() {
        let hired = Utc.with_ymd_and_hms(2020, 3, 1, 0, 0, 0).unwrap();
        let input: CreateEmployee = serde_json::from_value(json!({
            "name": "John Dudley",
            "role": "Hygienist",
            "departmentId": Uuid::new_v4(),
            "hireDate": "2020-03-01T00:00:00Z",
        }))
        .unwrap();

        assert_eq!(input.into_new(Utc::now()).unwrap().hire_date, hired);
    }

    #[test]
    fn update_rejects_blank_fields() {
        let input = UpdateEmployee {
            role: Some("  ".into()),
            ..Default::default()
        };
        assert_matches!(
            input.validated(),
            Err(CoreError::Validation(msg)) if msg == "role must not be empty"
        );
    }

    #[test]
    fn update_applies_only_supplied_fields() {
        let original = sample_employee(Uuid::new_v4());
        let new_department = Uuid::new_v4();
        let changes = UpdateEmployee {
            role: Some("Head Surgeon".into()),
            department_id: Some(new_department),
            ..Default::default()
        };

        let mut updated = original.clone();
        changes.apply_to(&mut updated);

        assert_eq!(updated.name, original.name);
        assert_eq!(updated.role, "Head Surgeon");
        assert_eq!(updated.department_id, new_department);
        assert_eq!(updated.hire_date, original.hire_date);
    }

    #[test]
    fn view_serializes_expanded_department_in_camel_case() {
        let department_id = Uuid::new_v4();
        let names = HashMap::from([(department_id, "Surgery".to_string())]);
        let view = EmployeeView::populate(sample_employee(department_id), &names);

        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["departmentId"]["name"], "Surgery");
        assert_eq!(value["departmentId"]["id"], department_id.to_string());
        assert!(value["hireDate"].is_string());
    }
}
