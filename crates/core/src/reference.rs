//! The employee → department reference as it appears on read.
//!
//! Employees store only the department id. When employees are listed the
//! store resolves that id against the departments collection; a resolved
//! reference serializes as `{ "id": ..., "name": ... }`, an unresolved one
//! (the department was removed or never existed) stays a bare id string.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// The subset of a department embedded into an employee on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentSummary {
    pub id: EntityId,
    pub name: String,
}

/// An employee's department after the populate step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepartmentRef {
    Expanded(DepartmentSummary),
    Raw(EntityId),
}

impl DepartmentRef {
    /// Resolve `id` against a department-name lookup.
    pub fn resolve(id: EntityId, names: &HashMap<EntityId, String>) -> Self {
        match names.get(&id) {
            Some(name) => Self::Expanded(DepartmentSummary {
                id,
                name: name.clone(),
            }),
            None => Self::Raw(id),
        }
    }

    /// The referenced department id, expanded or not.
    pub fn id(&self) -> EntityId {
        match self {
            Self::Expanded(summary) => summary.id,
            Self::Raw(id) => *id,
        }
    }

    /// The department name, if the reference was resolved.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Expanded(summary) => Some(&summary.name),
            Self::Raw(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;
    use uuid::Uuid;

    #[test]
    fn resolve_expands_known_department() {
        let id = Uuid::new_v4();
        let names = HashMap::from([(id, "Surgery".to_string())]);

        let reference = DepartmentRef::resolve(id, &names);

        assert_matches!(&reference, DepartmentRef::Expanded(s) if s.name == "Surgery");
        assert_eq!(reference.id(), id);
        assert_eq!(reference.name(), Some("Surgery"));
    }

    #[test]
    fn resolve_leaves_dangling_reference_raw() {
        let id = Uuid::new_v4();
        let reference = DepartmentRef::resolve(id, &HashMap::new());

        assert_eq!(reference, DepartmentRef::Raw(id));
        assert_eq!(reference.name(), None);
    }

    #[test]
    fn expanded_serializes_as_object() {
        let id = Uuid::new_v4();
        let reference = DepartmentRef::Expanded(DepartmentSummary {
            id,
            name: "Orthodontics".into(),
        });

        let value = serde_json::to_value(&reference).unwrap();
        assert_eq!(value, json!({ "id": id.to_string(), "name": "Orthodontics" }));
    }

    #[test]
    fn raw_serializes_as_plain_string() {
        let id = Uuid::new_v4();
        let value = serde_json::to_value(DepartmentRef::Raw(id)).unwrap();
        assert_eq!(value, json!(id.to_string()));
    }

    #[test]
    fn deserializes_either_shape() {
        let id = Uuid::new_v4();
        let expanded: DepartmentRef =
            serde_json::from_value(json!({ "id": id.to_string(), "name": "Surgery" })).unwrap();
        let raw: DepartmentRef = serde_json::from_value(json!(id.to_string())).unwrap();

        assert_eq!(expanded.name(), Some("Surgery"));
        assert_eq!(raw, DepartmentRef::Raw(id));
    }
}
