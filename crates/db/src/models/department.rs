//! Department entity model and DTOs.

use roster_core::error::CoreError;
use roster_core::types::EntityId;
use roster_core::validation::{normalize_text, validate_input};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `departments` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
}

/// Request body for creating a department.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateDepartment {
    #[validate(
        required(message = "name is required"),
        length(min = 1, message = "name must not be empty")
    )]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Validated insert payload for a department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDepartment {
    pub name: String,
    pub description: Option<String>,
}

impl CreateDepartment {
    /// Trim, validate and convert into an insert payload.
    ///
    /// A blank description is stored as absent.
    pub fn into_new(self) -> Result<NewDepartment, CoreError> {
        let normalized = Self {
            name: normalize_text(self.name),
            description: normalize_text(self.description).filter(|d| !d.is_empty()),
        };
        validate_input(&normalized)?;

        let name = normalized
            .name
            .ok_or_else(|| CoreError::Validation("name is required".into()))?;
        Ok(NewDepartment {
            name,
            description: normalized.description,
        })
    }
}

impl NewDepartment {
    pub fn new(name: impl Into<String>, description: Option<&str>) -> Self {
        Self {
            name: name.into(),
            description: description.map(str::to_string),
        }
    }
}
