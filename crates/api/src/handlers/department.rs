//! Handlers for the `/departamentos` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use roster_core::error::CoreError;
use roster_core::types::parse_id;
use roster_db::models::department::{CreateDepartment, Department};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /api/departamentos
///
/// Department names are unique; the store rejects a clash with
/// `StoreError::Duplicate`, which surfaces as a validation error.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateDepartment>,
) -> AppResult<(StatusCode, Json<Department>)> {
    let new = input.into_new()?;
    let department = state.store.create_department(&new).await?;
    tracing::info!(id = %department.id, name = %department.name, "Department created");
    Ok((StatusCode::CREATED, Json(department)))
}

/// GET /api/departamentos
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Department>>> {
    let departments = state.store.list_departments().await?;
    Ok(Json(departments))
}

/// GET /api/departamentos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Department>> {
    let not_found = || CoreError::not_found("Department", &id);
    let department_id = parse_id(&id).ok_or_else(not_found)?;
    let department = state
        .store
        .find_department(department_id)
        .await?
        .ok_or_else(not_found)?;
    Ok(Json(department))
}
