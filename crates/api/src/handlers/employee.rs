//! Handlers for the `/funcionarios` resource.
//!
//! Reads return the populated view (department expanded to `{id, name}` when
//! it resolves); writes return the stored record with the raw department id.
//! The department reference is not checked against the departments
//! collection on write.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use roster_core::error::CoreError;
use roster_core::types::{parse_id, EntityId};
use roster_db::join;
use roster_db::models::employee::{CreateEmployee, Employee, EmployeeView, UpdateEmployee};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::MessageResponse;
use crate::state::AppState;

const ENTITY: &str = "Employee";

/// Resolve a path id, treating a malformed id as a miss.
fn employee_id(raw: &str) -> Result<EntityId, CoreError> {
    parse_id(raw).ok_or_else(|| CoreError::not_found(ENTITY, raw))
}

/// POST /api/funcionarios
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEmployee>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    let new = input.into_new(Utc::now())?;
    let employee = state.store.create_employee(&new).await?;
    tracing::info!(
        id = %employee.id,
        department_id = %employee.department_id,
        "Employee created"
    );
    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /api/funcionarios
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<EmployeeView>>> {
    let employees = join::list_employees_populated(state.store.as_ref()).await?;
    Ok(Json(employees))
}

/// GET /api/funcionarios/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeView>> {
    let employee_id = employee_id(&id)?;
    let employee = join::find_employee_populated(state.store.as_ref(), employee_id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, &id))?;
    Ok(Json(employee))
}

/// PUT /api/funcionarios/{id}
///
/// Only the supplied fields change. An unknown id is a 404 even when the body
/// would also fail validation.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateEmployee>,
) -> AppResult<Json<Employee>> {
    let employee_id = employee_id(&id)?;
    if state.store.find_employee(employee_id).await?.is_none() {
        return Err(CoreError::not_found(ENTITY, &id).into());
    }

    let changes = input.validated()?;
    let employee = state
        .store
        .update_employee(employee_id, &changes)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, &id))?;
    tracing::info!(id = %employee.id, "Employee updated");
    Ok(Json(employee))
}

/// DELETE /api/funcionarios/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let employee_id = employee_id(&id)?;
    if !state.store.delete_employee(employee_id).await? {
        return Err(CoreError::not_found(ENTITY, &id).into());
    }
    tracing::info!(id = %employee_id, "Employee deleted");
    Ok(Json(MessageResponse::new("Employee deleted successfully.")))
}
