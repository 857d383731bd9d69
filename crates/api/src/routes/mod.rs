pub mod department;
pub mod employee;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /departamentos                 list, create
/// /departamentos/{id}            get
///
/// /funcionarios                  list (department populated), create
/// /funcionarios/{id}             get (department populated), update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/departamentos", department::router())
        .nest("/funcionarios", employee::router())
}
