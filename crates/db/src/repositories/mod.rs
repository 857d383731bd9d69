//! Postgres repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod department_repo;
pub mod employee_repo;

pub use department_repo::DepartmentRepo;
pub use employee_repo::EmployeeRepo;
