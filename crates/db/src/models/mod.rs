//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO, converted into a fully-populated
//!   insert payload once validation passes
//! - For employees, an update DTO (all `Option` fields) and the populated read view

pub mod department;
pub mod employee;
