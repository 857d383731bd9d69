//! Request handlers for the directory resources.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers validate input, delegate to the injected [`DirectoryStore`] and
//! map errors via [`AppError`].
//!
//! [`DirectoryStore`]: roster_db::store::DirectoryStore
//! [`AppError`]: crate::error::AppError

pub mod department;
pub mod employee;
