//! Domain primitives shared by the roster store and API crates.
//!
//! Nothing in here touches the database or HTTP; it holds the id/time
//! aliases, the domain error type, input validation helpers and the
//! department reference produced by the read-time join.

pub mod error;
pub mod reference;
pub mod types;
pub mod validation;
