//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` create/update DTOs where the table has a mutation path

pub mod category;
pub mod model;
pub mod platform;
pub mod prompt;
pub mod role;
pub mod session;
pub mod submission;
pub mod user;
