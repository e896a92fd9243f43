//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for inserts and patches
//!
//! Wire names are fixed explicitly via serde attributes (`camelCase`, plus
//! `avgROI`-style exceptions) so the external payload shape is part of the
//! type, not an accident of field naming.

pub mod history;
pub mod project;
