//! Shared response payload types for API handlers.

use serde::Serialize;

/// Confirmation payload for operations whose result is a message rather
/// than an entity (e.g. seeding sample data).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
