//! Request handlers.
//!
//! Handlers delegate to the repositories in `tracker_db` and map errors
//! via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod project;
