//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the smallest shared vocabulary of the workspace:
//! - The unified [`error::app_error::AppError`] type and its result alias
//! - The [`error::kind::ErrorKind`] classification
//! - Conversions from common library errors
//!
//! Only things with a consistent meaning across every crate belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
