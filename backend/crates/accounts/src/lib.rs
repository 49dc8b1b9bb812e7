//! Accounts (User Administration) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, access policy, repository traits
//! - `application/` - Use cases and page state
//! - `infra/` - In-memory record and avatar stores
//! - `presentation/` - Serializable view DTOs
//!
//! ## Features
//! - User list with last-name search and multi-select filters
//! - Profile pages for the actor's own record, another record, or a new one
//! - Section-by-section editing with per-field validation
//! - Lifecycle actions (verification resend, lock reset, enable/disable, MFA reset)
//!   behind a confirmation step
//! - Avatar upload as image data URIs
//!
//! ## Access Model
//! - Actor roles: `user`, `platform_admin`, `super_admin`
//! - Target roles: levels 1 (Super Admin) to 5 (Viewer)
//! - Levels 1 and 2 can only be assigned by a super admin
//! - Every check is advisory; saves and actions are simulated and audited,
//!   never persisted

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Re-exports for convenience
pub use application::config::DashboardConfig;
pub use error::{AccountsError, AccountsResult};
pub use infra::{avatar_store::MemoryAvatarStore, mock_store::MockUserStore};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod policy {
    pub use crate::domain::policy::*;
}
