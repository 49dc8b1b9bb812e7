//! Application Layer
//!
//! Use cases and the page state the presentation layer renders.

pub mod add_user;
pub mod audit;
pub mod avatar;
pub mod change_password;
pub mod config;
pub mod dashboard;
pub mod draft;
pub mod lifecycle;
pub mod list_users;
pub mod notification;
pub mod profile_page;

// Re-exports
pub use add_user::{AddUserOutput, AddUserUseCase};
pub use audit::AuditEntry;
pub use avatar::UploadAvatarUseCase;
pub use config::DashboardConfig;
pub use dashboard::{DashboardSummary, DashboardSummaryUseCase};
pub use lifecycle::{ActionOutcome, ConfirmationModal};
pub use list_users::{UserListPage, UserRow};
pub use notification::{Notification, NotificationLevel};
pub use profile_page::{OpenProfileInput, OpenProfileUseCase, ProfilePage, SectionSaved};
