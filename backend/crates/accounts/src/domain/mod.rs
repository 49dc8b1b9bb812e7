//! Domain Layer
//!
//! Entities, value objects, the access policy, list filtering and repository
//! traits.

pub mod entity;
pub mod filter;
pub mod policy;
pub mod repository;
pub mod validation;
pub mod value_object;

// Re-exports
pub use entity::{actor_context::ActorContext, user_record::UserRecord};
pub use filter::{FilterValue, UserFilter};
pub use repository::{AvatarRepository, UserRecordRepository};
