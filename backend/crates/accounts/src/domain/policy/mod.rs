//! Access Policy
//!
//! Page states, profile sections, lifecycle actions and the resolver that
//! ties them to an actor role.

pub mod action;
pub mod page;
pub mod resolver;
pub mod section;

pub use action::LifecycleAction;
pub use page::{PageContext, PageMode, SubMode};
pub use resolver::{PasswordFormKind, RoleOption, Visibility, resolve};
pub use section::{ProfileSection, SectionAccess, SectionView};
