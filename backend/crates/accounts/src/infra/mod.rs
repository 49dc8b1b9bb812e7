//! Infrastructure Layer
//!
//! In-memory implementations of the repository traits.

pub mod avatar_store;
pub mod mock_store;

pub use avatar_store::MemoryAvatarStore;
pub use mock_store::MockUserStore;
