//! Platform Crate - Technical Infrastructure
//!
//! Shared technical helpers with no account-domain knowledge:
//! - Clear-text password validation and strength scoring
//! - Image data-URI encoding for avatars

pub mod data_uri;
pub mod password;
