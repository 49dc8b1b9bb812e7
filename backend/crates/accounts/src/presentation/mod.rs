//! Presentation Layer
//!
//! Serializable view models.

pub mod dto;
