//! Value Object Module

pub mod account_status;
pub mod actor_role;
pub mod email;
pub mod person_name;
pub mod phone_number;
pub mod record_id;
pub mod sso_provider;
pub mod target_role;
pub mod timezone;
