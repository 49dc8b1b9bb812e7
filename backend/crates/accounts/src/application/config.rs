//! Application Configuration
//!
//! Configuration for the dashboard application layer.

use std::time::Duration;

use kernel::error::app_error::{AppError, AppResult};

use crate::domain::entity::user_record::PASSWORD_EXPIRY_DAYS;
use crate::domain::value_object::{actor_role::ActorRole, record_id::RecordId};

/// Simulated latency of the user list
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(500);

/// Dashboard application configuration
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Delay before the user list becomes available
    pub load_delay: Duration,
    /// Days from account creation until the password expires
    pub password_expiry_days: i64,
    /// Record opened by the self-service profile; `None` means the first record
    pub self_user_id: Option<RecordId>,
    /// Role the dashboard is operated with
    pub actor_role: ActorRole,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            load_delay: DEFAULT_LOAD_DELAY,
            password_expiry_days: PASSWORD_EXPIRY_DAYS,
            self_user_id: None,
            actor_role: ActorRole::SuperAdmin,
        }
    }
}

impl DashboardConfig {
    /// Create config for development (no simulated latency)
    pub fn development() -> Self {
        Self {
            load_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    /// Read `DASHBOARD_*` variables, falling back to defaults for unset ones
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup("DASHBOARD_LOAD_DELAY_MS") {
            let ms: u64 = raw.trim().parse().map_err(|e| {
                AppError::bad_request(format!("Invalid DASHBOARD_LOAD_DELAY_MS: {:?}", raw))
                    .with_source(e)
            })?;
            config.load_delay = Duration::from_millis(ms);
        }

        if let Some(raw) = lookup("DASHBOARD_PASSWORD_EXPIRY_DAYS") {
            let days: u32 = raw.trim().parse().map_err(|e| {
                AppError::bad_request(format!(
                    "Invalid DASHBOARD_PASSWORD_EXPIRY_DAYS: {:?}",
                    raw
                ))
                .with_source(e)
            })?;
            config.password_expiry_days = i64::from(days);
        }

        if let Some(raw) = lookup("DASHBOARD_SELF_USER_ID") {
            if !raw.trim().is_empty() {
                config.self_user_id = Some(RecordId::parse_str(raw.trim())?);
            }
        }

        if let Some(raw) = lookup("DASHBOARD_ACTOR_ROLE") {
            config.actor_role = ActorRole::from_code(raw.trim());
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.load_delay, Duration::from_millis(500));
        assert_eq!(config.password_expiry_days, 90);
        assert!(config.self_user_id.is_none());
        assert_eq!(config.actor_role, ActorRole::SuperAdmin);
        assert_eq!(DashboardConfig::development().load_delay, Duration::ZERO);
    }

    #[test]
    fn test_overrides() {
        let config = DashboardConfig::from_lookup(lookup(&[
            ("DASHBOARD_LOAD_DELAY_MS", "25"),
            ("DASHBOARD_PASSWORD_EXPIRY_DAYS", "30"),
            ("DASHBOARD_SELF_USER_ID", "user_abc"),
            ("DASHBOARD_ACTOR_ROLE", "platform_admin"),
        ]))
        .unwrap();
        assert_eq!(config.load_delay, Duration::from_millis(25));
        assert_eq!(config.password_expiry_days, 30);
        assert_eq!(config.self_user_id.unwrap().as_str(), "user_abc");
        assert_eq!(config.actor_role, ActorRole::PlatformAdmin);
    }

    #[test]
    fn test_unknown_role_is_least_privileged() {
        let config =
            DashboardConfig::from_lookup(lookup(&[("DASHBOARD_ACTOR_ROLE", "root")])).unwrap();
        assert_eq!(config.actor_role, ActorRole::User);
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(DashboardConfig::from_lookup(lookup(&[("DASHBOARD_LOAD_DELAY_MS", "soon")])).is_err());
        assert!(
            DashboardConfig::from_lookup(lookup(&[("DASHBOARD_PASSWORD_EXPIRY_DAYS", "-1")]))
                .is_err()
        );
    }
}
