//! Actor Context
//!
//! Who is using the dashboard. Passed explicitly into every page instead of
//! living in shared global state.

use crate::domain::policy::page::PageMode;
use crate::domain::value_object::{actor_role::ActorRole, record_id::RecordId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorContext {
    pub role: ActorRole,
    /// Record the actor signs in as
    pub self_user_id: RecordId,
}

impl ActorContext {
    pub fn new(role: ActorRole, self_user_id: RecordId) -> Self {
        Self { role, self_user_id }
    }

    /// Own record opens self-service, anything else opens admin mode
    pub fn page_mode_for(&self, target: &RecordId) -> PageMode {
        if *target == self.self_user_id {
            PageMode::SelfService
        } else {
            PageMode::Admin
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_mode_for() {
        let me = RecordId::parse_str("u_me").unwrap();
        let other = RecordId::parse_str("u_other").unwrap();
        let ctx = ActorContext::new(ActorRole::PlatformAdmin, me.clone());
        assert_eq!(ctx.page_mode_for(&me), PageMode::SelfService);
        assert_eq!(ctx.page_mode_for(&other), PageMode::Admin);
    }
}
