//! Dashboard Summary
//!
//! Headline counts computed from the record store.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::entity::user_record::UserRecord;
use crate::domain::repository::UserRecordRepository;
use crate::domain::value_object::{account_status::AccountStatus, target_role::TargetRole};
use crate::error::AccountsResult;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total: usize,
    pub active: usize,
    pub invited: usize,
    pub inactive: usize,
    pub verified: usize,
    pub locked: usize,
    pub mfa_enabled: usize,
    /// Count per role level, every level present
    pub by_role: BTreeMap<u8, usize>,
}

impl DashboardSummary {
    pub fn from_records(records: &[UserRecord]) -> Self {
        let mut summary = Self {
            by_role: TargetRole::ALL.iter().map(|r| (r.level(), 0)).collect(),
            ..Default::default()
        };
        for record in records {
            summary.total += 1;
            match record.status() {
                AccountStatus::Active => summary.active += 1,
                AccountStatus::Invited => summary.invited += 1,
                AccountStatus::Inactive => summary.inactive += 1,
            }
            summary.verified += usize::from(record.verified);
            summary.locked += usize::from(record.locked);
            summary.mfa_enabled += usize::from(record.mfa_enabled);
            *summary.by_role.entry(record.role.level()).or_default() += 1;
        }
        summary
    }
}

pub struct DashboardSummaryUseCase<R>
where
    R: UserRecordRepository,
{
    repo: Arc<R>,
}

impl<R> DashboardSummaryUseCase<R>
where
    R: UserRecordRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> AccountsResult<DashboardSummary> {
        let records = self.repo.list().await?;
        Ok(DashboardSummary::from_records(&records))
    }
}
