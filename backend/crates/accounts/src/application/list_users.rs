//! User List Page
//!
//! Loads every record after the configured delay, then filters in memory.
//! Until the load finishes the page reports itself as loading and holds no
//! rows; the whole list becomes visible at once. The table shows
//! [`PAGE_SIZE`] rows per page.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::DashboardConfig;
use crate::domain::entity::user_record::{UserAlert, UserRecord};
use crate::domain::filter::{FilterValue, UserFilter};
use crate::domain::policy::{LifecycleAction, PageContext, SubMode, resolver::lifecycle_actions};
use crate::domain::repository::UserRecordRepository;
use crate::domain::value_object::actor_role::ActorRole;
use crate::error::AccountsResult;

/// Rows per table page
pub const PAGE_SIZE: usize = 10;

/// One table row with what the row menu offers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow<'a> {
    pub record: &'a UserRecord,
    pub actions: Vec<LifecycleAction>,
    pub alerts: Vec<UserAlert>,
}

impl UserRow<'_> {
    /// Target of the row's "Edit" button
    pub fn edit_path(&self) -> String {
        format!("/users/{}?mode=edit", self.record.id())
    }
}

pub struct UserListPage<R>
where
    R: UserRecordRepository,
{
    repo: Arc<R>,
    config: Arc<DashboardConfig>,
    actor: ActorRole,
    records: Option<Vec<UserRecord>>,
    filter: UserFilter,
    /// 1-based, clamped to the page count when read
    page: usize,
}

impl<R> UserListPage<R>
where
    R: UserRecordRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<DashboardConfig>, actor: ActorRole) -> Self {
        Self {
            repo,
            config,
            actor,
            records: None,
            filter: UserFilter::default(),
            page: 1,
        }
    }

    pub async fn load(&mut self) -> AccountsResult<()> {
        self.records = None;
        if !self.config.load_delay.is_zero() {
            tokio::time::sleep(self.config.load_delay).await;
        }
        let records = self.repo.list().await?;
        tracing::info!(count = records.len(), "User list loaded");
        self.records = Some(records);
        Ok(())
    }

    pub fn is_loading(&self) -> bool {
        self.records.is_none()
    }

    pub fn filter(&self) -> &UserFilter {
        &self.filter
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
        self.page = 1;
    }

    pub fn set_filter(&mut self, value: FilterValue, checked: bool) {
        self.filter.set(value, checked);
        self.page = 1;
    }

    pub fn toggle_filter(&mut self, value: FilterValue) -> bool {
        self.page = 1;
        self.filter.toggle(value)
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
        self.page = 1;
    }

    pub fn total_count(&self) -> usize {
        self.records.as_ref().map_or(0, Vec::len)
    }

    /// Records matching the search and filters
    pub fn filtered_count(&self) -> usize {
        self.records
            .as_deref()
            .map_or(0, |records| self.filter.apply(records).len())
    }

    /// At least one, so an empty table still has a page
    pub fn page_count(&self) -> usize {
        self.filtered_count().div_ceil(PAGE_SIZE).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.page.min(self.page_count())
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Rows of the current table page
    pub fn page_rows(&self, now: DateTime<Utc>) -> Vec<UserRow<'_>> {
        let skip = (self.current_page() - 1) * PAGE_SIZE;
        self.rows(now).into_iter().skip(skip).take(PAGE_SIZE).collect()
    }

    /// Filtered rows in store order; empty while loading
    pub fn rows(&self, now: DateTime<Utc>) -> Vec<UserRow<'_>> {
        let Some(records) = &self.records else {
            return Vec::new();
        };
        let ctx = PageContext::admin(SubMode::View);
        self.filter
            .apply(records)
            .into_iter()
            .map(|record| UserRow {
                record,
                actions: lifecycle_actions(self.actor, ctx, record),
                alerts: record.alerts(now, self.config.password_expiry_days),
            })
            .collect()
    }
}
