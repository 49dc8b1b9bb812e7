//! User List Filter
//!
//! Search text plus four multi-select categories. A record passes when it
//! matches the search and every non-empty category (AND across categories,
//! OR within one). An empty category places no constraint.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::entity::user_record::UserRecord;
use crate::domain::value_object::target_role::TargetRole;

/// Value a filter checkbox toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterValue {
    Verified(bool),
    Mfa(bool),
    Access(bool),
    Role(TargetRole),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    /// Matched against last names, case-insensitive
    pub search: String,
    pub verified: BTreeSet<bool>,
    pub mfa: BTreeSet<bool>,
    pub access: BTreeSet<bool>,
    pub role: BTreeSet<TargetRole>,
}

impl UserFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Builder form of [`UserFilter::set`] with `checked = true`
    pub fn with(mut self, value: FilterValue) -> Self {
        self.set(value, true);
        self
    }

    /// Check or uncheck one value
    pub fn set(&mut self, value: FilterValue, checked: bool) {
        fn apply<T: Ord>(set: &mut BTreeSet<T>, v: T, checked: bool) {
            if checked {
                set.insert(v);
            } else {
                set.remove(&v);
            }
        }
        match value {
            FilterValue::Verified(v) => apply(&mut self.verified, v, checked),
            FilterValue::Mfa(v) => apply(&mut self.mfa, v, checked),
            FilterValue::Access(v) => apply(&mut self.access, v, checked),
            FilterValue::Role(r) => apply(&mut self.role, r, checked),
        }
    }

    /// Flip one value; returns whether it is now checked
    pub fn toggle(&mut self, value: FilterValue) -> bool {
        let checked = !self.is_checked(value);
        self.set(value, checked);
        checked
    }

    pub fn is_checked(&self, value: FilterValue) -> bool {
        match value {
            FilterValue::Verified(v) => self.verified.contains(&v),
            FilterValue::Mfa(v) => self.mfa.contains(&v),
            FilterValue::Access(v) => self.access.contains(&v),
            FilterValue::Role(r) => self.role.contains(&r),
        }
    }

    /// Uncheck every category; search text is kept
    pub fn clear(&mut self) {
        self.verified.clear();
        self.mfa.clear();
        self.access.clear();
        self.role.clear();
    }

    /// Number of checked values across categories
    pub fn active_count(&self) -> usize {
        self.verified.len() + self.mfa.len() + self.access.len() + self.role.len()
    }

    pub fn has_active_filters(&self) -> bool {
        self.active_count() > 0
    }

    pub fn matches(&self, user: &UserRecord) -> bool {
        fn allows<T: Ord>(set: &BTreeSet<T>, v: &T) -> bool {
            set.is_empty() || set.contains(v)
        }
        user.last_name_contains(&self.search)
            && allows(&self.verified, &user.verified)
            && allows(&self.mfa, &user.mfa_enabled)
            && allows(&self.access, &user.active)
            && allows(&self.role, &user.role)
    }

    /// Matching records, store order preserved
    pub fn apply<'a>(&self, users: &'a [UserRecord]) -> Vec<&'a UserRecord> {
        users.iter().filter(|u| self.matches(u)).collect()
    }
}
