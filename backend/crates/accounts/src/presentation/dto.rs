//! View DTOs (Data Transfer Objects)
//!
//! Serializable snapshots of the page state, ready to be rendered or printed.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::dashboard::DashboardSummary;
use crate::application::list_users::{PAGE_SIZE, UserListPage, UserRow};
use crate::application::profile_page::ProfilePage;
use crate::domain::entity::user_record::UserRecord;
use crate::domain::policy::{
    ProfileSection, SectionAccess, SectionView,
    resolver::{RoleOption, navigation},
};
use crate::domain::repository::UserRecordRepository;
use crate::domain::value_object::{
    account_status::FlagTag,
    actor_role::ActorRole,
    target_role::{TargetRole, describe_level},
    timezone::Timezone,
};

const TIMESTAMP_FORMAT: &str = "%b %-d, %Y, %-I:%M %p";
const EXPIRATION_FORMAT: &str = "%B %-d, %Y";

/// Label plus tag color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TagView {
    pub label: &'static str,
    pub color: &'static str,
}

impl From<FlagTag> for TagView {
    fn from(tag: FlagTag) -> Self {
        Self {
            label: tag.label,
            color: tag.color,
        }
    }
}

// ============================================================================
// User List
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRowView {
    pub id: String,
    pub full_name: String,
    pub initials: String,
    pub email: String,
    pub role: TagView,
    pub mode_access: TagView,
    pub last_login: String,
    pub status: TagView,
    pub access: TagView,
    pub mfa: TagView,
    pub alerts: Vec<&'static str>,
    pub actions: Vec<&'static str>,
    pub edit_path: String,
}

impl From<&UserRow<'_>> for UserRowView {
    fn from(row: &UserRow<'_>) -> Self {
        let record = row.record;
        let badge = record.role_badge();
        let status = record.status();
        Self {
            id: record.id().to_string(),
            full_name: record.full_name(),
            initials: record.initials(),
            email: record.email.to_string(),
            role: TagView {
                label: badge.label,
                color: badge.color,
            },
            mode_access: record.mode_access_tag().into(),
            last_login: record.last_login_display(),
            status: TagView {
                label: status.label(),
                color: status.color(),
            },
            access: record.access_tag().into(),
            mfa: record.mfa_tag().into(),
            alerts: row.alerts.iter().map(|a| a.label()).collect(),
            actions: row.actions.iter().map(|a| a.label()).collect(),
            edit_path: row.edit_path(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListView {
    pub loading: bool,
    pub total: usize,
    /// Records matching search and filters
    pub shown: usize,
    pub total_label: String,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub search: String,
    pub active_filter_count: usize,
    pub rows: Vec<UserRowView>,
}

impl UserListView {
    pub fn from_page<R: UserRecordRepository>(page: &UserListPage<R>, now: DateTime<Utc>) -> Self {
        let shown = page.filtered_count();
        Self {
            loading: page.is_loading(),
            total: page.total_count(),
            shown,
            total_label: format!("Total {} users", shown),
            page: page.current_page(),
            page_size: PAGE_SIZE,
            page_count: page.page_count(),
            search: page.filter().search.clone(),
            active_filter_count: page.filter().active_count(),
            rows: page.page_rows(now).iter().map(UserRowView::from).collect(),
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
}

impl FieldView {
    fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            color: None,
        }
    }

    fn tag(label: &'static str, tag: FlagTag) -> Self {
        Self {
            label,
            value: tag.label.to_string(),
            color: Some(tag.color),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionViewDto {
    pub title: &'static str,
    pub editable: bool,
    pub can_begin_edit: bool,
    pub fields: Vec<FieldView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionButtonView {
    pub label: &'static str,
    pub danger: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrengthView {
    pub score: u8,
    pub label: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordFormView {
    pub button_label: &'static str,
    pub requires_current_password: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<StrengthView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerView {
    pub message: String,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TagView>,
    pub alerts: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<BannerView>,
    pub sections: Vec<SectionViewDto>,
    pub actions: Vec<ActionButtonView>,
    pub role_options: Vec<RoleOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_form: Option<PasswordFormView>,
}

impl ProfileView {
    /// `avatar` is the stored data URI, if any
    pub fn from_page(page: &ProfilePage, avatar: Option<String>, now: DateTime<Utc>) -> Self {
        let visibility = page.visibility();
        let record = page.record();

        let sections = visibility
            .sections
            .iter()
            .map(|view| section_dto(page, *view))
            .collect();

        Self {
            title: page.context().title(),
            id: record.map(|r| r.id().to_string()),
            full_name: record.map(UserRecord::full_name),
            initials: record.map(UserRecord::initials),
            avatar,
            status: record.map(|r| {
                let status = r.status();
                TagView {
                    label: status.label(),
                    color: status.color(),
                }
            }),
            alerts: record
                .map(|r| {
                    r.alerts(now, page.password_expiry_days())
                        .iter()
                        .map(|a| a.label())
                        .collect()
                })
                .unwrap_or_default(),
            banner: visibility.managing_banner.map(|b| BannerView {
                message: b.message,
                description: b.description,
            }),
            sections,
            actions: visibility
                .actions
                .iter()
                .map(|a| ActionButtonView {
                    label: a.label(),
                    danger: a.is_danger(),
                })
                .collect(),
            role_options: visibility.role_options,
            password_form: visibility.password_form.map(|kind| PasswordFormView {
                button_label: kind.button_label(),
                requires_current_password: kind.requires_current_password(),
                strength: page.password_strength().map(|s| StrengthView {
                    score: s.score,
                    label: s.label.as_str(),
                    color: s.label.color(),
                }),
            }),
        }
    }
}

fn section_dto(page: &ProfilePage, view: SectionView) -> SectionViewDto {
    let editable = view.access == SectionAccess::Editable;
    let fields = match (page.record(), editable) {
        (Some(record), false) => record_fields(view.section, record, page),
        _ => draft_fields(view.section, page),
    };
    SectionViewDto {
        title: view.section.title(),
        editable,
        can_begin_edit: view.can_begin_edit,
        fields,
    }
}

fn record_fields(section: ProfileSection, record: &UserRecord, page: &ProfilePage) -> Vec<FieldView> {
    let role = record.role_badge();
    match section {
        ProfileSection::UserInformation => vec![
            FieldView::text("Full Name", record.full_name()),
            FieldView::text("Email", record.email.to_string()),
            FieldView::text("Phone", record.phone.to_string()),
            FieldView::text("Last Login", record.last_login_display()),
            FieldView::text("Created On", record.created_on.format(TIMESTAMP_FORMAT).to_string()),
            FieldView::text("Modified On", record.modified_on.format(TIMESTAMP_FORMAT).to_string()),
        ],
        ProfileSection::YourRole => vec![FieldView::text("Role", role.label)],
        ProfileSection::RolesPermissions => vec![
            FieldView::text("Role", role.label),
            FieldView::tag("Dashboard Access", record.access_tag()),
            FieldView::tag("Security Lock", record.security_lock_tag()),
            FieldView::tag("Verified", record.verification_tag()),
        ],
        ProfileSection::Mfa => vec![
            FieldView::text("SSO Provider", record.sso_provider.label()),
            FieldView::tag("MFA Enabled", record.mfa_tag()),
        ],
        ProfileSection::AccessPermissions => vec![
            FieldView::text("Role", role.label),
            FieldView::tag("Mode Access", record.mode_access_tag()),
            FieldView::tag("Dashboard Access", record.access_tag()),
            FieldView::tag("Security Lock", record.security_lock_tag()),
            FieldView::tag("Verified", record.verification_tag()),
        ],
        ProfileSection::Security => vec![FieldView::text(
            "Password Expiration",
            record
                .password_expires_at(page.password_expiry_days())
                .format(EXPIRATION_FORMAT)
                .to_string(),
        )],
        ProfileSection::Preferences => {
            vec![FieldView::text("Timezone", Timezone::display(record.timezone))]
        }
    }
}

fn draft_fields(section: ProfileSection, page: &ProfilePage) -> Vec<FieldView> {
    let draft = page.draft();
    match section {
        ProfileSection::UserInformation => vec![
            FieldView::text("First Name", draft.first_name.clone()),
            FieldView::text("Last Name", draft.last_name.clone()),
            FieldView::text("Email", draft.email.clone()),
            FieldView::text("Phone Prefix", draft.phone_prefix.clone()),
            FieldView::text("Phone Number", draft.phone_number.clone()),
        ],
        ProfileSection::AccessPermissions => vec![
            FieldView::text(
                "Role",
                draft
                    .role
                    .map(|level| describe_level(i64::from(level)).label)
                    .unwrap_or(""),
            ),
            FieldView::text(
                "Mode Access",
                draft
                    .test_mode_only
                    .map(|t| FlagTag::mode_access(t).label)
                    .unwrap_or(""),
            ),
        ],
        ProfileSection::Preferences => {
            vec![FieldView::text("Timezone", Timezone::display(draft.timezone))]
        }
        ProfileSection::Security => Vec::new(),
        ProfileSection::YourRole | ProfileSection::RolesPermissions | ProfileSection::Mfa => {
            Vec::new()
        }
    }
}

// ============================================================================
// Dashboard
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleCountView {
    pub role: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub total_users: usize,
    pub active_users: usize,
    pub invited_users: usize,
    pub inactive_users: usize,
    pub verified: usize,
    pub locked_out: usize,
    pub mfa_enabled: usize,
    pub users_by_role: Vec<RoleCountView>,
}

impl From<&DashboardSummary> for DashboardView {
    fn from(summary: &DashboardSummary) -> Self {
        Self {
            total_users: summary.total,
            active_users: summary.active,
            invited_users: summary.invited,
            inactive_users: summary.inactive,
            verified: summary.verified,
            locked_out: summary.locked,
            mfa_enabled: summary.mfa_enabled,
            users_by_role: TargetRole::ALL
                .iter()
                .map(|role| RoleCountView {
                    role: role.label(),
                    count: summary.by_role.get(&role.level()).copied().unwrap_or(0),
                })
                .collect(),
        }
    }
}

// ============================================================================
// Navigation
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItemView {
    pub label: &'static str,
    pub path: &'static str,
}

/// Sidebar entries for the actor
pub fn navigation_view(actor: ActorRole) -> Vec<NavItemView> {
    navigation(actor)
        .into_iter()
        .map(|item| NavItemView {
            label: item.label(),
            path: item.path(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::actor_context::ActorContext;
    use crate::domain::entity::user_record::fixture::record;
    use crate::domain::policy::{PageContext, SubMode};
    use crate::domain::value_object::record_id::RecordId;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_profile_view_for_platform_admin() {
        let actor = ActorContext::new(ActorRole::PlatformAdmin, RecordId::parse_str("me").unwrap());
        let page = ProfilePage::new(actor, PageContext::admin(SubMode::View), Some(record("u1")), 90);
        let view = ProfileView::from_page(&page, None, now());

        assert_eq!(view.title, "User Details");
        assert_eq!(view.status.unwrap().label, "Invited");
        let titles: Vec<_> = view.sections.iter().map(|s| s.title).collect();
        assert!(titles.contains(&"Roles & Permissions"));
        assert!(!titles.contains(&"MFA"));
        let actions: Vec<_> = view.actions.iter().map(|a| a.label).collect();
        assert_eq!(actions, vec!["Resend Verification Email", "Disable Account"]);
        assert!(view.banner.is_some());

        let security = view.sections.iter().find(|s| s.title == "Security").unwrap();
        assert_eq!(security.fields[0].value, "April 10, 2025");
    }

    #[test]
    fn test_profile_json_shape() {
        let actor = ActorContext::new(ActorRole::SuperAdmin, RecordId::parse_str("me").unwrap());
        let page = ProfilePage::new(actor, PageContext::admin(SubMode::Add), None, 90);
        let json = serde_json::to_value(ProfileView::from_page(&page, None, now())).unwrap();
        assert_eq!(json["title"], "Add New User");
        assert!(json.get("id").is_none());
        assert_eq!(json["roleOptions"][0]["enabled"], true);
        assert_eq!(json["sections"][0]["fields"][3]["value"], "+1");
    }

    #[tokio::test]
    async fn test_user_list_view_paging() {
        use crate::application::config::DashboardConfig;
        use crate::infra::MockUserStore;
        use std::sync::Arc;

        let store = Arc::new(MockUserStore::seeded().unwrap());
        let config = Arc::new(DashboardConfig::development());
        let mut page = UserListPage::new(store, config, ActorRole::SuperAdmin);

        let view = UserListView::from_page(&page, now());
        assert!(view.loading);
        assert_eq!(view.total_label, "Total 0 users");

        page.load().await.unwrap();
        page.set_search("smith");
        let json = serde_json::to_value(UserListView::from_page(&page, now())).unwrap();
        assert_eq!(json["total"], 10);
        assert_eq!(json["totalLabel"], "Total 2 users");
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["pageCount"], 1);
        assert_eq!(json["rows"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_dashboard_view() {
        let summary = DashboardSummary::from_records(&[record("a"), record("b")]);
        let view = DashboardView::from(&summary);
        assert_eq!(view.total_users, 2);
        assert_eq!(view.users_by_role[3].role, "User");
        assert_eq!(view.users_by_role[3].count, 2);
    }

    #[test]
    fn test_navigation_view() {
        let paths: Vec<_> = navigation_view(ActorRole::User)
            .iter()
            .map(|item| item.path)
            .collect();
        assert_eq!(paths, vec!["/dashboard", "/profile"]);

        let items = navigation_view(ActorRole::PlatformAdmin);
        assert_eq!(items[1], NavItemView { label: "Users", path: "/users" });
    }
}
