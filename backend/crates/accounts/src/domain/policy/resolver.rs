//! Visibility Resolver
//!
//! Decides, for an actor role, a page context, an optional target record and
//! the section currently open for editing, which profile sections are shown,
//! which of them take input, which lifecycle actions are offered and which
//! role levels can be assigned.
//!
//! Every function here is pure: same inputs, same output, no logging and no
//! I/O. The checks are advisory; nothing downstream enforces them.

use serde::Serialize;

use crate::domain::entity::user_record::UserRecord;
use crate::domain::policy::{
    action::LifecycleAction,
    page::{PageContext, PageMode, SubMode},
    section::{ProfileSection, SectionAccess, SectionView},
};
use crate::domain::value_object::{actor_role::ActorRole, target_role::TargetRole};

/// One entry of the role selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RoleOption {
    pub role: TargetRole,
    pub label: &'static str,
    pub enabled: bool,
}

/// Which password block the Security section carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PasswordFormKind {
    /// Current, new and confirm
    SelfServiceChange,
    /// New and confirm
    AdminReset,
}

impl PasswordFormKind {
    #[inline]
    pub const fn for_page(page: PageMode) -> Self {
        match page {
            PageMode::SelfService => Self::SelfServiceChange,
            PageMode::Admin => Self::AdminReset,
        }
    }

    #[inline]
    pub const fn requires_current_password(&self) -> bool {
        matches!(self, Self::SelfServiceChange)
    }

    #[inline]
    pub const fn button_label(&self) -> &'static str {
        match self {
            Self::SelfServiceChange => "Change Password",
            Self::AdminReset => "Reset Password",
        }
    }

    #[inline]
    pub const fn success_message(&self) -> &'static str {
        match self {
            Self::SelfServiceChange => "Password changed successfully!",
            Self::AdminReset => "Password reset successfully. User will be notified via email.",
        }
    }
}

/// Warning shown while an administrator works on someone else's account
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ManagingBanner {
    pub message: String,
    pub description: &'static str,
}

impl ManagingBanner {
    pub fn for_target(target: &UserRecord) -> Self {
        Self {
            message: format!("You are managing {}'s account", target.full_name()),
            description: "Changes made here will affect this user's account and will be logged for audit purposes.",
        }
    }
}

/// Everything the profile page may show for one set of inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Visibility {
    pub sections: Vec<SectionView>,
    pub actions: Vec<LifecycleAction>,
    pub role_options: Vec<RoleOption>,
    pub password_form: Option<PasswordFormKind>,
    pub managing_banner: Option<ManagingBanner>,
}

impl Visibility {
    pub fn shows(&self, section: ProfileSection) -> bool {
        self.section(section).is_some()
    }

    pub fn section(&self, section: ProfileSection) -> Option<&SectionView> {
        self.sections.iter().find(|s| s.section == section)
    }

    pub fn is_editable(&self, section: ProfileSection) -> bool {
        self.section(section).is_some_and(SectionView::is_editable)
    }

    pub fn offers(&self, action: LifecycleAction) -> bool {
        self.actions.contains(&action)
    }
}

pub fn resolve(
    actor: ActorRole,
    ctx: PageContext,
    target: Option<&UserRecord>,
    editing: Option<ProfileSection>,
) -> Visibility {
    let sections = visible_sections(actor, ctx, editing);

    let role_options = if sections
        .iter()
        .any(|s| s.section == ProfileSection::AccessPermissions)
    {
        role_options(actor)
    } else {
        Vec::new()
    };

    let password_form = sections
        .iter()
        .any(|s| s.section == ProfileSection::Security)
        .then_some(PasswordFormKind::for_page(ctx.page));

    let managing_banner = match (ctx.page, ctx.sub, target) {
        (PageMode::Admin, SubMode::View | SubMode::Edit, Some(target)) => {
            Some(ManagingBanner::for_target(target))
        }
        _ => None,
    };

    Visibility {
        sections,
        actions: target
            .map(|t| lifecycle_actions(actor, ctx, t))
            .unwrap_or_default(),
        role_options,
        password_form,
        managing_banner,
    }
}

/// Sections in display order
pub fn visible_sections(
    actor: ActorRole,
    ctx: PageContext,
    editing: Option<ProfileSection>,
) -> Vec<SectionView> {
    use ProfileSection::*;

    if ctx.is_add() {
        // Only the creation form remains
        let form = |section| SectionView {
            section,
            access: SectionAccess::Editable,
            can_begin_edit: false,
        };
        return match ctx.page {
            PageMode::Admin => vec![form(UserInformation), form(AccessPermissions)],
            PageMode::SelfService => vec![form(UserInformation)],
        };
    }

    let admin = ctx.is_admin();
    let candidates = [
        (UserInformation, true),
        (YourRole, !admin),
        (
            RolesPermissions,
            admin && actor.is_platform_admin() && ctx.sub == SubMode::View,
        ),
        (Mfa, admin && actor.is_super_admin()),
        (AccessPermissions, admin),
        (Security, true),
        (Preferences, true),
    ];

    candidates
        .into_iter()
        .filter(|(_, visible)| *visible)
        .map(|(section, _)| section_view(section, ctx, editing))
        .collect()
}

fn section_view(
    section: ProfileSection,
    ctx: PageContext,
    editing: Option<ProfileSection>,
) -> SectionView {
    let can_edit = ctx.allows_section_edit() && !section.is_descriptive();
    let open = can_edit && editing == Some(section);
    SectionView {
        section,
        access: if open {
            SectionAccess::Editable
        } else {
            SectionAccess::ReadOnly
        },
        can_begin_edit: can_edit && !open,
    }
}

/// Actions offered on a managed record, in display order
pub fn lifecycle_actions(
    actor: ActorRole,
    ctx: PageContext,
    target: &UserRecord,
) -> Vec<LifecycleAction> {
    if !ctx.is_admin() || ctx.is_add() {
        return Vec::new();
    }

    LifecycleAction::ALL
        .into_iter()
        .filter(|action| action_applies(*action, actor, target))
        .collect()
}

fn action_applies(action: LifecycleAction, actor: ActorRole, target: &UserRecord) -> bool {
    match action {
        LifecycleAction::ResendVerification => !target.verified,
        LifecycleAction::ResetSecurityLock => target.locked,
        LifecycleAction::DisableAccount => target.active,
        LifecycleAction::EnableAccount => !target.active,
        LifecycleAction::ResetMfa => actor.is_super_admin() && target.mfa_enabled,
    }
}

/// Levels 1 and 2 need a super admin; 3 to 5 are open to everyone
#[inline]
pub const fn can_assign_role(actor: ActorRole, role: TargetRole) -> bool {
    !role.is_privileged() || actor.is_super_admin()
}

pub fn role_options(actor: ActorRole) -> Vec<RoleOption> {
    TargetRole::ALL
        .into_iter()
        .map(|role| RoleOption {
            role,
            label: role.label(),
            enabled: can_assign_role(actor, role),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavItem {
    Dashboard,
    Users,
    Profile,
}

impl NavItem {
    #[inline]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::Users => "/users",
            Self::Profile => "/profile",
        }
    }

    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Users => "Users",
            Self::Profile => "Profile",
        }
    }
}

pub fn navigation(actor: ActorRole) -> Vec<NavItem> {
    let mut items = vec![NavItem::Dashboard];
    if actor.can_manage_users() {
        items.push(NavItem::Users);
    }
    items.push(NavItem::Profile);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::user_record::fixture::record;

    fn titles(v: &Visibility) -> Vec<&'static str> {
        v.sections.iter().map(|s| s.section.title()).collect()
    }

    #[test]
    fn test_admin_view_sections_by_actor() {
        let user = record("u1");
        let ctx = PageContext::admin(SubMode::View);

        let v = resolve(ActorRole::SuperAdmin, ctx, Some(&user), None);
        assert_eq!(
            titles(&v),
            vec![
                "User Information",
                "Roles & Permissions",
                "MFA",
                "Access & Permissions",
                "Security",
                "Preferences"
            ]
        );

        let v = resolve(ActorRole::PlatformAdmin, ctx, Some(&user), None);
        assert!(v.shows(ProfileSection::RolesPermissions));
        assert!(!v.shows(ProfileSection::Mfa));

        let v = resolve(ActorRole::User, ctx, Some(&user), None);
        assert!(!v.shows(ProfileSection::RolesPermissions));
        assert!(!v.shows(ProfileSection::Mfa));
        assert!(v.shows(ProfileSection::AccessPermissions));
    }

    #[test]
    fn test_view_mode_is_read_only() {
        let user = record("u1");
        let v = resolve(
            ActorRole::SuperAdmin,
            PageContext::admin(SubMode::View),
            Some(&user),
            Some(ProfileSection::UserInformation),
        );
        assert!(v.sections.iter().all(|s| !s.is_editable() && !s.can_begin_edit));
    }

    #[test]
    fn test_edit_opens_only_the_requested_section() {
        let user = record("u1");
        let v = resolve(
            ActorRole::SuperAdmin,
            PageContext::admin(SubMode::Edit),
            Some(&user),
            Some(ProfileSection::AccessPermissions),
        );
        assert!(v.is_editable(ProfileSection::AccessPermissions));
        assert!(!v.is_editable(ProfileSection::UserInformation));
        assert!(!v.shows(ProfileSection::RolesPermissions));

        let info = v.section(ProfileSection::UserInformation).unwrap();
        assert!(info.can_begin_edit);
        let mfa = v.section(ProfileSection::Mfa).unwrap();
        assert!(!mfa.can_begin_edit);
    }

    #[test]
    fn test_descriptive_section_cannot_be_opened() {
        let user = record("u1");
        let v = resolve(
            ActorRole::SuperAdmin,
            PageContext::admin(SubMode::Edit),
            Some(&user),
            Some(ProfileSection::Mfa),
        );
        assert!(!v.is_editable(ProfileSection::Mfa));
    }

    #[test]
    fn test_self_service_sections() {
        let user = record("u1");
        let v = resolve(
            ActorRole::SuperAdmin,
            PageContext::self_service(),
            Some(&user),
            Some(ProfileSection::Preferences),
        );
        assert_eq!(
            titles(&v),
            vec!["User Information", "Your Role", "Security", "Preferences"]
        );
        assert!(v.is_editable(ProfileSection::Preferences));
        assert_eq!(v.password_form, Some(PasswordFormKind::SelfServiceChange));
        assert!(v.actions.is_empty());
        assert!(v.managing_banner.is_none());
        assert!(v.role_options.is_empty());
    }

    #[test]
    fn test_add_mode_keeps_only_creation_form() {
        let v = resolve(
            ActorRole::PlatformAdmin,
            PageContext::admin(SubMode::Add),
            None,
            None,
        );
        assert_eq!(titles(&v), vec!["User Information", "Access & Permissions"]);
        assert!(v.sections.iter().all(SectionView::is_editable));
        assert!(v.actions.is_empty());
        assert!(v.password_form.is_none());
        assert!(v.managing_banner.is_none());
        assert!(!v.role_options[0].enabled);
        assert!(v.role_options[2].enabled);
    }

    #[test]
    fn test_add_mode_suppresses_actions_even_with_target() {
        let user = record("u1");
        let v = resolve(
            ActorRole::SuperAdmin,
            PageContext::admin(SubMode::Add),
            Some(&user),
            None,
        );
        assert!(v.actions.is_empty());
        assert!(!v.shows(ProfileSection::Mfa));
    }

    #[test]
    fn test_lifecycle_action_gates() {
        let ctx = PageContext::admin(SubMode::Edit);
        let mut user = record("u1");
        user.verified = true;
        user.active = false;
        user.mfa_enabled = true;
        assert_eq!(
            lifecycle_actions(ActorRole::SuperAdmin, ctx, &user),
            vec![LifecycleAction::EnableAccount, LifecycleAction::ResetMfa]
        );
        assert_eq!(
            lifecycle_actions(ActorRole::PlatformAdmin, ctx, &user),
            vec![LifecycleAction::EnableAccount]
        );
    }

    #[test]
    fn test_managing_banner() {
        let user = record("u1");
        let v = resolve(
            ActorRole::PlatformAdmin,
            PageContext::admin(SubMode::Edit),
            Some(&user),
            None,
        );
        let banner = v.managing_banner.unwrap();
        assert_eq!(banner.message, "You are managing Ada Lovelace's account");
        assert_eq!(v.password_form, Some(PasswordFormKind::AdminReset));
    }

    #[test]
    fn test_role_options() {
        let labels: Vec<_> = role_options(ActorRole::SuperAdmin)
            .iter()
            .map(|o| o.label)
            .collect();
        assert_eq!(labels, vec!["Super Admin", "Admin", "Manager", "User", "Viewer"]);
        assert!(role_options(ActorRole::SuperAdmin).iter().all(|o| o.enabled));
    }

    #[test]
    fn test_navigation() {
        assert_eq!(
            navigation(ActorRole::User),
            vec![NavItem::Dashboard, NavItem::Profile]
        );
        assert_eq!(
            navigation(ActorRole::PlatformAdmin),
            vec![NavItem::Dashboard, NavItem::Users, NavItem::Profile]
        );
    }
}
