//! Page Context
//!
//! Closed set of page states a profile can be shown in.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whose record the page shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageMode {
    /// The actor's own record
    SelfService,
    /// Someone else's record
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubMode {
    #[default]
    View,
    Edit,
    Add,
}

impl SubMode {
    /// Query value used by the list page links (`?mode=edit`)
    pub fn from_query(mode: Option<&str>) -> Self {
        match mode {
            Some("edit") => Self::Edit,
            Some("add") => Self::Add,
            _ => Self::View,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageContext {
    pub page: PageMode,
    pub sub: SubMode,
}

impl PageContext {
    pub const fn new(page: PageMode, sub: SubMode) -> Self {
        Self { page, sub }
    }

    pub const fn self_service() -> Self {
        Self::new(PageMode::SelfService, SubMode::Edit)
    }

    pub const fn admin(sub: SubMode) -> Self {
        Self::new(PageMode::Admin, sub)
    }

    #[inline]
    pub const fn is_self_service(&self) -> bool {
        matches!(self.page, PageMode::SelfService)
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self.page, PageMode::Admin)
    }

    #[inline]
    pub const fn is_add(&self) -> bool {
        matches!(self.sub, SubMode::Add)
    }

    /// Sections can be opened for editing. Own records are always editable.
    #[inline]
    pub const fn allows_section_edit(&self) -> bool {
        match (self.page, self.sub) {
            (_, SubMode::Add) => false,
            (PageMode::SelfService, _) => true,
            (PageMode::Admin, SubMode::Edit) => true,
            (PageMode::Admin, SubMode::View) => false,
        }
    }

    pub const fn title(&self) -> &'static str {
        match (self.page, self.sub) {
            (PageMode::SelfService, _) => "My Profile",
            (PageMode::Admin, SubMode::Add) => "Add New User",
            (PageMode::Admin, SubMode::Edit) => "Edit User",
            (PageMode::Admin, SubMode::View) => "User Details",
        }
    }
}

impl fmt::Display for PageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = match self.page {
            PageMode::SelfService => "self",
            PageMode::Admin => "admin",
        };
        let sub = match self.sub {
            SubMode::View => "view",
            SubMode::Edit => "edit",
            SubMode::Add => "add",
        };
        write!(f, "{}/{}", page, sub)
    }
}
