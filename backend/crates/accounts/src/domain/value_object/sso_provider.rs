use serde::{Deserialize, Serialize};
use std::fmt;

/// Single sign-on provider linked to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum SsoProvider {
    #[default]
    None,
    Google,
    Microsoft,
}

impl SsoProvider {
    pub const ALL: [SsoProvider; 3] = [SsoProvider::None, SsoProvider::Google, SsoProvider::Microsoft];

    /// Stored value; `None` is stored as null
    #[inline]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Google => Some("google"),
            Self::Microsoft => Some("microsoft"),
        }
    }

    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "Not configured",
            Self::Google => "Google",
            Self::Microsoft => "Microsoft",
        }
    }

    /// Label of the choice on the edit form
    #[inline]
    pub const fn option_label(&self) -> &'static str {
        match self {
            Self::None => "None",
            other => other.label(),
        }
    }

    #[inline]
    pub const fn is_configured(&self) -> bool {
        !matches!(self, Self::None)
    }

    pub fn from_code(code: &str) -> Self {
        match code.to_ascii_lowercase().as_str() {
            "" | "none" => Self::None,
            "google" => Self::Google,
            "microsoft" => Self::Microsoft,
            _ => {
                tracing::warn!(code, "Unknown SSO provider, treating as not configured");
                Self::None
            }
        }
    }
}

impl From<Option<String>> for SsoProvider {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Self::from_code).unwrap_or_default()
    }
}

impl From<SsoProvider> for Option<String> {
    fn from(provider: SsoProvider) -> Self {
        provider.code().map(str::to_string)
    }
}

impl fmt::Display for SsoProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
