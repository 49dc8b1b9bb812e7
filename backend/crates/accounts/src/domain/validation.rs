//! Form Validation
//!
//! Per-field error collection for the profile, add-user and password forms.
//! Every field is checked; the first failure of each field is kept.

use kernel::error::app_error::AppResult;
use serde::Serialize;
use std::fmt;

/// Form field a message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    PhonePrefix,
    PhoneNumber,
    Email,
    Role,
    TestModeOnly,
    CurrentPassword,
    NewPassword,
    ConfirmPassword,
    Avatar,
}

impl FormField {
    #[inline]
    pub const fn name(&self) -> &'static str {
        use FormField::*;
        match self {
            FirstName => "firstName",
            LastName => "lastName",
            PhonePrefix => "phonePrefix",
            PhoneNumber => "phoneNumber",
            Email => "email",
            Role => "role",
            TestModeOnly => "testModeOnly",
            CurrentPassword => "currentPassword",
            NewPassword => "newPassword",
            ConfirmPassword => "confirmPassword",
            Avatar => "avatar",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message unless the field already has one
    pub fn push(&mut self, field: FormField, message: impl Into<String>) {
        if self.get(field).is_none() {
            self.0.push(FieldError {
                field,
                message: message.into(),
            });
        }
    }

    /// Keep the value on success, record the message on failure
    pub fn capture<T>(&mut self, field: FormField, result: AppResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(field, err.message());
                None
            }
        }
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", error.field, error.message)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::error::app_error::AppError;

    #[test]
    fn test_first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        errors.push(FormField::Email, "Please enter email");
        errors.push(FormField::Email, "Please enter a valid email");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Email), Some("Please enter email"));
    }

    #[test]
    fn test_capture() {
        let mut errors = FieldErrors::new();
        let ok: Option<u8> = errors.capture(FormField::Role, Ok(3));
        assert_eq!(ok, Some(3));
        let failed: Option<u8> =
            errors.capture(FormField::PhonePrefix, Err(AppError::validation("Required")));
        assert!(failed.is_none());
        assert_eq!(errors.get(FormField::PhonePrefix), Some("Required"));
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn test_display() {
        let mut errors = FieldErrors::new();
        errors.push(FormField::FirstName, "Please enter first name");
        errors.push(FormField::ConfirmPassword, "Passwords do not match");
        assert_eq!(
            errors.to_string(),
            "firstName: Please enter first name; confirmPassword: Passwords do not match"
        );
    }
}
