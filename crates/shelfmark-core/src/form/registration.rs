use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::form::is_blank;
use crate::messages;
use crate::validation::ValidationErrors;

/// Fields of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegistrationField {
    Email,
    Password,
    PasswordConfirm,
    Name,
}

impl RegistrationField {
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::PasswordConfirm => "passwordConfirm",
            Self::Name => "name",
        }
    }
}

impl FromStr for RegistrationField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "passwordConfirm" | "password_confirm" => Ok(Self::PasswordConfirm),
            "name" => Ok(Self::Name),
            _ => Err(Error::UnknownField {
                form: "registration",
                name: s.to_string(),
            }),
        }
    }
}

/// Current values of the registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub name: String,
}

/// Body of `POST /api/v1/auth/register`.
///
/// The confirmation field never leaves the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl RegistrationForm {
    pub fn update_field(&mut self, field: RegistrationField, value: impl Into<String>) {
        let value = value.into();
        match field {
            RegistrationField::Email => self.email = value,
            RegistrationField::Password => self.password = value,
            RegistrationField::PasswordConfirm => self.password_confirm = value,
            RegistrationField::Name => self.name = value,
        }
    }

    /// Update a field addressed by its wire name.
    pub fn update_named(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field = name.parse()?;
        self.update_field(field, value);
        Ok(())
    }

    pub fn value(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Email => &self.email,
            RegistrationField::Password => &self.password,
            RegistrationField::PasswordConfirm => &self.password_confirm,
            RegistrationField::Name => &self.name,
        }
    }

    pub fn validate(&self) -> ValidationErrors<RegistrationField> {
        let mut errors = ValidationErrors::new();

        for field in [
            RegistrationField::Email,
            RegistrationField::Password,
            RegistrationField::Name,
        ] {
            if is_blank(self.value(field)) {
                errors.insert(field, messages::REQUIRED_FIELDS);
            }
        }

        // Required fields are reported on their own, so the single-banner
        // page shows the required message before any mismatch.
        if errors.is_empty() && self.password != self.password_confirm {
            errors.insert(RegistrationField::PasswordConfirm, messages::PASSWORD_MISMATCH);
        }

        errors
    }

    /// Helper text under the confirmation input.
    ///
    /// Only shown once the user has started typing the confirmation.
    pub fn password_confirm_hint(&self) -> Option<&'static str> {
        (!self.password_confirm.is_empty() && self.password != self.password_confirm)
            .then_some(messages::PASSWORD_MISMATCH)
    }

    pub fn payload(&self) -> RegisterRequest {
        RegisterRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            name: self.name.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
