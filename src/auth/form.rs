//! Login/signup form state
//!
//! The fields valid in each mode are carried by the variant itself, so a
//! login form has no email or confirmation to get out of sync.

use serde::{Deserialize, Serialize};

use super::sink::CredentialSink;
use crate::error::AuthError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    Login,
    Signup,
}

/// Input names as sent by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl AuthField {
    pub fn name(self) -> &'static str {
        match self {
            AuthField::Username => "username",
            AuthField::Email => "email",
            AuthField::Password => "password",
            AuthField::ConfirmPassword => "confirmPassword",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoginFields {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupFields {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AuthFields {
    Login(LoginFields),
    Signup(SignupFields),
}

/// Values handed to the credential sink on a successful submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Submission {
    Login {
        username: String,
        password: String,
    },
    Signup {
        username: String,
        email: String,
        password: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthForm {
    fields: AuthFields,
}

impl Default for AuthForm {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthForm {
    pub fn new() -> Self {
        Self {
            fields: AuthFields::Login(LoginFields::default()),
        }
    }

    pub fn mode(&self) -> AuthMode {
        match self.fields {
            AuthFields::Login(_) => AuthMode::Login,
            AuthFields::Signup(_) => AuthMode::Signup,
        }
    }

    pub fn fields(&self) -> &AuthFields {
        &self.fields
    }

    /// Switch modes, carrying over username and password
    pub fn set_mode(&mut self, mode: AuthMode) {
        if self.mode() == mode {
            return;
        }
        let next = match (&mut self.fields, mode) {
            (AuthFields::Login(login), AuthMode::Signup) => AuthFields::Signup(SignupFields {
                username: std::mem::take(&mut login.username),
                password: std::mem::take(&mut login.password),
                ..SignupFields::default()
            }),
            (AuthFields::Signup(signup), AuthMode::Login) => AuthFields::Login(LoginFields {
                username: std::mem::take(&mut signup.username),
                password: std::mem::take(&mut signup.password),
            }),
            _ => return,
        };
        self.fields = next;
    }

    pub fn toggle_mode(&mut self) {
        let next = match self.mode() {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        };
        self.set_mode(next);
    }

    pub fn update(&mut self, field: AuthField, value: impl Into<String>) -> Result<(), AuthError> {
        let slot = match (&mut self.fields, field) {
            (AuthFields::Login(f), AuthField::Username) => &mut f.username,
            (AuthFields::Login(f), AuthField::Password) => &mut f.password,
            (AuthFields::Login(_), other) => return Err(AuthError::FieldUnavailable(other.name())),
            (AuthFields::Signup(f), AuthField::Username) => &mut f.username,
            (AuthFields::Signup(f), AuthField::Email) => &mut f.email,
            (AuthFields::Signup(f), AuthField::Password) => &mut f.password,
            (AuthFields::Signup(f), AuthField::ConfirmPassword) => &mut f.confirm_password,
        };
        *slot = value.into();
        Ok(())
    }

    /// Emit the entered values and clear the form
    ///
    /// A signup whose confirmation differs from the password is rejected and
    /// leaves every field as entered.
    pub fn submit(&mut self, sink: &mut impl CredentialSink) -> Result<Submission, AuthError> {
        let submission = match &self.fields {
            AuthFields::Login(f) => Submission::Login {
                username: f.username.clone(),
                password: f.password.clone(),
            },
            AuthFields::Signup(f) if f.password != f.confirm_password => {
                return Err(AuthError::PasswordMismatch);
            }
            AuthFields::Signup(f) => Submission::Signup {
                username: f.username.clone(),
                email: f.email.clone(),
                password: f.password.clone(),
            },
        };
        sink.record(&submission);
        self.fields = match self.mode() {
            AuthMode::Login => AuthFields::Login(LoginFields::default()),
            AuthMode::Signup => AuthFields::Signup(SignupFields::default()),
        };
        Ok(submission)
    }
}
