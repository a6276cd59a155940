//! Error types for the form and navigation layers

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Passwords do not match!")]
    PasswordMismatch,
    #[error("field `{0}` is only available in signup mode")]
    FieldUnavailable(&'static str),
    #[error("the login form is not open")]
    FormClosed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no route for path `{0}`")]
    Unknown(String),
    #[error("not on the dashboard")]
    NotOnDashboard,
}
