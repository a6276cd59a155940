//! Dashboard screen state
//!
//! The login modal owns its form: opening the modal mounts a fresh form
//! and closing it throws the form away.

use serde::Serialize;

use crate::auth::{AuthForm, CredentialSink, Submission};
use crate::error::AuthError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardState {
    auth_open: bool,
    form: Option<AuthForm>,
}

impl DashboardState {
    pub fn is_auth_open(&self) -> bool {
        self.auth_open
    }

    pub fn form(&self) -> Option<&AuthForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Result<&mut AuthForm, AuthError> {
        self.form.as_mut().ok_or(AuthError::FormClosed)
    }

    /// Navbar button
    pub fn toggle_auth(&mut self) {
        if self.auth_open {
            self.close_auth();
        } else {
            self.open_auth();
        }
    }

    pub fn open_auth(&mut self) {
        if !self.auth_open {
            self.auth_open = true;
            self.form = Some(AuthForm::new());
        }
    }

    pub fn close_auth(&mut self) {
        self.auth_open = false;
        self.form = None;
    }

    /// Submit the open form, closing the modal when the form accepts it
    pub fn submit(&mut self, sink: &mut impl CredentialSink) -> Result<Submission, AuthError> {
        let submission = self.form_mut()?.submit(sink)?;
        self.close_auth();
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sink::MemorySink;
    use crate::auth::{AuthField, AuthMode};

    #[test]
    fn test_toggle_mounts_and_discards_form() {
        let mut dashboard = DashboardState::default();
        assert!(!dashboard.is_auth_open());
        assert!(dashboard.form().is_none());

        dashboard.toggle_auth();
        dashboard
            .form_mut()
            .unwrap()
            .update(AuthField::Username, "alice")
            .unwrap();

        dashboard.toggle_auth();
        assert!(dashboard.form().is_none());

        dashboard.open_auth();
        assert_eq!(dashboard.form(), Some(&AuthForm::new()));
    }

    #[test]
    fn test_open_twice_keeps_form() {
        let mut dashboard = DashboardState::default();
        dashboard.open_auth();
        dashboard.form_mut().unwrap().set_mode(AuthMode::Signup);
        dashboard.open_auth();
        assert_eq!(dashboard.form().map(AuthForm::mode), Some(AuthMode::Signup));
    }

    #[test]
    fn test_submit_closes_modal() {
        let mut dashboard = DashboardState::default();
        dashboard.open_auth();
        dashboard
            .form_mut()
            .unwrap()
            .update(AuthField::Username, "alice")
            .unwrap();

        let mut sink = MemorySink::default();
        dashboard.submit(&mut sink).unwrap();
        assert!(!dashboard.is_auth_open());
        assert_eq!(sink.submissions.len(), 1);
    }

    #[test]
    fn test_mismatch_keeps_modal_open() {
        let mut dashboard = DashboardState::default();
        dashboard.open_auth();
        let form = dashboard.form_mut().unwrap();
        form.set_mode(AuthMode::Signup);
        form.update(AuthField::Password, "x1").unwrap();
        form.update(AuthField::ConfirmPassword, "x2").unwrap();

        let mut sink = MemorySink::default();
        assert_eq!(dashboard.submit(&mut sink), Err(AuthError::PasswordMismatch));
        assert!(dashboard.is_auth_open());
        assert!(sink.submissions.is_empty());
    }

    #[test]
    fn test_submit_without_modal() {
        let mut dashboard = DashboardState::default();
        let mut sink = MemorySink::default();
        assert_eq!(dashboard.submit(&mut sink), Err(AuthError::FormClosed));
    }
}
