//! Destination for submitted credentials

use tracing::info;

use super::form::Submission;

/// Receives every accepted form submission
pub trait CredentialSink {
    fn record(&mut self, submission: &Submission);
}

/// Writes submissions to the log. Values are logged as entered.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl CredentialSink for TracingSink {
    fn record(&mut self, submission: &Submission) {
        match submission {
            Submission::Login { username, password } => {
                info!(target: "treasure_hunt::auth", %username, %password, "Login");
            }
            Submission::Signup {
                username,
                email,
                password,
            } => {
                info!(target: "treasure_hunt::auth", %username, %email, %password, "Signup");
            }
        }
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    pub submissions: Vec<Submission>,
}

#[cfg(test)]
impl CredentialSink for MemorySink {
    fn record(&mut self, submission: &Submission) {
        self.submissions.push(submission.clone());
    }
}
