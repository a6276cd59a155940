//! Client-side login and signup

pub mod form;
pub mod sink;

pub use form::{AuthField, AuthForm, AuthMode, Submission};
pub use sink::{CredentialSink, TracingSink};
