//! Login form input

use crate::login::LoginError;
use crate::role::Role;
use serde::Serialize;
use std::fmt;

/// Username and password pair read from the login form.
///
/// Lives only for the duration of one submit and is never persisted.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check that both fields were filled in.
    ///
    /// Whitespace-only input counts as empty. The username is checked first so
    /// the reported field is stable when both are missing.
    pub fn validate(&self) -> Result<(), LoginError> {
        if self.username.trim().is_empty() {
            return Err(LoginError::MissingInput { field: "username" });
        }
        if self.password.trim().is_empty() {
            return Err(LoginError::MissingInput { field: "password" });
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Everything the login form submits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub credentials: Credentials,
    /// Role picked on the form; `None` when the page has no role control
    pub role: Option<Role>,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(username, password),
            role: None,
        }
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Role the session will be stored with
    pub fn effective_role(&self) -> Role {
        self.role.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_filled_in_credentials() {
        assert!(Credentials::new("alice", "secret").validate().is_ok());
    }

    #[test]
    fn reports_missing_username_first() {
        let err = Credentials::new("", "").validate().unwrap_err();
        assert_eq!(err, LoginError::MissingInput { field: "username" });
    }

    #[test]
    fn whitespace_password_is_missing() {
        let err = Credentials::new("alice", "   ").validate().unwrap_err();
        assert_eq!(err, LoginError::MissingInput { field: "password" });
    }

    #[test]
    fn debug_output_hides_password() {
        let rendered = format!("{:?}", Credentials::new("alice", "hunter2"));
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn form_without_role_control_routes_to_staff() {
        let form = LoginForm::new("alice", "secret");
        assert_eq!(form.effective_role(), Role::Staff);
        assert_eq!(form.with_role(Role::Admin).effective_role(), Role::Admin);
    }
}
