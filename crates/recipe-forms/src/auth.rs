//! Login / signup modal
//!
//! Two independently validated forms behind one modal with a tab switch.
//! Submitting never checks credentials: a form that passes its schema is
//! returned to the caller as an [`AuthSubmission`] and the caller decides what
//! "logged in" means.

use crate::validation::{is_valid_email, min_chars, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const SHORT_PASSWORD: &str = "Password must be at least 6 characters";
pub const SHORT_NAME: &str = "Name must be at least 2 characters";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";

const MIN_PASSWORD: usize = 6;
const MIN_NAME: usize = 2;

/// Modal tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthTab {
    #[default]
    Login,
    Signup,
}

impl AuthTab {
    #[inline]
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Welcome Back",
            Self::Signup => "Create an Account",
        }
    }

    #[inline]
    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::Login => "Sign in to access your recipes and favorites",
            Self::Signup => "Join our community of food enthusiasts",
        }
    }
}

/// Third-party sign-in buttons (not wired to anything)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Facebook,
    Twitter,
    Github,
}

impl fmt::Display for SocialProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::Github => "Github",
        })
    }
}

/// Login form fields
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LoginForm {
    #[inline]
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// # Errors
    /// Every failing field: `email`, `password`
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(is_valid_email(&self.email), "email", INVALID_EMAIL);
        errors.check(min_chars(&self.password, MIN_PASSWORD), "password", SHORT_PASSWORD);
        errors.into_result(())
    }
}

/// Signup form fields
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .finish()
    }
}

impl SignupForm {
    #[inline]
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// The mismatch message is reported on `confirm_password`, after any
    /// length error on that field.
    ///
    /// # Errors
    /// Every failing field: `name`, `email`, `password`, `confirm_password`
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(min_chars(&self.name, MIN_NAME), "name", SHORT_NAME);
        errors.check(is_valid_email(&self.email), "email", INVALID_EMAIL);
        errors.check(min_chars(&self.password, MIN_PASSWORD), "password", SHORT_PASSWORD);
        errors.check(
            min_chars(&self.confirm_password, MIN_PASSWORD),
            "confirm_password",
            SHORT_PASSWORD,
        );
        errors.check(
            self.password == self.confirm_password,
            "confirm_password",
            PASSWORD_MISMATCH,
        );
        errors.into_result(())
    }
}

/// What a successful submission hands to the caller (never the password)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AuthSubmission {
    Login { email: String },
    Signup { name: String, email: String },
}

impl AuthSubmission {
    #[inline]
    #[must_use]
    pub fn tab(&self) -> AuthTab {
        match self {
            Self::Login { .. } => AuthTab::Login,
            Self::Signup { .. } => AuthTab::Signup,
        }
    }
}

/// Authentication modal state
#[derive(Debug, Clone, Default)]
pub struct AuthModal {
    open: bool,
    tab: AuthTab,
    pub login: LoginForm,
    pub signup: SignupForm,
    errors: ValidationErrors,
}

impl AuthModal {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open on `tab`
    pub fn open(&mut self, tab: AuthTab) {
        self.open = true;
        self.tab = tab;
        self.errors = ValidationErrors::new();
        tracing::debug!(?tab, "auth modal opened");
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    #[must_use]
    pub fn tab(&self) -> AuthTab {
        self.tab
    }

    /// Switch tab, keeping both forms' contents
    pub fn switch_tab(&mut self, tab: AuthTab) {
        self.tab = tab;
        self.errors = ValidationErrors::new();
    }

    /// Inline errors from the last failed submission
    #[inline]
    #[must_use]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Validate the form on the active tab
    ///
    /// On success the forms are reset and the submission returned; the modal
    /// stays open until the caller closes it.
    ///
    /// # Errors
    /// The failing fields, which are also kept for [`AuthModal::errors`]
    pub fn submit(&mut self) -> Result<AuthSubmission, ValidationErrors> {
        let outcome = match self.tab {
            AuthTab::Login => self.login.validate().map(|()| AuthSubmission::Login {
                email: self.login.email.clone(),
            }),
            AuthTab::Signup => self.signup.validate().map(|()| AuthSubmission::Signup {
                name: self.signup.name.clone(),
                email: self.signup.email.clone(),
            }),
        };

        match outcome {
            Ok(submission) => {
                self.login = LoginForm::default();
                self.signup = SignupForm::default();
                self.errors = ValidationErrors::new();
                Ok(submission)
            }
            Err(errors) => {
                tracing::debug!(tab = ?self.tab, failed = errors.len(), "auth form rejected");
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    /// Social buttons only record the click
    pub fn social_login(&self, provider: SocialProvider) {
        tracing::info!(%provider, "social login requested");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn login_accepts_valid_credentials() {
        assert!(LoginForm::new("cook@example.com", "secret1").validate().is_ok());
    }

    #[test]
    fn login_reports_both_fields() {
        let errors = LoginForm::new("not-an-email", "12345").validate().unwrap_err();
        assert_eq!(errors.message("email"), Some(INVALID_EMAIL));
        assert_eq!(errors.message("password"), Some(SHORT_PASSWORD));
    }

    #[test]
    fn signup_rejects_mismatched_passwords() {
        let form = SignupForm::new("Abeba", "abeba@example.com", "injera1", "injera2");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message("confirm_password"), Some(PASSWORD_MISMATCH));
    }

    #[test]
    fn signup_rejects_short_name() {
        let form = SignupForm::new("A", "a@example.com", "secret1", "secret1");
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.message("name"), Some(SHORT_NAME));
    }

    #[test]
    fn debug_redacts_passwords() {
        let rendered = format!("{:?}", SignupForm::new("Al", "a@b.co", "hunter22", "hunter22"));
        assert!(!rendered.contains("hunter22"));
    }

    #[test]
    fn modal_submit_uses_active_tab() {
        let mut modal = AuthModal::new();
        modal.open(AuthTab::Signup);
        modal.login = LoginForm::new("cook@example.com", "secret1");

        assert!(modal.submit().is_err());
        assert!(modal.errors().has("name"));

        modal.switch_tab(AuthTab::Login);
        assert!(modal.errors().is_empty());
        let submission = modal.submit().unwrap();
        assert_eq!(
            submission,
            AuthSubmission::Login { email: "cook@example.com".into() }
        );
        assert_eq!(modal.login, LoginForm::default());
    }

    #[test]
    fn tab_copy() {
        assert_eq!(AuthTab::Login.title(), "Welcome Back");
        assert_eq!(AuthTab::Signup.title(), "Create an Account");
    }
}
