use crate::data::BRAND;
use crate::error::ValidationError;
use crate::notify::{Notice, Notifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Welcome Back",
            Self::Signup => "Join SkillSwap Hub",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::Login => "Sign In",
            Self::Signup => "Create Account",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            Self::Signup => Self::Login,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl AuthField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    #[must_use]
    pub fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }

    fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm password",
        }
    }
}

const LOGIN_FIELDS: &[AuthField] = &[AuthField::Email, AuthField::Password];
const SIGNUP_FIELDS: &[AuthField] = &[
    AuthField::Name,
    AuthField::Email,
    AuthField::Password,
    AuthField::ConfirmPassword,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    LoggedIn,
    SignedUp,
}

/// Local state of the login / sign-up dialog. Nothing leaves the process.
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    name: String,
    email: String,
    password: String,
    confirm_password: String,
    show_password: bool,
}

impl AuthForm {
    #[must_use]
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn visible_fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::Login => LOGIN_FIELDS,
            AuthMode::Signup => SIGNUP_FIELDS,
        }
    }

    #[must_use]
    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn value_mut(&mut self, field: AuthField) -> &mut String {
        match field {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::ConfirmPassword => &mut self.confirm_password,
        }
    }

    pub fn set(&mut self, field: AuthField, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    /// Text to display for `field`, masked unless passwords are shown.
    #[must_use]
    pub fn display_value(&self, field: AuthField) -> String {
        let value = self.value(field);
        if field.is_secret() && !self.show_password {
            "*".repeat(value.chars().count())
        } else {
            value.to_owned()
        }
    }

    #[must_use]
    pub fn shows_password(&self) -> bool {
        self.show_password
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Switch between login and sign-up. Typed values are kept.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.password.clear();
        self.confirm_password.clear();
    }

    /// Validate and "submit" the form. On success every field is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for an empty visible field and
    /// [`ValidationError::PasswordMismatch`] when signing up with a confirmation
    /// that differs from the password. Field values are kept on error.
    pub fn submit(&mut self, notifier: &dyn Notifier) -> Result<AuthOutcome, ValidationError> {
        if let Some(&missing) = self
            .visible_fields()
            .iter()
            .find(|f| self.value(**f).trim().is_empty())
        {
            notifier.notify(Notice::destructive(
                "Missing information",
                format!("{} is required.", missing.label()),
            ));
            return Err(ValidationError::MissingField(missing.id()));
        }

        let outcome = match self.mode {
            AuthMode::Signup => {
                if self.password != self.confirm_password {
                    notifier.notify(Notice::destructive(
                        "Password mismatch",
                        "Passwords do not match. Please try again.",
                    ));
                    return Err(ValidationError::PasswordMismatch);
                }
                notifier.notify(Notice::info(
                    "Account created successfully!",
                    format!("Welcome to {BRAND}! Please check your email to verify your account."),
                ));
                AuthOutcome::SignedUp
            }
            AuthMode::Login => {
                notifier.notify(Notice::info(
                    "Welcome back!",
                    format!("You have successfully logged in to {BRAND}."),
                ));
                AuthOutcome::LoggedIn
            }
        };

        tracing::info!(outcome = ?outcome, "auth form submitted");
        self.reset();
        Ok(outcome)
    }
}
