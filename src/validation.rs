//! Form validation helpers.
//!
//! Pure, I/O-free checks the view layer runs before dispatching login or
//! registration. Messages are keyed by field so forms can render them
//! inline.

/// Minimum accepted password length
pub const PASSWORD_MIN_LEN: usize = 6;

/// A validation failure for a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Shape check: `local@domain.tld`, no whitespace anywhere.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(head, tail)| !head.is_empty() && !tail.is_empty())
}

pub fn validate_password(password: &str) -> bool {
    password.len() >= PASSWORD_MIN_LEN
}

pub fn validate_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Validate a login form. An empty result means the form is valid.
pub fn validate_login(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !validate_required(email) {
        errors.push(FieldError::new("email", "email is required"));
    } else if !validate_email(email) {
        errors.push(FieldError::new("email", "email is not valid"));
    }

    if !validate_required(password) {
        errors.push(FieldError::new("password", "password is required"));
    } else if !validate_password(password) {
        errors.push(FieldError::new(
            "password",
            "password must be at least 6 characters",
        ));
    }

    errors
}

/// Validate a registration form. Same rules as login plus a matching
/// password confirmation.
pub fn validate_register(email: &str, password: &str, confirm_password: &str) -> Vec<FieldError> {
    let mut errors = validate_login(email, password);

    if !validate_required(confirm_password) {
        errors.push(FieldError::new("confirmPassword", "confirm your password"));
    } else if password != confirm_password {
        errors.push(FieldError::new("confirmPassword", "passwords do not match"));
    }

    errors
}
