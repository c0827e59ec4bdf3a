//! Field validation applied before state-changing operations.
//!
//! Failures are reported per field so forms can annotate individual
//! inputs instead of surfacing a single opaque error.

use std::fmt;

use serde::Serialize;

/// Minimum display/store name length.
pub const NAME_MIN: usize = 2;
/// Maximum display/store name length.
pub const NAME_MAX: usize = 60;
/// Maximum address length.
pub const ADDRESS_MAX: usize = 400;
/// Minimum password length.
pub const PASSWORD_MIN: usize = 8;
/// Maximum password length.
pub const PASSWORD_MAX: usize = 16;

/// Special characters a password must contain one of.
const PASSWORD_SPECIALS: &str = "!@#$%^&*";

/// Per-field validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    /// Name field error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Email field error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Password field error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Address field error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl FieldErrors {
    /// Returns true when no field failed.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none() && self.address.is_none()
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in [
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
            ("address", &self.address),
        ] {
            if let Some(message) = error {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Validates a display or store name.
pub fn name_error(name: &str) -> Option<String> {
    if name.is_empty() {
        return Some("Name is required".to_string());
    }
    let len = name.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&len) {
        return Some(format!("Name must be between {NAME_MIN} and {NAME_MAX} characters"));
    }
    None
}

/// Validates an email address.
pub fn email_error(email: &str) -> Option<String> {
    if email.is_empty() {
        return Some("Email is required".to_string());
    }
    if !is_valid_email(email) {
        return Some("Please enter a valid email address".to_string());
    }
    None
}

/// Validates a password.
pub fn password_error(password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("Password is required".to_string());
    }
    if !is_valid_password(password) {
        return Some(format!(
            "Password must be {PASSWORD_MIN}-{PASSWORD_MAX} characters with at least one uppercase letter and one special character"
        ));
    }
    None
}

/// Validates a store address.
pub fn address_error(address: &str) -> Option<String> {
    if address.is_empty() {
        return Some("Address is required".to_string());
    }
    if address.chars().count() > ADDRESS_MAX {
        return Some(format!("Address cannot exceed {ADDRESS_MAX} characters"));
    }
    None
}

/// Validates a registration form.
pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), FieldErrors> {
    FieldErrors {
        name: name_error(name),
        email: email_error(email),
        password: password_error(password),
        address: None,
    }
    .into_result()
}

/// Validates an admin-created user.
pub fn validate_new_user(name: &str, email: &str, password: &str) -> Result<(), FieldErrors> {
    validate_registration(name, email, password)
}

/// Validates an admin-created store.
pub fn validate_new_store(name: &str, address: &str) -> Result<(), FieldErrors> {
    FieldErrors {
        name: name_error(name),
        email: None,
        password: None,
        address: address_error(address),
    }
    .into_result()
}

/// Accepts `local@host.tld` where no part is empty or contains
/// whitespace and the domain holds at least one dot.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Accepts 8-16 word or special characters with at least one uppercase
/// letter and one of `!@#$%^&*`.
fn is_valid_password(password: &str) -> bool {
    let len = password.chars().count();
    if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&len) {
        return false;
    }
    let allowed =
        |c: char| c.is_ascii_alphanumeric() || c == '_' || PASSWORD_SPECIALS.contains(c);
    password.chars().all(allowed)
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| PASSWORD_SPECIALS.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_bounds() {
        assert!(name_error("Jo").is_none());
        assert!(name_error("J").is_some());
        assert!(name_error("").is_some());
        assert!(name_error(&"x".repeat(60)).is_none());
        assert!(name_error(&"x".repeat(61)).is_some());
    }

    #[test]
    fn test_email_format() {
        assert!(email_error("admin@example.com").is_none());
        assert!(email_error("a@b.c").is_none());
        assert!(email_error("a@b.c.d").is_none());
        assert!(email_error("").is_some());
        assert!(email_error("admin").is_some());
        assert!(email_error("admin@example").is_some());
        assert!(email_error("admin@.com").is_some());
        assert!(email_error("admin@example.").is_some());
        assert!(email_error("ad min@example.com").is_some());
        assert!(email_error("admin@ex@ample.com").is_some());
    }

    #[test]
    fn test_password_rules() {
        assert!(password_error("Admin@123").is_none());
        assert!(password_error("User@123").is_none());
        // too short
        assert!(password_error("Ab@1").is_some());
        // too long
        assert!(password_error("Abcdefgh@1234567x").is_some());
        // no uppercase
        assert!(password_error("admin@123").is_some());
        // no special
        assert!(password_error("Admin1234").is_some());
        // disallowed character
        assert!(password_error("Admin 123").is_some());
    }

    #[test]
    fn test_address_bounds() {
        assert!(address_error("123 Main St, Downtown").is_none());
        assert!(address_error("").is_some());
        assert!(address_error(&"x".repeat(400)).is_none());
        assert!(address_error(&"x".repeat(401)).is_some());
    }

    #[test]
    fn test_registration_reports_per_field() {
        let errors = validate_registration("J", "not-an-email", "weak").unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.password.is_some());
        assert!(errors.address.is_none());

        assert!(validate_registration("Normal User", "user@example.com", "User@123").is_ok());
    }

    #[test]
    fn test_new_store_reports_per_field() {
        let errors = validate_new_store("", &"x".repeat(401)).unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.address.is_some());

        assert!(validate_new_store("Coffee Shop Downtown", "123 Main St, Downtown").is_ok());
    }
}
