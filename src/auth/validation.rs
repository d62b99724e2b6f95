//! Shape checks for login and registration input

use log::error;
use once_cell::sync::Lazy;
use regex::Regex;

use super::error::AuthError;
use super::user::RegisterRequest;

/// Minimum password length in UTF-16 code units
pub const MIN_PASSWORD_LEN: usize = 6;

/// Tax ID (CNPJ) shape, e.g. `12.345.678/0001-90`; ASCII digits only
pub const TAX_ID_PATTERN: &str = r"^[0-9]{2}\.[0-9]{3}\.[0-9]{3}/[0-9]{4}-[0-9]{2}$";

static TAX_ID_RE: Lazy<Option<Regex>> = Lazy::new(|| match Regex::new(TAX_ID_PATTERN) {
    Ok(re) => Some(re),
    Err(err) => {
        error!("Tax ID pattern does not compile, rejecting every tax ID: {}", err);
        None
    }
});

pub fn is_valid_email(email: &str) -> bool {
    email.contains('@')
}

/// Length is measured in UTF-16 code units, so a character outside the BMP counts twice
pub fn is_valid_password(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LEN
}

/// Format check only; check digits are not verified
pub fn is_valid_tax_id(tax_id: &str) -> bool {
    TAX_ID_RE.as_ref().is_some_and(|re| re.is_match(tax_id))
}

pub fn validate_login(email: &str, password: &str) -> Result<(), AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::validation("Email and password are required"));
    }
    if !is_valid_email(email) {
        return Err(AuthError::validation("Invalid email"));
    }
    if !is_valid_password(password) {
        return Err(AuthError::validation("Password must be at least 6 characters"));
    }
    Ok(())
}

pub fn validate_registration(request: &RegisterRequest) -> Result<(), AuthError> {
    if request.email.is_empty()
        || request.password.is_empty()
        || request.company_name.is_empty()
        || request.tax_id.is_empty()
    {
        return Err(AuthError::validation("All fields are required"));
    }
    if !is_valid_email(&request.email) {
        return Err(AuthError::validation("Invalid email"));
    }
    if !is_valid_password(&request.password) {
        return Err(AuthError::validation("Password must be at least 6 characters"));
    }
    if request.password != request.confirm_password {
        return Err(AuthError::validation("Passwords do not match"));
    }
    if !is_valid_tax_id(&request.tax_id) {
        return Err(AuthError::validation(
            "Invalid tax ID. Use the format: 00.000.000/0001-00",
        ));
    }
    Ok(())
}
