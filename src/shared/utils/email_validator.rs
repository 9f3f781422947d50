use crate::domain::errors::{DomainError, DomainResult};
use email_address::EmailAddress;
use std::str::FromStr;

/// Longest address accepted for a console account (RFC 5321 path limit).
pub const MAX_EMAIL_LENGTH: usize = 254;

fn invalid(message: impl Into<String>) -> DomainError {
    DomainError::ValidationError(message.into())
}

/// Account email as stored and matched at sign-in: a bare address on a
/// dotted host name, lower-cased.
pub fn normalize_account_email(raw: &str) -> DomainResult<String> {
    let candidate = raw.trim();
    if candidate.is_empty() {
        return Err(invalid("Email is required"));
    }
    if candidate.len() > MAX_EMAIL_LENGTH {
        return Err(invalid(format!(
            "Email must be at most {} characters",
            MAX_EMAIL_LENGTH
        )));
    }

    let address = EmailAddress::from_str(candidate)
        .map_err(|e| invalid(format!("'{}' is not a valid email address: {}", candidate, e)))?;

    // Rejects "Name <user@host>" forms.
    if address.email() != candidate {
        return Err(invalid("Email must be a plain address without a display name"));
    }

    let domain = address.domain();
    if domain.starts_with('[') {
        return Err(invalid("Email domain must be a host name, not an IP literal"));
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(invalid(format!(
            "Email domain '{}' must be a dotted host name such as example.com",
            domain
        )));
    }

    Ok(candidate.to_lowercase())
}
