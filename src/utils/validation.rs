//! Input validation utilities

use crate::constants::option_labels;

/// Validate username format
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if username.len() < 3 {
        return Err("Username must be at least 3 characters");
    }
    if username.len() > 32 {
        return Err("Username must be at most 32 characters");
    }
    if !username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
    {
        return Err("Username can only contain letters, numbers, underscores, and hyphens");
    }
    if !username.chars().next().map(|c| c.is_alphabetic()).unwrap_or(false) {
        return Err("Username must start with a letter");
    }
    Ok(())
}

/// Validate password strength
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.len() < 8 {
        return Err("Password must be at least 8 characters");
    }
    if password.len() > 128 {
        return Err("Password must be at most 128 characters");
    }
    if !password.chars().any(|c| c.is_lowercase()) {
        return Err("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_uppercase()) {
        return Err("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_numeric()) {
        return Err("Password must contain at least one number");
    }
    Ok(())
}

/// Normalize an option label to its canonical uppercase form.
///
/// Returns `None` for anything that is not one of the labels A-D.
pub fn normalize_option_label(label: &str) -> Option<String> {
    let normalized = label.trim().to_ascii_uppercase();
    if option_labels::ALL.contains(&normalized.as_str()) {
        Some(normalized)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Alice_123").is_ok());
        assert!(validate_username("ab").is_err()); // Too short
        assert!(validate_username("123abc").is_err()); // Starts with number
        assert!(validate_username("user@name").is_err()); // Invalid character
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Password123").is_ok());
        assert!(validate_password("short").is_err());
        assert!(validate_password("nouppercase123").is_err());
        assert!(validate_password("NOLOWERCASE123").is_err());
        assert!(validate_password("NoNumbers").is_err());
    }

    #[test]
    fn test_normalize_option_label() {
        assert_eq!(normalize_option_label("a").as_deref(), Some("A"));
        assert_eq!(normalize_option_label(" D ").as_deref(), Some("D"));
        assert_eq!(normalize_option_label("E"), None);
        assert_eq!(normalize_option_label("AB"), None);
        assert_eq!(normalize_option_label(""), None);
    }
}
