//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// E.164: leading '+', country code without zero, at most 15 digits
static E164_REGEX: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^\+[1-9]\d{6,14}$").ok());

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is a valid E.164 number after normalisation
pub fn is_valid_e164(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    E164_REGEX
        .as_ref()
        .map_or(false, |re| re.is_match(&normalized))
}

/// Mask a phone number for logs (e.g., +14****2671)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("+1 (415) 555-2671"), "+14155552671");
        assert_eq!(normalize_phone_number("+91 98765 43210"), "+919876543210");
    }

    #[test]
    fn test_is_valid_e164() {
        assert!(is_valid_e164("+14155552671"));
        assert!(is_valid_e164("+91 98765 43210"));
        assert!(is_valid_e164("+442071838750"));
        assert!(!is_valid_e164("9876543210")); // Missing +
        assert!(!is_valid_e164("+0123456789")); // Invalid country code
        assert!(!is_valid_e164("+1234")); // Too short
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+14155552671"), "+14****2671");
        assert_eq!(mask_phone_number("+919876543210"), "+91****3210");
        assert_eq!(mask_phone_number("12345"), "****");
    }
}
