//! Field-level validation shared by the domain models.
//!
//! All helpers trim their input and return the normalized value on
//! success, so stored entities never carry leading/trailing whitespace.

use crate::error::{ModelError, Result};

/// Validate a required text field: non-empty after trimming.
pub fn non_empty(field: &'static str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ModelError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

/// Normalize an optional text field: trimmed, empty allowed.
pub fn optional_text(value: &str) -> String {
    value.trim().to_string()
}

/// Validate and normalize an email address.
///
/// The check is a shape check, not an RFC 5321 parser: exactly one `@`,
/// a non-empty local part, a domain containing an interior dot, and no
/// whitespace anywhere. The normalized form is trimmed and lowercased.
pub fn email(value: &str) -> Result<String> {
    let normalized = value.trim().to_lowercase();

    if normalized.chars().any(char::is_whitespace) {
        return Err(ModelError::InvalidEmail(value.to_string()));
    }

    let mut parts = normalized.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return Err(ModelError::InvalidEmail(value.to_string())),
    };

    if local.is_empty() || domain.is_empty() {
        return Err(ModelError::InvalidEmail(value.to_string()));
    }

    // The domain needs at least one dot with labels on both sides.
    if domain.starts_with('.') || domain.ends_with('.') || !domain.contains('.') {
        return Err(ModelError::InvalidEmail(value.to_string()));
    }

    Ok(normalized)
}

/// Validate a nightly price: finite and non-negative.
pub fn price(value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ModelError::InvalidPrice(value));
    }
    Ok(value)
}

/// Validate a latitude in degrees.
pub fn latitude(value: f64) -> Result<f64> {
    if !value.is_finite() || !(-90.0..=90.0).contains(&value) {
        return Err(ModelError::LatitudeOutOfRange(value));
    }
    Ok(value)
}

/// Validate a longitude in degrees.
pub fn longitude(value: f64) -> Result<f64> {
    if !value.is_finite() || !(-180.0..=180.0).contains(&value) {
        return Err(ModelError::LongitudeOutOfRange(value));
    }
    Ok(value)
}

/// Validate a review rating (1 through 5).
pub fn rating(value: u8) -> Result<u8> {
    if !(1..=5).contains(&value) {
        return Err(ModelError::RatingOutOfRange(value));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn non_empty_trims() {
        assert_eq!(non_empty("title", "  Loft  ").unwrap(), "Loft");
    }

    #[test]
    fn non_empty_rejects_blank() {
        assert!(matches!(
            non_empty("title", "   ").unwrap_err(),
            ModelError::EmptyField { field: "title" }
        ));
    }

    #[test]
    fn optional_text_allows_empty() {
        assert_eq!(optional_text("  "), "");
        assert_eq!(optional_text(" hi "), "hi");
    }

    #[test]
    fn email_accepts_and_normalizes() {
        assert_eq!(email(" Alice@Example.COM ").unwrap(), "alice@example.com");
        assert_eq!(email("a.b+c@mail.example.org").unwrap(), "a.b+c@mail.example.org");
    }

    #[test]
    fn email_rejects_bad_shapes() {
        for bad in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@nodot",
            "user@.com",
            "user@example.",
            "two@@example.com",
            "has space@example.com",
        ] {
            assert!(email(bad).is_err(), "accepted: {bad:?}");
        }
    }

    #[test]
    fn price_bounds() {
        assert_eq!(price(0.0).unwrap(), 0.0);
        assert_eq!(price(120.5).unwrap(), 120.5);
        assert!(price(-0.01).is_err());
        assert!(price(f64::NAN).is_err());
        assert!(price(f64::INFINITY).is_err());
    }

    #[test]
    fn latitude_bounds() {
        assert!(latitude(-90.0).is_ok());
        assert!(latitude(90.0).is_ok());
        assert!(latitude(-90.01).is_err());
        assert!(latitude(90.01).is_err());
    }

    #[test]
    fn longitude_bounds() {
        assert!(longitude(-180.0).is_ok());
        assert!(longitude(180.0).is_ok());
        assert!(longitude(-180.01).is_err());
        assert!(longitude(180.01).is_err());
    }

    #[test]
    fn rating_bounds() {
        assert!(rating(0).is_err());
        for r in 1..=5 {
            assert!(rating(r).is_ok());
        }
        assert!(rating(6).is_err());
    }

    proptest! {
        #[test]
        fn rating_accepts_exactly_one_through_five(r in any::<u8>()) {
            prop_assert_eq!(rating(r).is_ok(), (1..=5).contains(&r));
        }

        #[test]
        fn price_never_accepts_negative(p in -1.0e9f64..0.0) {
            prop_assert!(price(p).is_err());
        }

        #[test]
        fn email_without_at_is_rejected(s in "[a-z0-9 .]{0,40}") {
            prop_assert!(email(&s).is_err());
        }

        #[test]
        fn non_empty_result_has_no_outer_whitespace(s in "\\PC{0,40}") {
            if let Ok(v) = non_empty("field", &s) {
                prop_assert_eq!(v.trim(), v.as_str());
                prop_assert!(!v.is_empty());
            }
        }
    }
}
