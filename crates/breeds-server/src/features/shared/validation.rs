//! Shared validation utilities
//!
//! Field checks used by the create and update commands, and parsing of the
//! `:id` path parameter.
//!
//! # Examples
//!
//! ```rust,ignore
//! use breeds_server::features::shared::validation::{FieldErrors, has_length};
//!
//! let mut errors = FieldErrors::default();
//! if !has_length("", 1, 100) {
//!     errors.push("Name is required and must be 1-100 characters");
//! }
//! assert_eq!(errors.to_string(), "Name is required and must be 1-100 characters");
//! ```

use std::fmt;
use thiserror::Error;

/// Inclusive bounds for height values, in centimetres
pub const HEIGHT_CM_BOUNDS: (i64, i64) = (1, 200);

/// Inclusive bounds for weight values, in kilograms
pub const WEIGHT_KG_BOUNDS: (f64, f64) = (0.1, 200.0);

/// URL schemes accepted for `image_url`
const URL_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Ordered list of per-field validation messages.
///
/// Displays as the messages joined with `", "`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<String>);

impl FieldErrors {
    pub fn push(&mut self, message: impl Into<String>) {
        self.0.push(message.into());
    }

    /// Record `message` unless `ok` holds
    pub fn check(&mut self, ok: bool, message: &str) {
        if !ok {
            self.push(message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

impl std::error::Error for FieldErrors {}

/// `true` when the trimmed value has `min..=max` characters
pub fn has_length(value: &str, min: usize, max: usize) -> bool {
    let len = value.trim().chars().count();
    (min..=max).contains(&len)
}

/// `true` when `value` is an absolute http, https or ftp URL with a host
pub fn is_valid_url(value: &str) -> bool {
    match url::Url::parse(value) {
        Ok(url) => {
            URL_SCHEMES.contains(&url.scheme()) && url.host_str().is_some_and(|h| !h.is_empty())
        },
        Err(_) => false,
    }
}

pub fn is_valid_height(value: i64) -> bool {
    (HEIGHT_CM_BOUNDS.0..=HEIGHT_CM_BOUNDS.1).contains(&value)
}

pub fn is_valid_weight(value: f64) -> bool {
    value.is_finite() && (WEIGHT_KG_BOUNDS.0..=WEIGHT_KG_BOUNDS.1).contains(&value)
}

/// The `:id` path parameter is not a positive integer
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid breed ID")]
pub struct InvalidBreedId;

/// Parse a breed id path segment. Only plain positive decimal integers pass.
pub fn parse_breed_id(raw: &str) -> Result<i64, InvalidBreedId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InvalidBreedId);
    }

    match raw.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(InvalidBreedId),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_length_counts_trimmed_chars() {
        assert!(has_length("Beagle", 1, 100));
        assert!(!has_length("", 1, 100));
        assert!(!has_length("   ", 1, 100));
        assert!(has_length("  é  ", 1, 1));
        assert!(!has_length(&"x".repeat(101), 1, 100));
        assert!(has_length(&"x".repeat(100), 1, 100));
    }

    #[test]
    fn test_is_valid_url() {
        assert!(is_valid_url("https://images.example.com/dog.jpg?w=400"));
        assert!(is_valid_url("http://localhost:3000/a.png"));
        assert!(is_valid_url("ftp://files.example.com/dog.png"));
        assert!(!is_valid_url("not-a-url"));
        assert!(!is_valid_url("javascript:alert(1)"));
        assert!(!is_valid_url("file:///etc/passwd"));
        assert!(!is_valid_url(""));
    }

    #[test]
    fn test_numeric_bounds() {
        assert!(is_valid_height(1));
        assert!(is_valid_height(200));
        assert!(!is_valid_height(0));
        assert!(!is_valid_height(201));

        assert!(is_valid_weight(0.1));
        assert!(is_valid_weight(200.0));
        assert!(!is_valid_weight(0.05));
        assert!(!is_valid_weight(200.5));
        assert!(!is_valid_weight(f64::NAN));
    }

    #[test]
    fn test_parse_breed_id() {
        assert_eq!(parse_breed_id("1"), Ok(1));
        assert_eq!(parse_breed_id("42"), Ok(42));
        assert_eq!(parse_breed_id("0"), Err(InvalidBreedId));
        assert_eq!(parse_breed_id("-1"), Err(InvalidBreedId));
        assert_eq!(parse_breed_id("abc"), Err(InvalidBreedId));
        assert_eq!(parse_breed_id("1.5"), Err(InvalidBreedId));
        assert_eq!(parse_breed_id(""), Err(InvalidBreedId));
        assert_eq!(parse_breed_id("99999999999999999999"), Err(InvalidBreedId));
    }

    #[test]
    fn test_field_errors_join() {
        let mut errors = FieldErrors::default();
        assert!(errors.clone().into_result().is_ok());

        errors.check(true, "never");
        errors.check(false, "Name is required and must be 1-100 characters");
        errors.push("Image URL must be a valid URL");

        assert_eq!(errors.messages().len(), 2);
        assert_eq!(
            errors.to_string(),
            "Name is required and must be 1-100 characters, Image URL must be a valid URL"
        );
        assert!(errors.into_result().is_err());
    }
}
