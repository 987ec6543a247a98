//! Phone value object and the standalone SMS normalizer.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static TEN_DIGITS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

static NON_DIGIT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]").expect("Failed to compile non-digit regex"));

/// A type-safe wrapper for contact phone numbers.
///
/// The stored value is always exactly ten ASCII digits. Surrounding
/// whitespace is stripped before validation; nothing else is normalized.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Phone;
///
/// let phone = Phone::new(" 0501234567 ").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the trimmed input is
    /// exactly ten decimal digits.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = phone.as_ref();
        let digits = raw.trim();

        if !TEN_DIGITS_REGEX.is_match(digits) {
            return Err(ValidationError::InvalidPhone(raw.to_string()));
        }

        Ok(Self(digits.to_string()))
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Phone {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Normalize a free-form phone number for SMS delivery.
///
/// Keeps digits only and forces the `+38` country prefix. Input without any
/// digits yields an empty string.
///
/// ```
/// use contact_assistant::domain::normalize_phone;
///
/// assert_eq!(normalize_phone("(095) 234-5678\n"), "+380952345678");
/// assert_eq!(normalize_phone("380501234567"), "+380501234567");
/// ```
pub fn normalize_phone(raw: &str) -> String {
    let digits = NON_DIGIT_REGEX.replace_all(raw, "");
    if digits.is_empty() {
        return String::new();
    }

    if digits.starts_with("38") {
        format!("+{}", digits)
    } else {
        format!("+38{}", digits)
    }
}
