//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static BIRTHDAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("birthday pattern is valid"));

/// A type-safe wrapper for birthdays in `YYYY-MM-DD` form.
///
/// The string must match the pattern and name a real calendar date; the
/// parsed date is kept alongside the original string so the countdown in
/// [`Record::days_to_birthday`](crate::Record::days_to_birthday) never has
/// to re-parse.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::new("1997-02-26").unwrap();
/// assert_eq!(birthday.as_str(), "1997-02-26");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must match `^\d{4}-\d{2}-\d{2}$`
    /// - Must name a real calendar date (no `2020-13-40`)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the format is invalid.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();

        if !BIRTHDAY_RE.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        let date = match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
            Ok(date) => date,
            Err(_) => return Err(ValidationError::InvalidBirthday(raw)),
        };

        Ok(Self { raw, date })
    }

    /// Get the birthday as the original `YYYY-MM-DD` string.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Get the parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The occurrence of this birthday's month/day in the given year.
    ///
    /// A Feb 29 birthday clamps to Feb 28 in non-leap years.
    pub(crate) fn occurrence_in(&self, year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day()).unwrap_or_else(|| {
            NaiveDate::from_ymd_opt(year, 2, 28).expect("Feb 28 exists in every year")
        })
    }
}

// Comparison against raw string values.
impl PartialEq<str> for Birthday {
    fn eq(&self, other: &str) -> bool {
        self.raw == other
    }
}

impl PartialEq<&str> for Birthday {
    fn eq(&self, other: &&str) -> bool {
        self.raw == *other
    }
}

// Serde support - serialize as string
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("1997-02-26").unwrap();
        assert_eq!(birthday.as_str(), "1997-02-26");
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1997, 2, 26).unwrap()
        );
    }

    #[test]
    fn test_birthday_validates_format() {
        assert!(Birthday::new("").is_err());
        assert!(Birthday::new("1997/02/26").is_err());
        assert!(Birthday::new("26-02-1997").is_err());
        assert!(Birthday::new("1997-2-26").is_err());
        assert!(Birthday::new("1997-02-26 ").is_err());
        assert!(Birthday::new("1997-02-26").is_ok());
        assert!(Birthday::new("2000-12-31").is_ok());
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        // Pattern-valid but not on any calendar.
        assert!(Birthday::new("2020-13-01").is_err());
        assert!(Birthday::new("2020-02-30").is_err());
        assert!(Birthday::new("2021-02-29").is_err());
        // Feb 29 on a leap year is fine.
        assert!(Birthday::new("2020-02-29").is_ok());
    }

    #[test]
    fn test_birthday_occurrence_clamps_feb_29() {
        let birthday = Birthday::new("2000-02-29").unwrap();
        assert_eq!(
            birthday.occurrence_in(2024),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert_eq!(
            birthday.occurrence_in(2023),
            NaiveDate::from_ymd_opt(2023, 2, 28).unwrap()
        );
    }

    #[test]
    fn test_birthday_raw_value_equality() {
        let birthday = Birthday::new("1997-02-26").unwrap();
        assert_eq!(birthday, "1997-02-26");
        assert_ne!(birthday, "1997-02-27");
    }

    #[test]
    fn test_birthday_display() {
        let birthday = Birthday::new("1994-02-26").unwrap();
        assert_eq!(format!("{}", birthday), "1994-02-26");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("1999-02-26").unwrap();
        let json = serde_json::to_string(&birthday).unwrap();
        assert_eq!(json, "\"1999-02-26\"");
    }

    #[test]
    fn test_birthday_deserialization_invalid_fails() {
        let result: Result<Birthday, _> = serde_json::from_str("\"not-a-date\"");
        assert!(result.is_err());

        let result: Result<Birthday, _> = serde_json::from_str("\"2021-02-29\"");
        assert!(result.is_err());
    }
}
