//! ContactName value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The name identifying a contact.
///
/// Names are opaque identifiers: any string is accepted unchanged, and the
/// name's string value doubles as the record's key inside an
/// [`AddressBook`](crate::AddressBook).
///
/// # Example
///
/// ```
/// use contact_book::domain::ContactName;
///
/// let name = ContactName::new("Bob_1");
/// assert_eq!(name.as_str(), "Bob_1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName. Never fails; names carry no format rules.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Comparison against raw string values, for callers holding plain &str keys.
impl PartialEq<str> for ContactName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ContactName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl From<&str> for ContactName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ContactName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
