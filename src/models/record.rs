//! Record model: one contact's aggregated data.

use crate::domain::{Birthday, ContactName, Phone, ValidationError};
use crate::error::{RecordError, RecordResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact: one name, an ordered list of phones, and at most one
/// birthday.
///
/// The name is the record's identity and is fixed at construction. Phones
/// keep insertion order and are unique by value; mutations that would break
/// that fail without touching the list.
///
/// # Example
///
/// ```
/// use contact_book::{domain::Phone, Record};
///
/// let mut record = Record::new("Bob_1");
/// record.add_phone(Phone::new("80123456789").unwrap()).unwrap();
/// assert_eq!(record.phones().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: ContactName,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

/// Exported view of a [`Record`], minus the name (which becomes the key of
/// the enclosing mapping). Plain strings only, ready for a JSON encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordView {
    /// Phone numbers in insertion order
    pub phones: Vec<String>,

    /// Birthday in `YYYY-MM-DD` form, absent when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<String>,
}

impl Record {
    /// Create a new record with the given name and nothing else.
    pub fn new(name: impl Into<ContactName>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Builder-style phone attach for construction sites. A phone already
    /// present is a no-op rather than an error.
    pub fn with_phone(mut self, phone: Phone) -> Self {
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        self
    }

    /// Builder-style birthday attach for construction sites.
    pub fn with_birthday(mut self, birthday: Birthday) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// The record's name (its identity).
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Phones in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// The birthday, if one is set.
    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Set or replace the birthday.
    pub fn set_birthday(&mut self, birthday: Birthday) {
        self.birthday = Some(birthday);
    }

    /// Remove the birthday, if any.
    pub fn clear_birthday(&mut self) -> Option<Birthday> {
        self.birthday.take()
    }

    /// Append a phone, preserving insertion order.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::DuplicatePhone` if an equal phone is already
    /// present; the list is left unchanged.
    pub fn add_phone(&mut self, phone: Phone) -> RecordResult<()> {
        if self.phones.contains(&phone) {
            return Err(RecordError::DuplicatePhone(phone.into_inner()));
        }
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if no equal phone exists; the
    /// list is left unchanged.
    pub fn delete_phone(&mut self, phone: &Phone) -> RecordResult<Phone> {
        match self.phones.iter().position(|p| p == phone) {
            Some(index) => Ok(self.phones.remove(index)),
            None => Err(RecordError::PhoneNotFound(phone.as_str().to_string())),
        }
    }

    /// Replace `old` with `new` in place, preserving its position.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::PhoneNotFound` if `old` is absent; the list is
    /// left unchanged.
    pub fn edit_phone(&mut self, old: &Phone, new: Phone) -> RecordResult<()> {
        match self.phones.iter().position(|p| p == old) {
            Some(index) => {
                self.phones[index] = new;
                Ok(())
            }
            None => Err(RecordError::PhoneNotFound(old.as_str().to_string())),
        }
    }

    /// Days until the next occurrence of the birthday, counted from today
    /// (local date). `None` when no birthday is set; `Some(0)` when today
    /// is the birthday.
    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Deterministic core of [`days_to_birthday`](Self::days_to_birthday):
    /// counts from an explicit `today`.
    ///
    /// The next occurrence is this year's month/day on or after `today`,
    /// else next year's. A Feb 29 birthday clamps to Feb 28 in non-leap
    /// years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;

        let mut next = birthday.occurrence_in(today.year());
        if next < today {
            next = birthday.occurrence_in(today.year() + 1);
        }

        Some((next - today).num_days())
    }

    /// Export as a plain-string view, keyed by the name.
    pub fn to_view_entry(&self) -> (String, RecordView) {
        (self.name.as_str().to_string(), self.to_view())
    }

    /// Export the nameless part of the view.
    pub fn to_view(&self) -> RecordView {
        RecordView {
            phones: self.phones.iter().map(|p| p.as_str().to_string()).collect(),
            birthday: self.birthday.as_ref().map(|b| b.as_str().to_string()),
        }
    }

    /// Rebuild a record from a view entry, re-validating every field.
    ///
    /// Phones go through [`add_phone`](Self::add_phone), so the rebuilt
    /// record keeps the uniqueness invariant.
    ///
    /// # Errors
    ///
    /// Returns `RecordError::Validation` if any phone or the birthday in
    /// the view fails validation, and `RecordError::DuplicatePhone` if the
    /// view lists the same phone twice.
    pub fn from_view_entry(
        name: impl Into<ContactName>,
        view: &RecordView,
    ) -> RecordResult<Self> {
        let mut record = Record::new(name);
        for phone in &view.phones {
            record.add_phone(Phone::new(phone.clone())?)?;
        }
        if let Some(birthday) = &view.birthday {
            record.birthday = Some(Birthday::new(birthday.clone())?);
        }
        Ok(record)
    }
}

// Display support - "<name> <phone1, phone2, ...> <birthday-or-empty>"
impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let birthday = self.birthday.as_ref().map(|b| b.as_str()).unwrap_or("");
        write!(f, "{} {} {}", self.name, phones, birthday)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(s: &str) -> Phone {
        Phone::new(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_phone_preserves_order() {
        let mut record = Record::new("Nico");
        record.add_phone(phone("80123456789")).unwrap();
        record.add_phone(phone("80987654921")).unwrap();

        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["80123456789", "80987654921"]);
    }

    #[test]
    fn test_add_phone_rejects_duplicate() {
        let mut record = Record::new("Bob_1");
        record.add_phone(phone("80123456789")).unwrap();

        let err = record.add_phone(phone("80123456789")).unwrap_err();
        assert_eq!(
            err,
            RecordError::DuplicatePhone("80123456789".to_string())
        );
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_delete_phone() {
        let mut record = Record::new("Anna");
        record.add_phone(phone("80123456789")).unwrap();
        record.add_phone(phone("80987654921")).unwrap();

        let removed = record.delete_phone(&phone("80123456789")).unwrap();
        assert_eq!(removed.as_str(), "80123456789");
        assert_eq!(record.phones(), &[phone("80987654921")]);
    }

    #[test]
    fn test_delete_phone_missing_leaves_list_unchanged() {
        let mut record = Record::new("Anna");
        record.add_phone(phone("80123456789")).unwrap();

        let err = record.delete_phone(&phone("80000000000")).unwrap_err();
        assert_eq!(err, RecordError::PhoneNotFound("80000000000".to_string()));
        assert_eq!(record.phones().len(), 1);
    }

    #[test]
    fn test_edit_phone_preserves_position() {
        let mut record = Record::new("Oleg");
        record.add_phone(phone("111111111")).unwrap();
        record.add_phone(phone("222222222")).unwrap();
        record.add_phone(phone("333333333")).unwrap();

        record
            .edit_phone(&phone("222222222"), phone("444444444"))
            .unwrap();

        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        assert_eq!(phones, vec!["111111111", "444444444", "333333333"]);
    }

    #[test]
    fn test_edit_phone_missing_leaves_list_unchanged() {
        let mut record = Record::new("Oleg");
        record.add_phone(phone("111111111")).unwrap();

        let err = record
            .edit_phone(&phone("999999999"), phone("444444444"))
            .unwrap_err();
        assert_eq!(err, RecordError::PhoneNotFound("999999999".to_string()));
        assert_eq!(record.phones(), &[phone("111111111")]);
    }

    #[test]
    fn test_days_to_birthday_none_without_birthday() {
        let record = Record::new("Nico");
        assert_eq!(record.days_to_birthday_from(date(2026, 8, 29)), None);
    }

    #[test]
    fn test_days_to_birthday_upcoming_this_year() {
        let record =
            Record::new("Bob_1").with_birthday(Birthday::new("1997-09-10").unwrap());
        assert_eq!(record.days_to_birthday_from(date(2026, 9, 1)), Some(9));
    }

    #[test]
    fn test_days_to_birthday_today_is_zero() {
        let record =
            Record::new("Bob_1").with_birthday(Birthday::new("1997-02-26").unwrap());
        assert_eq!(record.days_to_birthday_from(date(2026, 2, 26)), Some(0));
    }

    #[test]
    fn test_days_to_birthday_rolls_to_next_year() {
        let record =
            Record::new("Bob_2").with_birthday(Birthday::new("2000-02-26").unwrap());
        // Feb 26 already passed, so the next occurrence is Feb 26 2027.
        let days = record.days_to_birthday_from(date(2026, 2, 27)).unwrap();
        assert_eq!(days, 364);
    }

    #[test]
    fn test_days_to_birthday_feb_29_clamps() {
        let record =
            Record::new("Leap").with_birthday(Birthday::new("2000-02-29").unwrap());
        // 2026 is not a leap year, so the occurrence is Feb 28 2026.
        assert_eq!(record.days_to_birthday_from(date(2026, 2, 28)), Some(0));
        assert_eq!(record.days_to_birthday_from(date(2026, 2, 27)), Some(1));
    }

    #[test]
    fn test_display_format() {
        let record = Record::new("Nico")
            .with_phone(phone("80123456789"))
            .with_phone(phone("80987654921"))
            .with_birthday(Birthday::new("1999-02-26").unwrap());
        assert_eq!(
            record.to_string(),
            "Nico 80123456789, 80987654921 1999-02-26"
        );
    }

    #[test]
    fn test_display_without_birthday_renders_empty_slot() {
        let record = Record::new("Anna").with_phone(phone("80123456789"));
        assert_eq!(record.to_string(), "Anna 80123456789 ");
    }

    #[test]
    fn test_view_round_trip() {
        let record = Record::new("Bob_1")
            .with_phone(phone("80123456789"))
            .with_phone(phone("80987654921"))
            .with_birthday(Birthday::new("1997-02-26").unwrap());

        let (name, view) = record.to_view_entry();
        assert_eq!(name, "Bob_1");
        assert_eq!(view.phones, vec!["80123456789", "80987654921"]);
        assert_eq!(view.birthday.as_deref(), Some("1997-02-26"));

        let rebuilt = Record::from_view_entry(name, &view).unwrap();
        assert_eq!(rebuilt, record);
    }

    #[test]
    fn test_view_without_birthday() {
        let record = Record::new("Anna").with_phone(phone("80123456789"));
        let view = record.to_view();
        assert_eq!(view.birthday, None);

        let rebuilt = Record::from_view_entry("Anna", &view).unwrap();
        assert_eq!(rebuilt.birthday(), None);
    }

    #[test]
    fn test_from_view_entry_rejects_bad_phone() {
        let view = RecordView {
            phones: vec!["80123456789".to_string(), "not-a-phone".to_string()],
            birthday: None,
        };
        let err = Record::from_view_entry("Anna", &view).unwrap_err();
        assert_eq!(
            err,
            RecordError::Validation(ValidationError::InvalidPhone("not-a-phone".to_string()))
        );
    }

    #[test]
    fn test_from_view_entry_rejects_repeated_phone() {
        let view = RecordView {
            phones: vec!["80123456789".to_string(), "80123456789".to_string()],
            birthday: None,
        };
        let err = Record::from_view_entry("Anna", &view).unwrap_err();
        assert_eq!(
            err,
            RecordError::DuplicatePhone("80123456789".to_string())
        );
    }
}
