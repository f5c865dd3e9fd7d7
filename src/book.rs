//! The address book: a keyed, insertion-ordered collection of records.

use crate::error::{BookError, BookResult};
use crate::models::{Record, RecordView};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;

/// An in-memory contact book mapping name values to [`Record`]s.
///
/// Iteration follows insertion order. Each name value keys at most one
/// record; inserting under an existing name replaces the old record while
/// keeping its position.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("Anna"));
/// assert!(book.find_record("Anna").is_ok());
/// assert!(book.find_record("Bob").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    records: IndexMap<String, Record>,
}

/// Exported view of an [`AddressBook`]: the merged view entries of every
/// record, in insertion order, ready for a JSON encoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBookView {
    entries: IndexMap<String, RecordView>,
}

impl AddressBook {
    /// Create a new empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its name value.
    ///
    /// A record under the same name is replaced silently and returned; the
    /// entry keeps its original insertion position.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        tracing::debug!("adding record for contact: {}", key);

        let displaced = self.records.insert(key, record);
        if let Some(old) = &displaced {
            tracing::debug!("replaced existing record for contact: {}", old.name());
        }
        displaced
    }

    /// Look up a record by name.
    ///
    /// Returns a shared reference into the book, not a copy.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no record exists under `name`.
    pub fn find_record(&self, name: &str) -> BookResult<&Record> {
        self.records
            .get(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    /// Look up a record by name for mutation.
    ///
    /// # Errors
    ///
    /// Returns `BookError::NotFound` if no record exists under `name`.
    pub fn find_record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.records
            .get_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    /// Drop the record under `name`, preserving the order of the survivors.
    pub fn remove_record(&mut self, name: &str) -> Option<Record> {
        let removed = self.records.shift_remove(name);
        if removed.is_some() {
            tracing::debug!("removed record for contact: {}", name);
        }
        removed
    }

    /// Whether a record exists under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Record> {
        self.records.values()
    }

    /// Page through the records in insertion order.
    ///
    /// Yields groups of `page_size` records; the last group may be shorter.
    /// An exact multiple of `page_size` records produces no trailing empty
    /// page, and `page_size == 0` yields no pages at all.
    pub fn paginate(&self, page_size: usize) -> Pages<'_> {
        Pages {
            book: self,
            offset: 0,
            page_size,
        }
    }

    /// Records whose rendered form contains `substring`, case-insensitively.
    ///
    /// The rendered form is the record's `Display` output (name, phones,
    /// birthday), so the match can land in any field. Results come lazily,
    /// in insertion order.
    pub fn find_contact<'a>(&'a self, substring: &str) -> impl Iterator<Item = &'a Record> + 'a {
        let needle = substring.to_lowercase();
        tracing::trace!("searching contacts for: {}", needle);
        self.records
            .values()
            .filter(move |record| record.to_string().to_lowercase().contains(&needle))
    }

    /// Export the whole book as a plain nested mapping.
    ///
    /// Merges every record's view entry; with `add_record` as the sole
    /// keyed mutator, key collisions cannot occur.
    pub fn to_view(&self) -> AddressBookView {
        AddressBookView {
            entries: self.records.values().map(Record::to_view_entry).collect(),
        }
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = indexmap::map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over pages of records, from [`AddressBook::paginate`].
///
/// Finite and fused: once exhausted it stays exhausted.
#[derive(Debug)]
pub struct Pages<'a> {
    book: &'a AddressBook,
    offset: usize,
    page_size: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Vec<&'a Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.page_size == 0 || self.offset >= self.book.records.len() {
            return None;
        }

        let end = usize::min(self.offset + self.page_size, self.book.records.len());
        let page = (self.offset..end)
            .filter_map(|i| self.book.records.get_index(i))
            .map(|(_, record)| record)
            .collect();
        self.offset = end;
        Some(page)
    }
}

impl FusedIterator for Pages<'_> {}

impl AddressBookView {
    /// The view entry under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&RecordView> {
        self.entries.get(name)
    }

    /// Number of entries in the view.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the view holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, RecordView> {
        self.entries.iter()
    }
}
