//! Contact Book - an in-memory address book with validated contact fields.
//!
//! This library stores named contact records, validates field formats at
//! construction time, and supports lookup, pagination, and substring search
//! over the whole book.
//!
//! # Architecture
//!
//! - **domain**: Type-safe value objects for names, phones, and birthdays
//! - **models**: The record structure aggregating one contact's data
//! - **book**: The address book keyed by name, with pagination and search
//! - **error**: Custom error types for precise error handling
//!
//! # Example
//!
//! ```
//! use contact_book::{domain::{Birthday, Phone}, AddressBook, Record};
//!
//! let mut book = AddressBook::new();
//! book.add_record(
//!     Record::new("Bob_1")
//!         .with_phone(Phone::new("80123456789").unwrap())
//!         .with_birthday(Birthday::new("1997-02-26").unwrap()),
//! );
//!
//! let bobs: Vec<_> = book.find_contact("bo").collect();
//! assert_eq!(bobs.len(), 1);
//! ```

// Re-export commonly used types
pub mod book;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddressBook, AddressBookView, Pages};
pub use domain::{Birthday, ContactName, Phone, ValidationError};
pub use error::{BookError, BookResult, RecordError, RecordResult};
pub use models::{Record, RecordView};
