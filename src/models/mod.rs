//! Data models for contact book entities.
//!
//! This module contains the record structure aggregating one contact's
//! validated fields, plus its exported view form.

pub mod record;

pub use record::{Record, RecordView};
