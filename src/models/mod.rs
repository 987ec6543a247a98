//! Data models for the address book.
//!
//! A [`Record`] aggregates validated fields for one contact; an
//! [`AddressBook`] owns records and keeps their names unique.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
