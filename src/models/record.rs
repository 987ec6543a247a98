//! Contact record: one name, any number of phones, an optional birthday.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// The name is fixed at construction and acts as the record's key. Phones
/// keep insertion order and may repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` for a blank name.
    pub fn new(name: impl AsRef<str>) -> Result<Self, ValidationError> {
        Ok(Self {
            name: Name::new(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone. Duplicates are kept.
    pub fn add_phone(&mut self, phone: impl AsRef<str>) -> Result<&Phone, ValidationError> {
        let index = self.phones.len();
        self.phones.push(Phone::new(phone)?);
        Ok(&self.phones[index])
    }

    /// Remove the first phone equal to `phone`. Returns whether one was removed.
    pub fn remove_phone(&mut self, phone: &str) -> bool {
        match self.position(phone) {
            Some(index) => {
                self.phones.remove(index);
                true
            }
            None => false,
        }
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// Returns `Ok(false)` when `old` is not present. The replacement is
    /// validated before anything is touched, so a malformed `new` leaves the
    /// phones unchanged even when `old` matches.
    pub fn edit_phone(&mut self, old: &str, new: impl AsRef<str>) -> Result<bool, ValidationError> {
        let Some(index) = self.position(old) else {
            return Ok(false);
        };
        self.phones[index] = Phone::new(new)?;
        Ok(true)
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| *p == phone)
    }

    /// Set or overwrite the birthday.
    pub fn add_birthday(&mut self, birthday: impl AsRef<str>) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Set or overwrite the birthday from an already validated value.
    pub fn set_birthday(&mut self, birthday: impl Into<Birthday>) {
        self.birthday = Some(birthday.into());
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
