//! Address book keyed by contact name.

use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::services::birthday_service::{self, UpcomingBirthdays, UPCOMING_WINDOW_DAYS};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Owning collection of records with unique names.
///
/// Iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record unless its name is already taken.
    ///
    /// # Errors
    ///
    /// Returns `BookError::DuplicateKey` if a record with the same name exists;
    /// the stored record is left untouched.
    pub fn add_record(&mut self, record: Record) -> BookResult<()> {
        let key = record.name().as_str().to_string();
        if self.records.contains_key(&key) {
            return Err(BookError::DuplicateKey(key));
        }
        self.order.push(key.clone());
        self.records.insert(key, record);
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`. Returns whether one was removed.
    pub fn delete(&mut self, name: &str) -> bool {
        if self.records.remove(name).is_none() {
            return false;
        }
        self.order.retain(|key| key != name);
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.order.iter().filter_map(|key| self.records.get(key))
    }

    /// Birthdays to celebrate from `today` through the next seven days,
    /// grouped by greeting weekday.
    pub fn get_upcoming_birthdays(&self, today: NaiveDate) -> UpcomingBirthdays {
        self.get_upcoming_birthdays_within(today, UPCOMING_WINDOW_DAYS)
    }

    /// Same as [`AddressBook::get_upcoming_birthdays`] with an explicit horizon.
    pub fn get_upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: u32,
    ) -> UpcomingBirthdays {
        birthday_service::upcoming_birthdays(self.iter(), today, window_days)
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Box<dyn Iterator<Item = &'a Record> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
