//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use contact_assistant::{AddressBook, Record};

/// Build a date, panicking on invalid input (tests only).
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// A record with a birthday given as `DD.MM.YYYY`.
pub fn record_with_birthday(name: &str, birthday: &str) -> Record {
    let mut record = Record::new(name).expect("valid test name");
    record.add_birthday(birthday).expect("valid test birthday");
    record
}

/// Book with a single birthday record.
pub fn book_with_birthday(name: &str, birthday: &str) -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(record_with_birthday(name, birthday))
        .expect("unique test name");
    book
}

/// The sample book: four regular birthdays, one leap-day birthday and one
/// contact without a birthday.
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    for (name, birthday) in [
        ("John Doe", "31.12.1985"),
        ("Mike Doe", "02.01.1980"),
        ("Jane Smith", "27.01.1990"),
        ("Sam Smith", "25.01.1980"),
        ("Leap Guy", "29.02.2000"),
    ] {
        book.add_record(record_with_birthday(name, birthday))
            .expect("unique test name");
    }

    let mut no_birthday = Record::new("No Birthday").expect("valid test name");
    no_birthday.add_phone("0501234567").expect("valid test phone");
    book.add_record(no_birthday).expect("unique test name");

    book
}

/// Names greeted on `weekday`, owned for easy comparison.
pub fn names_on(
    upcoming: &contact_assistant::UpcomingBirthdays,
    weekday: chrono::Weekday,
) -> Vec<String> {
    upcoming
        .get(weekday)
        .map(|names| names.to_vec())
        .unwrap_or_default()
}
