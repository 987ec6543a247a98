//! Property-based tests for field validation and address book invariants.
//!
//! Reproducible: set PROPTEST_SEED for deterministic runs.

mod fixtures;

use chrono::{Duration, NaiveDate};
use contact_assistant::domain::Phone;
use contact_assistant::{AddressBook, BookError, Record};
use fixtures::*;
use proptest::prelude::*;

fn is_ten_ascii_digits(s: &str) -> bool {
    let trimmed = s.trim();
    trimmed.len() == 10 && trimmed.bytes().all(|b| b.is_ascii_digit())
}

/// Dates between 1900 and 2100.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..73_000).prop_map(|offset| date(1900, 1, 1) + Duration::days(offset))
}

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,20}[A-Za-z]"
}

proptest! {
    #[test]
    fn prop_ten_digit_phones_are_accepted(digits in "[0-9]{10}") {
        let phone = Phone::new(&digits).unwrap();
        prop_assert_eq!(phone.as_str(), digits.as_str());
    }

    #[test]
    fn prop_other_strings_are_rejected(raw in ".*") {
        prop_assume!(!is_ten_ascii_digits(&raw));
        prop_assert!(Phone::new(&raw).is_err());
    }

    #[test]
    fn prop_add_then_find_returns_record(name in name_strategy(), digits in "[0-9]{10}") {
        let mut book = AddressBook::new();
        let mut record = Record::new(&name).unwrap();
        record.add_phone(&digits).unwrap();
        book.add_record(record.clone()).unwrap();

        prop_assert_eq!(book.find(&name), Some(&record));
        prop_assert_eq!(
            book.add_record(Record::new(&name).unwrap()),
            Err(BookError::DuplicateKey(name.clone()))
        );
    }

    #[test]
    fn prop_upcoming_birthdays_are_repeatable(
        birthdays in proptest::collection::vec(date_strategy(), 0..20),
        today in date_strategy(),
    ) {
        let mut book = AddressBook::new();
        for (i, birthday) in birthdays.iter().enumerate() {
            let mut record = Record::new(format!("Contact {}", i)).unwrap();
            record.set_birthday(*birthday);
            book.add_record(record).unwrap();
        }

        let first = book.get_upcoming_birthdays(today);
        let second = book.get_upcoming_birthdays(today);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_congratulations_stay_near_window(
        birthday in date_strategy(),
        today in date_strategy(),
    ) {
        let mut record = Record::new("Someone").unwrap();
        record.set_birthday(birthday);

        let upcoming = contact_assistant::services::upcoming_congratulations([&record], today, 7);
        for c in upcoming {
            prop_assert!(c.occurrence >= today);
            prop_assert!(c.occurrence <= today + Duration::days(7));
            prop_assert!(c.congratulation_date <= today + Duration::days(9));
            prop_assert!(c.congratulation_date >= c.occurrence);
        }
    }
}
