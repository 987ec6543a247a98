//! Application service layer.
//!
//! Services hold the pure business rules that read over the address book.
//! They never mutate records and never log.

pub mod birthday_service;

pub use birthday_service::{
    congratulation_date, next_occurrence, upcoming_birthdays, upcoming_congratulations,
    weekday_name, Congratulation, UpcomingBirthdays, UPCOMING_WINDOW_DAYS,
};
