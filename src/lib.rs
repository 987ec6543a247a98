//! Contact Assistant - an in-memory address book with birthday scheduling.
//!
//! This library provides validated contact fields, an address book that keeps
//! contact names unique, and a birthday engine that reports who to congratulate
//! in the coming week, moving weekend greetings to Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, birthday)
//! - **models**: Contact records and the address book
//! - **services**: Birthday recurrence engine
//! - **bot**: Command parsing, dispatch, and the interactive loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod bot;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod services;

pub use bot::{Assistant, Response};
pub use config::Config;
pub use domain::{normalize_phone, Birthday, Name, Phone, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use models::{AddressBook, Record};
pub use services::{Congratulation, UpcomingBirthdays};
