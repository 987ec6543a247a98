//! Command handlers for the assistant bot.
//!
//! Each handler maps one command onto address book calls and returns the
//! reply text, or a [`CommandError`] whose `Display` is the reply.

use super::command::{parse_input, Command};
use crate::config::Config;
use crate::domain::Phone;
use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use chrono::{Local, NaiveDate};
use tracing::debug;

const ADD_USAGE: &str = "Give me name and phone please.";
const CHANGE_USAGE: &str = "Give me name, old phone and new phone please.";
const NAME_USAGE: &str = "Enter user name.";

/// What the loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Print the message and keep reading commands.
    Reply(String),
    /// Print the message and stop.
    Exit(String),
}

impl Response {
    pub fn message(&self) -> &str {
        match self {
            Response::Reply(message) | Response::Exit(message) => message,
        }
    }
}

/// The interactive assistant: an address book plus command dispatch.
#[derive(Debug, Clone)]
pub struct Assistant {
    book: AddressBook,
    today: Option<NaiveDate>,
    birthday_window_days: u32,
}

impl Assistant {
    /// Create an assistant with an empty book.
    pub fn new(config: &Config) -> Self {
        Self::with_book(AddressBook::new(), config)
    }

    /// Create an assistant around an existing book.
    pub fn with_book(book: AddressBook, config: &Config) -> Self {
        Self {
            book,
            today: config.today,
            birthday_window_days: config.birthday_window_days,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    /// Handle one line of user input.
    pub fn handle(&mut self, line: &str) -> Response {
        let (token, args) = parse_input(line);
        let command = token.parse::<Command>().unwrap_or(Command::Unknown);
        debug!(command = ?command, args = args.len(), "Handling command");

        let result = match command {
            Command::Exit => return Response::Exit("Good bye!".to_string()),
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add => self.add_contact(&args),
            Command::Change => self.change_contact(&args),
            Command::Phone => self.show_phone(&args),
            Command::All => Ok(self.show_all()),
            Command::AddBirthday => self.add_birthday(&args),
            Command::ShowBirthday => self.show_birthday(&args),
            Command::Birthdays => Ok(self.birthdays()),
            Command::Unknown => Ok("Invalid command.".to_string()),
        };

        match result {
            Ok(reply) => Response::Reply(reply),
            Err(e) => {
                debug!(command = ?command, error = ?e, "Command failed");
                Response::Reply(e.to_string())
            }
        }
    }

    fn add_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, phone, ..] = args else {
            return Err(CommandError::MissingArguments(ADD_USAGE));
        };
        let (record, message) = self.find_or_create(name, "Contact added.", "Contact updated.")?;
        record.add_phone(phone)?;
        Ok(message.to_string())
    }

    fn change_contact(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, old, new, ..] = args else {
            return Err(CommandError::MissingArguments(CHANGE_USAGE));
        };
        let record = self.book.find_mut(name).ok_or(CommandError::NotFound)?;
        if record.edit_phone(old, new)? {
            Ok("Contact updated.".to_string())
        } else {
            Ok("Old phone not found.".to_string())
        }
    }

    fn show_phone(&self, args: &[String]) -> CommandResult<String> {
        let [name, ..] = args else {
            return Err(CommandError::MissingArguments(NAME_USAGE));
        };
        let record = self.book.find(name).ok_or(CommandError::NotFound)?;
        let phones = if record.phones().is_empty() {
            "(no phones)".to_string()
        } else {
            record
                .phones()
                .iter()
                .map(Phone::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        Ok(format!("{}: {}", name, phones))
    }

    fn show_all(&self) -> String {
        if self.book.is_empty() {
            return "(No contacts yet)".to_string();
        }
        self.book
            .iter()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add_birthday(&mut self, args: &[String]) -> CommandResult<String> {
        let [name, birthday, ..] = args else {
            return Err(CommandError::MissingArguments(NAME_USAGE));
        };
        let (record, message) =
            self.find_or_create(name, "Birthday added.", "Birthday updated.")?;
        record.add_birthday(birthday)?;
        Ok(message.to_string())
    }

    fn show_birthday(&self, args: &[String]) -> CommandResult<String> {
        let [name, ..] = args else {
            return Err(CommandError::MissingArguments(NAME_USAGE));
        };
        let record = self.book.find(name).ok_or(CommandError::NotFound)?;
        Ok(match record.birthday() {
            Some(birthday) => birthday.to_string(),
            None => format!("{} has no birthday set.", name),
        })
    }

    fn birthdays(&self) -> String {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        let upcoming = self
            .book
            .get_upcoming_birthdays_within(today, self.birthday_window_days);
        if upcoming.is_empty() {
            return format!("No birthdays in the next {} days.", self.birthday_window_days);
        }
        upcoming.to_string()
    }

    /// Look up `name`, inserting a fresh record if it is missing.
    ///
    /// Returns the record with `created` or `existing` depending on which
    /// path was taken.
    fn find_or_create(
        &mut self,
        name: &str,
        created: &'static str,
        existing: &'static str,
    ) -> CommandResult<(&mut Record, &'static str)> {
        let message = if self.book.find(name).is_some() {
            existing
        } else {
            self.book.add_record(Record::new(name)?)?;
            created
        };
        let record = self.book.find_mut(name).ok_or(CommandError::NotFound)?;
        Ok((record, message))
    }
}
