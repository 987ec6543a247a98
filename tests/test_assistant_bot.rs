//! End-to-end tests for the interactive assistant loop.

mod fixtures;

use contact_assistant::{bot, Assistant, Config};
use fixtures::*;

fn session(config: &Config, script: &str) -> Vec<String> {
    let mut assistant = Assistant::new(config);
    let mut output = Vec::new();
    bot::run(&mut assistant, script.as_bytes(), &mut output).unwrap();

    String::from_utf8(output)
        .unwrap()
        .split("Enter a command: ")
        .skip(1)
        .map(|reply| reply.trim_end().to_string())
        .filter(|reply| !reply.is_empty())
        .collect()
}

#[test]
fn test_full_session() {
    let config = Config {
        today: Some(date(2005, 1, 25)),
        ..Config::default()
    };
    let script = "\
hello
add John 1234567890
add John 5555555555
change John 1234567890 1112223333
phone John
add-birthday Sam 25.01.1980
add-birthday Jane 27.01.1990
show-birthday Jane
all
birthdays
fly
exit
hello
";

    let replies = session(&config, script);
    assert_eq!(
        replies,
        vec![
            "How can I help you?",
            "Contact added.",
            "Contact updated.",
            "Contact updated.",
            "John: 1112223333, 5555555555",
            "Birthday added.",
            "Birthday added.",
            "27.01.1990",
            "Contact name: John, phones: 1112223333; 5555555555\n\
             Contact name: Sam, phones: \n\
             Contact name: Jane, phones:",
            "Tuesday: Sam\nThursday: Jane",
            "Invalid command.",
            "Good bye!",
        ]
    );
}

#[test]
fn test_errors_do_not_end_session() {
    let config = Config {
        today: Some(date(2005, 1, 25)),
        ..Config::default()
    };
    let script = "\
add
add John 123
change Nobody 1234567890 1234567890
show-birthday
add-birthday John 2000-01-01
phone John
close
";

    let replies = session(&config, script);
    assert_eq!(
        replies,
        vec![
            "Give me name and phone please.",
            "Phone must contain exactly 10 digits.",
            "Contact not found.",
            "Enter user name.",
            "Invalid date format. Use DD.MM.YYYY",
            "John: (no phones)",
            "Good bye!",
        ]
    );
}

#[test]
fn test_configured_window() {
    let config = Config {
        today: Some(date(2005, 1, 25)),
        birthday_window_days: 1,
        ..Config::default()
    };

    let replies = session(&config, "add-birthday Jane 27.01.1990\nbirthdays\n");
    assert_eq!(
        replies,
        vec!["Birthday added.", "No birthdays in the next 1 days."]
    );
}
