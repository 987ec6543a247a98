//! Interactive command-line front end for the address book.
//!
//! This module reads commands line by line, hands them to an [`Assistant`],
//! and writes the replies back.

pub mod command;
pub mod handlers;

pub use command::{parse_input, Command};
pub use handlers::{Assistant, Response};

use std::io::{self, BufRead, Write};
use tracing::info;

const WELCOME: &str = "Welcome to the assistant bot!";
const PROMPT: &str = "Enter a command: ";

/// Run the assistant over `input`/`output` until an exit command or end of input.
///
/// # Arguments
/// * `assistant` - The assistant holding the address book
/// * `input` - Source of command lines (stdin in the binary)
/// * `output` - Destination for prompts and replies (stdout in the binary)
///
/// # Returns
/// An error only if reading or writing fails
pub fn run<R, W>(assistant: &mut Assistant, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut lines = input.lines();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            info!("Input closed, stopping assistant");
            break;
        };

        match assistant.handle(&line) {
            Response::Reply(message) => writeln!(output, "{}", message)?,
            Response::Exit(message) => {
                writeln!(output, "{}", message)?;
                break;
            }
        }
    }

    Ok(())
}
