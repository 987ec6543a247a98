//! Contact Assistant - Main entry point
//!
//! Runs the interactive address book assistant on stdin/stdout.

use anyhow::Result;
use contact_assistant::{bot, Assistant, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only so replies on stdout stay clean)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        window_days = config.birthday_window_days,
        today = ?config.today,
        "Configuration loaded successfully"
    );

    let mut assistant = Assistant::new(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = bot::run(&mut assistant, stdin.lock(), stdout.lock()) {
        error!("Assistant stopped on I/O error: {}", e);
        return Err(e.into());
    }

    info!(contacts = assistant.book().len(), "Assistant shutdown complete");
    Ok(())
}
