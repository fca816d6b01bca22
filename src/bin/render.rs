// Renders one reminder from a JSON request read from a file argument or stdin.

use std::io::Read;

use anyhow::{Context, Result};
use quote_reminder::core::config::ReminderConfig;
use quote_reminder::core::models::ReminderRequest;
use quote_reminder::errors::ReminderError;
use quote_reminder::reminder::render_request;
use tracing::{error, info};

fn read_input() -> Result<String> {
    match std::env::args().nth(1) {
        Some(path) if path != "-" => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read reminder request from {}", path)),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read reminder request from stdin")?;
            Ok(raw)
        }
    }
}

fn main() -> Result<()> {
    let config = ReminderConfig::from_env().map_err(ReminderError::Configuration)?;
    quote_reminder::setup_logging_with(config.log_format);

    let raw = read_input()?;
    let request: ReminderRequest = serde_json::from_str(&raw).map_err(ReminderError::from)?;
    info!(
        message_id = request.message.id,
        requesting_user = request.requesting_user.id,
        "Rendering reminder"
    );

    match render_request(&request, &config) {
        Ok(body) => {
            println!("{}", body);
            Ok(())
        }
        Err(e) => {
            error!("Failed to render reminder: {}", e);
            Err(e.into())
        }
    }
}
