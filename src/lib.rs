//! Quote Reminder - builds chat reminder messages that quote an earlier message.
//!
//! A reminder body points at the original message, attributes it to its
//! sender with a link back to the conversation, and reproduces the original
//! content inside a `quote` fenced block that always fits the configured
//! maximum message length.
//!
//! # Architecture
//!
//! - `core` holds the data handed in by the host application (messages,
//!   users, realms, channels), the channel directory seam and configuration
//! - `markdown` produces the chat's markdown dialect: fences, silent
//!   mentions, channel/topic link tokens
//! - `utils::links` builds `#narrow/...` permalinks
//! - `reminder` assembles the final body
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use quote_reminder::core::channels::InMemoryChannelDirectory;
//! use quote_reminder::core::models::{Channel, Message, Realm, Recipient, RequestingUser, UserRef};
//! use quote_reminder::reminder::format_reminder;
//!
//! let realm = Realm::new(1, "https://chat.example.com").unwrap();
//! let mut channels = InMemoryChannelDirectory::new();
//! channels.insert(Channel { id: 5, name: "Denmark".into(), realm_id: 1 });
//!
//! let message = Message {
//!     id: 42,
//!     sender: UserRef { id: 10, full_name: "Iago".into() },
//!     recipient: Recipient::Channel { channel_id: 5, topic: "lunch".into() },
//!     content: "Pizza at noon?".into(),
//!     date_sent: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
//! };
//! let user = RequestingUser { id: 11, realm };
//!
//! let body = format_reminder(&message, &user, &channels, 10_000).unwrap();
//! assert!(body.starts_with("You requested a reminder for #**Denmark>lunch@42**."));
//! assert!(body.ends_with("```quote\nPizza at noon?\n```"));
//! ```

pub mod core;
pub mod errors;
pub mod markdown;
pub mod reminder;
pub mod utils;

use crate::core::config::LogFormat;

/// Configure structured logging with JSON output.
///
/// # Example
///
/// ```
/// // Initialize structured logging once at process start
/// quote_reminder::setup_logging();
/// ```
pub fn setup_logging() {
    setup_logging_with(LogFormat::Json);
}

/// Configure logging with the given output format.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn setup_logging_with(format: LogFormat) {
    use tracing_subscriber::prelude::*;

    #[cfg(feature = "debug-logs")]
    let level = tracing_subscriber::filter::LevelFilter::DEBUG;
    #[cfg(not(feature = "debug-logs"))]
    let level = tracing_subscriber::filter::LevelFilter::INFO;

    let registry = tracing_subscriber::registry().with(level);
    // A subscriber installed earlier (e.g. by another test) keeps precedence.
    let _ = match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };
}
