use std::env;

/// Ceiling used when `MAX_MESSAGE_LENGTH` is not set.
pub const DEFAULT_MAX_MESSAGE_LENGTH: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone)]
pub struct ReminderConfig {
    pub max_message_length: usize,
    pub log_format: LogFormat,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            max_message_length: DEFAULT_MAX_MESSAGE_LENGTH,
            log_format: LogFormat::Json,
        }
    }
}

impl ReminderConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source, e.g. a map in tests.
    pub fn from_vars<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_message_length = match lookup("MAX_MESSAGE_LENGTH") {
            Some(raw) => {
                let parsed = raw
                    .trim()
                    .parse::<usize>()
                    .map_err(|e| format!("MAX_MESSAGE_LENGTH: {}", e))?;
                if parsed == 0 {
                    return Err("MAX_MESSAGE_LENGTH: must be greater than zero".to_string());
                }
                parsed
            }
            None => DEFAULT_MAX_MESSAGE_LENGTH,
        };

        let log_format = match lookup("REMINDER_LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("json") => LogFormat::Json,
            Some("pretty") => LogFormat::Pretty,
            Some(other) => {
                return Err(format!(
                    "REMINDER_LOG_FORMAT: unsupported value '{}' (expected json or pretty)",
                    other
                ));
            }
        };

        Ok(Self {
            max_message_length,
            log_format,
        })
    }
}
