//! Reminder message bodies that quote an earlier message.
//!
//! A reminder consists of a pointer to the original message, an attribution
//! line linking back to the conversation, and the original content inside a
//! `quote` fenced block. The whole body is kept within the configured maximum
//! message length by truncating the quoted content.

use tracing::{debug, info};

use crate::core::channels::{ChannelDirectory, InMemoryChannelDirectory};
use crate::core::config::ReminderConfig;
use crate::core::models::{
    Message, MessageLocation, Recipient, ReminderRequest, RequestingUser, WideMessage,
};
use crate::errors::ReminderError;
use crate::markdown::fence::get_unused_fence;
use crate::markdown::mention::silent_mention_syntax_for_user;
use crate::markdown::topic_link::get_message_link_syntax;
use crate::utils::links::message_link_url;

/// Appended to quoted content that had to be cut short.
pub const TRUNCATION_MARKER: &str = "\n[message truncated]";

const QUOTE_OPENER: &str = "quote\n";
const QUOTE_CLOSER: &str = "\n";

/// User-visible phrases of a reminder. `Default` is English.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderPhrases {
    /// Placed before the message link of a channel post.
    pub channel_reminder_lead: String,
    /// Placed after the message link of a channel post.
    pub channel_reminder_tail: String,
    pub direct_message_reminder: String,
    /// Text of the link back to the conversation.
    pub said: String,
}

impl Default for ReminderPhrases {
    fn default() -> Self {
        Self {
            channel_reminder_lead: "You requested a reminder for ".to_string(),
            channel_reminder_tail: ".".to_string(),
            direct_message_reminder: "You requested a reminder for the following direct message."
                .to_string(),
            said: "said".to_string(),
        }
    }
}

/// Cut `content` to at most `max_length` characters.
///
/// Content that already fits is returned unchanged. Otherwise the kept
/// prefix is followed by `marker`, and the result is exactly `max_length`
/// characters long. If `marker` alone does not fit, the content is cut to
/// `max_length` characters without it.
///
/// # Examples
///
/// ```
/// use quote_reminder::reminder::truncate_content;
///
/// assert_eq!(truncate_content("short", 10, "…"), "short");
/// assert_eq!(truncate_content("a long sentence", 10, "…"), "a long se…");
/// ```
#[must_use]
pub fn truncate_content(content: &str, max_length: usize, marker: &str) -> String {
    if content.chars().count() <= max_length {
        return content.to_string();
    }

    let marker_length = marker.chars().count();
    if marker_length > max_length {
        return content.chars().take(max_length).collect();
    }

    let mut truncated: String = content.chars().take(max_length - marker_length).collect();
    truncated.push_str(marker);
    truncated
}

/// Locate `message` from the point of view of `current_user`'s realm.
///
/// # Errors
///
/// Returns [`ReminderError::NotFound`] if the message's channel does not
/// exist in the requesting user's realm.
pub fn resolve_location<D>(
    message: &Message,
    current_user: &RequestingUser,
    channels: &D,
) -> Result<MessageLocation, ReminderError>
where
    D: ChannelDirectory + ?Sized,
{
    match &message.recipient {
        Recipient::Channel { channel_id, topic } => {
            // Access to the message was checked by the caller.
            let channel = channels.channel_in_realm(*channel_id, current_user.realm.id)?;
            Ok(MessageLocation::Channel {
                channel_id: channel.id,
                channel_name: channel.name,
                topic_name: topic.clone(),
                message_id: message.id,
            })
        }
        Recipient::Direct { .. } => Ok(MessageLocation::Direct),
    }
}

/// Build the reminder body for `message` using English phrases.
///
/// # Errors
///
/// Returns [`ReminderError::NotFound`] if the message's channel is missing
/// from the requesting user's realm, and [`ReminderError::Configuration`] if
/// `max_message_length` cannot even hold the reminder without any quoted
/// content.
pub fn format_reminder<D>(
    message: &Message,
    current_user: &RequestingUser,
    channels: &D,
    max_message_length: usize,
) -> Result<String, ReminderError>
where
    D: ChannelDirectory + ?Sized,
{
    format_reminder_with_phrases(
        message,
        current_user,
        channels,
        max_message_length,
        &ReminderPhrases::default(),
    )
}

/// Same as [`format_reminder`] with caller-supplied phrases.
///
/// # Errors
///
/// See [`format_reminder`].
pub fn format_reminder_with_phrases<D>(
    message: &Message,
    current_user: &RequestingUser,
    channels: &D,
    max_message_length: usize,
    phrases: &ReminderPhrases,
) -> Result<String, ReminderError>
where
    D: ChannelDirectory + ?Sized,
{
    let location = resolve_location(message, current_user, channels)?;

    let mut content = match &location {
        MessageLocation::Channel {
            channel_id,
            channel_name,
            topic_name,
            message_id,
        } => format!(
            "{}{}{}",
            phrases.channel_reminder_lead,
            get_message_link_syntax(*channel_id, channel_name, topic_name, *message_id),
            phrases.channel_reminder_tail
        ),
        MessageLocation::Direct => phrases.direct_message_reminder.clone(),
    };

    let wide = WideMessage::new(message, &location);
    content.push_str("\n\n");
    content.push_str(&format!(
        "{} [{}]({}):",
        silent_mention_syntax_for_user(&message.sender),
        phrases.said,
        message_link_url(&current_user.realm, &wide)
    ));
    content.push('\n');

    let fence = get_unused_fence(&[content.as_str(), message.content.as_str()]);
    debug!(message_id = message.id, fence_length = fence.len(), "Selected quote fence");

    let overhead = content.chars().count()
        + fence.chars().count() * 2
        + QUOTE_OPENER.chars().count()
        + QUOTE_CLOSER.chars().count();
    let budget = max_message_length.checked_sub(overhead).ok_or_else(|| {
        ReminderError::Configuration(format!(
            "maximum message length {} is shorter than the reminder overhead of {} characters",
            max_message_length, overhead
        ))
    })?;

    let quoted = truncate_content(&message.content, budget, TRUNCATION_MARKER);
    if quoted != message.content {
        info!(
            message_id = message.id,
            budget, "Quoted message content truncated to fit reminder"
        );
    }

    content.push_str(&fence);
    content.push_str(QUOTE_OPENER);
    content.push_str(&quoted);
    content.push_str(QUOTE_CLOSER);
    content.push_str(&fence);
    Ok(content)
}

/// Render a self-contained request, resolving channels from the request itself.
///
/// # Errors
///
/// See [`format_reminder`].
pub fn render_request(
    request: &ReminderRequest,
    config: &ReminderConfig,
) -> Result<String, ReminderError> {
    let directory: InMemoryChannelDirectory = request.channels.iter().cloned().collect();
    format_reminder(
        &request.message,
        &request.requesting_user,
        &directory,
        config.max_message_length,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: &str = "\n[message truncated]";

    #[test]
    fn fitting_content_is_untouched() {
        let content = "x".repeat(50);
        assert_eq!(truncate_content(&content, 80, MARKER), content);
    }

    #[test]
    fn overflowing_content_fills_budget_exactly() {
        let content = "y".repeat(500);
        let truncated = truncate_content(&content, 80, MARKER);
        assert_eq!(truncated.chars().count(), 80);
        assert!(truncated.ends_with(MARKER));
        assert_eq!(truncated, format!("{}{}", "y".repeat(80 - MARKER.len()), MARKER));
    }

    #[test]
    fn marker_longer_than_budget_is_dropped() {
        assert_eq!(truncate_content("abcdefghij", 4, MARKER), "abcd");
        assert_eq!(truncate_content("abcdefghij", 0, MARKER), "");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let content = "é".repeat(10);
        assert_eq!(truncate_content(&content, 10, "!"), content);
        assert_eq!(truncate_content(&content, 5, "!"), "éééé!");
    }

    #[test]
    fn empty_content_stays_empty() {
        assert_eq!(truncate_content("", 0, MARKER), "");
        assert_eq!(truncate_content("", 100, MARKER), "");
    }
}
