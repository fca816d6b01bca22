//! Markdown syntax for linking to channels, topics and messages.
//!
//! The compact `#**channel>topic@id**` form is preferred. Names containing
//! characters that the compact form cannot carry get a plain markdown link
//! to the equivalent `#narrow/...` fragment instead.

use regex::{Captures, Regex};

use crate::core::models::EMPTY_TOPIC_FALLBACK_NAME;
use crate::utils::links::encode_hash_component;

static INVALID_STREAM_TOPIC_RE: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"[`>*&\[\]]|(\$\$)")
        .unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
});

/// Whether `word` contains characters the compact `#**...**` syntax cannot carry.
#[must_use]
pub fn will_produce_broken_stream_topic_link(word: &str) -> bool {
    INVALID_STREAM_TOPIC_RE.is_match(word)
}

/// Replace characters that would break link text with HTML entities.
#[must_use]
pub fn escape_invalid_stream_topic_characters(text: &str) -> String {
    INVALID_STREAM_TOPIC_RE
        .replace_all(text, |caps: &Captures| {
            match &caps[0] {
                "`" => "&#96;",
                ">" => "&gt;",
                "*" => "&#42;",
                "&" => "&amp;",
                "$$" => "&#36;&#36;",
                "[" => "&#91;",
                "]" => "&#93;",
                other => other,
            }
            .to_string()
        })
        .into_owned()
}

/// Plain markdown link to a channel, optionally narrowed to a topic and message.
#[must_use]
pub fn get_fallback_markdown_link(
    channel_id: u64,
    channel_name: &str,
    topic_name: Option<&str>,
    message_id: Option<u64>,
) -> String {
    let escape = escape_invalid_stream_topic_characters;
    let mut link = format!(
        "#narrow/channel/{}-{}",
        channel_id,
        encode_hash_component(&channel_name.replace(' ', "-"))
    );
    let mut text = format!("#{}", escape(channel_name));

    if let Some(topic) = topic_name {
        link.push_str("/topic/");
        link.push_str(&encode_hash_component(topic));
        let shown = if topic.is_empty() {
            EMPTY_TOPIC_FALLBACK_NAME
        } else {
            topic
        };
        text.push_str(" > ");
        text.push_str(&escape(shown));
    }

    if let Some(id) = message_id {
        link.push_str(&format!("/near/{}", id));
        text.push_str(" @ 💬");
    }

    format!("[{}]({})", text, link)
}

/// Link to a single message: `#**channel>topic@id**`, or a markdown link fallback.
#[must_use]
pub fn get_message_link_syntax(
    channel_id: u64,
    channel_name: &str,
    topic_name: &str,
    message_id: u64,
) -> String {
    if will_produce_broken_stream_topic_link(topic_name)
        || will_produce_broken_stream_topic_link(channel_name)
    {
        return get_fallback_markdown_link(
            channel_id,
            channel_name,
            Some(topic_name),
            Some(message_id),
        );
    }
    format!("#**{}>{}@{}**", channel_name, topic_name, message_id)
}

/// Link to a topic: `#**channel>topic**`, or a markdown link fallback.
#[must_use]
pub fn get_stream_topic_link_syntax(channel_id: u64, channel_name: &str, topic_name: &str) -> String {
    if will_produce_broken_stream_topic_link(topic_name)
        || will_produce_broken_stream_topic_link(channel_name)
    {
        return get_fallback_markdown_link(channel_id, channel_name, Some(topic_name), None);
    }
    format!("#**{}>{}**", channel_name, topic_name)
}

/// Link to a channel: `#**channel**`, or a markdown link fallback.
#[must_use]
pub fn get_stream_link_syntax(channel_id: u64, channel_name: &str) -> String {
    if will_produce_broken_stream_topic_link(channel_name) {
        return get_fallback_markdown_link(channel_id, channel_name, None, None);
    }
    format!("#**{}**", channel_name)
}
