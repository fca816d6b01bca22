use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::core::models::{Realm, WideMessage, WideRecipient};

/// Bytes left untouched when encoding a narrow hash component.
const HASH_COMPONENT_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'*');

/// Encode a channel name or topic for use inside a `#narrow/...` fragment.
///
/// The value is percent-encoded as UTF-8, then `%` becomes `.` so the result
/// survives being embedded in a URL fragment; literal dots are escaped as
/// `.2E` to keep the encoding reversible.
///
/// # Examples
///
/// ```
/// use quote_reminder::utils::links::encode_hash_component;
///
/// assert_eq!(encode_hash_component("lunch plans"), "lunch.20plans");
/// assert_eq!(encode_hash_component("v1.0 (beta)"), "v1.2E0.20.28beta.29");
/// ```
#[must_use]
pub fn encode_hash_component(s: &str) -> String {
    let encoded = utf8_percent_encode(s, HASH_COMPONENT_SAFE).to_string();
    let mut out = String::with_capacity(encoded.len());
    for c in encoded.chars() {
        match c {
            '%' => out.push('.'),
            '.' => out.push_str(".2E"),
            other => out.push(other),
        }
    }
    out
}

/// `{id}-{encoded name}` with spaces in the name turned into dashes.
#[must_use]
pub fn encode_channel(channel_id: u64, channel_name: &str) -> String {
    format!(
        "{}-{}",
        channel_id,
        encode_hash_component(&channel_name.replace(' ', "-"))
    )
}

/// Direct conversations with at least this many participants are groups.
const GROUP_DM_MIN_PARTICIPANTS: usize = 3;

/// Permalink to a message inside its conversation view.
///
/// Direct messages link as `{ids}-dm` between one or two participants and as
/// `{ids}-group` once the sender and recipients number three or more.
#[must_use]
pub fn message_link_url(realm: &Realm, message: &WideMessage) -> String {
    match &message.recipient {
        WideRecipient::Channel {
            channel_id,
            display_recipient,
            topic,
        } => format!(
            "{}/#narrow/channel/{}/topic/{}/near/{}",
            realm.base_url(),
            encode_channel(*channel_id, display_recipient),
            encode_hash_component(topic),
            message.id
        ),
        WideRecipient::Direct { display_recipient } => {
            let ids = display_recipient
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(",");
            let suffix = if display_recipient.len() >= GROUP_DM_MIN_PARTICIPANTS {
                "group"
            } else {
                "dm"
            };
            format!(
                "{}/#narrow/dm/{}-{}/near/{}",
                realm.base_url(),
                ids,
                suffix,
                message.id
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_non_ascii_and_keeps_safe_marks() {
        assert_eq!(encode_hash_component("über*_~-"), ".C3.BCber*_~-");
        assert_eq!(encode_hash_component("100%"), "100.25");
    }

    #[test]
    fn channel_encoding_dashes_spaces() {
        assert_eq!(encode_channel(12, "core team"), "12-core-team");
    }

    #[test]
    fn direct_message_url_joins_participants() {
        let realm = Realm::new(1, "https://chat.example.com").unwrap();
        let wide = WideMessage {
            id: 88,
            sender_id: 3,
            timestamp: 0,
            recipient: WideRecipient::Direct {
                display_recipient: vec![3, 9],
            },
        };
        assert_eq!(
            message_link_url(&realm, &wide),
            "https://chat.example.com/#narrow/dm/3,9-dm/near/88"
        );
    }
}
