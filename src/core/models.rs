use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::ReminderError;

/// Display name used in links for a channel message sent with an empty topic.
pub const EMPTY_TOPIC_FALLBACK_NAME: &str = "general chat";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: u64,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Realm {
    pub id: u64,
    pub url: Url,
}

impl Realm {
    pub fn new(id: u64, url: &str) -> Result<Self, ReminderError> {
        Ok(Self {
            id,
            url: Url::parse(url)?,
        })
    }

    /// Base URL without a trailing slash, ready to have `/#narrow/...` appended.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.url.as_str().trim_end_matches('/')
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestingUser {
    pub id: u64,
    pub realm: Realm,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: u64,
    pub name: String,
    pub realm_id: u64,
}

/// Where a message was delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Recipient {
    Channel { channel_id: u64, topic: String },
    Direct { user_ids: Vec<u64> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub sender: UserRef,
    pub recipient: Recipient,
    pub content: String,
    pub date_sent: DateTime<Utc>,
}

/// A message's position as seen from the requesting user's realm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLocation {
    Channel {
        channel_id: u64,
        channel_name: String,
        topic_name: String,
        message_id: u64,
    },
    Direct,
}

/// Denormalized view of a message carrying everything a permalink needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WideMessage {
    pub id: u64,
    pub sender_id: u64,
    pub timestamp: i64,
    pub recipient: WideRecipient,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WideRecipient {
    Channel {
        channel_id: u64,
        display_recipient: String,
        topic: String,
    },
    Direct {
        display_recipient: Vec<u64>,
    },
}

impl WideMessage {
    /// Combine a message with its resolved location.
    ///
    /// Direct-message participants are sorted and de-duplicated, with the
    /// sender always included.
    #[must_use]
    pub fn new(message: &Message, location: &MessageLocation) -> Self {
        let recipient = match (location, &message.recipient) {
            (
                MessageLocation::Channel {
                    channel_id,
                    channel_name,
                    topic_name,
                    ..
                },
                _,
            ) => WideRecipient::Channel {
                channel_id: *channel_id,
                display_recipient: channel_name.clone(),
                topic: topic_name.clone(),
            },
            (MessageLocation::Direct, Recipient::Direct { user_ids }) => {
                let mut ids = user_ids.clone();
                ids.push(message.sender.id);
                ids.sort_unstable();
                ids.dedup();
                WideRecipient::Direct {
                    display_recipient: ids,
                }
            }
            (MessageLocation::Direct, Recipient::Channel { .. }) => WideRecipient::Direct {
                display_recipient: vec![message.sender.id],
            },
        };

        Self {
            id: message.id,
            sender_id: message.sender.id,
            timestamp: message.date_sent.timestamp(),
            recipient,
        }
    }
}

/// Input accepted by the renderer binary.
#[derive(Debug, Clone, Deserialize)]
pub struct ReminderRequest {
    pub requesting_user: RequestingUser,
    pub message: Message,
    #[serde(default)]
    pub channels: Vec<Channel>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn direct_message(user_ids: Vec<u64>) -> Message {
        Message {
            id: 7,
            sender: UserRef {
                id: 30,
                full_name: "Iago".into(),
            },
            recipient: Recipient::Direct { user_ids },
            content: "hi".into(),
            date_sent: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn wide_direct_message_includes_sender_sorted() {
        let msg = direct_message(vec![42, 11, 42]);
        let wide = WideMessage::new(&msg, &MessageLocation::Direct);
        assert_eq!(
            wide.recipient,
            WideRecipient::Direct {
                display_recipient: vec![11, 30, 42]
            }
        );
        assert_eq!(wide.timestamp, 1_714_564_800);
    }

    #[test]
    fn realm_base_url_drops_trailing_slash() {
        let realm = Realm::new(1, "https://chat.example.com/").unwrap();
        assert_eq!(realm.base_url(), "https://chat.example.com");
        assert!(Realm::new(1, "not a url").is_err());
    }

    #[test]
    fn recipient_deserializes_from_tagged_json() {
        let channel: Recipient =
            serde_json::from_str(r#"{"type":"channel","channel_id":5,"topic":"lunch"}"#).unwrap();
        assert_eq!(
            channel,
            Recipient::Channel {
                channel_id: 5,
                topic: "lunch".into()
            }
        );
        let direct: Recipient =
            serde_json::from_str(r#"{"type":"direct","user_ids":[1,2]}"#).unwrap();
        assert_eq!(direct, Recipient::Direct { user_ids: vec![1, 2] });
    }
}
