//! Channel lookup scoped to a realm.

use std::collections::HashMap;

use tracing::debug;

use super::models::Channel;
use crate::errors::ReminderError;

/// Resolves channels on behalf of a requesting user's realm.
pub trait ChannelDirectory {
    /// # Errors
    ///
    /// Returns [`ReminderError::NotFound`] if no channel with `channel_id`
    /// exists in `realm_id`.
    fn channel_in_realm(&self, channel_id: u64, realm_id: u64) -> Result<Channel, ReminderError>;
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryChannelDirectory {
    channels: HashMap<(u64, u64), Channel>,
}

impl InMemoryChannelDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, channel: Channel) {
        self.channels.insert((channel.realm_id, channel.id), channel);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl FromIterator<Channel> for InMemoryChannelDirectory {
    fn from_iter<I: IntoIterator<Item = Channel>>(iter: I) -> Self {
        let mut directory = Self::new();
        for channel in iter {
            directory.insert(channel);
        }
        directory
    }
}

impl ChannelDirectory for InMemoryChannelDirectory {
    fn channel_in_realm(&self, channel_id: u64, realm_id: u64) -> Result<Channel, ReminderError> {
        match self.channels.get(&(realm_id, channel_id)) {
            Some(channel) => Ok(channel.clone()),
            None => {
                debug!(channel_id, realm_id, "Channel lookup missed");
                Err(ReminderError::NotFound(format!(
                    "channel {} in realm {}",
                    channel_id, realm_id
                )))
            }
        }
    }
}
