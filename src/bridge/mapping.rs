//! Channel identity mapping between the Slack and IRC namespaces.

use std::collections::{BTreeMap, HashMap};

use crate::common::error::ConfigError;

/// Bidirectional Slack ↔ IRC channel table.
///
/// Built once from configuration, read-only afterwards. IRC channel names
/// are case-insensitive by protocol convention, so the IRC side is stored
/// and queried lower-cased.
#[derive(Debug, Clone)]
pub struct ChannelMap {
    /// Slack channel name -> IRC channel name (password stripped).
    forward: HashMap<String, String>,
    /// IRC channel name -> Slack channel name.
    inverted: HashMap<String, String>,
    /// IRC channels as configured, password tokens included, in config
    /// order. Handed to the IRC client as its join list.
    join_specs: Vec<String>,
}

impl ChannelMap {
    /// Build the table from the raw `channelMapping` entries, where each
    /// value is `"#irc-channel[ password]"`.
    ///
    /// Rejects an empty mapping, empty IRC channel values, and two Slack
    /// channels sharing one IRC channel (the inverse lookup would keep
    /// only one of them).
    pub fn build(raw: &BTreeMap<String, String>) -> Result<Self, ConfigError> {
        if raw.is_empty() {
            return Err(ConfigError::ValidationError {
                message: "channelMapping must contain at least one entry".to_string(),
            });
        }

        let mut forward = HashMap::new();
        let mut inverted = HashMap::new();
        let mut join_specs = Vec::new();

        for (slack_channel, irc_value) in raw {
            let Some(irc_channel) = irc_value.split_whitespace().next() else {
                return Err(ConfigError::ValidationError {
                    message: format!("channelMapping['{slack_channel}'] has an empty IRC channel"),
                });
            };
            let irc_channel = irc_channel.to_lowercase();

            if inverted.contains_key(&irc_channel) {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "channelMapping maps more than one Slack channel to '{irc_channel}'"
                    ),
                });
            }

            forward.insert(slack_channel.clone(), irc_channel.clone());
            inverted.insert(irc_channel, slack_channel.clone());
            join_specs.push(irc_value.clone());
        }

        Ok(Self {
            forward,
            inverted,
            join_specs,
        })
    }

    /// IRC channel a Slack channel relays into, if mapped.
    pub fn irc_channel_for(&self, slack_channel: &str) -> Option<&str> {
        self.forward.get(slack_channel).map(String::as_str)
    }

    /// Slack channel an IRC channel relays into, if mapped.
    /// Case-insensitive on the IRC name.
    pub fn slack_channel_for(&self, irc_channel: &str) -> Option<&str> {
        self.inverted
            .get(&irc_channel.to_lowercase())
            .map(String::as_str)
    }

    /// Configured IRC channels with their password tokens, in config order.
    pub fn join_specs(&self) -> &[String] {
        &self.join_specs
    }

    /// Number of configured channel pairs.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
