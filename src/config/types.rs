//! Configuration type definitions.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Configuration for one relay instance.
///
/// Field names mirror the JSON config surface (`channelMapping`,
/// `commandCharacters`, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// IRC server host.
    pub server: String,
    /// IRC nickname for the relay.
    pub nickname: String,
    /// Slack API token.
    pub token: String,
    /// Slack channel -> `"#irc-channel[ password]"`.
    pub channel_mapping: BTreeMap<String, String>,
    /// Leading characters marking a message as an IRC-side command.
    #[serde(default)]
    pub command_characters: Vec<char>,
    /// Raw IRC commands sent once after each registration, in order.
    #[serde(default)]
    pub auto_send_commands: Vec<Vec<String>>,
    /// Transport tuning options handed through to the IRC client
    /// untouched.
    #[serde(default)]
    pub irc_options: BTreeMap<String, serde_json::Value>,
}
