//! Collaborator session seams.
//!
//! The relay core never talks to Slack or IRC directly: the transport
//! clients live in the host process. Directory lookups against Slack's
//! local cache (the one part of the session the relay must query
//! synchronously) come in through [`SlackDirectory`]; everything else
//! crosses the boundary as events and commands over the bridge channels.

/// Channel metadata from the Slack directory.
#[derive(Debug, Clone)]
pub struct ChannelInfo {
    /// Channel id (e.g. `C024BE91L`).
    pub id: String,
    /// Channel name, without the `#` prefix.
    pub name: String,
    /// True for public channels; groups and DMs carry no `#` prefix.
    pub is_channel: bool,
}

impl ChannelInfo {
    /// Display identity as used in the channel mapping: `#name` for
    /// channels, the bare name for groups and DMs.
    pub fn display_name(&self) -> String {
        if self.is_channel {
            format!("#{}", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Lookup half of the Slack session.
///
/// Implemented by the host's Slack client adapter over its cache; tests
/// implement it with fixed tables.
pub trait SlackDirectory: Send + Sync {
    /// Look up a channel, group or DM by id.
    fn channel_by_id(&self, id: &str) -> Option<ChannelInfo>;

    /// Look up a user's display name by id.
    fn user_name(&self, id: &str) -> Option<String>;

    /// Look up the id of a channel the bot is present in by its mapping
    /// name (`#general`, or a bare group/DM name).
    fn channel_id_by_name(&self, name: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefixes_channels_only() {
        let channel = ChannelInfo {
            id: "C1".to_string(),
            name: "general".to_string(),
            is_channel: true,
        };
        assert_eq!(channel.display_name(), "#general");

        let group = ChannelInfo {
            id: "G1".to_string(),
            name: "backroom".to_string(),
            is_channel: false,
        };
        assert_eq!(group.display_name(), "backroom");
    }
}
