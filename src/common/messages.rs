//! Canonical message types for relay communication.
//!
//! Single source of truth for the events the collaborator sessions emit,
//! the commands the relay issues back, and the envelope a message travels
//! in between the two.

/// Classification of a relayed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageKind {
    /// Ordinary chat message.
    #[default]
    Plain,
    /// A "/me"-style action.
    Action,
    /// An IRC notice, rendered weakened on the Slack side.
    Notice,
    /// Administrative command addressed at the IRC side.
    Command,
}

/// Normalized envelope for one message moving through the relay pipeline.
///
/// Created per inbound event once channel identities are resolved,
/// consumed by exactly one delivery, then discarded.
#[derive(Debug, Clone)]
pub struct RelayMessage {
    /// Author display name.
    pub author: String,
    /// Channel the message arrived from, in its own namespace.
    pub source_channel: String,
    /// Resolved counterpart channel on the other side.
    pub dest_channel: String,
    /// Message body, already translated to the destination dialect.
    pub body: String,
    /// Message classification.
    pub kind: MessageKind,
}

/// Inbound event from the Slack session adapter.
#[derive(Debug, Clone)]
pub enum SlackEvent {
    /// A user message. `subtype` is Slack's message subtype, if any.
    Message {
        channel_id: String,
        user_id: String,
        subtype: Option<String>,
        text: String,
    },
    /// The RTM connection opened.
    Connected,
    /// The RTM connection closed.
    Disconnected,
    /// Transport-level error reported by the Slack client.
    Error(String),
}

/// Inbound event from the IRC session adapter.
#[derive(Debug, Clone)]
pub enum IrcEvent {
    /// PRIVMSG to a channel.
    Message {
        from: String,
        channel: String,
        text: String,
    },
    /// NOTICE to a channel.
    Notice {
        from: String,
        channel: String,
        text: String,
    },
    /// CTCP ACTION in a channel.
    Action {
        from: String,
        channel: String,
        text: String,
    },
    /// INVITE into a channel.
    Invite { channel: String, from: String },
    /// Registration with the server completed.
    Registered,
    /// The connection dropped.
    Disconnected,
    /// Transport-level error reported by the IRC client.
    Error(String),
}

/// Outbound call for the IRC session to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrcCommand {
    /// PRIVMSG `text` to `channel`.
    Say { channel: String, text: String },
    /// NOTICE `text` to `channel`.
    Notice { channel: String, text: String },
    /// JOIN `channel`.
    Join { channel: String },
    /// Raw command sent verbatim, used for post-registration commands.
    Raw { args: Vec<String> },
}

/// Outbound message for the Slack session to post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackPost {
    /// Resolved Slack channel id to post into.
    pub channel_id: String,
    /// Message text, control codes stripped, style envelope applied.
    pub text: String,
    /// Display name to post under.
    pub username: String,
    /// Deterministic avatar for the author.
    pub icon_url: String,
}
