//! The relay controller.
//!
//! Owns the channel map, the text codec and the session seams; consumes
//! inbound events from both sides, classifies and translates them, and
//! issues the outbound call on the opposite session. Each event is handled
//! to completion before the next is taken, so no partially-processed
//! message ever interleaves with another. The only state shared between
//! the two directions is the read-only channel map.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::bridge::channels::ControllerChannels;
use crate::bridge::mapping::ChannelMap;
use crate::common::error::ConfigError;
use crate::common::messages::{
    IrcCommand, IrcEvent, MessageKind, RelayMessage, SlackEvent, SlackPost,
};
use crate::config::types::Config;
use crate::session::SlackDirectory;
use crate::text::codec::TextCodec;
use crate::text::style;

/// Slack message subtypes relayed besides plain messages.
const ALLOWED_SUBTYPES: &[&str] = &["me_message"];

/// Base URL for per-author avatars, keyed by name alone.
const AVATAR_BASE_URL: &str = "https://robohash.org";

/// Connection state of one relay direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// No connectivity event seen yet.
    Idle,
    /// Session is up; messages may be relayed.
    Connected,
    /// A message is being translated and dispatched right now.
    Relaying,
    /// Session reported a disconnect.
    Disconnected,
}

/// The bridge controller.
pub struct Bridge {
    mapping: ChannelMap,
    codec: TextCodec,
    directory: Arc<dyn SlackDirectory>,
    channels: ControllerChannels,
    command_characters: Vec<char>,
    auto_send_commands: Vec<Vec<String>>,
    slack_state: LinkState,
    irc_state: LinkState,
    /// True between an IRC registration and the next disconnect; gates
    /// the auto-send commands to one run per session.
    irc_registered: bool,
}

impl Bridge {
    /// Create a controller from a validated configuration.
    ///
    /// Still fails with a [`ConfigError`] if the channel mapping cannot
    /// be built; a relay must not start half-configured.
    pub fn new(
        config: &Config,
        directory: Arc<dyn SlackDirectory>,
        channels: ControllerChannels,
    ) -> Result<Self, ConfigError> {
        let mapping = ChannelMap::build(&config.channel_mapping)?;

        Ok(Self {
            mapping,
            codec: TextCodec::new(),
            directory,
            channels,
            command_characters: config.command_characters.clone(),
            auto_send_commands: config.auto_send_commands.clone(),
            slack_state: LinkState::Idle,
            irc_state: LinkState::Idle,
            irc_registered: false,
        })
    }

    /// The channel map, e.g. for handing the join list to the IRC client.
    pub fn mapping(&self) -> &ChannelMap {
        &self.mapping
    }

    pub fn slack_state(&self) -> LinkState {
        self.slack_state
    }

    pub fn irc_state(&self) -> LinkState {
        self.irc_state
    }

    /// Run the relay loop until either inbound stream closes.
    pub async fn run(mut self) {
        info!("Relay loop started");
        loop {
            tokio::select! {
                event = self.channels.slack_event_rx.recv() => match event {
                    Some(event) => self.handle_slack_event(event),
                    None => break,
                },
                event = self.channels.irc_event_rx.recv() => match event {
                    Some(event) => self.handle_irc_event(event),
                    None => break,
                },
            }
        }
        info!("Relay loop ended");
    }

    /// Handle one inbound Slack event.
    pub fn handle_slack_event(&mut self, event: SlackEvent) {
        match event {
            SlackEvent::Connected => {
                self.set_slack_state(LinkState::Connected);
                debug!("Connected to Slack");
            }
            SlackEvent::Disconnected => {
                self.set_slack_state(LinkState::Disconnected);
                warn!("Slack session disconnected");
            }
            SlackEvent::Error(message) => {
                error!(error = %message, "Received error event from Slack");
            }
            SlackEvent::Message {
                channel_id,
                user_id,
                subtype,
                text,
            } => {
                // Joins, leaves, edits and bot chatter are not relayed.
                if let Some(ref subtype) = subtype {
                    if !ALLOWED_SUBTYPES.contains(&subtype.as_str()) {
                        debug!(subtype = %subtype, "Ignoring Slack message subtype");
                        return;
                    }
                }
                self.set_slack_state(LinkState::Relaying);
                self.relay_to_irc(&channel_id, &user_id, subtype.as_deref(), &text);
                self.set_slack_state(LinkState::Connected);
            }
        }
    }

    /// Handle one inbound IRC event.
    pub fn handle_irc_event(&mut self, event: IrcEvent) {
        match event {
            IrcEvent::Registered => {
                let first = !self.irc_registered;
                self.irc_registered = true;
                self.set_irc_state(LinkState::Connected);
                if first {
                    debug!("Registered with IRC server");
                    self.run_auto_send_commands();
                } else {
                    debug!("Duplicate registration event ignored");
                }
            }
            IrcEvent::Disconnected => {
                self.irc_registered = false;
                self.set_irc_state(LinkState::Disconnected);
                warn!("IRC session disconnected");
            }
            IrcEvent::Error(message) => {
                error!(error = %message, "Received error event from IRC");
            }
            IrcEvent::Invite { channel, from } => {
                debug!(channel = %channel, from = %from, "Received invite");
                if self.mapping.slack_channel_for(&channel).is_none() {
                    debug!(channel = %channel, "Channel not found in mapping, not joining");
                } else {
                    debug!(channel = %channel, "Joining channel");
                    self.send_irc(IrcCommand::Join { channel });
                }
            }
            IrcEvent::Message {
                from,
                channel,
                text,
            } => {
                self.set_irc_state(LinkState::Relaying);
                self.relay_to_slack(from, channel, text, MessageKind::Plain);
                self.set_irc_state(LinkState::Connected);
            }
            IrcEvent::Notice {
                from,
                channel,
                text,
            } => {
                self.set_irc_state(LinkState::Relaying);
                self.relay_to_slack(from, channel, text, MessageKind::Notice);
                self.set_irc_state(LinkState::Connected);
            }
            IrcEvent::Action {
                from,
                channel,
                text,
            } => {
                self.set_irc_state(LinkState::Relaying);
                self.relay_to_slack(from, channel, text, MessageKind::Action);
                self.set_irc_state(LinkState::Connected);
            }
        }
    }

    /// Relay one Slack message to IRC.
    fn relay_to_irc(
        &self,
        channel_id: &str,
        user_id: &str,
        subtype: Option<&str>,
        text: &str,
    ) {
        let Some(channel) = self.directory.channel_by_id(channel_id) else {
            info!(channel_id = %channel_id, "Received message from a channel the relay is not in");
            return;
        };
        let source_channel = channel.display_name();

        let Some(irc_channel) = self.mapping.irc_channel_for(&source_channel) else {
            debug!(channel = %source_channel, "No IRC mapping for channel, not relaying");
            return;
        };
        let irc_channel = irc_channel.to_string();

        let Some(author) = self.directory.user_name(user_id) else {
            warn!(user_id = %user_id, "Dropping message from unresolvable user");
            return;
        };

        let body = match self.codec.to_irc(text, self.directory.as_ref()) {
            Ok(body) => body,
            Err(error) => {
                warn!(error = %error, channel = %source_channel, "Dropping untranslatable message");
                return;
            }
        };

        // The notice envelope is detected on the translated body and is
        // orthogonal to the Plain/Action/Command classification: a
        // weakened plain message keeps its author prefix but goes out as
        // an IRC NOTICE.
        let weakened = style::is_weakened(&body);
        let body = if weakened { style::normalize(&body) } else { body };

        let kind = if self.is_command(&body) {
            MessageKind::Command
        } else if subtype == Some("me_message") {
            MessageKind::Action
        } else {
            MessageKind::Plain
        };

        let message = RelayMessage {
            author,
            source_channel,
            dest_channel: irc_channel,
            body,
            kind,
        };
        self.deliver_to_irc(message, weakened);
    }

    /// Issue the outbound IRC call(s) for a classified message.
    fn deliver_to_irc(&self, message: RelayMessage, weakened: bool) {
        let text = match message.kind {
            MessageKind::Command => {
                // Announce the author separately so IRC-side command
                // parsers see the command syntax unmangled.
                let prelude = format!("Command sent from Slack by {}:", message.author);
                self.send_irc(IrcCommand::Say {
                    channel: message.dest_channel.clone(),
                    text: prelude,
                });
                message.body
            }
            MessageKind::Action => {
                format!("Action: {} {}", message.author, message.body)
            }
            MessageKind::Plain | MessageKind::Notice => {
                format!("<{}> {}", style::insert_space(&message.author), message.body)
            }
        };

        debug!(channel = %message.dest_channel, "Sending message to IRC");
        let command = if weakened {
            IrcCommand::Notice {
                channel: message.dest_channel,
                text,
            }
        } else {
            IrcCommand::Say {
                channel: message.dest_channel,
                text,
            }
        };
        self.send_irc(command);
    }

    /// Relay one IRC message, notice or action to Slack.
    fn relay_to_slack(
        &self,
        author: String,
        irc_channel: String,
        text: String,
        kind: MessageKind,
    ) {
        let Some(slack_channel) = self.mapping.slack_channel_for(&irc_channel) else {
            debug!(channel = %irc_channel, "No Slack mapping for channel, not relaying");
            return;
        };
        let slack_channel = slack_channel.to_string();

        let Some(channel_id) = self.directory.channel_id_by_name(&slack_channel) else {
            info!(channel = %slack_channel, "Tried to send a message to a channel the relay is not in");
            return;
        };

        let body = self.codec.to_slack(&text);

        let message = RelayMessage {
            author,
            source_channel: irc_channel,
            dest_channel: slack_channel,
            body,
            kind,
        };
        self.deliver_to_slack(message, channel_id);
    }

    /// Post a message to Slack, applying the style envelope at the
    /// boundary.
    fn deliver_to_slack(&self, message: RelayMessage, channel_id: String) {
        let text = match message.kind {
            MessageKind::Notice => style::weaken(&message.body),
            MessageKind::Action => style::emphasize(&message.body),
            MessageKind::Plain | MessageKind::Command => message.body,
        };
        let icon_url = avatar_url(&message.author);

        debug!(channel = %message.dest_channel, author = %message.author, "Sending message to Slack");
        self.send_slack(SlackPost {
            channel_id,
            text,
            username: message.author,
            icon_url,
        });
    }

    /// Replay the configured post-registration commands, in order.
    fn run_auto_send_commands(&self) {
        for args in &self.auto_send_commands {
            debug!(command = ?args, "Sending auto command");
            self.send_irc(IrcCommand::Raw { args: args.clone() });
        }
    }

    fn is_command(&self, text: &str) -> bool {
        match text.chars().next() {
            Some(first) => self.command_characters.contains(&first),
            None => false,
        }
    }

    fn send_irc(&self, command: IrcCommand) {
        if self.channels.irc_command_tx.send(command).is_err() {
            error!("IRC command channel closed, dropping outbound message");
        }
    }

    fn send_slack(&self, post: SlackPost) {
        if self.channels.slack_post_tx.send(post).is_err() {
            error!("Slack post channel closed, dropping outbound message");
        }
    }

    fn set_slack_state(&mut self, next: LinkState) {
        if self.slack_state != next {
            debug!(from = ?self.slack_state, to = ?next, "Slack link state changed");
            self.slack_state = next;
        }
    }

    fn set_irc_state(&mut self, next: LinkState) {
        if self.irc_state != next {
            debug!(from = ?self.irc_state, to = ?next, "IRC link state changed");
            self.irc_state = next;
        }
    }
}

/// Deterministic avatar for an author, derived from the name alone.
fn avatar_url(author: &str) -> String {
    format!("{AVATAR_BASE_URL}/{author}.png?size=48x48")
}
