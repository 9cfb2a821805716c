//! Bridge channel wiring.
//!
//! Groups the mpsc halves connecting the relay controller to the two
//! transport adapters. Outbound sends are fire-and-forget: the relay
//! never awaits delivery acknowledgments.

use tokio::sync::mpsc;

use crate::common::messages::{IrcCommand, IrcEvent, SlackEvent, SlackPost};

/// Channel ends held by the transport adapters.
pub struct AdapterChannels {
    /// Slack adapter pushes inbound events here.
    pub slack_event_tx: mpsc::UnboundedSender<SlackEvent>,
    /// IRC adapter pushes inbound events here.
    pub irc_event_tx: mpsc::UnboundedSender<IrcEvent>,
    /// IRC adapter drains outbound commands from here.
    pub irc_command_rx: mpsc::UnboundedReceiver<IrcCommand>,
    /// Slack adapter drains outbound posts from here.
    pub slack_post_rx: mpsc::UnboundedReceiver<SlackPost>,
}

/// Channel ends held by the relay controller.
pub struct ControllerChannels {
    /// Inbound Slack events.
    pub slack_event_rx: mpsc::UnboundedReceiver<SlackEvent>,
    /// Inbound IRC events.
    pub irc_event_rx: mpsc::UnboundedReceiver<IrcEvent>,
    /// Outbound IRC commands.
    pub irc_command_tx: mpsc::UnboundedSender<IrcCommand>,
    /// Outbound Slack posts.
    pub slack_post_tx: mpsc::UnboundedSender<SlackPost>,
}

/// Bundle of all channels connecting the controller and the adapters.
pub struct ChannelBundle {
    /// Ends for the transport adapters.
    pub adapters: AdapterChannels,
    /// Ends for the relay controller.
    pub controller: ControllerChannels,
}

impl ChannelBundle {
    /// Create a fresh set of bridge channels.
    pub fn new() -> Self {
        let (slack_event_tx, slack_event_rx) = mpsc::unbounded_channel();
        let (irc_event_tx, irc_event_rx) = mpsc::unbounded_channel();
        let (irc_command_tx, irc_command_rx) = mpsc::unbounded_channel();
        let (slack_post_tx, slack_post_rx) = mpsc::unbounded_channel();

        Self {
            adapters: AdapterChannels {
                slack_event_tx,
                irc_event_tx,
                irc_command_rx,
                slack_post_rx,
            },
            controller: ControllerChannels {
                slack_event_rx,
                irc_event_rx,
                irc_command_tx,
                slack_post_tx,
            },
        }
    }
}

impl Default for ChannelBundle {
    fn default() -> Self {
        Self::new()
    }
}
