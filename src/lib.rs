//! Switchboard - Slack-IRC chat relay bridge.
//!
//! Relays messages between Slack channels and IRC channels, presenting
//! each side's users to the other: Slack markup is rewritten to plain IRC
//! text, IRC notices and actions come back as Slack-styled messages, and
//! a validated channel table maps identities in both directions.
//!
//! The crate owns translation and routing only. The actual Slack and IRC
//! clients live in the host process and talk to the relay through seams:
//! inbound events and outbound commands cross [`bridge::ChannelBundle`]
//! mpsc pairs, and directory lookups go through
//! [`session::SlackDirectory`].

pub mod bridge;
pub mod common;
pub mod config;
pub mod session;
pub mod text;

pub use bridge::{Bridge, ChannelBundle, ChannelMap, LinkState};
pub use common::error::{ConfigError, ResolutionError};
pub use common::messages::{
    IrcCommand, IrcEvent, MessageKind, RelayMessage, SlackEvent, SlackPost,
};
pub use config::{load_config, load_configs, Config};
pub use session::{ChannelInfo, SlackDirectory};
pub use text::TextCodec;
