//! Shared types used across the relay.

pub mod error;
pub mod messages;

pub use error::{ConfigError, ResolutionError};
pub use messages::{IrcCommand, IrcEvent, MessageKind, RelayMessage, SlackEvent, SlackPost};
