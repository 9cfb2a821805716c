//! The relay bridge: channel mapping, wiring and the controller.

pub mod channels;
pub mod controller;
pub mod mapping;

pub use channels::{AdapterChannels, ChannelBundle, ControllerChannels};
pub use controller::{Bridge, LinkState};
pub use mapping::ChannelMap;
