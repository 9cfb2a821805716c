//! Message body translation and style tagging.

pub mod codec;
pub mod style;

pub use codec::TextCodec;
