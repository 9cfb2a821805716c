//! Configuration parsing and validation.

pub mod parser;
pub mod types;
pub mod validate;

pub use parser::{load_config, load_configs, load_configs_str};
pub use types::Config;
pub use validate::{has_required_fields, validate_config};
