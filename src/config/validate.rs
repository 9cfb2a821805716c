//! Configuration validation.
//!
//! Validates configuration values and provides helpful error messages.

use std::collections::HashSet;

use crate::common::error::ConfigError;
use crate::config::types::Config;

/// Validate a configuration and return detailed errors.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if config.server.is_empty() {
        errors.push("server is required".to_string());
    }
    if config.nickname.is_empty() {
        errors.push("nickname is required".to_string());
    }
    if config.token.is_empty() {
        errors.push("token is required".to_string());
    }

    if config.channel_mapping.is_empty() {
        errors.push("channelMapping is empty - no channels to relay".to_string());
    }
    let mut seen_irc_channels = HashSet::new();
    for (slack_channel, irc_value) in &config.channel_mapping {
        match irc_value.split_whitespace().next() {
            None => errors.push(format!(
                "channelMapping['{slack_channel}'] has an empty IRC channel"
            )),
            Some(irc_channel) => {
                let irc_channel = irc_channel.to_lowercase();
                if !seen_irc_channels.insert(irc_channel.clone()) {
                    errors.push(format!(
                        "channelMapping: IRC channel '{irc_channel}' is mapped more than once"
                    ));
                }
            }
        }
    }

    for (i, args) in config.auto_send_commands.iter().enumerate() {
        if args.is_empty() {
            errors.push(format!("autoSendCommands[{i}] is empty"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            message: errors.join("\n"),
        })
    }
}

/// Quick check that the minimum required fields are populated.
pub fn has_required_fields(config: &Config) -> bool {
    !config.server.is_empty()
        && !config.nickname.is_empty()
        && !config.token.is_empty()
        && !config.channel_mapping.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn make_valid_config() -> Config {
        let mut channel_mapping = BTreeMap::new();
        channel_mapping.insert("#general".to_string(), "#chan-a".to_string());
        channel_mapping.insert("#dev".to_string(), "#chan-b password".to_string());

        Config {
            server: "irc.example.org".to_string(),
            nickname: "relay".to_string(),
            token: "xoxb-test".to_string(),
            channel_mapping,
            command_characters: vec!['!'],
            auto_send_commands: Vec::new(),
            irc_options: BTreeMap::new(),
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(validate_config(&make_valid_config()).is_ok());
        assert!(has_required_fields(&make_valid_config()));
    }

    #[test]
    fn empty_server_fails() {
        let mut config = make_valid_config();
        config.server = String::new();

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("server"));
        assert!(!has_required_fields(&config));
    }

    #[test]
    fn empty_token_fails() {
        let mut config = make_valid_config();
        config.token = String::new();

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("token"));
    }

    #[test]
    fn empty_channel_mapping_fails() {
        let mut config = make_valid_config();
        config.channel_mapping.clear();

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("channelMapping"));
    }

    #[test]
    fn blank_irc_channel_fails() {
        let mut config = make_valid_config();
        config
            .channel_mapping
            .insert("#other".to_string(), "  ".to_string());

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty IRC channel"));
    }

    #[test]
    fn duplicate_irc_channel_fails() {
        let mut config = make_valid_config();
        config
            .channel_mapping
            .insert("#other".to_string(), "#CHAN-A".to_string());

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("mapped more than once"));
    }

    #[test]
    fn empty_auto_send_command_fails() {
        let mut config = make_valid_config();
        config.auto_send_commands = vec![Vec::new()];

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("autoSendCommands"));
    }

    #[test]
    fn all_errors_are_collected() {
        let mut config = make_valid_config();
        config.server = String::new();
        config.nickname = String::new();

        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("server"));
        assert!(message.contains("nickname"));
    }
}
