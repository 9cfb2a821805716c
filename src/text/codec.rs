//! Message body translation between the Slack and IRC dialects.
//!
//! Slack bodies arrive with HTML-entity escapes and `<...>` control
//! sequences (mentions, channel and user references, links, special
//! commands) plus `:emoji:` shortcodes; IRC wants plain text. The
//! translation is lossy but deterministic. The reverse direction is close
//! to the identity: IRC text only has mIRC color codes stripped.

use fancy_regex::{Captures, Regex};

use crate::common::error::ResolutionError;
use crate::session::SlackDirectory;

/// Translates message bodies between the two dialects.
///
/// Holds the compiled patterns; construct once and share.
#[derive(Debug)]
pub struct TextCodec {
    /// `<#C...|label>` channel references.
    channel_ref: Regex,
    /// `<@U...|label>` user references.
    user_ref: Regex,
    /// `<url>` bare links (anything bracketed not starting with `!`).
    link_ref: Regex,
    /// `<!cmd|label>` special command references.
    command_ref: Regex,
    /// `:code:` emoji shortcodes.
    emoji_ref: Regex,
    /// Control byte followed by digits (mIRC color codes).
    control_code: Regex,
}

impl TextCodec {
    pub fn new() -> Self {
        Self {
            channel_ref: Regex::new(r"<#(C\w+)\|?(\w+)?>").unwrap(),
            user_ref: Regex::new(r"<@(U\w+)\|?(\w+)?>").unwrap(),
            link_ref: Regex::new(r"<(?!!)(\S+)>").unwrap(),
            command_ref: Regex::new(r"<!(\w+)\|?(\w+)?>").unwrap(),
            emoji_ref: Regex::new(r":(\w+):").unwrap(),
            control_code: Regex::new(r"[\x01-\x1F\x7F]\d+").unwrap(),
        }
    }

    /// Translate a Slack message body for IRC delivery.
    ///
    /// Entity unescaping must run before the bracket rewrites: raw `<`/`>`
    /// may themselves arrive entity-encoded. An unresolvable channel or
    /// user id fails the whole message rather than mangling it silently;
    /// unknown emoji shortcodes pass through untouched.
    pub fn to_irc(
        &self,
        text: &str,
        directory: &dyn SlackDirectory,
    ) -> Result<String, ResolutionError> {
        let text = text
            .replace("\r\n", " ")
            .replace('\r', " ")
            .replace('\n', " ")
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("<!channel>", "@channel")
            .replace("<!group>", "@group")
            .replace("<!everyone>", "@everyone");

        let mut failed: Option<ResolutionError> = None;

        let text = self
            .channel_ref
            .replace_all(&text, |caps: &Captures| -> String {
                if let Some(label) = caps.get(2) {
                    format!("#{}", label.as_str())
                } else {
                    let id = &caps[1];
                    match directory.channel_by_id(id) {
                        Some(info) => format!("#{}", info.name),
                        None => {
                            failed = Some(ResolutionError::Channel { id: id.to_string() });
                            String::new()
                        }
                    }
                }
            })
            .to_string();
        if let Some(error) = failed.take() {
            return Err(error);
        }

        let text = self
            .user_ref
            .replace_all(&text, |caps: &Captures| -> String {
                if let Some(label) = caps.get(2) {
                    format!("@{}", label.as_str())
                } else {
                    let id = &caps[1];
                    match directory.user_name(id) {
                        Some(name) => format!("@{name}"),
                        None => {
                            failed = Some(ResolutionError::User { id: id.to_string() });
                            String::new()
                        }
                    }
                }
            })
            .to_string();
        if let Some(error) = failed {
            return Err(error);
        }

        let text = self.link_ref.replace_all(&text, "$1").to_string();

        let text = self
            .command_ref
            .replace_all(&text, |caps: &Captures| -> String {
                match caps.get(2) {
                    Some(label) => format!("<{}>", label.as_str()),
                    None => format!("<{}>", &caps[1]),
                }
            })
            .to_string();

        let text = self
            .emoji_ref
            .replace_all(&text, |caps: &Captures| -> String {
                match emojis::get_by_shortcode(&caps[1]) {
                    Some(emoji) => emoji.as_str().to_string(),
                    None => caps[0].to_string(),
                }
            })
            .to_string();

        Ok(text)
    }

    /// Translate IRC text for Slack delivery: strip mIRC color codes,
    /// otherwise pass through verbatim.
    pub fn to_slack(&self, text: &str) -> String {
        self.control_code.replace_all(text, "").to_string()
    }
}

impl Default for TextCodec {
    fn default() -> Self {
        Self::new()
    }
}
