//! Style envelopes for relayed messages.
//!
//! Slack's outbound call carries no style field, so "action" and "notice"
//! renderings travel as markup wrapped around the body: `*text*` renders
//! emphasized (action) and `_ text _` weakened (notice). The wrappers are
//! applied and detected at the protocol boundary only; inside the relay
//! the style is an explicit [`MessageKind`](crate::common::MessageKind).

/// Zero-width space; invisible, but breaks nickname highlighting.
const ZERO_WIDTH_SPACE: char = '\u{200B}';

/// Wrap a body in the emphasized (action) envelope.
pub fn emphasize(text: &str) -> String {
    format!("*{text}*")
}

/// True if the body carries the emphasized envelope.
pub fn is_emphasized(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('*') && text.ends_with('*')
}

/// Wrap a body in the weakened (notice) envelope.
pub fn weaken(text: &str) -> String {
    format!("_ {text} _")
}

/// True if the body carries the weakened envelope.
///
/// A genuine message that happens to begin and end with `_` is
/// indistinguishable from the envelope and will be relayed as a notice
/// with its underscores stripped. Inherent to the wire format.
pub fn is_weakened(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('_') && text.ends_with('_')
}

/// Strip one envelope layer: a single leading and trailing marker
/// character, plus the padding space the weakened envelope adds.
pub fn normalize(text: &str) -> String {
    let mut s = text;
    if let Some(rest) = s.strip_prefix('_') {
        s = rest.strip_prefix(' ').unwrap_or(rest);
    } else if let Some(rest) = s.strip_prefix('*') {
        s = rest;
    }
    if let Some(rest) = s.strip_suffix('_') {
        s = rest.strip_suffix(' ').unwrap_or(rest);
    } else if let Some(rest) = s.strip_suffix('*') {
        s = rest;
    }
    s.to_string()
}

/// Interleave zero-width spaces through a display name so the relayed
/// copy does not ping the named user's IRC client.
pub fn insert_space(name: &str) -> String {
    let mut out = String::with_capacity(name.len() * 2);
    let mut chars = name.chars();
    if let Some(first) = chars.next() {
        out.push(first);
        for c in chars {
            out.push(ZERO_WIDTH_SPACE);
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasize_round_trips() {
        assert_eq!(emphasize("brews a coffee"), "*brews a coffee*");
        assert!(is_emphasized("*brews a coffee*"));
        assert_eq!(normalize(&emphasize("brews a coffee")), "brews a coffee");
    }

    #[test]
    fn weaken_round_trips() {
        assert_eq!(weaken("server restarting"), "_ server restarting _");
        assert!(is_weakened("_ server restarting _"));
        assert_eq!(normalize(&weaken("server restarting")), "server restarting");
    }

    #[test]
    fn single_marker_is_not_an_envelope() {
        assert!(!is_weakened("_"));
        assert!(!is_emphasized("*"));
    }

    #[test]
    fn plain_text_is_not_detected() {
        assert!(!is_weakened("hello_world"));
        assert!(!is_emphasized("2 * 3 = 6"));
    }

    #[test]
    fn normalize_leaves_unwrapped_text_alone() {
        assert_eq!(normalize("hello"), "hello");
    }

    #[test]
    fn normalize_preserves_inner_whitespace() {
        // Only the envelope's own padding space is removed.
        assert_eq!(normalize(&weaken("a  b ")), "a  b ");
    }

    #[test]
    fn insert_space_interleaves_zero_width() {
        assert_eq!(insert_space("bob"), "b\u{200B}o\u{200B}b");
        assert_eq!(insert_space(""), "");
        assert_eq!(insert_space("x"), "x");
    }
}
