//! Splitting and combining labels with an embedded access key.
//!
//! A combined label carries its access key as a marker placed right before the
//! key character, e.g. `"&File"` or `"Save &As"`. [`AccessKeySyntax::extract`]
//! splits such a label into `(label, key)`; [`AccessKeySyntax::combine`] does
//! the reverse for a plain label and a separately stored key.
//!
//! The two operations only invert each other when the key occurs once, outside
//! any escape sequence, and in the case given.

use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    escape::{EscapeSyntax, XmlEntities},
};

/// Marker used by Mozilla DTD/properties and most Windows resource formats.
pub const DEFAULT_ACCESSKEY_MARKER: char = '&';

/// Which marker occurrence [`AccessKeySyntax::extract`] reports when a label
/// contains more than one valid marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerPolicy {
    /// Stop scanning at the first valid marker.
    FirstMatch,

    /// Scan the whole label; each later valid marker replaces the earlier one.
    /// This is what existing converters produce, so it is the default.
    #[default]
    LastMatch,
}

/// Parses a configured marker, which must be exactly one character.
pub fn parse_marker(marker: &str) -> Result<char, Error> {
    let mut chars = marker.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(Error::InvalidMarker(marker.to_string())),
    }
}

/// Marker character, scan policy and escape syntax used to split and build
/// combined labels.
///
/// # Example
///
/// ```rust
/// use langcodec_accesskey::{AccessKeySyntax, MarkerPolicy};
///
/// let syntax = AccessKeySyntax::default();
/// assert_eq!(syntax.extract("Sa&ve &As"), ("Sa&ve As".to_string(), Some('A')));
/// assert_eq!(syntax.combine("File", "f"), Some("&File".to_string()));
///
/// let first = syntax.with_policy(MarkerPolicy::FirstMatch);
/// assert_eq!(first.extract("Sa&ve &As"), ("Save &As".to_string(), Some('v')));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessKeySyntax<E = XmlEntities> {
    marker: char,
    policy: MarkerPolicy,
    escapes: E,
}

impl AccessKeySyntax {
    /// Creates a syntax for `marker` with XML entity escapes and the
    /// last-match policy.
    pub fn new(marker: char) -> Self {
        Self {
            marker,
            policy: MarkerPolicy::default(),
            escapes: XmlEntities,
        }
    }
}

impl Default for AccessKeySyntax {
    fn default() -> Self {
        Self::new(DEFAULT_ACCESSKEY_MARKER)
    }
}

impl<E: EscapeSyntax> AccessKeySyntax<E> {
    /// Sets the marker scan policy.
    pub fn with_policy(mut self, policy: MarkerPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the escape syntax.
    pub fn with_escapes<F: EscapeSyntax>(self, escapes: F) -> AccessKeySyntax<F> {
        AccessKeySyntax {
            marker: self.marker,
            policy: self.policy,
            escapes,
        }
    }

    pub fn marker(&self) -> char {
        self.marker
    }

    pub fn policy(&self) -> MarkerPolicy {
        self.policy
    }

    /// Splits a combined label into the plain label and its access key.
    ///
    /// Never fails: a label without a usable marker comes back unchanged with
    /// no key. A trailing marker, a marker followed by a space, and a marker
    /// that starts an escape sequence are not access keys.
    pub fn extract(&self, text: &str) -> (String, Option<char>) {
        let mut label = text.to_string();
        let mut accesskey = None;
        let mut cursor = 0;

        while let Some(offset) = text[cursor..].find(self.marker) {
            let marker_pos = cursor + offset;
            let key_pos = marker_pos + self.marker.len_utf8();
            let Some(key) = text[key_pos..].chars().next() else {
                break;
            };

            if let Some(len) = self.escapes.match_escape(&text[marker_pos..]) {
                cursor = key_pos.max(marker_pos + len);
                continue;
            }

            cursor = key_pos;
            if key == ' ' {
                continue;
            }

            label = format!("{}{}", &text[..marker_pos], &text[key_pos..]);
            accesskey = Some(key);
            if self.policy == MarkerPolicy::FirstMatch {
                break;
            }
        }

        (label, accesskey)
    }

    /// Inserts the marker before `accesskey` in `label`.
    ///
    /// The first occurrence in the exact case wins; otherwise the first
    /// occurrence in the other case is used. Characters inside an escape
    /// region are never chosen. Returns `None` when `accesskey` is not a
    /// single character or does not occur in the label.
    pub fn combine(&self, label: &str, accesskey: &str) -> Option<String> {
        let mut chars = accesskey.chars();
        let key = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let key_alt = swap_case(key);

        let mut in_escape = false;
        let mut exact = None;
        let mut alt_case = None;
        for (pos, ch) in label.char_indices() {
            if self.escapes.opens_region(ch) {
                in_escape = true;
            } else if self.escapes.closes_region(ch) {
                in_escape = false;
            }
            if in_escape {
                continue;
            }
            if ch == key {
                exact = Some(pos);
                break;
            }
            if alt_case.is_none() && Some(ch) == key_alt {
                alt_case = Some(pos);
            }
        }

        let pos = exact.or(alt_case)?;
        let mut combined = String::with_capacity(label.len() + self.marker.len_utf8());
        combined.push_str(&label[..pos]);
        combined.push(self.marker);
        combined.push_str(&label[pos..]);
        Some(combined)
    }
}

/// Splits `text` with the default escapes and policy.
pub fn extract(text: &str, marker: char) -> (String, Option<char>) {
    AccessKeySyntax::new(marker).extract(text)
}

/// Combines `label` and `accesskey` with the default escapes.
pub fn combine(label: &str, accesskey: &str, marker: char) -> Option<String> {
    AccessKeySyntax::new(marker).combine(label, accesskey)
}

// Case mappings that expand to several characters (`ß` -> `SS`) have no
// single-character counterpart.
fn swap_case(ch: char) -> Option<char> {
    let swapped: String = if ch.is_uppercase() {
        ch.to_lowercase().collect()
    } else {
        ch.to_uppercase().collect()
    };
    let mut chars = swapped.chars();
    match (chars.next(), chars.next()) {
        (Some(alt), None) if alt != ch => Some(alt),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::escape::NoEscapes;

    fn split(text: &str) -> (String, Option<char>) {
        extract(text, DEFAULT_ACCESSKEY_MARKER)
    }

    fn join(label: &str, accesskey: &str) -> Option<String> {
        combine(label, accesskey, DEFAULT_ACCESSKEY_MARKER)
    }

    #[test]
    fn test_extract_basic() {
        assert_eq!(split("&File"), ("File".to_string(), Some('F')));
        assert_eq!(split("File"), ("File".to_string(), None));
        assert_eq!(split(""), (String::new(), None));
    }

    #[test]
    fn test_extract_skips_entities() {
        assert_eq!(split("&amp;File"), ("&amp;File".to_string(), None));
        assert_eq!(split("Tom&#39;s"), ("Tom&#39;s".to_string(), None));
        assert_eq!(
            split("Tom &amp; &Jerry"),
            ("Tom &amp; Jerry".to_string(), Some('J'))
        );
    }

    #[test]
    fn test_extract_last_valid_marker_wins() {
        assert_eq!(split("Sa&ve &As"), ("Sa&ve As".to_string(), Some('A')));
    }

    #[test]
    fn test_extract_first_match_policy() {
        let syntax = AccessKeySyntax::default().with_policy(MarkerPolicy::FirstMatch);
        assert_eq!(
            syntax.extract("Sa&ve &As"),
            ("Save &As".to_string(), Some('v'))
        );
        assert_eq!(syntax.extract("&amp; &Go"), ("&amp; Go".to_string(), Some('G')));
    }

    #[test]
    fn test_extract_trailing_marker() {
        assert_eq!(split("File&"), ("File&".to_string(), None));
        assert_eq!(split("&Fi&"), ("Fi&".to_string(), Some('F')));
    }

    #[test]
    fn test_extract_marker_before_space() {
        assert_eq!(split("Tom & Jerry"), ("Tom & Jerry".to_string(), None));
    }

    #[test]
    fn test_extract_doubled_marker() {
        assert_eq!(split("&&File"), ("&File".to_string(), Some('F')));
    }

    #[test]
    fn test_extract_custom_marker() {
        assert_eq!(extract("_Open", '_'), ("Open".to_string(), Some('O')));
        assert_eq!(extract("&amp;_Open", '_'), ("&amp;Open".to_string(), Some('O')));
        assert_eq!(extract("~Ouvrir", '~'), ("Ouvrir".to_string(), Some('O')));
    }

    #[test]
    fn test_extract_non_ascii() {
        assert_eq!(split("Ö&ffnen"), ("Öffnen".to_string(), Some('f')));
        assert_eq!(extract("保存(¤S)", '¤'), ("保存(S)".to_string(), Some('S')));
    }

    #[test]
    fn test_extract_without_escapes() {
        let syntax = AccessKeySyntax::default().with_escapes(NoEscapes);
        assert_eq!(syntax.extract("&amp;File"), ("amp;File".to_string(), Some('a')));
    }

    #[test]
    fn test_combine_basic() {
        assert_eq!(join("File", "F"), Some("&File".to_string()));
        assert_eq!(join("Save As", "A"), Some("Save &As".to_string()));
    }

    #[test]
    fn test_combine_case_fallback() {
        assert_eq!(join("File", "f"), Some("&File".to_string()));
        assert_eq!(join("Öffnen", "ö"), Some("&Öffnen".to_string()));
    }

    #[test]
    fn test_combine_prefers_exact_case() {
        assert_eq!(join("file File", "F"), Some("file &File".to_string()));
        assert_eq!(join("Fast fox", "f"), Some("Fast &fox".to_string()));
    }

    #[test]
    fn test_combine_first_alternate_case_kept() {
        assert_eq!(join("Fun Fact", "f"), Some("&Fun Fact".to_string()));
    }

    #[test]
    fn test_combine_missing_key() {
        assert_eq!(join("File", "z"), None);
        assert_eq!(join("File", ""), None);
        assert_eq!(join("", "F"), None);
    }

    #[test]
    fn test_combine_rejects_multi_char_key() {
        assert_eq!(join("File", "Fi"), None);
    }

    #[test]
    fn test_combine_skips_entities() {
        assert_eq!(
            join("Nice &amp; File", "F"),
            Some("Nice &amp; &File".to_string())
        );
        assert_eq!(join("&amp;", "a"), None);
        assert_eq!(join("&amp; map", "a"), Some("&amp; m&ap".to_string()));
    }

    #[test]
    fn test_combine_bare_ampersand_region_ends_at_space() {
        assert_eq!(join("Tom & Jerry", "J"), Some("Tom & &Jerry".to_string()));
    }

    #[test]
    fn test_combine_custom_marker() {
        assert_eq!(combine("Open", "O", '_'), Some("_Open".to_string()));
    }

    #[test]
    fn test_combine_without_escapes() {
        let syntax = AccessKeySyntax::default().with_escapes(NoEscapes);
        assert_eq!(syntax.combine("&amp;", "a"), Some("&&amp;".to_string()));
    }

    #[test]
    fn test_parse_marker() {
        assert_eq!(parse_marker("&").unwrap(), '&');
        assert_eq!(parse_marker("¤").unwrap(), '¤');
        assert!(matches!(parse_marker(""), Err(Error::InvalidMarker(_))));
        assert!(matches!(parse_marker("&&"), Err(Error::InvalidMarker(_))));
    }

    #[test]
    fn test_swap_case() {
        assert_eq!(swap_case('a'), Some('A'));
        assert_eq!(swap_case('A'), Some('a'));
        assert_eq!(swap_case('1'), None);
        assert_eq!(swap_case('ß'), None);
    }

    #[test]
    fn test_marker_policy_serde() {
        let policy: MarkerPolicy = serde_json::from_str("\"first_match\"").unwrap();
        assert_eq!(policy, MarkerPolicy::FirstMatch);
        assert_eq!(MarkerPolicy::default(), MarkerPolicy::LastMatch);
    }
}
