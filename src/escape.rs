//! Escape syntaxes that can make a marker character look like an access key.
//!
//! `extract` asks the syntax whether a marker occurrence actually starts an
//! escape sequence (`&amp;` is not "access key `a`"), and `combine` uses the
//! region delimiters to avoid placing a marker inside one.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref XML_ENTITY_REGEX: Regex =
        Regex::new(r"^&(?:#[0-9]+|#x[0-9a-fA-F]+|[A-Za-z_:][A-Za-z0-9_:.-]*);").unwrap();
}

/// Recognises escape sequences inside label text.
pub trait EscapeSyntax {
    /// Byte length of the escape sequence at the very start of `text`, if any.
    fn match_escape(&self, text: &str) -> Option<usize>;

    /// Whether `ch` starts an escape region while scanning a plain label.
    fn opens_region(&self, ch: char) -> bool;

    /// Whether `ch` ends an escape region. The closing character itself is
    /// treated as ordinary text.
    fn closes_region(&self, ch: char) -> bool;
}

/// XML character and named entity references (`&amp;`, `&#39;`, `&#x41;`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XmlEntities;

impl EscapeSyntax for XmlEntities {
    fn match_escape(&self, text: &str) -> Option<usize> {
        XML_ENTITY_REGEX.find(text).map(|m| m.end())
    }

    fn opens_region(&self, ch: char) -> bool {
        ch == '&'
    }

    fn closes_region(&self, ch: char) -> bool {
        matches!(ch, ';' | ' ')
    }
}

/// Treats every character literally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoEscapes;

impl EscapeSyntax for NoEscapes {
    fn match_escape(&self, _text: &str) -> Option<usize> {
        None
    }

    fn opens_region(&self, _ch: char) -> bool {
        false
    }

    fn closes_region(&self, _ch: char) -> bool {
        false
    }
}
