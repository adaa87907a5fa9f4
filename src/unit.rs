//! Translation units as seen by the mixer.
//!
//! Format converters own their unit types; they only need to implement
//! [`TranslationUnit`]. [`Unit`] is a plain in-memory implementation used by
//! [`crate::Catalog`] and handy for converters that build units from scratch.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

const MSGID_COMMENT_PREFIX: &str = "_: ";
const MSGID_COMMENT_SUFFIX: &str = "\n";

/// Who a note is addressed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteOrigin {
    /// Comments extracted from the source file.
    Developer,

    /// Comments added by translators.
    Translator,
}

/// Capabilities the mixer needs from a catalog unit.
pub trait TranslationUnit {
    fn id(&self) -> &str;

    fn source(&self) -> &str;

    fn set_source(&mut self, source: String);

    fn target(&self) -> &str;

    fn set_target(&mut self, target: String);

    /// Source file locations, in order.
    fn locations(&self) -> &[String];

    fn add_locations(&mut self, locations: &[String]);

    /// All notes of one origin joined with newlines.
    fn notes(&self, origin: NoteOrigin) -> String;

    fn add_note(&mut self, text: &str, origin: NoteOrigin);

    /// The internal comment with any storage wrapper removed.
    fn internal_comment(&self) -> String;

    /// Replaces the internal comment; `comment` is given unwrapped.
    fn set_internal_comment(&mut self, comment: &str);
}

/// A single in-memory translation unit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Unit {
    /// Catalog identifier, e.g. `menu.file.label`.
    pub id: String,

    pub source: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub target: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub locations: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub developer_notes: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(default)]
    pub translator_notes: Vec<String>,

    /// Raw msgid comment in its stored `_: comment\n` form.
    #[serde(skip_serializing_if = "String::is_empty")]
    #[serde(default)]
    pub msgid_comment: String,
}

impl Unit {
    pub fn new(id: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            ..Self::default()
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.locations.push(location.into());
        self
    }

    pub fn with_note(mut self, text: &str, origin: NoteOrigin) -> Self {
        self.add_note(text, origin);
        self
    }

    fn notes_mut(&mut self, origin: NoteOrigin) -> &mut Vec<String> {
        match origin {
            NoteOrigin::Developer => &mut self.developer_notes,
            NoteOrigin::Translator => &mut self.translator_notes,
        }
    }
}

impl TranslationUnit for Unit {
    fn id(&self) -> &str {
        &self.id
    }

    fn source(&self) -> &str {
        &self.source
    }

    fn set_source(&mut self, source: String) {
        self.source = source;
    }

    fn target(&self) -> &str {
        &self.target
    }

    fn set_target(&mut self, target: String) {
        self.target = target;
    }

    fn locations(&self) -> &[String] {
        &self.locations
    }

    fn add_locations(&mut self, locations: &[String]) {
        self.locations.extend_from_slice(locations);
    }

    fn notes(&self, origin: NoteOrigin) -> String {
        match origin {
            NoteOrigin::Developer => self.developer_notes.join("\n"),
            NoteOrigin::Translator => self.translator_notes.join("\n"),
        }
    }

    fn add_note(&mut self, text: &str, origin: NoteOrigin) {
        if !text.is_empty() {
            self.notes_mut(origin).push(text.to_string());
        }
    }

    fn internal_comment(&self) -> String {
        let raw = self.msgid_comment.as_str();
        raw.strip_prefix(MSGID_COMMENT_PREFIX)
            .map(|rest| rest.strip_suffix(MSGID_COMMENT_SUFFIX).unwrap_or(rest))
            .unwrap_or(raw)
            .to_string()
    }

    fn set_internal_comment(&mut self, comment: &str) {
        self.msgid_comment = if comment.is_empty() {
            String::new()
        } else {
            format!("{MSGID_COMMENT_PREFIX}{comment}{MSGID_COMMENT_SUFFIX}")
        };
    }
}

impl Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unit {{ id: {}, source: {}, target: {} }}",
            self.id, self.source, self.target
        )
    }
}
