//! Pairing separately stored labels and access keys into one unit.
//!
//! Catalogs such as Mozilla DTD files keep `menu.file.label = "File"` and
//! `menu.file.accesskey = "F"` as two entries. For translation they are shown
//! as a single `"&File"` unit. [`UnitMixer`] finds those pairs by identifier
//! suffix and merges them.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::{
    accesskey::AccessKeySyntax,
    config::{AccessKeyRole, SuffixConfig},
    error::Error,
    index::IdIndex,
    unit::{NoteOrigin, TranslationUnit},
};

/// Identifiers that take part in at least one label/access-key pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MixedEntities(BTreeSet<String>);

impl MixedEntities {
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// A resolved label/access-key pair of identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MixedPair {
    pub label: String,
    pub accesskey: String,
}

impl MixedPair {
    pub fn new(label: impl Into<String>, accesskey: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            accesskey: accesskey.into(),
        }
    }
}

/// Finds and merges label/access-key pairs using a fixed suffix configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitMixer {
    suffixes: SuffixConfig,
    syntax: AccessKeySyntax,
}

impl UnitMixer {
    /// Creates a mixer with the default `&` marker.
    pub fn new(suffixes: SuffixConfig) -> Result<Self, Error> {
        Self::with_syntax(suffixes, AccessKeySyntax::default())
    }

    pub fn with_syntax(suffixes: SuffixConfig, syntax: AccessKeySyntax) -> Result<Self, Error> {
        suffixes.validate()?;
        Ok(Self { suffixes, syntax })
    }

    pub fn suffixes(&self) -> &SuffixConfig {
        &self.suffixes
    }

    pub fn syntax(&self) -> &AccessKeySyntax {
        &self.syntax
    }

    /// Collects every identifier that has a partner in `index`.
    ///
    /// Only label identifiers are scanned; an access key is added when its
    /// label is found, so an access key without a label never appears.
    pub fn match_entities(&self, index: &impl IdIndex) -> MixedEntities {
        let mut mixed = BTreeSet::new();
        for id in index.ids() {
            for base in self.label_bases(id) {
                for accesskey_suffix in &self.suffixes.accesskey_suffixes {
                    let accesskey = format!("{base}{accesskey_suffix}");
                    if index.contains_id(&accesskey) {
                        mixed.insert(id.to_string());
                        mixed.insert(accesskey);
                    }
                }
            }
        }
        debug!(count = mixed.len(), "matched label/accesskey entities");
        MixedEntities(mixed)
    }

    /// Resolves the partner of `unit`, trying it first as a label and then as
    /// an access key.
    ///
    /// Tie-breaks when an identifier carries several configured suffixes:
    /// as a label, the last matching label suffix wins while each one takes
    /// its first existing access key; as an access key, the first existing
    /// label wins, but every matching access key suffix decides again and may
    /// drop an earlier pair.
    pub fn find_mixed_pair<U>(
        &self,
        mixed: &MixedEntities,
        index: &impl IdIndex,
        unit: &U,
    ) -> Option<MixedPair>
    where
        U: TranslationUnit + ?Sized,
    {
        let id = unit.id();
        if !mixed.contains(id) {
            return None;
        }
        let pair = self
            .pair_as_label(id, index)
            .or_else(|| self.pair_as_accesskey(id, index));
        trace!(id, ?pair, "resolved mixed pair");
        pair
    }

    /// Merges `label_unit` and `accesskey_unit` into `target_unit`.
    ///
    /// Locations, internal comments and notes are appended before the labels
    /// are combined and stay on `target_unit` even when combining fails and
    /// `None` is returned.
    pub fn mix_units<'t, L, A, T>(
        &self,
        label_unit: &L,
        accesskey_unit: &A,
        target_unit: &'t mut T,
    ) -> Option<&'t mut T>
    where
        L: TranslationUnit + ?Sized,
        A: TranslationUnit + ?Sized,
        T: TranslationUnit + ?Sized,
    {
        target_unit.add_locations(label_unit.locations());
        target_unit.add_locations(accesskey_unit.locations());

        let comment = target_unit.internal_comment() + &label_unit.internal_comment();
        target_unit.set_internal_comment(&comment);
        let comment = target_unit.internal_comment() + &accesskey_unit.internal_comment();
        target_unit.set_internal_comment(&comment);

        for origin in [NoteOrigin::Developer, NoteOrigin::Translator] {
            target_unit.add_note(&label_unit.notes(origin), origin);
            target_unit.add_note(&accesskey_unit.notes(origin), origin);
        }

        let combined = self
            .syntax
            .combine(label_unit.source(), accesskey_unit.source())?;
        target_unit.set_source(combined);
        target_unit.set_target(String::new());
        Some(target_unit)
    }

    /// Takes the part of a combined translation that belongs to `id`: the
    /// label text for a label, the key for an access key.
    ///
    /// Returns `None` for an identifier with no role, or for an access key
    /// when the translation carries no marker.
    pub fn split_for(&self, id: &str, combined: &str) -> Option<String> {
        let role = self.suffixes.role_of(id)?;
        let (label, accesskey) = self.syntax.extract(combined);
        match role {
            AccessKeyRole::Label => Some(label),
            AccessKeyRole::AccessKey => accesskey.map(String::from),
        }
    }

    fn label_bases<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.suffixes
            .label_suffixes
            .iter()
            .filter_map(move |suffix| id.strip_suffix(suffix.as_str()))
    }

    fn pair_as_label(&self, id: &str, index: &impl IdIndex) -> Option<MixedPair> {
        let mut pair = None;
        for base in self.label_bases(id) {
            let accesskey = self
                .suffixes
                .accesskey_suffixes
                .iter()
                .map(|suffix| format!("{base}{suffix}"))
                .find(|candidate| index.contains_id(candidate));
            if let Some(accesskey) = accesskey {
                pair = Some(MixedPair::new(id, accesskey));
            }
        }
        pair
    }

    fn pair_as_accesskey(&self, id: &str, index: &impl IdIndex) -> Option<MixedPair> {
        let mut pair = None;
        for accesskey_suffix in &self.suffixes.accesskey_suffixes {
            let Some(base) = id.strip_suffix(accesskey_suffix.as_str()) else {
                continue;
            };
            pair = self
                .suffixes
                .label_suffixes
                .iter()
                .map(|suffix| format!("{base}{suffix}"))
                .find(|candidate| index.contains_id(candidate))
                .map(|label| MixedPair::new(label, id));
        }
        pair
    }
}
