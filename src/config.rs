//! Suffix and marker configuration for label/access-key mixing.

use serde::{Deserialize, Serialize};

use crate::{
    accesskey::{AccessKeySyntax, DEFAULT_ACCESSKEY_MARKER, MarkerPolicy, parse_marker},
    error::Error,
    mixer::UnitMixer,
    traits::JsonConfig,
};

/// Role an identifier plays in a label/access-key pair, decided by its suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessKeyRole {
    Label,
    AccessKey,
}

/// Ordered identifier suffixes that mark labels and access keys.
///
/// Order matters: pairing tries suffixes in the order given here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SuffixConfig {
    pub label_suffixes: Vec<String>,
    pub accesskey_suffixes: Vec<String>,
}

impl SuffixConfig {
    pub fn new<L, A>(label_suffixes: L, accesskey_suffixes: A) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
    {
        Self {
            label_suffixes: label_suffixes.into_iter().map(Into::into).collect(),
            accesskey_suffixes: accesskey_suffixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Suffixes used by Mozilla DTD and `.properties` catalogs.
    pub fn mozilla() -> Self {
        Self::new([".label", ".title"], [".accesskey", ".accessKey", ".akey"])
    }

    /// Checks that both lists are non-empty and contain no empty suffix.
    pub fn validate(&self) -> Result<(), Error> {
        if self.label_suffixes.is_empty() {
            return Err(Error::invalid_config("label suffixes must not be empty"));
        }
        if self.accesskey_suffixes.is_empty() {
            return Err(Error::invalid_config("access key suffixes must not be empty"));
        }
        if self
            .label_suffixes
            .iter()
            .chain(&self.accesskey_suffixes)
            .any(String::is_empty)
        {
            return Err(Error::invalid_config("suffixes must not be empty strings"));
        }
        Ok(())
    }

    /// Role of `id` by suffix. Label suffixes are checked first.
    pub fn role_of(&self, id: &str) -> Option<AccessKeyRole> {
        if self.label_suffixes.iter().any(|s| id.ends_with(s.as_str())) {
            Some(AccessKeyRole::Label)
        } else if self.accesskey_suffixes.iter().any(|s| id.ends_with(s.as_str())) {
            Some(AccessKeyRole::AccessKey)
        } else {
            None
        }
    }
}

impl Default for SuffixConfig {
    fn default() -> Self {
        Self::mozilla()
    }
}

/// Complete mixer configuration, loadable from JSON.
///
/// ```json
/// {
///   "accesskey_marker": "&",
///   "policy": "last_match",
///   "suffixes": {
///     "label_suffixes": [".label"],
///     "accesskey_suffixes": [".accesskey"]
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MixerConfig {
    /// Must be exactly one character; checked by [`MixerConfig::build`].
    pub accesskey_marker: String,
    pub policy: MarkerPolicy,
    pub suffixes: SuffixConfig,
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            accesskey_marker: DEFAULT_ACCESSKEY_MARKER.to_string(),
            policy: MarkerPolicy::default(),
            suffixes: SuffixConfig::default(),
        }
    }
}

impl MixerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the access key marker.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.accesskey_marker = marker.into();
        self
    }

    /// Sets the marker scan policy used when splitting labels.
    pub fn with_policy(mut self, policy: MarkerPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replaces the suffix lists.
    pub fn with_suffixes(mut self, suffixes: SuffixConfig) -> Self {
        self.suffixes = suffixes;
        self
    }

    /// Validates the configuration and creates a [`UnitMixer`].
    pub fn build(&self) -> Result<UnitMixer, Error> {
        let marker = parse_marker(&self.accesskey_marker)?;
        let syntax = AccessKeySyntax::new(marker).with_policy(self.policy);
        UnitMixer::with_syntax(self.suffixes.clone(), syntax)
    }
}

impl JsonConfig for SuffixConfig {}

impl JsonConfig for MixerConfig {}
