#![forbid(unsafe_code)]
//! Access key handling for localization converters.
//!
//! UI labels often carry a keyboard access key as a marker in front of one
//! character (`"&File"`, `"Save &As"`), while catalogs such as Mozilla DTD
//! files store the label and the key as two separate entries. This crate
//! converts between the two representations.
//!
//! # Quick Start
//!
//! ```rust
//! use langcodec_accesskey::{Catalog, MixerConfig, Unit, combine, extract};
//!
//! assert_eq!(extract("&File", '&'), ("File".to_string(), Some('F')));
//! assert_eq!(combine("File", "f", '&'), Some("&File".to_string()));
//!
//! let catalog: Catalog = vec![
//!     Unit::new("menu.save.label", "Save As"),
//!     Unit::new("menu.save.accesskey", "A"),
//! ]
//! .into_iter()
//! .collect();
//!
//! let mixer = MixerConfig::new().build()?;
//! let report = catalog.mix_accesskeys(&mixer);
//! assert_eq!(report.units[0].source, "Save &As");
//! # Ok::<(), langcodec_accesskey::Error>(())
//! ```
//!
//! # Overview
//!
//! - [`extract`] / [`combine`]: split and build single combined labels.
//! - [`UnitMixer`]: pair `*.label` and `*.accesskey` identifiers and merge
//!   the units.
//! - [`Catalog`]: a simple ordered unit store that drives the mixer.

pub mod accesskey;
pub mod catalog;
pub mod config;
pub mod error;
pub mod escape;
pub mod index;
pub mod mixer;
pub mod traits;
pub mod unit;

// Re-export most used types for easy consumption
pub use crate::{
    accesskey::{
        AccessKeySyntax, DEFAULT_ACCESSKEY_MARKER, MarkerPolicy, combine, extract, parse_marker,
    },
    catalog::{Catalog, MixReport},
    config::{AccessKeyRole, MixerConfig, SuffixConfig},
    error::Error,
    escape::{EscapeSyntax, NoEscapes, XmlEntities},
    index::IdIndex,
    mixer::{MixedEntities, MixedPair, UnitMixer},
    unit::{NoteOrigin, TranslationUnit, Unit},
};
