//! An ordered, in-memory catalog of units with an identifier index.

use std::collections::{HashMap, HashSet};

use tracing::{debug, warn};

use crate::{
    index::IdIndex,
    mixer::{MixedPair, UnitMixer},
    unit::{TranslationUnit, Unit},
};

/// Units in insertion order, indexed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    units: Vec<Unit>,
    index: HashMap<String, usize>,
}

/// Result of [`Catalog::mix_accesskeys`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MixReport {
    /// Output units in catalog order, merged pairs in place of their members.
    pub units: Vec<Unit>,

    /// Pairs that were merged into one unit.
    pub mixed: Vec<MixedPair>,

    /// Pairs whose access key does not occur in the label; both members were
    /// kept as separate units.
    pub unmixed: Vec<MixedPair>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a unit. A unit whose id is already present replaces the old one
    /// in place.
    pub fn push(&mut self, unit: Unit) {
        if let Some(&pos) = self.index.get(&unit.id) {
            self.units[pos] = unit;
            return;
        }
        self.index.insert(unit.id.clone(), self.units.len());
        self.units.push(unit);
    }

    pub fn get(&self, id: &str) -> Option<&Unit> {
        self.index.get(id).map(|&pos| &self.units[pos])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Unit> {
        self.index.get(id).map(|&pos| &mut self.units[pos])
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Merges every label/access-key pair into a single unit.
    ///
    /// A merged unit takes the label's id and the position of whichever
    /// member comes first. Each unit is consumed by at most one pair; a unit
    /// whose partner was already consumed passes through unchanged.
    pub fn mix_accesskeys(&self, mixer: &UnitMixer) -> MixReport {
        let mixed_entities = mixer.match_entities(self);
        let mut handled: HashSet<&str> = HashSet::new();
        let mut report = MixReport::default();

        for unit in &self.units {
            if handled.contains(unit.id()) {
                continue;
            }
            let resolved = mixer
                .find_mixed_pair(&mixed_entities, self, unit)
                .filter(|pair| {
                    !handled.contains(pair.label.as_str())
                        && !handled.contains(pair.accesskey.as_str())
                });
            let Some(pair) = resolved else {
                report.units.push(unit.clone());
                handled.insert(unit.id());
                continue;
            };
            let (Some(label_unit), Some(accesskey_unit)) =
                (self.get(&pair.label), self.get(&pair.accesskey))
            else {
                report.units.push(unit.clone());
                handled.insert(unit.id());
                continue;
            };

            handled.insert(label_unit.id());
            handled.insert(accesskey_unit.id());

            let mut target = Unit::new(pair.label.as_str(), "");
            if mixer
                .mix_units(label_unit, accesskey_unit, &mut target)
                .is_some()
            {
                report.units.push(target);
                report.mixed.push(pair);
            } else {
                warn!(
                    label = %pair.label,
                    accesskey = %pair.accesskey,
                    "access key does not occur in label, keeping units separate"
                );
                report.units.push(label_unit.clone());
                report.units.push(accesskey_unit.clone());
                report.unmixed.push(pair);
            }
        }

        debug!(
            mixed = report.mixed.len(),
            unmixed = report.unmixed.len(),
            "mixed catalog access keys"
        );
        report
    }

    /// Splits a translated combined label back onto the two units of `pair`.
    ///
    /// Roles come from the pair itself, not from identifier suffixes, so
    /// overlapping suffix lists cannot swap the two parts.
    ///
    /// The label unit's target always receives the label part. The access
    /// key unit's target is only set when the translation carries a key, so
    /// a missing marker leaves the existing access key translation alone.
    /// Returns whether a key was found.
    pub fn apply_mixed_translation(
        &mut self,
        mixer: &UnitMixer,
        pair: &MixedPair,
        translation: &str,
    ) -> bool {
        let (label, accesskey) = mixer.syntax().extract(translation);

        if let Some(unit) = self.get_mut(&pair.label) {
            unit.set_target(label);
        }
        if let (Some(accesskey), Some(unit)) = (accesskey, self.get_mut(&pair.accesskey)) {
            unit.set_target(accesskey.to_string());
        }
        accesskey.is_some()
    }
}

impl FromIterator<Unit> for Catalog {
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for unit in iter {
            catalog.push(unit);
        }
        catalog
    }
}

impl IdIndex for Catalog {
    fn contains_id(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    fn ids(&self) -> impl Iterator<Item = &str> {
        self.units.iter().map(|unit| unit.id.as_str())
    }
}
