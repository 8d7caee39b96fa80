//! The persisted progression record and its on-disk document format.

use crate::catalog::Catalog;
use crate::core::constants::{MIN_HERO_LEVEL, SAVE_VERSION};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A player's persisted progression.
///
/// `unlocked` keeps historical unlock order; `levels` holds one entry per
/// unlocked hero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveRecord {
    pub unlocked: Vec<String>,
    pub levels: BTreeMap<String, u32>,
    /// Demon Souls. Accumulated, not yet spent by anything.
    pub currency: u64,
}

impl SaveRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked.iter().any(|u| u == id)
    }

    /// Stored level, or `None` if the hero has never been drawn.
    pub fn level_of(&self, id: &str) -> Option<u32> {
        self.levels.get(id).copied()
    }
}

/// Serialized form of [`SaveRecord`].
///
/// Every field defaults so documents written by older builds (no `version`,
/// no `savedAt`, sometimes no `heroLevels`) still parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaveDocument {
    pub version: u32,
    pub unlocked_heroes: Vec<String>,
    pub hero_levels: BTreeMap<String, u32>,
    pub demon_souls: u64,
    pub saved_at: i64,
}

impl SaveDocument {
    pub fn from_record(record: &SaveRecord, saved_at: i64) -> Self {
        Self {
            version: SAVE_VERSION,
            unlocked_heroes: record.unlocked.clone(),
            hero_levels: record.levels.clone(),
            demon_souls: record.currency,
            saved_at,
        }
    }

    pub fn needs_migration(&self) -> bool {
        self.version < SAVE_VERSION
    }

    pub fn into_record(self) -> SaveRecord {
        SaveRecord {
            unlocked: self.unlocked_heroes,
            levels: self.hero_levels,
            currency: self.demon_souls,
        }
    }
}

/// What [`reconcile`] changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Unlocked ids dropped because the catalog no longer offers them.
    pub pruned_unlocked: Vec<String>,
    /// Level entries dropped because their hero is not unlocked.
    pub pruned_levels: Vec<String>,
    /// Unlocked heroes whose missing or zero level was set to 1.
    pub repaired_levels: Vec<String>,
    pub duplicates_removed: usize,
}

impl ReconcileReport {
    pub fn is_clean(&self) -> bool {
        self.pruned_unlocked.is_empty()
            && self.pruned_levels.is_empty()
            && self.repaired_levels.is_empty()
            && self.duplicates_removed == 0
    }
}

/// Prunes progression that no longer resolves against `catalog`.
///
/// After this runs, `unlocked` and the keys of `levels` name exactly the
/// same set of gacha-eligible heroes, each at level 1 or above.
pub fn reconcile(record: &mut SaveRecord, catalog: &Catalog) -> ReconcileReport {
    let mut report = ReconcileReport::default();

    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(record.unlocked.len());
    for id in record.unlocked.drain(..) {
        if !catalog.has_hero_with_art(&id) {
            report.pruned_unlocked.push(id);
        } else if !seen.insert(id.clone()) {
            report.duplicates_removed += 1;
        } else {
            kept.push(id);
        }
    }
    record.unlocked = kept;

    record.levels.retain(|id, _| {
        let keep = seen.contains(id);
        if !keep {
            report.pruned_levels.push(id.clone());
        }
        keep
    });

    for id in &record.unlocked {
        let level = record.levels.entry(id.clone()).or_insert(0);
        if *level < MIN_HERO_LEVEL {
            *level = MIN_HERO_LEVEL;
            report.repaired_levels.push(id.clone());
        }
    }

    report
}
