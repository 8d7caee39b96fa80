//! Gacha draws: unlock a new hero or level up a known one.

use super::leveling::{compute_leveled_stats, LeveledStats};
use crate::catalog::{Catalog, HeroTemplate};
use crate::core::config::ProgressionConfig;
use crate::save::{KeyValueStore, SaveRecord, SaveStore};
use rand::Rng;

/// Outcome of one draw, for the reveal screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawResult {
    pub template: HeroTemplate,
    pub is_new: bool,
    /// Stats before the draw; `None` for a first unlock.
    pub old_stats: Option<LeveledStats>,
    pub new_stats: LeveledStats,
    pub new_level: u32,
    /// False if the write-through persist failed.
    pub saved: bool,
}

/// Applies a draw of `template` to `record` without persisting.
///
/// The returned result has `saved: false`; [`draw`] fills it in.
pub fn apply_draw(
    record: &mut SaveRecord,
    template: &HeroTemplate,
    config: &ProgressionConfig,
) -> DrawResult {
    let was_unlocked = record.is_unlocked(&template.id);
    let old_level = record.level_of(&template.id).unwrap_or(0);

    let old_stats =
        was_unlocked.then(|| compute_leveled_stats(template, old_level.max(1), config));
    let new_level = if was_unlocked {
        old_level.saturating_add(1)
    } else {
        1
    };

    record.levels.insert(template.id.clone(), new_level);
    if !was_unlocked {
        record.unlocked.push(template.id.clone());
    }

    DrawResult {
        template: template.clone(),
        is_new: !was_unlocked,
        old_stats,
        new_stats: compute_leveled_stats(template, new_level, config),
        new_level,
        saved: false,
    }
}

/// Picks a hero uniformly from the gacha pool.
///
/// The pool is non-empty for any catalog built through [`Catalog::new`].
pub fn roll_hero<'a, R: Rng>(catalog: &'a Catalog, rng: &mut R) -> &'a HeroTemplate {
    let pool = catalog.heroes_with_art();
    pool[rng.gen_range(0..pool.len())]
}

/// Draws one hero, updates `record`, and persists it immediately.
pub fn draw<S: KeyValueStore, R: Rng>(
    record: &mut SaveRecord,
    catalog: &Catalog,
    saves: &mut SaveStore<S>,
    config: &ProgressionConfig,
    rng: &mut R,
) -> DrawResult {
    let template = roll_hero(catalog, rng);
    let mut result = apply_draw(record, template, config);
    result.saved = saves.persist(record);

    tracing::debug!(
        hero = %template.id,
        level = result.new_level,
        is_new = result.is_new,
        saved = result.saved,
        "gacha draw"
    );

    result
}
