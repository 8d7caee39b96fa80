//! Level-scaled hero stats.

use crate::catalog::HeroTemplate;
use crate::core::config::{ChargePolicy, ProgressionConfig};
use crate::core::constants::MIN_ULTIMATE_THRESHOLD;

/// Stats of a hero at a given level. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeveledStats {
    pub hp: u32,
    pub attack: u32,
    pub ultimate_charge: u32,
}

/// Computes a hero's stats at `level`.
///
/// hp = base_hp + (level - 1) * hp_increment
/// attack = base_attack + (level - 1) * atk_increment
///
/// Under [`ChargePolicy::Fixed`] the ultimate threshold is the template value
/// at every level. Level 0 is treated as level 1. Stats saturate at
/// `u32::MAX` rather than wrapping, since levels come from persisted saves.
pub fn compute_leveled_stats(
    template: &HeroTemplate,
    level: u32,
    config: &ProgressionConfig,
) -> LeveledStats {
    let steps = level.saturating_sub(1);

    let ultimate_charge = match config.charge_policy {
        ChargePolicy::Fixed => template.ultimate_charge,
        ChargePolicy::ReducePerLevel => template
            .ultimate_charge
            .saturating_sub(steps)
            .max(MIN_ULTIMATE_THRESHOLD),
    };

    LeveledStats {
        hp: template
            .base_hp
            .saturating_add(steps.saturating_mul(config.hp_increment)),
        attack: template
            .base_attack
            .saturating_add(steps.saturating_mul(config.atk_increment)),
        ultimate_charge,
    }
}
