//! Encounter policy: which enemies appear, what they do, and when the fight
//! is over.

use super::logic::CombatEvent;
use super::types::{EnemyUnit, HeroUnit};
use crate::catalog::Catalog;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    Victory,
    Defeat,
}

/// Pluggable encounter policy.
///
/// Enemy retaliation, party defeat, and multi-enemy waves are added by
/// implementing this trait rather than changing [`super::CombatSession`].
pub trait EncounterRules {
    /// Enemies for a new encounter.
    fn build_encounter(&self, catalog: &Catalog) -> Vec<EnemyUnit>;

    /// Runs after the party acts each tick. Enemies do nothing by default.
    fn enemy_phase(
        &mut self,
        _party: &mut [HeroUnit],
        _enemies: &mut [EnemyUnit],
    ) -> Vec<CombatEvent> {
        Vec::new()
    }

    /// Victory once no enemy is alive. The party cannot lose by default.
    fn outcome(&self, _party: &[HeroUnit], enemies: &[EnemyUnit]) -> Option<EncounterOutcome> {
        if enemies.iter().any(EnemyUnit::is_alive) {
            None
        } else {
            Some(EncounterOutcome::Victory)
        }
    }
}

/// One enemy: the first in the catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleEnemyRules;

impl EncounterRules for SingleEnemyRules {
    fn build_encounter(&self, catalog: &Catalog) -> Vec<EnemyUnit> {
        build_encounter(catalog)
    }
}

/// Instantiates the first enemy template in `catalog`.
pub fn build_encounter(catalog: &Catalog) -> Vec<EnemyUnit> {
    catalog.first_enemy().map(EnemyUnit::new).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_enemy_encounter_uses_first_template() {
        let catalog = Catalog::builtin().unwrap();
        let enemies = SingleEnemyRules.build_encounter(&catalog);
        assert_eq!(enemies.len(), 1);
        assert_eq!(enemies[0].enemy_id(), "lesser_imp");
        assert_eq!(enemies[0].current_hp(), 300);
    }

    #[test]
    fn test_default_outcome() {
        let catalog = Catalog::builtin().unwrap();
        let mut enemies = build_encounter(&catalog);
        assert_eq!(SingleEnemyRules.outcome(&[], &enemies), None);

        enemies[0].take_damage(u32::MAX);
        assert_eq!(
            SingleEnemyRules.outcome(&[], &enemies),
            Some(EncounterOutcome::Victory)
        );
    }
}
