//! Party construction and the key-driven combat loop.

use super::rules::{EncounterOutcome, EncounterRules, SingleEnemyRules};
use super::types::{EnemyUnit, HeroUnit};
use crate::catalog::{Catalog, HeroTemplate};
use crate::core::config::GameConfig;
use crate::progression::compute_leveled_stats;
use crate::save::SaveRecord;
use std::collections::HashSet;
use std::fmt;

/// Something that happened during a combat tick.
#[derive(Debug, Clone, PartialEq)]
pub enum CombatEvent {
    HeroAttack {
        hero_id: String,
        enemy_id: String,
        damage: u32,
        enemy_hp: u32,
    },
    HeroUltimate {
        hero_id: String,
        enemy_id: String,
        damage: u32,
        enemy_hp: u32,
    },
    /// An ultimate was requested before the meter was full.
    UltimateNotReady {
        hero_id: String,
        meter: u32,
        threshold: u32,
    },
    EnemyDefeated {
        enemy_id: String,
    },
    EncounterEnded {
        outcome: EncounterOutcome,
    },
}

/// Chooses the run's party.
///
/// With at least `max_size` unlocked heroes, the first `max_size` in unlock
/// order fight. Otherwise the first `max_size` catalog heroes with art stand
/// in, so a fresh save can still play.
pub fn build_party(
    record: &SaveRecord,
    catalog: &Catalog,
    config: &GameConfig,
    max_size: usize,
) -> Vec<HeroUnit> {
    let chosen: Vec<&HeroTemplate> = if record.unlocked.len() >= max_size {
        record
            .unlocked
            .iter()
            .filter_map(|id| catalog.find_hero(id))
            .take(max_size)
            .collect()
    } else {
        catalog.heroes_with_art().into_iter().take(max_size).collect()
    };

    chosen
        .into_iter()
        .map(|template| {
            let level = record.level_of(&template.id).unwrap_or(1);
            let stats = compute_leveled_stats(template, level, &config.progression);
            HeroUnit::new(template, level, stats)
        })
        .collect()
}

/// A running encounter. Owned by the session; dropped when the run ends.
pub struct CombatSession {
    party: Vec<HeroUnit>,
    enemies: Vec<EnemyUnit>,
    rules: Box<dyn EncounterRules>,
    pressed: HashSet<char>,
    pending_ultimates: Vec<(char, f64)>,
    outcome: Option<EncounterOutcome>,
    ticks: u64,
}

impl fmt::Debug for CombatSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CombatSession")
            .field("party", &self.party)
            .field("enemies", &self.enemies)
            .field("pressed", &self.pressed)
            .field("outcome", &self.outcome)
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

impl CombatSession {
    /// Starts a single-enemy run from the player's save.
    pub fn start(record: &SaveRecord, catalog: &Catalog, config: &GameConfig) -> Self {
        Self::start_with_rules(record, catalog, config, Box::new(SingleEnemyRules))
    }

    pub fn start_with_rules(
        record: &SaveRecord,
        catalog: &Catalog,
        config: &GameConfig,
        rules: Box<dyn EncounterRules>,
    ) -> Self {
        let party = build_party(record, catalog, config, config.party_size);
        let enemies = rules.build_encounter(catalog);
        Self::from_units(party, enemies, rules)
    }

    pub fn from_units(
        party: Vec<HeroUnit>,
        enemies: Vec<EnemyUnit>,
        rules: Box<dyn EncounterRules>,
    ) -> Self {
        Self {
            party,
            enemies,
            rules,
            pressed: HashSet::new(),
            pending_ultimates: Vec::new(),
            outcome: None,
            ticks: 0,
        }
    }

    pub fn party(&self) -> &[HeroUnit] {
        &self.party
    }

    pub fn enemies(&self) -> &[EnemyUnit] {
        &self.enemies
    }

    pub fn outcome(&self) -> Option<EncounterOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Records a key press for the next tick. Repeated presses before the
    /// tick collapse into one. Returns false if no party hero uses `key` or
    /// the encounter is over.
    pub fn press_key(&mut self, key: char) -> bool {
        if self.is_over() || !self.party.iter().any(|h| h.key() == key) {
            return false;
        }
        self.pressed.insert(key);
        true
    }

    pub fn is_pressed(&self, key: char) -> bool {
        self.pressed.contains(&key)
    }

    /// Queues an ultimate for the hero bound to `key`.
    pub fn request_ultimate(&mut self, key: char, charge_fraction: f64) -> bool {
        if self.is_over() || !self.party.iter().any(|h| h.key() == key) {
            return false;
        }
        self.pending_ultimates.push((key, charge_fraction));
        true
    }

    /// Advances one tick: pressed heroes attack, queued ultimates fire, the
    /// enemy phase runs, then the outcome is checked.
    pub fn tick(&mut self) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        if self.is_over() {
            return events;
        }
        self.ticks += 1;

        // Edge-triggered: each press is consumed by one attack per bound hero
        let fired = std::mem::take(&mut self.pressed);
        for hero in self.party.iter_mut().filter(|h| fired.contains(&h.key())) {
            let Some(target) = self.enemies.iter_mut().find(|e| e.is_alive()) else {
                break;
            };
            let damage = hero.attack(target);
            events.push(CombatEvent::HeroAttack {
                hero_id: hero.hero_id().to_string(),
                enemy_id: target.enemy_id().to_string(),
                damage,
                enemy_hp: target.current_hp(),
            });
            if !target.is_alive() {
                events.push(CombatEvent::EnemyDefeated {
                    enemy_id: target.enemy_id().to_string(),
                });
            }
        }

        for (key, charge_fraction) in std::mem::take(&mut self.pending_ultimates) {
            let Some(hero) = self.party.iter_mut().find(|h| h.key() == key) else {
                continue;
            };
            let Some(target) = self.enemies.iter_mut().find(|e| e.is_alive()) else {
                break;
            };
            match hero.try_ultimate(target, charge_fraction) {
                Some(damage) => {
                    events.push(CombatEvent::HeroUltimate {
                        hero_id: hero.hero_id().to_string(),
                        enemy_id: target.enemy_id().to_string(),
                        damage,
                        enemy_hp: target.current_hp(),
                    });
                    if !target.is_alive() {
                        events.push(CombatEvent::EnemyDefeated {
                            enemy_id: target.enemy_id().to_string(),
                        });
                    }
                }
                None => events.push(CombatEvent::UltimateNotReady {
                    hero_id: hero.hero_id().to_string(),
                    meter: hero.ultimate_meter(),
                    threshold: hero.ultimate_charge(),
                }),
            }
        }

        events.extend(self.rules.enemy_phase(&mut self.party, &mut self.enemies));

        if let Some(outcome) = self.rules.outcome(&self.party, &self.enemies) {
            self.outcome = Some(outcome);
            events.push(CombatEvent::EncounterEnded { outcome });
        }

        events
    }
}
