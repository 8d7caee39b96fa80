//! Combat damage model and encounter flow.

use keycard_arena::catalog::{Catalog, EnemyTemplate, HeroRole, HeroTemplate};
use keycard_arena::combat::{
    build_encounter, build_party, CombatEvent, CombatSession, EncounterOutcome, EncounterRules,
    EnemyUnit, HeroUnit, SingleEnemyRules,
};
use keycard_arena::core::config::GameConfig;
use keycard_arena::progression::{apply_draw, LeveledStats};
use keycard_arena::save::SaveRecord;

fn hero_template(id: &str, key: char, attack: u32, charge: u32) -> HeroTemplate {
    HeroTemplate {
        id: id.to_string(),
        name: id.to_string(),
        role: HeroRole::Attack,
        base_hp: 100,
        base_attack: attack,
        passive: String::new(),
        key,
        ultimate_charge: charge,
        ultimate: String::new(),
        portrait: Some(format!("{id}.png")),
    }
}

fn enemy_template(id: &str, hp: u32) -> EnemyTemplate {
    EnemyTemplate {
        id: id.to_string(),
        name: id.to_string(),
        hp,
        attack_power: 7,
    }
}

fn unit(level: u32, attack: u32, charge: u32) -> HeroUnit {
    let template = hero_template("h", 'a', attack, charge);
    HeroUnit::new(
        &template,
        level,
        LeveledStats {
            hp: 100,
            attack,
            ultimate_charge: charge,
        },
    )
}

fn three_hero_catalog() -> Catalog {
    Catalog::new(
        vec![
            hero_template("alpha", 'a', 10, 3),
            hero_template("bravo", 's', 12, 3),
            hero_template("charlie", 'd', 8, 3),
        ],
        vec![enemy_template("imp", 200), enemy_template("baron", 900)],
        vec![],
        vec![],
    )
    .unwrap()
}

// =========================================================================
// Damage model
// =========================================================================

#[test]
fn test_attack_determinism() {
    let mut hero = unit(2, 20, 5);
    let mut enemy = EnemyUnit::new(&enemy_template("imp", 50));

    hero.attack(&mut enemy);
    assert_eq!(enemy.current_hp(), 10);
    assert!(enemy.is_alive());

    hero.attack(&mut enemy);
    assert_eq!(enemy.current_hp(), 0);
    assert!(!enemy.is_alive());
}

#[test]
fn test_ultimate_gating() {
    let mut hero = unit(3, 7, 5);
    let mut enemy = EnemyUnit::new(&enemy_template("wall", 10_000));
    for _ in 0..4 {
        hero.attack(&mut enemy);
    }
    let hp_before = enemy.current_hp();
    assert_eq!(hero.ultimate_meter(), 4);

    assert_eq!(hero.try_ultimate(&mut enemy, 1.0), None);
    assert_eq!(hero.ultimate_meter(), 4);
    assert_eq!(enemy.current_hp(), hp_before);

    hero.attack(&mut enemy);
    assert_eq!(hero.ultimate_meter(), 5);
    let hp_before = enemy.current_hp();

    assert_eq!(hero.try_ultimate(&mut enemy, 1.0), Some(7 * 2 * 3));
    assert_eq!(enemy.current_hp(), hp_before - 42);
    assert_eq!(hero.ultimate_meter(), 0);
}

#[test]
fn test_hero_take_damage_clamps() {
    let mut hero = unit(1, 10, 3);
    hero.take_damage(30);
    assert_eq!(hero.current_hp(), 70);
    hero.take_damage(1000);
    assert_eq!(hero.current_hp(), 0);
}

// =========================================================================
// Party and encounter construction
// =========================================================================

#[test]
fn test_party_fallback_until_three_unlocked() {
    let catalog = three_hero_catalog();
    let config = GameConfig::default();
    let mut record = SaveRecord::new();

    let party = build_party(&record, &catalog, &config, 3);
    let ids: Vec<_> = party.iter().map(|h| h.hero_id().to_string()).collect();
    assert_eq!(ids, vec!["alpha", "bravo", "charlie"]);
    assert!(party.iter().all(|h| h.level() == 1));

    let alpha = catalog.find_hero("alpha").unwrap();
    apply_draw(&mut record, alpha, &config.progression);
    let party = build_party(&record, &catalog, &config, 3);
    assert!(party.iter().any(|h| h.hero_id() == "alpha"));
    assert_eq!(party.len(), 3);
}

#[test]
fn test_party_from_unlocks_when_enough() {
    let catalog = three_hero_catalog();
    let config = GameConfig::default();
    let mut record = SaveRecord::new();
    for id in ["charlie", "alpha", "bravo"] {
        apply_draw(&mut record, catalog.find_hero(id).unwrap(), &config.progression);
    }
    apply_draw(&mut record, catalog.find_hero("alpha").unwrap(), &config.progression);

    let party = build_party(&record, &catalog, &config, 2);
    let ids: Vec<_> = party.iter().map(|h| (h.hero_id(), h.level())).collect();
    assert_eq!(ids, vec![("charlie", 1), ("alpha", 2)]);
    // Level 2 alpha: 10 + 2 attack, 100 + 10 hp
    assert_eq!(party[1].base_attack(), 12);
    assert_eq!(party[1].current_hp(), 110);
}

#[test]
fn test_encounter_is_first_enemy_only() {
    let catalog = three_hero_catalog();
    let enemies = build_encounter(&catalog);
    assert_eq!(enemies.len(), 1);
    assert_eq!(enemies[0].enemy_id(), "imp");
    assert_eq!(enemies[0].current_hp(), 200);
}

// =========================================================================
// Combat loop
// =========================================================================

#[test]
fn test_session_tick_resolves_pressed_heroes() {
    let catalog = three_hero_catalog();
    let mut combat = CombatSession::start(&SaveRecord::new(), &catalog, &GameConfig::default());

    combat.press_key('a');
    combat.press_key('d');
    let events = combat.tick();
    assert_eq!(
        events,
        vec![
            CombatEvent::HeroAttack {
                hero_id: "alpha".to_string(),
                enemy_id: "imp".to_string(),
                damage: 10,
                enemy_hp: 190,
            },
            CombatEvent::HeroAttack {
                hero_id: "charlie".to_string(),
                enemy_id: "imp".to_string(),
                damage: 8,
                enemy_hp: 182,
            },
        ]
    );
    assert_eq!(combat.party()[0].ultimate_meter(), 1);
    assert_eq!(combat.party()[1].ultimate_meter(), 0);
}

#[test]
fn test_ultimate_fires_after_attacks_in_same_tick() {
    let catalog = three_hero_catalog();
    let mut combat = CombatSession::start(&SaveRecord::new(), &catalog, &GameConfig::default());
    for _ in 0..2 {
        combat.press_key('s');
        combat.tick();
    }
    combat.press_key('s');
    combat.request_ultimate('s', 1.0);
    let events = combat.tick();
    // Third attack fills the meter, then the queued ultimate fires
    assert!(matches!(events[0], CombatEvent::HeroAttack { damage: 12, .. }));
    assert!(matches!(events[1], CombatEvent::HeroUltimate { damage: 24, .. }));
    assert_eq!(combat.party()[1].ultimate_meter(), 0);
    assert_eq!(combat.enemies()[0].current_hp(), 200 - 36 - 24);
}

struct Retaliate;

impl EncounterRules for Retaliate {
    fn build_encounter(&self, catalog: &Catalog) -> Vec<EnemyUnit> {
        catalog.enemies().iter().map(EnemyUnit::new).collect()
    }

    fn enemy_phase(&mut self, party: &mut [HeroUnit], enemies: &mut [EnemyUnit]) -> Vec<CombatEvent> {
        for enemy in enemies.iter().filter(|e| e.is_alive()) {
            for hero in party.iter_mut() {
                hero.take_damage(enemy.attack_power());
            }
        }
        Vec::new()
    }

    fn outcome(&self, party: &[HeroUnit], enemies: &[EnemyUnit]) -> Option<EncounterOutcome> {
        if party.iter().all(|h| !h.is_alive()) {
            return Some(EncounterOutcome::Defeat);
        }
        SingleEnemyRules.outcome(party, enemies)
    }
}

#[test]
fn test_custom_rules_extension_point() {
    let catalog = three_hero_catalog();
    let mut combat = CombatSession::start_with_rules(
        &SaveRecord::new(),
        &catalog,
        &GameConfig::default(),
        Box::new(Retaliate),
    );
    assert_eq!(combat.enemies().len(), 2);

    // Two enemies hit every hero for 14 per tick; 100 hp lasts 8 ticks
    let mut ticks = 0;
    while !combat.is_over() {
        combat.tick();
        ticks += 1;
    }
    assert_eq!(ticks, 8);
    assert_eq!(combat.outcome(), Some(EncounterOutcome::Defeat));
}
