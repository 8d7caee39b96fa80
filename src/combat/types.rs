use crate::catalog::{EnemyTemplate, HeroTemplate};
use crate::core::constants::{FULL_CHARGE, ULTIMATE_DAMAGE_MULTIPLIER};
use crate::progression::LeveledStats;

/// A hero fighting in the current run.
///
/// State changes only through [`attack`](Self::attack),
/// [`try_ultimate`](Self::try_ultimate) and [`take_damage`](Self::take_damage).
#[derive(Debug, Clone, PartialEq)]
pub struct HeroUnit {
    hero_id: String,
    name: String,
    key: char,
    level: u32,
    max_hp: u32,
    current_hp: u32,
    base_attack: u32,
    ultimate_meter: u32,
    ultimate_charge: u32,
}

impl HeroUnit {
    pub fn new(template: &HeroTemplate, level: u32, stats: LeveledStats) -> Self {
        Self {
            hero_id: template.id.clone(),
            name: template.name.clone(),
            key: template.key,
            level,
            max_hp: stats.hp,
            current_hp: stats.hp,
            base_attack: stats.attack,
            ultimate_meter: 0,
            ultimate_charge: stats.ultimate_charge,
        }
    }

    pub fn hero_id(&self) -> &str {
        &self.hero_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> char {
        self.key
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn base_attack(&self) -> u32 {
        self.base_attack
    }

    pub fn ultimate_meter(&self) -> u32 {
        self.ultimate_meter
    }

    pub fn ultimate_charge(&self) -> u32 {
        self.ultimate_charge
    }

    pub fn ultimate_ready(&self) -> bool {
        self.ultimate_meter >= self.ultimate_charge
    }

    /// Damage of a normal attack: base_attack * level.
    pub fn attack_damage(&self) -> u32 {
        self.base_attack.saturating_mul(self.level)
    }

    /// Damage of an ultimate at `charge_fraction` (clamped to 0..=1).
    pub fn ultimate_damage(&self, charge_fraction: f64) -> u32 {
        let full = self
            .base_attack
            .saturating_mul(ULTIMATE_DAMAGE_MULTIPLIER)
            .saturating_mul(self.level);
        let fraction = if charge_fraction.is_nan() {
            0.0
        } else {
            charge_fraction.clamp(0.0, FULL_CHARGE)
        };
        (full as f64 * fraction).floor() as u32
    }

    /// Hits `target` and adds one point to the ultimate meter. Returns the
    /// damage dealt.
    pub fn attack(&mut self, target: &mut EnemyUnit) -> u32 {
        let damage = self.attack_damage();
        target.take_damage(damage);
        self.ultimate_meter = self.ultimate_meter.saturating_add(1);
        damage
    }

    /// Fires the ultimate if the meter has reached the threshold, emptying
    /// it. Returns `None` and changes nothing otherwise.
    pub fn try_ultimate(&mut self, target: &mut EnemyUnit, charge_fraction: f64) -> Option<u32> {
        if !self.ultimate_ready() {
            return None;
        }
        let damage = self.ultimate_damage(charge_fraction);
        target.take_damage(damage);
        self.ultimate_meter = 0;
        Some(damage)
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }
}

/// An enemy in the current encounter.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyUnit {
    enemy_id: String,
    name: String,
    max_hp: u32,
    current_hp: u32,
    attack_power: u32,
}

impl EnemyUnit {
    pub fn new(template: &EnemyTemplate) -> Self {
        Self {
            enemy_id: template.id.clone(),
            name: template.name.clone(),
            max_hp: template.hp,
            current_hp: template.hp,
            attack_power: template.attack_power,
        }
    }

    pub fn enemy_id(&self) -> &str {
        &self.enemy_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    pub fn attack_power(&self) -> u32 {
        self.attack_power
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }
}
