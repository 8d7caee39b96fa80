//! Read-only content catalog: heroes, enemies, rooms, and boons.
//!
//! Lookups are exact-match on id and return `None` for unknown ids, since
//! saves routinely reference heroes that a newer catalog no longer ships.

mod data;
mod types;

pub use data::{get_all_boons, get_all_enemies, get_all_heroes, get_all_rooms};
pub use types::*;

use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no hero has a portrait; the gacha pool would be empty")]
    EmptyGachaPool,
    #[error("catalog has no enemies")]
    NoEnemies,
    #[error("duplicate {table} id: {id}")]
    DuplicateId { table: &'static str, id: String },
    #[error("hero {0} has a zero ultimate charge threshold")]
    ZeroUltimateCharge(String),
    #[error("heroes {first} and {second} share the activation key {key:?}")]
    DuplicateKey {
        key: char,
        first: String,
        second: String,
    },
}

#[derive(Debug, Clone)]
pub struct Catalog {
    heroes: Vec<HeroTemplate>,
    enemies: Vec<EnemyTemplate>,
    rooms: Vec<RoomTemplate>,
    boons: Vec<BoonTemplate>,
}

fn check_unique<'a>(
    table: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                table,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn check_unique_keys(heroes: &[HeroTemplate]) -> Result<(), CatalogError> {
    let mut seen: HashMap<char, &str> = HashMap::new();
    for hero in heroes {
        if let Some(first) = seen.insert(hero.key, &hero.id) {
            return Err(CatalogError::DuplicateKey {
                key: hero.key,
                first: first.to_string(),
                second: hero.id.clone(),
            });
        }
    }
    Ok(())
}

impl Catalog {
    /// Builds a catalog, rejecting content that would break the engines at
    /// runtime: an empty gacha pool, no enemy to fight, or two heroes bound to
    /// one key.
    pub fn new(
        heroes: Vec<HeroTemplate>,
        enemies: Vec<EnemyTemplate>,
        rooms: Vec<RoomTemplate>,
        boons: Vec<BoonTemplate>,
    ) -> Result<Self, CatalogError> {
        check_unique("hero", heroes.iter().map(|h| h.id.as_str()))?;
        check_unique("enemy", enemies.iter().map(|e| e.id.as_str()))?;
        check_unique("room", rooms.iter().map(|r| r.id.as_str()))?;
        check_unique("boon", boons.iter().map(|b| b.id.as_str()))?;
        check_unique_keys(&heroes)?;

        if let Some(hero) = heroes.iter().find(|h| h.ultimate_charge == 0) {
            return Err(CatalogError::ZeroUltimateCharge(hero.id.clone()));
        }
        if !heroes.iter().any(HeroTemplate::has_art) {
            return Err(CatalogError::EmptyGachaPool);
        }
        if enemies.is_empty() {
            return Err(CatalogError::NoEnemies);
        }

        Ok(Self {
            heroes,
            enemies,
            rooms,
            boons,
        })
    }

    /// The shipped content set.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(
            get_all_heroes(),
            get_all_enemies(),
            get_all_rooms(),
            get_all_boons(),
        )
    }

    pub fn find_hero(&self, id: &str) -> Option<&HeroTemplate> {
        self.heroes.iter().find(|h| h.id == id)
    }

    pub fn find_enemy(&self, id: &str) -> Option<&EnemyTemplate> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub fn find_room(&self, id: &str) -> Option<&RoomTemplate> {
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn find_boon(&self, id: &str) -> Option<&BoonTemplate> {
        self.boons.iter().find(|b| b.id == id)
    }

    /// Heroes eligible for the gacha, in declaration order.
    pub fn heroes_with_art(&self) -> Vec<&HeroTemplate> {
        self.heroes.iter().filter(|h| h.has_art()).collect()
    }

    /// True if `id` names a hero in the gacha pool.
    pub fn has_hero_with_art(&self, id: &str) -> bool {
        self.find_hero(id).is_some_and(HeroTemplate::has_art)
    }

    pub fn first_enemy(&self) -> Option<&EnemyTemplate> {
        self.enemies.first()
    }

    pub fn heroes(&self) -> &[HeroTemplate] {
        &self.heroes
    }

    pub fn enemies(&self) -> &[EnemyTemplate] {
        &self.enemies
    }

    pub fn rooms(&self) -> &[RoomTemplate] {
        &self.rooms
    }

    pub fn boons(&self) -> &[BoonTemplate] {
        &self.boons
    }
}
