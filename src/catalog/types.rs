//! Content template definitions.

use serde::{Deserialize, Serialize};

/// Combat role of a hero card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HeroRole {
    Attack,
    Support,
}

/// Immutable hero card definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroTemplate {
    pub id: String,
    pub name: String,
    pub role: HeroRole,
    pub base_hp: u32,
    pub base_attack: u32,
    pub passive: String,
    /// Key the player taps to make this hero attack.
    pub key: char,
    /// Attacks needed before the ultimate can fire.
    pub ultimate_charge: u32,
    pub ultimate: String,
    /// Only heroes with a portrait are in the gacha pool.
    #[serde(default)]
    pub portrait: Option<String>,
}

impl HeroTemplate {
    pub fn has_art(&self) -> bool {
        self.portrait.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyTemplate {
    pub id: String,
    pub name: String,
    pub hp: u32,
    pub attack_power: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomKind {
    Combat,
    Elite,
    Rest,
    Treasure,
    Boss,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomTemplate {
    pub id: String,
    pub name: String,
    pub kind: RoomKind,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoonTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
}
