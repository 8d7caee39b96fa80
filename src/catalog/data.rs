//! Built-in content tables.

use super::types::*;

#[allow(clippy::too_many_arguments)]
fn hero(
    id: &str,
    name: &str,
    role: HeroRole,
    base_hp: u32,
    base_attack: u32,
    passive: &str,
    key: char,
    ultimate_charge: u32,
    ultimate: &str,
    portrait: Option<&str>,
) -> HeroTemplate {
    HeroTemplate {
        id: id.to_string(),
        name: name.to_string(),
        role,
        base_hp,
        base_attack,
        passive: passive.to_string(),
        key,
        ultimate_charge,
        ultimate: ultimate.to_string(),
        portrait: portrait.map(str::to_string),
    }
}

/// Returns every hero card in declaration order.
pub fn get_all_heroes() -> Vec<HeroTemplate> {
    vec![
        hero(
            "ember_knight",
            "Ember Knight",
            HeroRole::Attack,
            120,
            14,
            "Attacks on the beat deal bonus fire damage.",
            'a',
            5,
            "Cinder Cleave: a burning sweep across the front row.",
            Some("portraits/ember_knight.png"),
        ),
        hero(
            "tide_oracle",
            "Tide Oracle",
            HeroRole::Support,
            90,
            8,
            "Heals the lowest-HP ally every fourth beat.",
            's',
            6,
            "Undertow: drowns the enemy in a crushing wave.",
            Some("portraits/tide_oracle.png"),
        ),
        hero(
            "storm_drummer",
            "Storm Drummer",
            HeroRole::Attack,
            100,
            12,
            "Consecutive hits build a thunder combo.",
            'd',
            4,
            "Thunder Roll: a rapid barrage of lightning strikes.",
            Some("portraits/storm_drummer.png"),
        ),
        hero(
            "grave_warden",
            "Grave Warden",
            HeroRole::Support,
            150,
            6,
            "Absorbs the first hit each encounter.",
            'f',
            7,
            "Bone Bulwark: shields the party and rebukes the attacker.",
            Some("portraits/grave_warden.png"),
        ),
        hero(
            "ash_duelist",
            "Ash Duelist",
            HeroRole::Attack,
            80,
            18,
            "Critical strikes on off-beats.",
            'j',
            5,
            "Last Ember: a single devastating thrust.",
            Some("portraits/ash_duelist.png"),
        ),
        hero(
            "hollow_bard",
            "Hollow Bard",
            HeroRole::Support,
            95,
            9,
            "Raises the party's tempo.",
            'k',
            6,
            "Requiem: silences the enemy for a measure.",
            None,
        ),
    ]
}

fn enemy(id: &str, name: &str, hp: u32, attack_power: u32) -> EnemyTemplate {
    EnemyTemplate {
        id: id.to_string(),
        name: name.to_string(),
        hp,
        attack_power,
    }
}

/// Returns every enemy in declaration order. The first entry is the
/// default encounter.
pub fn get_all_enemies() -> Vec<EnemyTemplate> {
    vec![
        enemy("lesser_imp", "Lesser Imp", 300, 8),
        enemy("soul_wraith", "Soul Wraith", 520, 14),
        enemy("pit_baron", "Pit Baron", 1200, 25),
    ]
}

fn room(id: &str, name: &str, kind: RoomKind, description: &str) -> RoomTemplate {
    RoomTemplate {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        description: description.to_string(),
    }
}

pub fn get_all_rooms() -> Vec<RoomTemplate> {
    vec![
        room(
            "ashen_hall",
            "Ashen Hall",
            RoomKind::Combat,
            "A scorched corridor where imps gather.",
        ),
        room(
            "wraith_gallery",
            "Wraith Gallery",
            RoomKind::Elite,
            "Portraits whisper as the wraith drifts between frames.",
        ),
        room(
            "quiet_shrine",
            "Quiet Shrine",
            RoomKind::Rest,
            "A cold altar where the party may catch its breath.",
        ),
        room(
            "soul_vault",
            "Soul Vault",
            RoomKind::Treasure,
            "Glass jars of captured souls line the walls.",
        ),
        room(
            "baron_throne",
            "Baron's Throne",
            RoomKind::Boss,
            "The Pit Baron waits on a throne of chains.",
        ),
    ]
}

fn boon(id: &str, name: &str, description: &str) -> BoonTemplate {
    BoonTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

pub fn get_all_boons() -> Vec<BoonTemplate> {
    vec![
        boon("quick_tempo", "Quick Tempo", "Ultimates charge one beat sooner."),
        boon("iron_skin", "Iron Skin", "The party starts each encounter with a shield."),
        boon("soul_siphon", "Soul Siphon", "Defeated enemies leave extra Demon Souls."),
        boon("second_wind", "Second Wind", "Restore a portion of HP after each room."),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_hero_ids_unique() {
        let heroes = get_all_heroes();
        let ids: HashSet<_> = heroes.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids.len(), heroes.len());
    }

    #[test]
    fn test_hero_keys_unique() {
        let heroes = get_all_heroes();
        let keys: HashSet<_> = heroes.iter().map(|h| h.key).collect();
        assert_eq!(keys.len(), heroes.len());
    }

    #[test]
    fn test_at_least_three_heroes_with_art() {
        // Party fallback needs a full party of art-bearing heroes
        let count = get_all_heroes().iter().filter(|h| h.has_art()).count();
        assert!(count >= 3);
    }

    #[test]
    fn test_enemies_not_empty() {
        assert!(!get_all_enemies().is_empty());
    }
}
