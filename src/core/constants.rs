// Leveling
pub const HP_INCREMENT: u32 = 10;
pub const ATK_INCREMENT: u32 = 2;
pub const MIN_HERO_LEVEL: u32 = 1;

// Ultimate multiplier applied on top of base_attack * level
pub const ULTIMATE_DAMAGE_MULTIPLIER: u32 = 2;
pub const FULL_CHARGE: f64 = 1.0;
pub const MIN_ULTIMATE_THRESHOLD: u32 = 1;

// Party and encounter
pub const DEFAULT_PARTY_SIZE: usize = 3;

// Persistence
pub const SAVE_KEY: &str = "kca_save";
pub const SAVE_VERSION: u32 = 2;
pub const SAVE_DIR_NAME: &str = ".kca";
pub const CONFIG_FILE_NAME: &str = "config.json";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "keycard_arena=info";
