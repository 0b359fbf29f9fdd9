// Enemy scaling
pub const ENEMY_HP_FLOOR: i64 = 100;
pub const ENEMY_SCALE_FRACTION: f64 = 0.2;
pub const XP_PER_PLAYER_LEVEL: f64 = 0.3;

// Combat
pub const FLEE_HP_FRACTION: f64 = 0.25;
pub const MIN_DAMAGE_PER_ROUND: u32 = 1;

// Progression
pub const PROGRESS_BAR_WIDTH: u64 = 100;
pub const LOOT_ROLL_MIN: u32 = 1;
pub const LOOT_ROLL_MAX: u32 = 100;

// StandardLevelUp rule
pub const LEVEL_UP_MAX_HP_MULTIPLIER: f64 = 1.1;
pub const LEVEL_UP_XP_CURVE_MULTIPLIER: f64 = 1.5;
