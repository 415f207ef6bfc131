//! Simulation constants and tuning parameters.
//!
//! Distances are in play-field units, speeds in units per tick.

/// Simulation tick rate (Hz). One tick is one rendered frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Play field ---

/// Half the play-field width.
pub const PLAY_FIELD_HALF_WIDTH: f64 = 400.0;

/// Half the play-field height.
pub const PLAY_FIELD_HALF_HEIGHT: f64 = 240.0;

// --- Player ---

/// Player collision radius.
pub const PLAYER_RADIUS: f64 = 16.0;

/// Scale applied to joystick velocity samples before moving the player.
pub const MOVE_VELOCITY_MULTIPLIER: f64 = 0.12;

// --- Enemies ---

/// Enemy collision radius (also its half-size for ring spawning).
pub const ENEMY_RADIUS: f64 = 12.0;

/// Enemy pursuit speed (units per tick).
pub const ENEMY_SPEED: f64 = 2.0;

/// Interval between enemy spawns (seconds).
pub const SPAWN_INTERVAL_SECS: f64 = 0.5;

// --- Visibility cone ---

/// Half-angle of the flashlight cone (degrees).
pub const CONE_HALF_ANGLE_DEG: f64 = 50.0;

/// Maximum range of the flashlight cone.
pub const CONE_RANGE: f64 = 225.0;

/// Angular step between flashlight rays (degrees).
pub const CONE_STEP_DEG: f64 = 0.5;

// --- Projectiles ---

/// Maximum simultaneously-alive projectiles.
pub const MAX_PROJECTILES: u32 = 20;

/// Cooldown counter threshold between successful emissions.
pub const COOLDOWN_THRESHOLD: u32 = 6;

/// Projectile speed (units per tick).
pub const PROJECTILE_SPEED: f64 = 6.0;

/// Projectile collision radius.
pub const PROJECTILE_RADIUS: f64 = 3.0;

/// Projectile time-to-live (ticks).
pub const PROJECTILE_TTL_TICKS: u32 = 120;

/// Distance beyond the play field at which projectiles expire.
pub const PROJECTILE_OOB_MARGIN: f64 = 90.0;

// --- Lifecycle ---

/// Delay between the player being hit and leaving the match (seconds).
pub const GAME_OVER_DELAY_SECS: f64 = 2.0;

// --- Collision categories ---

pub const CATEGORY_PLAYER: u32 = 1 << 0;
pub const CATEGORY_ENEMY: u32 = 1 << 1;
pub const CATEGORY_PROJECTILE: u32 = 1 << 2;
