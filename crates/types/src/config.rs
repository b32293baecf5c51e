//! Session configuration and its validation.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::{
    DEFAULT_APEX_HEIGHT, DEFAULT_DISTANCE, DEFAULT_HEALTH, DEFAULT_JUMP_SPEED, DEFAULT_LEVEL,
    DEFAULT_OBSTACLES, DEFAULT_OBSTACLE_SKIN, DEFAULT_PLAYER_COLUMN, DEFAULT_PLAYER_SKIN,
    DEFAULT_TICK_MS, GROUND, MIN_OBSTACLE_OFFSET,
};

/// Construction-time settings for one session.
///
/// There is no dynamic reconfiguration: a session is built from one of these
/// and the values never change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Difficulty multiplier (track length and obstacle count scale with it).
    pub level: u32,
    pub tick: Duration,
    pub player_skin: String,
    pub obstacle_skin: String,
    /// Obstacles stamped per level.
    pub obstacles: u32,
    /// Track length in viewport widths, per level.
    pub distance: u32,
    /// Column inside the viewport where the player is drawn.
    pub player_column: usize,
    /// Jump apex in rows; also the number of sky rows above the track.
    pub apex_height: u32,
    /// Offset delta per tick. May be fractional.
    pub jump_speed: f64,
    pub health: u32,
    pub min_obstacle_offset: usize,
    pub ground: char,
    pub seed: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            player_skin: DEFAULT_PLAYER_SKIN.to_string(),
            obstacle_skin: DEFAULT_OBSTACLE_SKIN.to_string(),
            obstacles: DEFAULT_OBSTACLES,
            distance: DEFAULT_DISTANCE,
            player_column: DEFAULT_PLAYER_COLUMN,
            apex_height: DEFAULT_APEX_HEIGHT,
            jump_speed: DEFAULT_JUMP_SPEED,
            health: DEFAULT_HEALTH,
            min_obstacle_offset: MIN_OBSTACLE_OFFSET,
            ground: GROUND,
            seed: 1,
        }
    }
}

impl SessionConfig {
    /// Defaults overlaid with `RUNNER_LEVEL`, `RUNNER_TICK_MS` and `RUNNER_SEED`.
    ///
    /// Unparseable level and tick values fall back to the defaults. Without a
    /// usable `RUNNER_SEED` every call gets a [`fresh_seed`], so each session
    /// lays out its obstacles differently.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        let level = env::var("RUNNER_LEVEL")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.level);

        let tick = env::var("RUNNER_TICK_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.tick);

        let seed = env::var("RUNNER_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(fresh_seed);

        Self {
            level,
            tick,
            seed,
            ..defaults
        }
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Track length for a viewport of `width` columns.
    pub fn track_len(&self, width: usize) -> usize {
        width
            .saturating_mul(self.distance as usize)
            .saturating_mul(self.level as usize)
    }

    /// Number of obstacles stamped into the track.
    pub fn obstacle_count(&self) -> usize {
        (self.obstacles as usize).saturating_mul(self.level as usize)
    }

    /// Characters that count as a hit when found under the player column.
    pub fn obstacle_chars(&self) -> Vec<char> {
        self.obstacle_skin.chars().collect()
    }

    /// Ticks of invulnerability granted after a hit.
    pub fn damage_cooldown(&self) -> u32 {
        self.obstacle_skin.chars().count() as u32
    }

    /// Reject configurations the session cannot run with.
    pub fn validate(&self, width: usize) -> Result<(), ConfigError> {
        if self.level == 0 {
            return Err(ConfigError::ZeroLevel);
        }
        if self.distance == 0 {
            return Err(ConfigError::ZeroDistance);
        }
        if self.player_skin.is_empty() {
            return Err(ConfigError::EmptySkin("player"));
        }
        if self.obstacle_skin.is_empty() {
            return Err(ConfigError::EmptySkin("obstacle"));
        }
        if self.apex_height == 0 {
            return Err(ConfigError::ZeroApex);
        }
        if !self.jump_speed.is_finite() || self.jump_speed <= 0.0 {
            return Err(ConfigError::JumpSpeed(self.jump_speed));
        }
        if self.tick.is_zero() {
            return Err(ConfigError::ZeroTick);
        }
        if width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.player_column >= width {
            return Err(ConfigError::PlayerOutsideViewport {
                column: self.player_column,
                width,
            });
        }
        let len = self.track_len(width);
        if len <= self.min_obstacle_offset {
            return Err(ConfigError::TrackTooShort {
                len,
                min_offset: self.min_obstacle_offset,
            });
        }
        Ok(())
    }
}

/// Seed taken from the wall clock, mixed with a per-process call counter so
/// back-to-back calls differ even when the clock has not moved.
pub fn fresh_seed() -> u32 {
    static CALLS: AtomicU32 = AtomicU32::new(0);

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let calls = CALLS.fetch_add(1, Ordering::Relaxed) as u64;
    let mixed = nanos.wrapping_add(calls.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    (mixed ^ (mixed >> 32)) as u32
}

/// A configuration the session refuses to start with.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    ZeroLevel,
    ZeroDistance,
    ZeroApex,
    ZeroTick,
    ZeroWidth,
    EmptySkin(&'static str),
    JumpSpeed(f64),
    PlayerOutsideViewport { column: usize, width: usize },
    TrackTooShort { len: usize, min_offset: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroLevel => write!(f, "level must be at least 1"),
            ConfigError::ZeroDistance => write!(f, "distance factor must be at least 1"),
            ConfigError::ZeroApex => write!(f, "apex height must be at least 1"),
            ConfigError::ZeroTick => write!(f, "tick interval must be non-zero"),
            ConfigError::ZeroWidth => write!(f, "viewport width must be non-zero"),
            ConfigError::EmptySkin(which) => write!(f, "{which} skin must not be empty"),
            ConfigError::JumpSpeed(speed) => {
                write!(f, "jump speed must be positive and finite, got {speed}")
            }
            ConfigError::PlayerOutsideViewport { column, width } => write!(
                f,
                "player column {column} does not fit a viewport {width} columns wide"
            ),
            ConfigError::TrackTooShort { len, min_offset } => write!(
                f,
                "track of length {len} leaves no room for obstacles after column {min_offset}"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
