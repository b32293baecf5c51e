//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the runner.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Track Geometry
//!
//! The track is a single row of characters that scrolls right-to-left past a
//! fixed player column:
//!
//! - **Length**: `viewport width × distance factor × level`
//! - **Ground**: `_` everywhere an obstacle was not stamped
//! - **Obstacles**: `/\` stamped at random offsets at or after column 50
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 30 | Fixed tick interval |
//! | `DEFAULT_HEALTH` | 3 | Starting health |
//! | `DEFAULT_DISTANCE` | 8 | Track length in viewports (per level) |
//! | `DEFAULT_OBSTACLES` | 20 | Obstacles per level |
//! | `DEFAULT_PLAYER_COLUMN` | 10 | Column the player is drawn at |
//! | `DEFAULT_APEX_HEIGHT` | 5 | Jump apex in rows (also the sky padding) |
//! | `DEFAULT_JUMP_SPEED` | 0.5 | Rows gained or lost per tick |
//! | `MIN_OBSTACLE_OFFSET` | 50 | First column an obstacle may start at |
//!
//! # Examples
//!
//! ```
//! use term_runner_types::{SessionConfig, InputEvent, LoopState};
//!
//! let config = SessionConfig::default();
//! assert_eq!(config.track_len(10), 80);
//! assert!(config.validate(80).is_ok());
//!
//! assert_eq!(InputEvent::Resize(120), InputEvent::Resize(120));
//! assert!(LoopState::Running.is_running());
//! ```

pub mod config;

pub use config::{fresh_seed, ConfigError, SessionConfig};

/// Fixed tick interval in milliseconds (30ms ≈ 33 FPS)
pub const DEFAULT_TICK_MS: u64 = 30;

/// Health at session start
pub const DEFAULT_HEALTH: u32 = 3;

/// Difficulty multiplier at session start
pub const DEFAULT_LEVEL: u32 = 1;

/// Track length measured in viewport widths (before the level multiplier)
pub const DEFAULT_DISTANCE: u32 = 8;

/// Obstacles stamped per level
pub const DEFAULT_OBSTACLES: u32 = 20;

/// Column (inside the viewport) where the player is drawn and collides
pub const DEFAULT_PLAYER_COLUMN: usize = 10;

/// Jump apex in rows. The frame carries this many sky rows above the track.
pub const DEFAULT_APEX_HEIGHT: u32 = 5;

/// Vertical offset delta per tick while rising or falling
pub const DEFAULT_JUMP_SPEED: f64 = 0.5;

/// Obstacles never start before this track column.
///
/// Keeps the opening stretch clear. Clamped to the track length when the
/// track is shorter.
pub const MIN_OBSTACLE_OFFSET: usize = 50;

/// Glyph drawn at the player position
pub const DEFAULT_PLAYER_SKIN: &str = "(x)";

/// Glyph stamped into the track for each obstacle
pub const DEFAULT_OBSTACLE_SKIN: &str = "/\\";

/// Neutral track fill
pub const GROUND: char = '_';

/// Viewport width used when the terminal size cannot be queried
pub const FALLBACK_WIDTH: u16 = 80;

/// Events delivered by the input/resize collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Start a hop (space)
    Jump,
    /// End the session immediately (Ctrl+C)
    Quit,
    /// Terminal width changed to the given column count
    Resize(u16),
}

impl InputEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputEvent::Jump => "jump",
            InputEvent::Quit => "quit",
            InputEvent::Resize(_) => "resize",
        }
    }
}

/// Game loop state machine. One-shot: there is no transition back to `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Stopped,
}

impl LoopState {
    pub fn is_running(&self) -> bool {
        matches!(self, LoopState::Running)
    }
}
