//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the runner's rules: track generation, the jump model,
//! collision and frame compositing. It has **zero dependencies** on terminal
//! I/O, making it:
//!
//! - **Deterministic**: Same seed and config produce the same track
//! - **Testable**: Frames are plain strings that tests can compare directly
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`rng`]: Seeded LCG used for obstacle placement
//! - [`track`]: The scrolling row of ground and obstacles
//! - [`player`]: Player state and the hop (rise, apex, descend) model
//! - [`compositor`]: Collision, damage cooldown and frame assembly
//! - [`status`]: Points / health status line
//! - [`session`]: One run of the game, owning all of the above
//!
//! # Game Rules
//!
//! - **Scrolling**: tick `i` shows track columns `i..i + width`
//! - **Hop**: space lifts the player by the jump speed per tick up to the apex,
//!   then the player falls back at the same speed
//! - **Damage**: a grounded player over an obstacle cell loses one health and
//!   becomes invulnerable for as many ticks as the obstacle glyph is wide
//! - **Death**: health 0 stops the session
//!
//! # Example
//!
//! ```
//! use term_runner_core::Session;
//! use term_runner_types::SessionConfig;
//!
//! let mut session = Session::new(SessionConfig::default(), 40).unwrap();
//! session.press_jump();
//! let report = session.tick(0);
//!
//! // 5 sky rows plus the track row
//! assert_eq!(report.frame.lines().count(), 6);
//! assert!(session.is_running());
//! ```

pub mod compositor;
pub mod player;
pub mod rng;
pub mod session;
pub mod status;
pub mod track;

pub use term_runner_types as types;

// Re-export commonly used types for convenience
pub use compositor::{apply_collision, composite, hits_obstacle, Frame};
pub use player::PlayerState;
pub use rng::SimpleRng;
pub use session::{Camera, Session, TickReport};
pub use status::{status_line, status_text, DEATH_TEXT};
pub use track::Track;
