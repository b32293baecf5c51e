//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key and resize events into [`crate::types::InputEvent`]
//! and provides a polling [`TerminalEvents`] source for the game loop. Only two
//! keys matter: space jumps, Ctrl+C quits.

pub mod events;
pub mod map;

pub use term_runner_engine as engine;
pub use term_runner_types as types;

pub use events::TerminalEvents;
pub use map::{handle_key_event, map_event, should_quit};
