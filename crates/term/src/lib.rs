//! Terminal output module.
//!
//! A deliberately small collaborator: raw mode on entry, a clear-and-redraw of
//! the status line and frame on every tick, and terminal restore on exit. All
//! game logic lives in `core`; this crate only moves text to the screen.

pub mod renderer;

pub use term_runner_core as core;
pub use term_runner_engine as engine;
pub use term_runner_types as types;

pub use renderer::{encode_frame_into, terminal_width, TerminalRenderer};
