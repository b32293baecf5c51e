//! Game loop engine.
//!
//! Drives a [`Session`](crate::core::Session) at a fixed tick rate. Terminal
//! input and output stay behind the [`EventSource`] and [`FrameSink`] traits so
//! the loop can be exercised without a terminal.

pub mod driver;

pub use term_runner_core as core;
pub use term_runner_types as types;

pub use driver::{Driver, EventSource, ExitReason, FrameSink};
