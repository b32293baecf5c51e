//! Polling event source backed by crossterm.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event;

use crate::engine::EventSource;
use crate::map::map_event;
use crate::types::InputEvent;

/// Reads key and resize events from the controlling terminal.
///
/// Waiting for events doubles as the loop's tick sleep: `next_event` blocks
/// until a mapped event arrives or the timeout runs out.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl TerminalEvents {
    pub fn new() -> Self {
        Self
    }
}

impl EventSource for TerminalEvents {
    fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
        let deadline = Instant::now() + timeout;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(None);
            }
            if let Some(mapped) = map_event(&event::read()?) {
                return Ok(Some(mapped));
            }
            if remaining.is_zero() {
                return Ok(None);
            }
        }
    }
}
