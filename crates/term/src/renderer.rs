//! TerminalRenderer: writes status lines and text frames to a real terminal.
//!
//! Every present is a full redraw: clear screen, cursor home, status line,
//! then the frame. The whole sequence is encoded into one buffer and written
//! with a single flush.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::core::Frame;
use crate::engine::FrameSink;
use crate::types::FALLBACK_WIDTH;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal. The last frame stays on screen.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Show)?;
        self.buf.queue(Print("\r\n"))?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSink for TerminalRenderer {
    fn present(&mut self, status: &str, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_frame_into(status, frame, &mut self.buf)?;
        self.flush_buf()
    }
}

/// Current terminal width in columns, or [`FALLBACK_WIDTH`] when unknown.
pub fn terminal_width() -> u16 {
    terminal::size().map(|(w, _)| w).unwrap_or(FALLBACK_WIDTH)
}

/// Encode a full redraw into `out`.
///
/// Raw mode disables newline translation, so rows are joined with `\r\n`.
pub fn encode_frame_into(status: &str, frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print(status))?;

    for line in frame.lines() {
        out.queue(Print("\r\n"))?;
        out.queue(Print(line))?;
    }
    Ok(())
}
