//! Player module - vertical jump model and per-session player state
//!
//! The jump is a hop, not hold-to-rise: once the offset reaches the apex the
//! next tick starts the descent even if the jump signal is still set. Offsets
//! are kept as `f64` so fractional speeds accumulate; flooring only happens
//! when the offset is turned into a frame index.

/// Mutable per-session player state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerState {
    pub health: u32,
    /// Current height above the track, in `[0, apex]`.
    pub jump_offset: f64,
    pub at_apex: bool,
    pub jumping: bool,
    /// Ticks left during which no damage can be taken.
    pub damage_cooldown: u32,
}

impl PlayerState {
    pub fn new(health: u32) -> Self {
        Self {
            health,
            jump_offset: 0.0,
            at_apex: false,
            jumping: false,
            damage_cooldown: 0,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Request a hop. Has no effect mid-air beyond keeping the hop going.
    pub fn press_jump(&mut self) {
        self.jumping = true;
    }

    /// Advance the vertical model by one tick.
    pub fn step(&mut self, apex: f64, speed: f64) {
        let rising = self.jumping && !self.at_apex && self.jump_offset < apex;

        if rising {
            self.jump_offset = (self.jump_offset + speed).min(apex);
            if self.jump_offset >= apex {
                self.at_apex = true;
            }
            return;
        }

        self.jump_offset -= speed;
        if self.jump_offset <= 0.0 {
            self.jump_offset = 0.0;
            self.at_apex = false;
            self.jumping = false;
        }
    }

    /// Whole rows above the track (floored).
    pub fn row_offset(&self) -> usize {
        self.jump_offset.floor() as usize
    }

    /// Linear index of the player glyph in a frame of `width`-column rows
    /// separated by `\n`, with `apex` sky rows above the track row.
    ///
    /// `(width + 1) * (apex - floor(offset)) + column`
    pub fn frame_index(&self, width: usize, apex: usize, column: usize) -> usize {
        let row = apex.saturating_sub(self.row_offset());
        (width + 1) * row + column
    }
}
