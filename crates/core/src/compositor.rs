//! Compositor module - collision against the track row and frame assembly
//!
//! A frame is plain text: `sky_rows` rows of spaces, each `width` columns wide
//! and terminated by `\n`, followed by the visible track window. Row `r`,
//! column `c` therefore lives at linear index `(width + 1) * r + c`, which is
//! how the player glyph is placed.

use crate::player::PlayerState;

/// One composited text frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    text: String,
}

impl Frame {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

/// Whether the cell under the player column is part of an obstacle.
pub fn hits_obstacle(window: &[char], column: usize, obstacle_chars: &[char]) -> bool {
    window
        .get(column)
        .is_some_and(|ch| obstacle_chars.contains(ch))
}

/// Apply one tick of collision and cooldown to `player`.
///
/// Damage needs a living, grounded player with no cooldown left. A hit sets
/// the cooldown to `cooldown_ticks`; the cooldown then counts down by one
/// every tick, including the tick of the hit. Returns whether damage was taken.
pub fn apply_collision(
    player: &mut PlayerState,
    window: &[char],
    column: usize,
    obstacle_chars: &[char],
    cooldown_ticks: u32,
) -> bool {
    let damaged = player.is_alive()
        && !player.jumping
        && player.damage_cooldown == 0
        && hits_obstacle(window, column, obstacle_chars);

    if damaged {
        player.health -= 1;
        player.damage_cooldown = cooldown_ticks;
    }

    if player.damage_cooldown > 0 {
        player.damage_cooldown -= 1;
    }

    damaged
}

/// Build the frame text and draw `player_skin` at `player_index`.
pub fn composite(
    window: &[char],
    width: usize,
    sky_rows: usize,
    player_index: usize,
    player_skin: &str,
) -> Frame {
    let mut cells: Vec<char> = Vec::with_capacity((width + 1) * sky_rows + window.len());
    for _ in 0..sky_rows {
        cells.extend(std::iter::repeat(' ').take(width));
        cells.push('\n');
    }
    cells.extend_from_slice(window);

    overwrite_at(&mut cells, player_index, player_skin);

    Frame {
        text: cells.into_iter().collect(),
    }
}

/// Overwrite starting at `index`; anything past the end is appended.
fn overwrite_at(cells: &mut Vec<char>, index: usize, glyph: &str) {
    let start = index.min(cells.len());
    for (k, ch) in glyph.chars().enumerate() {
        match cells.get_mut(start + k) {
            Some(cell) => *cell = ch,
            None => cells.push(ch),
        }
    }
}
