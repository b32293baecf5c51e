//! Status line shown above every frame.

/// Text shown once the player has no health left.
pub const DEATH_TEXT: &str = "You die";

/// `Points {index}, health: * * * ` while alive, `You die` otherwise.
pub fn status_text(index: usize, health: u32) -> String {
    if health == 0 {
        return DEATH_TEXT.to_string();
    }
    format!("Points {}, health: {}", index, "* ".repeat(health as usize))
}

/// Status text centered in a `width`-column line.
pub fn status_line(index: usize, health: u32, width: usize) -> String {
    let text = status_text(index, health);
    let len = text.chars().count();
    // floor(width / 2 - len / 2), never negative
    let pad = (width as f64 / 2.0 - len as f64 / 2.0).floor().max(0.0) as usize;
    format!("{}{}", " ".repeat(pad), text)
}
