//! Session module - everything one run of the game owns
//!
//! A `Session` ties the track, the player and the camera together and exposes
//! the per-tick compositor step. It replaces any shared global options: the
//! driver owns the session and input events mutate it between ticks.

use crate::compositor::{apply_collision, composite, Frame};
use crate::player::PlayerState;
use crate::rng::SimpleRng;
use crate::status::status_line;
use crate::track::Track;
use crate::types::{ConfigError, LoopState, SessionConfig};

/// Visible part of the track. Only the width changes, on terminal resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Camera {
    pub width: usize,
}

/// Result of one compositor step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub frame: Frame,
    /// Health was lost on this tick.
    pub damaged: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    track: Track,
    obstacle_chars: Vec<char>,
    player: PlayerState,
    camera: Camera,
    state: LoopState,
    last_index: usize,
}

impl Session {
    /// Validate `config` against the starting viewport width and generate the
    /// track. The track length is fixed from here on, resizes included.
    pub fn new(config: SessionConfig, width: usize) -> Result<Self, ConfigError> {
        config.validate(width)?;

        let mut rng = SimpleRng::new(config.seed);
        let track = Track::generate(
            config.track_len(width),
            config.ground,
            &config.obstacle_skin,
            config.obstacle_count(),
            config.min_obstacle_offset,
            &mut rng,
        );

        Ok(Self::with_track(config, track, width))
    }

    /// Build a session around an existing track (no validation).
    pub fn with_track(config: SessionConfig, track: Track, width: usize) -> Self {
        Self {
            obstacle_chars: config.obstacle_chars(),
            player: PlayerState::new(config.health),
            camera: Camera { width },
            state: LoopState::Running,
            last_index: 0,
            track,
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn track(&self) -> &Track {
        &self.track
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Scroll index of the most recent tick.
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    pub fn press_jump(&mut self) {
        self.player.press_jump();
    }

    pub fn resize(&mut self, width: usize) {
        self.camera.width = width;
    }

    /// End the session. There is no way back to `Running`.
    pub fn stop(&mut self) {
        self.state = LoopState::Stopped;
    }

    /// Advance one tick at scroll `index`: move the player, resolve collision
    /// and cooldown, then composite the frame.
    ///
    /// Stops the session when health reaches zero.
    pub fn tick(&mut self, index: usize) -> TickReport {
        self.last_index = index;

        let apex = self.config.apex_height as f64;
        self.player.step(apex, self.config.jump_speed);

        let window = self.track.window(index, self.camera.width);
        let damaged = apply_collision(
            &mut self.player,
            window,
            self.config.player_column,
            &self.obstacle_chars,
            self.config.damage_cooldown(),
        );

        if !self.player.is_alive() {
            self.state = LoopState::Stopped;
        }

        TickReport {
            frame: self.render(index),
            damaged,
        }
    }

    /// Re-composite the last tick for the current camera width without
    /// advancing the player or applying collision.
    pub fn redraw(&self) -> Frame {
        self.render(self.last_index)
    }

    /// Centered status line for scroll `index`.
    pub fn status_line(&self, index: usize) -> String {
        status_line(index, self.player.health, self.camera.width)
    }

    fn render(&self, index: usize) -> Frame {
        let width = self.camera.width;
        let apex = self.config.apex_height as usize;
        let window = self.track.window(index, width);
        let player_index = self
            .player
            .frame_index(width, apex, self.config.player_column);
        composite(window, width, apex, player_index, &self.config.player_skin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SessionConfig {
        SessionConfig {
            player_column: 2,
            apex_height: 2,
            jump_speed: 1.0,
            min_obstacle_offset: 0,
            player_skin: "@".to_string(),
            ..SessionConfig::default()
        }
    }

    #[test]
    fn new_rejects_invalid_width() {
        let err = Session::new(SessionConfig::default(), 4).unwrap_err();
        assert!(matches!(err, ConfigError::PlayerOutsideViewport { .. }));
    }

    #[test]
    fn new_builds_track_of_configured_length() {
        let session = Session::new(SessionConfig::default().with_seed(9), 20).unwrap();
        assert_eq!(session.track().len(), 20 * 8);
        assert!(session.is_running());
    }

    #[test]
    fn track_length_survives_resize() {
        let mut session = Session::new(SessionConfig::default(), 20).unwrap();
        session.resize(60);
        session.tick(0);
        assert_eq!(session.track().len(), 160);
        assert_eq!(session.camera().width, 60);
    }

    #[test]
    fn tick_renders_player_on_track() {
        let track = Track::from_text("__________");
        let mut session = Session::with_track(small_config(), track, 5);
        let report = session.tick(0);
        assert_eq!(report.frame.as_str(), "     \n     \n__@__");
        assert!(!report.damaged);
    }

    #[test]
    fn airborne_player_dodges_obstacle() {
        let track = Track::from_text("____/\\____");
        let mut session = Session::with_track(small_config(), track, 5);
        session.press_jump();
        let report = session.tick(2);
        assert!(!report.damaged);
        assert_eq!(report.frame.as_str(), "     \n  @  \n__/\\_");
        assert_eq!(session.player().health, 3);
    }

    #[test]
    fn death_stops_session() {
        let config = SessionConfig {
            health: 1,
            ..small_config()
        };
        let track = Track::from_text("__/_____");
        let mut session = Session::with_track(config, track, 5);
        assert!(session.tick(0).damaged);
        assert_eq!(session.state(), LoopState::Stopped);
        assert_eq!(session.status_line(0).trim(), "You die");
    }

    #[test]
    fn redraw_does_not_advance_player() {
        let track = Track::from_text("__________");
        let mut session = Session::with_track(small_config(), track, 5);
        session.press_jump();
        session.tick(3);
        let offset = session.player().jump_offset;
        session.resize(7);
        let frame = session.redraw();
        assert_eq!(session.player().jump_offset, offset);
        assert_eq!(session.last_index(), 3);
        assert_eq!(frame.lines().count(), 3);
        assert_eq!(frame.lines().last(), Some("_______"));
    }

    #[test]
    fn stop_is_one_way() {
        let mut session = Session::new(SessionConfig::default(), 20).unwrap();
        session.stop();
        assert!(!session.is_running());
    }
}
