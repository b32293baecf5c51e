//! End-to-end loop tests: scripted input in, encoded terminal output out

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;

use term_runner::core::{Frame, Session, Track};
use term_runner::engine::{Driver, EventSource, ExitReason, FrameSink};
use term_runner::term::encode_frame_into;
use term_runner::types::{InputEvent, SessionConfig};

/// `None` ends the current tick.
struct Script(VecDeque<Option<InputEvent>>);

impl EventSource for Script {
    fn next_event(&mut self, _timeout: Duration) -> Result<Option<InputEvent>> {
        Ok(self.0.pop_front().flatten())
    }
}

/// Encodes every present the way the terminal renderer would.
#[derive(Default)]
struct Screen {
    writes: Vec<String>,
}

impl FrameSink for Screen {
    fn present(&mut self, status: &str, frame: &Frame) -> Result<()> {
        let mut out = Vec::new();
        encode_frame_into(status, frame, &mut out)?;
        self.writes.push(String::from_utf8(out)?);
        Ok(())
    }
}

fn config() -> SessionConfig {
    SessionConfig {
        health: 1,
        player_column: 1,
        apex_height: 2,
        jump_speed: 1.0,
        player_skin: "@".to_string(),
        ..SessionConfig::default()
    }
}

fn ticks(n: usize) -> Vec<Option<InputEvent>> {
    vec![None; n]
}

#[test]
fn jumping_clears_obstacle_and_quit_exits() {
    // Obstacle reaches the player column on tick 2.
    let track = Track::from_text("___/________");
    let mut session = Session::with_track(config(), track, 5);

    let mut script = vec![None, Some(InputEvent::Jump)];
    script.extend(ticks(5));
    script.push(Some(InputEvent::Quit));

    let mut screen = Screen::default();
    let reason = Driver::new(Duration::ZERO)
        .run(&mut session, &mut Script(script.into()), &mut screen)
        .unwrap();

    assert_eq!(reason, ExitReason::Quit);
    assert!(!session.is_running());
    assert_eq!(session.player().health, 1);
    assert_eq!(screen.writes.len(), 6);
    assert!(screen.writes[1].contains(" @   \r\n"));
}

#[test]
fn standing_still_dies_on_first_obstacle() {
    let track = Track::from_text("___/________");
    let mut session = Session::with_track(config(), track, 5);
    let mut screen = Screen::default();

    let reason = Driver::new(Duration::ZERO)
        .run(&mut session, &mut Script(ticks(10).into()), &mut screen)
        .unwrap();

    assert_eq!(reason, ExitReason::Died);
    assert_eq!(screen.writes.len(), 3);
    let last = screen.writes.last().unwrap();
    assert!(last.starts_with("\x1b[2J\x1b[1;1H"));
    assert!(last.contains("You die"));
    assert!(!session.is_running());
}

#[test]
fn session_from_generated_track_runs_until_quit() {
    let config = SessionConfig::default().with_seed(2024);
    let mut session = Session::new(config, 40).unwrap();
    let mut script = ticks(30);
    script.push(Some(InputEvent::Quit));
    let mut screen = Screen::default();

    let reason = Driver::for_session(&session)
        .run(&mut session, &mut Script(script.into()), &mut screen)
        .unwrap();

    // The first 50 track cells are obstacle-free.
    assert_eq!(reason, ExitReason::Quit);
    assert_eq!(screen.writes.len(), 30);
    assert_eq!(session.player().health, 3);
}
