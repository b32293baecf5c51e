//! Fixed-rate game loop.
//!
//! One tick at a time on a single thread: wait out the tick interval while
//! applying input events to the session, composite the next frame, present it,
//! advance the scroll index. Input never renders by itself, except that a
//! resize immediately re-presents the last frame at the new width.

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::{Frame, Session};
use crate::types::InputEvent;

/// Where input events come from.
pub trait EventSource {
    /// Wait at most `timeout` for the next event.
    ///
    /// `Ok(None)` means the timeout elapsed with nothing to report.
    fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>>;
}

/// Where status lines and frames go.
pub trait FrameSink {
    fn present(&mut self, status: &str, frame: &Frame) -> Result<()>;
}

/// Why [`Driver::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The quit key was pressed.
    Quit,
    /// Health reached zero; the final frame has been presented.
    Died,
}

#[derive(Debug, Clone)]
pub struct Driver {
    tick: Duration,
}

impl Driver {
    pub fn new(tick: Duration) -> Self {
        Self { tick }
    }

    pub fn for_session(session: &Session) -> Self {
        Self::new(session.config().tick)
    }

    /// Run `session` until the player dies or quits.
    ///
    /// Either way the session is left stopped. Any event or output error ends
    /// the run and is returned as is.
    pub fn run<E, S>(&self, session: &mut Session, events: &mut E, sink: &mut S) -> Result<ExitReason>
    where
        E: EventSource,
        S: FrameSink,
    {
        let mut index = 0usize;

        while session.is_running() {
            if let Some(reason) = self.wait_tick(session, events, sink)? {
                session.stop();
                log::info!("quit at index {}", session.last_index());
                return Ok(reason);
            }

            let report = session.tick(index);
            if report.damaged {
                log::debug!(
                    "hit at index {}, health now {}",
                    index,
                    session.player().health
                );
            }
            sink.present(&session.status_line(index), &report.frame)?;
            index += 1;
        }

        log::info!("player died at index {}", session.last_index());
        Ok(ExitReason::Died)
    }

    /// Drain events until the tick interval has passed.
    fn wait_tick<E, S>(
        &self,
        session: &mut Session,
        events: &mut E,
        sink: &mut S,
    ) -> Result<Option<ExitReason>>
    where
        E: EventSource,
        S: FrameSink,
    {
        let deadline = Instant::now() + self.tick;

        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let Some(event) = events.next_event(remaining)? else {
                return Ok(None);
            };

            log::debug!("input: {}", event.as_str());
            match event {
                InputEvent::Quit => return Ok(Some(ExitReason::Quit)),
                InputEvent::Jump => session.press_jump(),
                InputEvent::Resize(width) => {
                    log::debug!("viewport resized to {} columns", width);
                    session.resize(width as usize);
                    let status = session.status_line(session.last_index());
                    sink.present(&status, &session.redraw())?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use anyhow::anyhow;

    use super::*;
    use crate::core::Track;
    use crate::types::SessionConfig;

    /// Replays a script; `None` entries end the current tick.
    struct Scripted {
        script: VecDeque<Option<InputEvent>>,
        waits: Vec<Duration>,
    }

    impl Scripted {
        fn new(script: Vec<Option<InputEvent>>) -> Self {
            Self {
                script: script.into(),
                waits: Vec::new(),
            }
        }
    }

    impl EventSource for Scripted {
        fn next_event(&mut self, timeout: Duration) -> Result<Option<InputEvent>> {
            self.waits.push(timeout);
            Ok(self.script.pop_front().flatten())
        }
    }

    #[derive(Default)]
    struct Recorder {
        presented: Vec<(String, String)>,
    }

    impl FrameSink for Recorder {
        fn present(&mut self, status: &str, frame: &Frame) -> Result<()> {
            self.presented
                .push((status.to_string(), frame.as_str().to_string()));
            Ok(())
        }
    }

    struct Broken;

    impl FrameSink for Broken {
        fn present(&mut self, _status: &str, _frame: &Frame) -> Result<()> {
            Err(anyhow!("stdout closed"))
        }
    }

    fn config(health: u32) -> SessionConfig {
        SessionConfig {
            health,
            player_column: 1,
            apex_height: 1,
            jump_speed: 1.0,
            player_skin: "@".to_string(),
            ..SessionConfig::default()
        }
    }

    #[test]
    fn quit_stops_before_next_frame() {
        let mut session = Session::with_track(config(3), Track::from_text("______"), 4);
        let mut events = Scripted::new(vec![None, None, Some(InputEvent::Quit)]);
        let mut sink = Recorder::default();

        let reason = Driver::new(Duration::ZERO)
            .run(&mut session, &mut events, &mut sink)
            .unwrap();

        assert_eq!(reason, ExitReason::Quit);
        assert!(!session.is_running());
        assert_eq!(sink.presented.len(), 2);
        assert!(sink.presented[1].0.contains("Points 1"));
    }

    #[test]
    fn death_presents_final_frame_then_exits() {
        let track = Track::from_text("_/\\___");
        let mut session = Session::with_track(config(1), track, 4);
        let mut events = Scripted::new(vec![None]);
        let mut sink = Recorder::default();

        let reason = Driver::new(Duration::ZERO)
            .run(&mut session, &mut events, &mut sink)
            .unwrap();

        assert_eq!(reason, ExitReason::Died);
        assert_eq!(sink.presented.len(), 1);
        assert_eq!(sink.presented[0].0.trim(), "You die");
        assert!(!session.is_running());
    }

    #[test]
    fn jump_event_lifts_player_on_next_tick() {
        let mut session = Session::with_track(config(3), Track::from_text("______"), 4);
        let mut events = Scripted::new(vec![Some(InputEvent::Jump), None, Some(InputEvent::Quit)]);
        let mut sink = Recorder::default();

        Driver::new(Duration::ZERO)
            .run(&mut session, &mut events, &mut sink)
            .unwrap();

        assert_eq!(sink.presented[0].1, " @  \n____");
    }

    #[test]
    fn resize_redraws_immediately() {
        let mut session = Session::with_track(config(3), Track::from_text("__________"), 4);
        let mut events = Scripted::new(vec![
            None,
            Some(InputEvent::Resize(6)),
            Some(InputEvent::Quit),
        ]);
        let mut sink = Recorder::default();

        Driver::new(Duration::ZERO)
            .run(&mut session, &mut events, &mut sink)
            .unwrap();

        assert_eq!(sink.presented.len(), 2);
        assert_eq!(sink.presented[0].1, "    \n_@__");
        assert_eq!(sink.presented[1].1, "      \n_@____");
        assert!(sink.presented[1].0.contains("Points 0"));
    }

    #[test]
    fn waits_are_bounded_by_tick() {
        let mut session = Session::with_track(config(3), Track::from_text("______"), 4);
        let mut events = Scripted::new(vec![None, Some(InputEvent::Quit)]);
        let mut sink = Recorder::default();
        let tick = Duration::from_millis(30);

        Driver::new(tick)
            .run(&mut session, &mut events, &mut sink)
            .unwrap();

        assert_eq!(events.waits.len(), 2);
        assert!(events.waits.iter().all(|w| *w <= tick));
    }

    #[test]
    fn output_failure_is_fatal() {
        let mut session = Session::with_track(config(3), Track::from_text("______"), 4);
        let mut events = Scripted::new(vec![None]);

        let err = Driver::new(Duration::ZERO)
            .run(&mut session, &mut events, &mut Broken)
            .unwrap_err();
        assert!(err.to_string().contains("stdout closed"));
    }
}
