//! Terminal event abstraction.
//!
//! A background task polls crossterm and forwards events over a channel.
//! [`AppEvent::Tick`] is emitted once per frame interval on a fixed schedule,
//! whether or not input is arriving, so the ease animation keeps advancing
//! while the pointer moves.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CtEvent, KeyEvent, MouseEvent};
use tokio::sync::mpsc;

/// High-level events consumed by the application.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Terminal lost focus; any drag in progress is abandoned.
    FocusLost,
    Tick,
}

impl AppEvent {
    fn from_crossterm(ev: CtEvent) -> Option<Self> {
        match ev {
            CtEvent::Key(k) => Some(AppEvent::Key(k)),
            CtEvent::Mouse(m) => Some(AppEvent::Mouse(m)),
            CtEvent::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            CtEvent::FocusLost => Some(AppEvent::FocusLost),
            _ => None,
        }
    }
}

/// Fixed-rate tick deadlines, independent of input traffic.
#[derive(Debug, Clone)]
pub struct TickSchedule {
    frame: Duration,
    next: Instant,
}

impl TickSchedule {
    pub fn new(frame: Duration, now: Instant) -> Self {
        Self {
            frame,
            next: now + frame,
        }
    }

    /// How long a poll may block before the next tick is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// `true` (and the deadline advances) if a tick is due at `now`.
    ///
    /// After a stall only one tick is reported; missed frames are dropped
    /// rather than replayed in a burst.
    pub fn take_due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.frame;
        if self.next <= now {
            self.next = now + self.frame;
        }
        true
    }
}

/// Spawns the reader task; events arrive on the returned receiver.
pub fn spawn_event_reader(frame: Duration) -> mpsc::UnboundedReceiver<AppEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        let mut schedule = TickSchedule::new(frame, Instant::now());
        loop {
            let input = match event::poll(schedule.timeout(Instant::now())) {
                Ok(true) => match event::read() {
                    Ok(ev) => AppEvent::from_crossterm(ev),
                    Err(err) => {
                        tracing::warn!("terminal read failed: {err}");
                        None
                    }
                },
                Ok(false) => None,
                Err(err) => {
                    tracing::warn!("terminal poll failed: {err}");
                    std::thread::sleep(schedule.timeout(Instant::now()));
                    None
                }
            };

            if let Some(input) = input {
                if tx.send(input).is_err() {
                    break; // receiver dropped
                }
            }
            if schedule.take_due(Instant::now()) && tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handler, state::AppState};
    use crate::config::AppConfig;
    use crossterm::event::{KeyCode, KeyModifiers, MouseEventKind};
    use ratatui::layout::Rect;

    const FRAME: Duration = Duration::from_millis(33);

    #[test]
    fn ticks_keep_their_rate_under_constant_input() {
        let start = Instant::now();
        let mut schedule = TickSchedule::new(FRAME, start);
        // An input every 10 ms for a third of a second.
        let ticks = (1..=33)
            .filter(|i| schedule.take_due(start + Duration::from_millis(10 * i)))
            .count();
        assert_eq!(ticks, 10);
    }

    #[test]
    fn timeout_shrinks_toward_deadline() {
        let start = Instant::now();
        let schedule = TickSchedule::new(FRAME, start);
        assert_eq!(schedule.timeout(start), FRAME);
        assert_eq!(schedule.timeout(start + Duration::from_millis(30)), Duration::from_millis(3));
        assert_eq!(schedule.timeout(start + Duration::from_millis(50)), Duration::ZERO);
    }

    #[test]
    fn stall_yields_a_single_tick() {
        let start = Instant::now();
        let mut schedule = TickSchedule::new(FRAME, start);
        let late = start + Duration::from_millis(500);
        assert!(schedule.take_due(late));
        assert!(!schedule.take_due(late));
        assert_eq!(schedule.timeout(late), FRAME);
    }

    #[test]
    fn ease_advances_while_pointer_moves() {
        let mut state = AppState::new(AppConfig::default());
        state.resize(Rect::new(0, 0, 80, 24));
        handler::handle_key(&mut state, KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
        assert!(state.smooth.is_animating());
        let before = state.displayed_center();

        let start = Instant::now();
        let mut schedule = TickSchedule::new(FRAME, start);
        for i in 1..=30u16 {
            let moved = MouseEvent {
                kind: MouseEventKind::Moved,
                column: 10 + i,
                row: 10,
                modifiers: KeyModifiers::NONE,
            };
            handler::handle_mouse(&mut state, moved);
            if schedule.take_due(start + Duration::from_millis(10 * u64::from(i))) {
                handler::handle_tick(&mut state);
            }
        }

        assert!(state.displayed_center() > before);
        assert!(!state.stack.gesture().is_dragging());
    }
}
