//! Observers: how a presentation layer receives notifications.

use std::cell::RefCell;
use std::rc::Rc;

use super::event::GameEvent;

/// Receives every event the engine emits, in order.
///
/// Closures taking `&GameEvent` implement this directly.
pub trait GameObserver {
    /// Handle one event.
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// In-memory event collector.
///
/// Cloning gives another handle onto the same log, so one clone can be
/// subscribed to the engine while another is read.
///
/// ```
/// use pig_dice::events::{EventLog, GameEvent, GameObserver};
///
/// let log = EventLog::new();
/// let mut handle = log.clone();
/// handle.on_event(&GameEvent::GameReset);
///
/// assert_eq!(log.events(), vec![GameEvent::GameReset]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every event received so far.
    #[must_use]
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Remove and return every event received so far.
    pub fn drain(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of events received.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// True if nothing has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.borrow_mut().push(*event);
    }
}

/// Writes each event to `tracing` at debug level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn on_event(&mut self, event: &GameEvent) {
        tracing::debug!(?event, "{}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    #[test]
    fn test_event_log_shared_handles() {
        let log = EventLog::new();
        let mut writer = log.clone();

        writer.on_event(&GameEvent::DiceRolled { face: 3 });
        writer.on_event(&GameEvent::TurnSwitched { active_player: PlayerId::SECOND });

        assert_eq!(log.len(), 2);
        assert_eq!(log.drain()[0], GameEvent::DiceRolled { face: 3 });
        assert!(log.is_empty());
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |event: &GameEvent| seen.push(*event);
            observer.on_event(&GameEvent::GameReset);
        }
        assert_eq!(seen, vec![GameEvent::GameReset]);
    }

    #[test]
    fn test_tracing_observer_accepts_events() {
        let mut observer = TracingObserver;
        observer.on_event(&GameEvent::PlayerWon { player: PlayerId::FIRST });
    }
}
