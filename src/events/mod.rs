//! Notification contract between the engine and a presentation layer.
//!
//! Each engine operation returns its `Events` and forwards every one to the
//! subscribed `GameObserver`s.

pub mod event;
pub mod observer;

pub use event::{Events, GameEvent};
pub use observer::{EventLog, GameObserver, TracingObserver};
