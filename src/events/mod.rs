//! Structured notifications for presentation layers.

pub mod event;

pub use event::{EventLog, EventSink, GameEvent, NullSink};
