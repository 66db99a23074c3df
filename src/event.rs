//! Event notifications for the host
//!
//! The engine reports state changes through a single handler the host
//! registers with [`Colony::on_event`](crate::Colony::on_event). Delivery is
//! synchronous, during the operation that caused the change.

use std::time::Duration;

use crate::color::CellColor;

/// Events the colony engine emits to its host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColonyEvent {
    /// Grid dimension changed (resize, load, or reset)
    SizeChanged(usize),
    /// Host tick interval changed
    IntervalChanged(Duration),
    /// Ticking should run (true) or cease (false)
    RunningChanged(bool),
    /// Running simulation was paused
    Paused,
    /// Paused simulation was resumed
    Resumed,
    /// Cell color changed
    ColorChanged(CellColor),
    /// A step completed and changed the grid; carries the new counter value
    GenerationChanged(u64),
    /// State was serialized and the reset baseline updated
    Saved,
    /// A snapshot was loaded and replaced the live state
    Loaded,
    /// The colony was wiped to all-dead
    Cleaned,
    /// A step produced a generation identical to its predecessor; the
    /// colony will not evolve further ("game over")
    Stabilized,
}

/// Handler the host registers to observe [`ColonyEvent`]s
pub type EventHandler = Box<dyn FnMut(ColonyEvent)>;
