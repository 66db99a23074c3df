//! Colony engine - the simulation state machine
//!
//! Owns the double-buffered generation grids, the visited overlay, the
//! lifecycle state, and the reset baseline. The host drives it: a periodic
//! timer calls [`Colony::tick`] while running, pointer edits call
//! [`Colony::set_cell`] while stopped or paused, and menu actions call the
//! lifecycle and persistence operations. Everything is synchronous and
//! single-threaded; a step always completes its full sweep before any
//! transition or event is emitted.

use std::fmt;
use std::mem;
use std::time::Duration;

use crate::color::CellColor;
use crate::error::ColonyError;
use crate::event::{ColonyEvent, EventHandler};
use crate::grid::Grid;
use crate::rules;
use crate::snapshot::Snapshot;

/// Lifecycle state of the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// Not ticking; the initial state
    #[default]
    Stopped,
    /// Host timer is ticking the simulation
    Running,
    /// Ticking suspended, state retained
    Paused,
}

/// Baseline state restored by [`Colony::reset`], captured at the last
/// successful save or load. Owns its grids; never aliases the live buffers.
struct Baseline {
    current: Grid,
    visited: Grid,
    generation: u64,
}

impl Baseline {
    fn empty(size: usize) -> Self {
        Self {
            current: Grid::new(size),
            visited: Grid::new(size),
            generation: 0,
        }
    }
}

/// The colony simulation engine
pub struct Colony {
    size: usize,
    current: Grid,
    next: Grid,
    visited: Grid,
    generation: u64,
    color: CellColor,
    interval: Duration,
    state: RunState,
    baseline: Baseline,
    handler: Option<EventHandler>,
}

// The boxed event handler has no useful Debug form
impl fmt::Debug for Colony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Colony")
            .field("size", &self.size)
            .field("generation", &self.generation)
            .field("state", &self.state)
            .field("color", &self.color)
            .field("interval", &self.interval)
            .finish_non_exhaustive()
    }
}

impl Colony {
    /// Create a stopped, all-dead colony. `size` is clamped to at least 1.
    pub fn new(size: usize, interval: Duration) -> Self {
        let size = size.max(1);
        Self {
            size,
            current: Grid::new(size),
            next: Grid::new(size),
            visited: Grid::new(size),
            generation: 0,
            color: CellColor::default(),
            interval,
            state: RunState::Stopped,
            baseline: Baseline::empty(size),
            handler: None,
        }
    }

    /// Register the event handler. Replaces any previous handler.
    pub fn on_event(&mut self, handler: impl FnMut(ColonyEvent) + 'static) {
        self.handler = Some(Box::new(handler));
    }

    fn emit(&mut self, event: ColonyEvent) {
        if let Some(handler) = self.handler.as_mut() {
            handler(event);
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Grid dimension
    pub fn size(&self) -> usize {
        self.size
    }

    /// Completed steps since the last reset/load/clean
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current cell color
    pub fn color(&self) -> CellColor {
        self.color
    }

    /// Host tick interval
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Lifecycle state
    pub fn run_state(&self) -> RunState {
        self.state
    }

    /// True while the host timer should be ticking
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// True iff every cell of the current generation is dead
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// The current generation grid
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    /// The visited overlay: every cell that has ever been alive since the
    /// last reset/load/clean
    pub fn visited(&self) -> &Grid {
        &self.visited
    }

    // ------------------------------------------------------------------
    // Direct edits (host calls these only while not running)
    // ------------------------------------------------------------------

    /// Read a cell of the current generation; out-of-range reads as dead
    pub fn cell(&self, row: isize, col: isize) -> bool {
        self.current.get(row, col)
    }

    /// Write a cell of the current generation; out-of-range is ignored
    pub fn set_cell(&mut self, row: isize, col: isize, alive: bool) {
        self.current.set(row, col, alive);
    }

    /// Flip a cell of the current generation; out-of-range is ignored
    pub fn toggle_cell(&mut self, row: isize, col: isize) {
        let alive = self.current.get(row, col);
        self.current.set(row, col, !alive);
    }

    // ------------------------------------------------------------------
    // Stepping
    // ------------------------------------------------------------------

    /// Host timer entry point: advances one generation while running,
    /// otherwise does nothing.
    pub fn tick(&mut self) {
        if self.state == RunState::Running {
            self.step();
        }
    }

    /// Advance one generation. Also valid while stopped or paused, for
    /// host-driven single-stepping.
    ///
    /// Marks the visited overlay from the current generation before the
    /// buffers swap, so a cell alive now is recorded even if it dies next
    /// generation. If the computed next generation is identical to the
    /// current one the colony has stabilized: the engine stops, emits
    /// [`ColonyEvent::Stabilized`], and neither swaps nor increments.
    pub fn step(&mut self) {
        debug_assert_eq!(self.current.size(), self.next.size());
        debug_assert_eq!(self.current.size(), self.visited.size());

        for row in 0..self.size {
            for col in 0..self.size {
                if self.current.alive(row, col) {
                    self.visited.mark(row, col, true);
                }
                self.next
                    .mark(row, col, rules::will_be_alive(&self.current, row, col));
            }
        }

        if self.current == self.next {
            tracing::info!("colony stabilized at generation {}", self.generation);
            self.stop();
            self.emit(ColonyEvent::Stabilized);
            return;
        }

        // O(1) buffer exchange; the old current becomes the new scratch
        mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        self.emit(ColonyEvent::GenerationChanged(self.generation));
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Begin ticking. Valid from stopped or paused.
    pub fn start(&mut self) {
        if self.state != RunState::Running {
            self.state = RunState::Running;
            self.emit(ColonyEvent::RunningChanged(true));
        }
    }

    /// Cease ticking from any state.
    pub fn stop(&mut self) {
        self.state = RunState::Stopped;
        self.emit(ColonyEvent::RunningChanged(false));
    }

    /// Suspend ticking, retaining state. No-op unless running.
    pub fn pause(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Paused;
            self.emit(ColonyEvent::Paused);
            self.emit(ColonyEvent::RunningChanged(false));
        }
    }

    /// Resume ticking. No-op unless paused.
    pub fn resume(&mut self) {
        if self.state == RunState::Paused {
            self.state = RunState::Running;
            self.emit(ColonyEvent::Resumed);
            self.emit(ColonyEvent::RunningChanged(true));
        }
    }

    /// Stop and restore the grid, visited overlay, size, and counter from
    /// the baseline captured at the last save or load, discarding any
    /// unsaved edits.
    pub fn reset(&mut self) {
        self.stop();

        let baseline_size = self.baseline.current.size();
        let size_changed = baseline_size != self.size;

        self.size = baseline_size;
        self.current = self.baseline.current.clone();
        self.visited = self.baseline.visited.clone();
        self.next = Grid::new(baseline_size);
        self.generation = self.baseline.generation;

        if size_changed {
            self.emit(ColonyEvent::SizeChanged(baseline_size));
        }
        self.emit(ColonyEvent::GenerationChanged(self.generation));
    }

    /// Change the host tick interval. Takes effect on the host's next
    /// scheduled tick.
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
        self.emit(ColonyEvent::IntervalChanged(interval));
    }

    /// Change the cell color.
    pub fn set_color(&mut self, color: CellColor) {
        let was_running = self.begin_mutation();
        self.color = color;
        self.emit(ColonyEvent::ColorChanged(color));
        self.end_mutation(was_running);
    }

    // Structural mutations issued while running pause the engine around the
    // change so no tick observes a torn grid; a user-paused or stopped
    // engine keeps its state.
    fn begin_mutation(&mut self) -> bool {
        if self.state == RunState::Running {
            self.pause();
            true
        } else {
            false
        }
    }

    fn end_mutation(&mut self, was_running: bool) {
        if was_running {
            self.resume();
        }
    }

    // ------------------------------------------------------------------
    // Resize
    // ------------------------------------------------------------------

    /// Reallocate the grids to `new_size` (clamped to at least 1), copying
    /// the overlapping region centered between old and new bounds. The same
    /// offset pair applies to the current, next, and visited grids, keeping
    /// the three buffers spatially consistent; cells outside the overlap
    /// are left dead and unvisited.
    pub fn resize(&mut self, new_size: usize) {
        let new_size = new_size.max(1);
        let was_running = self.begin_mutation();

        let old_size = self.size;
        let min_size = old_size.min(new_size);
        // Growing writes the old content centered into the new grid;
        // shrinking reads the centered window out of the old grid.
        let (write_off, read_off) = if old_size < new_size {
            ((new_size - old_size) / 2, 0)
        } else {
            (0, (old_size - new_size) / 2)
        };

        let mut current = Grid::new(new_size);
        let mut next = Grid::new(new_size);
        let mut visited = Grid::new(new_size);

        for row in 0..min_size {
            for col in 0..min_size {
                current.mark(
                    row + write_off,
                    col + write_off,
                    self.current.alive(row + read_off, col + read_off),
                );
                next.mark(
                    row + write_off,
                    col + write_off,
                    self.next.alive(row + read_off, col + read_off),
                );
                visited.mark(
                    row + write_off,
                    col + write_off,
                    self.visited.alive(row + read_off, col + read_off),
                );
            }
        }

        self.current = current;
        self.next = next;
        self.visited = visited;
        self.size = new_size;

        tracing::debug!("resized colony {} -> {}", old_size, new_size);
        self.emit(ColonyEvent::SizeChanged(new_size));
        self.end_mutation(was_running);
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Serialize the live state and update the reset baseline to it, so a
    /// later [`Colony::reset`] restores the just-saved point.
    ///
    /// Fails with [`ColonyError::EmptyState`] when every cell is dead; the
    /// prior run state is retained either way.
    pub fn save(&mut self) -> Result<Vec<u8>, ColonyError> {
        let was_running = self.begin_mutation();
        let result = self.save_inner();
        self.end_mutation(was_running);
        result
    }

    fn save_inner(&mut self) -> Result<Vec<u8>, ColonyError> {
        if self.current.is_empty() {
            return Err(ColonyError::EmptyState);
        }

        let snapshot = Snapshot::capture(&self.current, &self.visited, self.color, self.generation);
        let bytes = snapshot.to_bytes()?;

        self.baseline = Baseline {
            current: self.current.clone(),
            visited: self.visited.clone(),
            generation: self.generation,
        };

        tracing::debug!("saved colony at generation {}", self.generation);
        self.emit(ColonyEvent::Saved);
        Ok(bytes)
    }

    /// Replace the whole state from serialized bytes.
    ///
    /// Parsing and validation happen before anything is touched: on any
    /// failure the prior state, including the run state, is exactly as it
    /// was. On success the engine stops, the current generation, visited
    /// overlay, size, counter, and color are replaced, the scratch grid is
    /// reallocated at the new size, and the reset baseline becomes the
    /// loaded state.
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), ColonyError> {
        let snapshot = Snapshot::from_bytes(bytes)?;
        let (current, visited, color, generation) = snapshot.decode()?;

        self.stop();

        let new_size = current.size();
        let size_changed = new_size != self.size;

        self.baseline = Baseline {
            current: current.clone(),
            visited: visited.clone(),
            generation,
        };
        self.size = new_size;
        self.current = current;
        self.visited = visited;
        self.next = Grid::new(new_size);
        self.generation = generation;
        self.color = color;

        tracing::info!("loaded colony of size {} at generation {}", new_size, generation);
        self.emit(ColonyEvent::ColorChanged(color));
        if size_changed {
            self.emit(ColonyEvent::SizeChanged(new_size));
        }
        self.emit(ColonyEvent::GenerationChanged(generation));
        self.emit(ColonyEvent::Loaded);
        Ok(())
    }

    /// Stop and wipe everything to all-dead at the current size, including
    /// the reset baseline; the counter returns to 0.
    pub fn clean(&mut self) {
        self.stop();

        self.current = Grid::new(self.size);
        self.next = Grid::new(self.size);
        self.visited = Grid::new(self.size);
        self.baseline = Baseline::empty(self.size);
        self.generation = 0;

        tracing::debug!("cleaned colony of size {}", self.size);
        self.emit(ColonyEvent::GenerationChanged(0));
        self.emit(ColonyEvent::Cleaned);
    }
}
