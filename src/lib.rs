//! Colony - Conway's Game of Life engine on a resizable toroidal grid
//!
//! This crate provides the core data structures and logic for running a
//! Game of Life colony:
//! - Square grid with double-buffered generation stepping
//! - Toroidal 8-neighbor rule (survive on 2/3, birth on exactly 3)
//! - Cumulative visited overlay recording every cell that has ever lived
//! - Centered resize that preserves the overlapping region
//! - Start/stop/pause/resume/reset lifecycle driven by a host-owned timer
//! - Serializable snapshots for save/load and the reset baseline
//!
//! The crate is designed to be deterministic: given the same sequence of
//! operations, it will always produce the same colony state. Rendering,
//! pointer-to-cell mapping, and the periodic timer belong to the host; the
//! engine exposes plain operations and emits typed [`ColonyEvent`]
//! notifications through a handler the host registers.

mod color;
mod engine;
mod error;
mod event;
mod grid;
pub mod rules;
mod snapshot;

pub use color::CellColor;
pub use engine::{Colony, RunState};
pub use error::ColonyError;
pub use event::{ColonyEvent, EventHandler};
pub use grid::Grid;
pub use snapshot::Snapshot;
