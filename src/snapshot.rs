//! Colony snapshot - the serialized save/load format
//!
//! A snapshot captures the current generation, the visited overlay, the
//! cell color, and the generation counter, in that field order. Grids are
//! encoded as one text row per grid line, `.` for dead and `O` for alive,
//! which keeps saved files inspectable by eye.
//!
//! Decoding validates everything before the engine touches any live state:
//! unparseable bytes, non-square rows, a grid/overlay dimension mismatch,
//! an invalid color, or a zero-size grid all fail the load and leave the
//! prior state untouched.

use serde::{Deserialize, Serialize};

use crate::color::CellColor;
use crate::error::ColonyError;
use crate::grid::Grid;

const ALIVE_CHAR: char = 'O';
const DEAD_CHAR: char = '.';

/// A complete serializable snapshot of colony state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current generation, one string per row
    pub current: Vec<String>,
    /// Visited overlay, one string per row
    pub visited: Vec<String>,
    /// Cell color as a `#rrggbb` hex string
    pub color: String,
    /// Generation counter
    pub generation: u64,
}

impl Snapshot {
    /// Capture a snapshot from live state
    pub fn capture(current: &Grid, visited: &Grid, color: CellColor, generation: u64) -> Self {
        Self {
            current: encode_rows(current),
            visited: encode_rows(visited),
            color: color.to_hex(),
            generation,
        }
    }

    /// Serialize to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, ColonyError> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Deserialize from bytes. Truncated or otherwise unparseable input is
    /// reported as [`ColonyError::Malformed`]; the decoded fields are not
    /// validated here (see [`Snapshot::decode`]).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ColonyError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Validate and decode into grids, color, and counter
    pub fn decode(&self) -> Result<(Grid, Grid, CellColor, u64), ColonyError> {
        if self.current.len() != self.visited.len() {
            return Err(ColonyError::CorruptState(format!(
                "grid has {} rows but visited overlay has {}",
                self.current.len(),
                self.visited.len()
            )));
        }

        let current = decode_rows(&self.current)?;
        let visited = decode_rows(&self.visited)?;

        let color = CellColor::from_hex(&self.color).ok_or_else(|| {
            ColonyError::CorruptState(format!("invalid color {:?}", self.color))
        })?;

        Ok((current, visited, color, self.generation))
    }
}

fn encode_rows(grid: &Grid) -> Vec<String> {
    let size = grid.size();
    (0..size)
        .map(|row| {
            (0..size)
                .map(|col| {
                    if grid.alive(row, col) {
                        ALIVE_CHAR
                    } else {
                        DEAD_CHAR
                    }
                })
                .collect()
        })
        .collect()
}

fn decode_rows(rows: &[String]) -> Result<Grid, ColonyError> {
    let size = rows.len();
    if size == 0 {
        return Err(ColonyError::CorruptState("grid has no rows".to_string()));
    }

    let mut grid = Grid::new(size);
    for (row, line) in rows.iter().enumerate() {
        if line.chars().count() != size {
            return Err(ColonyError::CorruptState(format!(
                "row {} has {} cells, expected {}",
                row,
                line.chars().count(),
                size
            )));
        }
        for (col, ch) in line.chars().enumerate() {
            match ch {
                ALIVE_CHAR => grid.mark(row, col, true),
                DEAD_CHAR => {}
                other => {
                    return Err(ColonyError::CorruptState(format!(
                        "invalid cell {:?} at ({}, {})",
                        other, row, col
                    )));
                }
            }
        }
    }
    Ok(grid)
}
