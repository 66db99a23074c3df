//! Game of Life rule evaluation
//!
//! Toroidal Moore-neighborhood counting and the classic birth/survival
//! predicate: a live cell survives with 2 or 3 live neighbors, a dead cell
//! is born with exactly 3.
//!
//! Unlike [`Grid::get`], these functions require in-range coordinates: the
//! wraparound arithmetic keeps all eight neighbor accesses inside the grid
//! by construction, so an out-of-range argument here is a logic defect in
//! the caller and panics rather than returning an error.

use crate::grid::Grid;

/// Count the live cells in the 8-cell Moore neighborhood of `(row, col)`,
/// wrapping around the grid edges.
///
/// Panics if `row` or `col` is outside `[0, size)`.
pub fn live_neighbor_count(grid: &Grid, row: usize, col: usize) -> u8 {
    let size = grid.size();
    assert!(
        row < size && col < size,
        "neighbor count out of range: ({}, {}) on size {}",
        row,
        col,
        size
    );

    let above = if row == 0 { size - 1 } else { row - 1 };
    let below = if row == size - 1 { 0 } else { row + 1 };
    let left = if col == 0 { size - 1 } else { col - 1 };
    let right = if col == size - 1 { 0 } else { col + 1 };

    let neighbors = [
        (above, left),
        (above, col),
        (above, right),
        (row, left),
        (row, right),
        (below, left),
        (below, col),
        (below, right),
    ];

    neighbors
        .iter()
        .filter(|&&(r, c)| grid.alive(r, c))
        .count() as u8
}

/// Whether `(row, col)` is alive in the next generation.
///
/// Panics if `row` or `col` is outside `[0, size)`.
pub fn will_be_alive(grid: &Grid, row: usize, col: usize) -> bool {
    let count = live_neighbor_count(grid, row, col);
    count == 3 || (count == 2 && grid.alive(row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(size: usize, live: &[(isize, isize)]) -> Grid {
        let mut grid = Grid::new(size);
        for &(row, col) in live {
            grid.set(row, col, true);
        }
        grid
    }

    #[test]
    fn test_count_interior() {
        let grid = grid_from(5, &[(1, 1), (1, 2), (1, 3)]);
        assert_eq!(live_neighbor_count(&grid, 2, 2), 3);
        assert_eq!(live_neighbor_count(&grid, 1, 2), 2);
        assert_eq!(live_neighbor_count(&grid, 0, 2), 3);
    }

    #[test]
    fn test_count_wraps_corner() {
        // Live cells in the three corners adjacent (toroidally) to (0, 0)
        let grid = grid_from(5, &[(4, 4), (4, 0), (0, 4)]);
        assert_eq!(live_neighbor_count(&grid, 0, 0), 3);
    }

    #[test]
    fn test_count_wraps_edges() {
        let grid = grid_from(4, &[(0, 1), (3, 1)]);
        // (3, 1) is directly above (0, 1) on the torus
        assert_eq!(live_neighbor_count(&grid, 0, 1), 1);
        assert_eq!(live_neighbor_count(&grid, 1, 1), 1);
    }

    #[test]
    fn test_survival_and_birth() {
        // Row of three: the center survives, the cells above/below are born
        let grid = grid_from(5, &[(2, 1), (2, 2), (2, 3)]);
        assert!(will_be_alive(&grid, 2, 2));
        assert!(will_be_alive(&grid, 1, 2));
        assert!(will_be_alive(&grid, 3, 2));
        // The ends die of loneliness
        assert!(!will_be_alive(&grid, 2, 1));
        assert!(!will_be_alive(&grid, 2, 3));
    }

    #[test]
    fn test_overcrowding_dies() {
        let grid = grid_from(5, &[(1, 1), (1, 2), (1, 3), (2, 1), (2, 2)]);
        // (2, 2) has 4 live neighbors
        assert_eq!(live_neighbor_count(&grid, 2, 2), 4);
        assert!(!will_be_alive(&grid, 2, 2));
    }

    #[test]
    fn test_dead_with_two_neighbors_stays_dead() {
        let grid = grid_from(5, &[(0, 0), (0, 2)]);
        assert_eq!(live_neighbor_count(&grid, 0, 1), 2);
        assert!(!will_be_alive(&grid, 0, 1));
    }

    #[test]
    fn test_size_one_neighbors_alias_self() {
        // On a 1x1 torus every neighbor offset lands back on the cell itself
        let grid = grid_from(1, &[(0, 0)]);
        assert_eq!(live_neighbor_count(&grid, 0, 0), 8);
        assert!(!will_be_alive(&grid, 0, 0));
    }

    #[test]
    #[should_panic(expected = "neighbor count out of range")]
    fn test_out_of_range_panics() {
        let grid = Grid::new(4);
        live_neighbor_count(&grid, 4, 0);
    }
}
