//! The evolution rule.
//!
//! The rule is fixed to Conway's Game of Life, `B3/S23`: a dead cell
//! comes alive iff it has exactly 3 living neighbors, and a living cell
//! survives iff it has 2 or 3.

use crate::{
    cells::{Coord, State},
    grid::Grid,
};

/// The offsets of the eight cells in the Moore neighborhood.
const NEIGHBORS: [Coord; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Counts the living cells among the eight neighbors of a cell.
///
/// Each neighbor is looked up toroidally. On degenerate grids (sizes 1
/// and 2) several offsets wrap to the same cell, and every lookup still
/// counts: a lone living cell on a 1×1 grid has eight living neighbors.
pub fn live_neighbors(grid: &Grid, coord: Coord) -> u8 {
    NEIGHBORS
        .iter()
        .filter(|&&(dr, dc)| grid.get((coord.0 + dr, coord.1 + dc)) == State::Alive)
        .count() as u8
}

/// Computes the next generation of a grid.
///
/// The new generation is built in a separate buffer, so every cell is
/// decided from the same input generation and the sweep order cannot
/// leak into the result. The input grid is not modified.
pub fn step(grid: &Grid) -> Grid {
    let size = grid.size() as isize;
    let mut next = grid.clone();
    for row in 0..size {
        for col in 0..size {
            let coord = (row, col);
            let state = match (grid.get(coord), live_neighbors(grid, coord)) {
                (State::Alive, 2 | 3) => State::Alive,
                (State::Dead, 3) => State::Alive,
                _ => State::Dead,
            };
            next.set(coord, state);
        }
    }
    next
}
