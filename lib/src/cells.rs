//! Cells in the cellular automaton.

use educe::Educe;
use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of a cell.
///
/// A cell is either dead or alive; it carries no other data, such as
/// age or color.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// A dead cell.
    #[educe(Default)]
    Dead,
    /// A living cell.
    Alive,
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            State::Dead => State::Alive,
            State::Alive => State::Dead,
        }
    }
}

/// The coordinates of a cell.
///
/// `(row, column)`, both 0-indexed. The coordinates are signed: grid
/// accessors reduce them modulo the grid size, so values outside
/// `[0, N)` refer to wrapped cells.
pub type Coord = (isize, isize);
