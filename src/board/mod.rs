//! Board state: positions, cells and the grid.

mod cell;
mod grid;
mod position;

pub use cell::Cell;
pub use grid::Board;
pub use position::{Neighbors, Position};
