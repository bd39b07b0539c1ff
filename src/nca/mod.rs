//! Neural cellular automaton engine.
//!
//! Each cell perceives its 3x3 neighbourhood through depthwise Sobel filters,
//! feeds `[state, grad_x, grad_y]` through a small two-layer network and adds
//! the result to its non-input channels. Runs on the CPU, one grid per canvas.

mod automaton;
mod grid;
mod network;
mod perception;

pub use automaton::{seed_grid, Automaton};
pub use grid::CellGrid;
pub use network::{UpdateNetwork, WeightsError};
pub use perception::{perceive_cell, SOBEL_X, SOBEL_Y};
