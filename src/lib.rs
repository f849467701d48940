//! Doom-style fire in two flavours.
//!
//! [`generate_stepwise_frame`] is the classic one-tick-at-a-time cellular automaton.
//! [`generate_decay_matrix_cube`] builds a whole animation at once by precomputing
//! particle heat histories and sampling them directly in (time, row, column).

use ndarray::{Array2, Array3};

pub mod decay;
mod error;
pub mod palette;
mod params;
pub mod stats;
pub mod stepwise;

pub use decay::generate_decay_matrix_cube;
pub use error::{FireError, Result};
pub use params::FireParams;
pub use stepwise::{generate_stepwise_frame, initial_grid, run_stepwise};

pub type Heat = u8;

/// Hottest value, also the last palette index.
pub const MAX_HEAT: Heat = 36;
pub const DEFAULT_BASE_HEAT: Heat = 36;

/// One frame, indexed (row, column).
pub type HeatGrid = Array2<Heat>;
/// An animation, indexed (time, row, column).
pub type HeatCube = Array3<Heat>;
