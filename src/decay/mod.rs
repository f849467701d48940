//! Closed-form fire: precomputed particle histories sampled straight into a
//! (time, row, column) cube, with no frame-to-frame iteration.
//!
//! Unlike the step-wise simulator the only horizontal motion here is the
//! height-dependent lean from [`wind`]. There is no per-row jitter, so the two
//! engines agree on per-row heat distributions but not on horizontal turbulence.

use ndarray::s;
use rand::Rng;
use tracing::debug;

use crate::error::{check_base_heat, check_dimension};
use crate::{FireError, Heat, HeatCube, Result};

mod sample;
mod stream;
mod wind;

pub use sample::{sample_space_time, stream_coordinates};
pub use stream::StreamPool;
pub use wind::{apply_wind, wind_shift, DEFAULT_WIND_STRENGTH};

/// Streams needed to cover `total_frames`, counting lines born up to `height`
/// ticks before the first frame.
pub fn stream_count(total_frames: usize, height: usize) -> usize {
    total_frames + height
}

/// Swaps row 0 and row `height - 1` of every frame.
pub fn flip_rows(cube: &HeatCube) -> HeatCube {
    cube.slice(s![.., ..;-1, ..]).to_owned()
}

/// Rejects anything [`generate_decay_matrix_cube`] cannot build, before allocating.
pub(crate) fn check_animation(
    total_frames: usize,
    height: usize,
    width: usize,
    wind_strength: f64,
    base_heat: Heat,
) -> Result<()> {
    check_dimension("total_frames", total_frames)?;
    check_dimension("height", height)?;
    check_dimension("width", width)?;
    check_base_heat(base_heat)?;
    if !wind_strength.is_finite() {
        return Err(FireError::InvalidWind {
            strength: wind_strength,
        });
    }
    Ok(())
}

/// Generates a whole animation, row 0 at the top as displayed.
pub fn generate_decay_matrix_cube<R: Rng + ?Sized>(
    total_frames: usize,
    height: usize,
    width: usize,
    wind_strength: f64,
    base_heat: Heat,
    rng: &mut R,
) -> Result<HeatCube> {
    check_animation(total_frames, height, width, wind_strength, base_heat)?;

    let num_streams = stream_count(total_frames, height);
    debug!(
        total_frames,
        height, width, num_streams, wind_strength, "generating decay-matrix cube"
    );

    let pool = StreamPool::generate(num_streams, height, width, base_heat, rng)?;
    let cube = sample_space_time(&pool, total_frames, height, width)?;
    let cube = apply_wind(&cube, wind_strength)?;

    Ok(flip_rows(&cube))
}
