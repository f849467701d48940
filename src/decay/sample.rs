use ndarray::Array3;

use super::stream::StreamPool;
use crate::error::check_dimension;
use crate::{FireError, HeatCube, Result};

/// Which stream and age occupy (`t`, `y`), with row 0 at the bottom.
///
/// A particle at row `y` has risen for `y` ticks, so it was born at `t - y`.
/// Stream 0 is born `height` ticks before frame 0. Indices past either end of the
/// pool reuse the boundary stream.
pub fn stream_coordinates(t: usize, y: usize, height: usize, num_streams: usize) -> (usize, usize) {
    let birth = t as isize - y as isize;
    let last = num_streams.saturating_sub(1) as isize;
    let stream = (birth + height as isize).max(0).min(last) as usize;
    (stream, y)
}

/// Fills a (time, row, column) cube from `pool`, bottom row first.
pub fn sample_space_time(
    pool: &StreamPool,
    total_frames: usize,
    height: usize,
    width: usize,
) -> Result<HeatCube> {
    check_dimension("total_frames", total_frames)?;
    check_dimension("height", height)?;
    check_dimension("width", width)?;

    if pool.max_age() != height {
        return Err(FireError::ShapeMismatch {
            what: "stream ages vs cube height",
            expected: height,
            actual: pool.max_age(),
        });
    }
    if pool.width() != width {
        return Err(FireError::ShapeMismatch {
            what: "stream width vs cube width",
            expected: width,
            actual: pool.width(),
        });
    }

    let mut cube = Array3::zeros((total_frames, height, width));
    for (t, mut frame) in cube.outer_iter_mut().enumerate() {
        for (y, mut row) in frame.outer_iter_mut().enumerate() {
            let (stream, age) = stream_coordinates(t, y, height, pool.num_streams());
            row.assign(&pool.lane(stream, age)?);
        }
    }

    Ok(cube)
}
