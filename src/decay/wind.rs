use ndarray::Array;

use crate::{FireError, HeatCube, Result};

pub const DEFAULT_WIND_STRENGTH: f64 = 0.5;

/// Columns row `y` is moved to the left.
pub fn wind_shift(y: usize, strength: f64) -> isize {
    (y as f64 * strength).floor() as isize
}

/// Rolls every row left by [`wind_shift`], the same way in every frame.
///
/// Rows are wrapped, so each row keeps exactly its values.
pub fn apply_wind(cube: &HeatCube, strength: f64) -> Result<HeatCube> {
    if !strength.is_finite() {
        return Err(FireError::InvalidWind { strength });
    }

    let (_, height, width) = cube.dim();
    let shifts: Vec<usize> = (0..height)
        .map(|y| wind_shift(y, strength).rem_euclid(width.max(1) as isize) as usize)
        .collect();

    Ok(Array::from_shape_fn(cube.dim(), |(t, y, x)| {
        cube[[t, y, (x + shifts[y]) % width]]
    }))
}
