//! The classic Doom fire: heat is fed from the bottom row and each tick moves every
//! row up by one, losing 0..=2 on the way, while wind and jitter push rows sideways.

use ndarray::{s, Array, Array2, Array3};
use rand::Rng;
use tracing::debug;

use crate::error::{check_base_heat, check_dimension};
use crate::{Heat, HeatCube, HeatGrid, Result};

/// Constant drift of every non-source row, negative is to the left.
const WIND: isize = -1;

/// Cold grid with the bottom row burning at `source_heat`.
pub fn initial_grid(height: usize, width: usize, source_heat: Heat) -> Result<HeatGrid> {
    check_dimension("height", height)?;
    check_dimension("width", width)?;
    check_base_heat(source_heat)?;

    let mut grid = Array2::zeros((height, width));
    grid.row_mut(height - 1).fill(source_heat);
    Ok(grid)
}

/// Advances `grid` by one tick. The last row is the source and is copied as is.
pub fn generate_stepwise_frame<R: Rng + ?Sized>(grid: &HeatGrid, rng: &mut R) -> HeatGrid {
    let (height, width) = grid.dim();
    let mut next = grid.clone();
    if height < 2 || width == 0 {
        return next;
    }

    let decay: Array2<Heat> = Array::from_shape_fn((height, width), |_| rng.gen_range(0..3));
    let risen = Array::from_shape_fn((height - 1, width), |(y, x)| {
        grid[[y + 1, x]].saturating_sub(decay[[y + 1, x]])
    });

    let width = width as isize;
    for (y, mut row) in next.slice_mut(s![..-1, ..]).outer_iter_mut().enumerate() {
        let shift = WIND + rng.gen_range(-1..=1);
        for (x, cell) in row.iter_mut().enumerate() {
            *cell = risen[[y, (x as isize - shift).rem_euclid(width) as usize]];
        }
    }

    next
}

/// Runs `warmup` unrecorded ticks from `grid`, then records the next `frames`.
pub fn run_stepwise<R: Rng + ?Sized>(
    grid: &HeatGrid,
    warmup: usize,
    frames: usize,
    rng: &mut R,
) -> Result<HeatCube> {
    check_dimension("frames", frames)?;
    let (height, width) = grid.dim();
    check_dimension("height", height)?;
    check_dimension("width", width)?;

    debug!(warmup, frames, height, width, "running step-wise fire");

    let mut grid = grid.clone();
    for _ in 0..warmup {
        grid = generate_stepwise_frame(&grid, rng);
    }

    let mut cube = Array3::zeros((frames, height, width));
    for mut frame in cube.outer_iter_mut() {
        grid = generate_stepwise_frame(&grid, rng);
        frame.assign(&grid);
    }

    Ok(cube)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{FireError, DEFAULT_BASE_HEAT, MAX_HEAT};
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Axis};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_initial_grid() {
        let grid = initial_grid(3, 4, DEFAULT_BASE_HEAT).unwrap();
        assert_eq!(grid, array![[0, 0, 0, 0], [0, 0, 0, 0], [36, 36, 36, 36]]);

        assert_eq!(
            initial_grid(0, 4, 36),
            Err(FireError::InvalidDimension {
                name: "height",
                value: 0
            })
        );
        assert_eq!(
            initial_grid(3, 4, 50),
            Err(FireError::InvalidBaseHeat { heat: 50 })
        );
    }

    #[test]
    fn test_first_tick() {
        let mut rng = StdRng::seed_from_u64(0);
        let grid = initial_grid(5, 16, DEFAULT_BASE_HEAT).unwrap();
        let next = generate_stepwise_frame(&grid, &mut rng);

        // the input is left alone
        assert_eq!(grid, initial_grid(5, 16, DEFAULT_BASE_HEAT).unwrap());

        assert!(next.row(4).iter().all(|&h| h == 36));
        assert!(next.row(3).iter().all(|&h| (34..=36).contains(&h)));
        assert!(next.slice(s![..3, ..]).iter().all(|&h| h == 0));
    }

    #[test]
    fn test_rows_drift_left_with_jitter() {
        // Source columns 5 apart stay identifiable after losing up to 2.
        let width = 7;
        let grid = Array2::from_shape_fn((2, width), |(y, x)| {
            if y == 1 {
                (x * 5) as Heat
            } else {
                0
            }
        });
        let origin = |heat: Heat| (heat as usize + 2) / 5;

        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = [0usize; 3];
        let ticks = 600;
        for _ in 0..ticks {
            let next = generate_stepwise_frame(&grid, &mut rng);
            assert_eq!(next.row(1), grid.row(1));

            // left rotation of the risen row
            let left = origin(next[[0, 0]]);
            assert!(left <= 2, "rotated left by {}", left);
            for x in 0..width {
                assert_eq!(origin(next[[0, x]]), (x + left) % width);
            }
            seen[left] += 1;
        }

        assert!(seen.iter().all(|&n| n > 0));
        let mean = (seen[1] + 2 * seen[2]) as f64 / ticks as f64;
        assert_abs_diff_eq!(mean, 1.0, epsilon = 0.15);
    }

    #[test]
    fn test_source_row_is_held() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = initial_grid(10, 20, 30).unwrap();
        for _ in 0..40 {
            grid = generate_stepwise_frame(&grid, &mut rng);
            assert!(grid.row(9).iter().all(|&h| h == 30));
            assert!(grid.iter().all(|&h| h <= 30));
        }
    }

    #[test]
    fn test_single_row_is_only_source() {
        let mut rng = StdRng::seed_from_u64(2);
        let grid = initial_grid(1, 8, DEFAULT_BASE_HEAT).unwrap();
        assert_eq!(generate_stepwise_frame(&grid, &mut rng), grid);
    }

    #[test]
    fn test_heat_only_decreases_going_up() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = initial_grid(30, 30, DEFAULT_BASE_HEAT).unwrap();
        let cube = run_stepwise(&grid, 60, 10, &mut rng).unwrap();

        for frame in cube.outer_iter() {
            for y in 0..30 {
                let age = (29 - y) as i32;
                let floor = (36 - 2 * age).max(0);
                assert!(frame.row(y).iter().all(|&h| i32::from(h) >= floor));
                assert!(frame.row(y).iter().all(|&h| h <= MAX_HEAT));
            }
        }
    }

    #[test]
    fn test_run_stepwise() {
        let grid = initial_grid(6, 7, DEFAULT_BASE_HEAT).unwrap();

        let mut rng = StdRng::seed_from_u64(4);
        let cube = run_stepwise(&grid, 0, 3, &mut rng).unwrap();
        assert_eq!(cube.dim(), (3, 6, 7));

        // recorded frames are consecutive ticks
        let mut rng = StdRng::seed_from_u64(4);
        let first = generate_stepwise_frame(&grid, &mut rng);
        let second = generate_stepwise_frame(&first, &mut rng);
        assert_eq!(cube.index_axis(Axis(0), 0), first);
        assert_eq!(cube.index_axis(Axis(0), 1), second);

        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(
            run_stepwise(&grid, 10, 0, &mut rng),
            Err(FireError::InvalidDimension {
                name: "frames",
                value: 0
            })
        );
    }
}
