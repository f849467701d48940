//! Per-row heat statistics for comparing the two engines.

use ndarray::Axis;

use crate::{FireError, HeatCube, Result, MAX_HEAT};

/// Count of each heat value.
pub type Histogram = [u64; MAX_HEAT as usize + 1];

/// Heat counts of `row` across every frame and column.
pub fn row_histogram(cube: &HeatCube, row: usize) -> Result<Histogram> {
    let (_, height, _) = cube.dim();
    if row >= height {
        return Err(FireError::ShapeMismatch {
            what: "row inside cube height",
            expected: height,
            actual: row,
        });
    }

    let mut histogram = [0; MAX_HEAT as usize + 1];
    for &heat in cube.index_axis(Axis(1), row).iter() {
        let count = histogram
            .get_mut(heat as usize)
            .ok_or(FireError::PaletteRangeViolation { heat })?;
        *count += 1;
    }
    Ok(histogram)
}

pub fn row_mean(cube: &HeatCube, row: usize) -> Result<f64> {
    let histogram = row_histogram(cube, row)?;
    let total: u64 = histogram.iter().sum();
    let weighted: u64 = histogram
        .iter()
        .enumerate()
        .map(|(heat, &count)| heat as u64 * count)
        .sum();
    Ok(weighted as f64 / total.max(1) as f64)
}

/// Total variation distance of the normalised histograms: 0 when identical, 1 when
/// disjoint.
pub fn total_variation(a: &Histogram, b: &Histogram) -> f64 {
    let na: u64 = a.iter().sum();
    let nb: u64 = b.iter().sum();
    if na == 0 || nb == 0 {
        return if na == nb { 0.0 } else { 1.0 };
    }

    0.5 * a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x as f64 / na as f64 - y as f64 / nb as f64).abs())
        .sum::<f64>()
}
