use thiserror::Error;

use crate::{Heat, MAX_HEAT};

#[derive(Debug, Error, PartialEq)]
pub enum FireError {
    #[error("{name} must be positive, got {value}")]
    InvalidDimension { name: &'static str, value: usize },
    #[error("{what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Clamped indexing should make this unreachable.
    #[error("stream lookup ({stream}, {age}) outside pool of {streams} streams x {ages} ages")]
    IndexOutOfRange {
        stream: usize,
        age: usize,
        streams: usize,
        ages: usize,
    },
    #[error("heat {heat} exceeds the last palette index {}", MAX_HEAT)]
    PaletteRangeViolation { heat: Heat },
    #[error("base heat {heat} exceeds {}", MAX_HEAT)]
    InvalidBaseHeat { heat: Heat },
    #[error("wind strength must be finite, got {strength}")]
    InvalidWind { strength: f64 },
}

pub type Result<T> = std::result::Result<T, FireError>;

pub(crate) fn check_dimension(name: &'static str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(FireError::InvalidDimension { name, value });
    }
    Ok(())
}

pub(crate) fn check_base_heat(heat: Heat) -> Result<()> {
    if heat > MAX_HEAT {
        return Err(FireError::InvalidBaseHeat { heat });
    }
    Ok(())
}
