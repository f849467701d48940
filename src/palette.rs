//! Heat to colour lookup.

use ndarray::{ArrayBase, Data, Dimension};

use crate::{FireError, Heat, Result, MAX_HEAT};

/// The Doom fire palette, coldest first.
pub const DOOM: [[u8; 3]; MAX_HEAT as usize + 1] = [
    [7, 7, 7],
    [31, 7, 7],
    [47, 15, 7],
    [71, 15, 7],
    [87, 23, 7],
    [103, 31, 7],
    [119, 31, 7],
    [143, 39, 7],
    [159, 47, 7],
    [175, 63, 7],
    [191, 71, 7],
    [199, 71, 7],
    [223, 79, 7],
    [223, 87, 7],
    [223, 87, 7],
    [215, 95, 7],
    [215, 95, 7],
    [215, 103, 15],
    [207, 111, 15],
    [207, 119, 15],
    [207, 127, 15],
    [207, 135, 23],
    [199, 135, 23],
    [199, 143, 23],
    [199, 151, 31],
    [191, 159, 31],
    [191, 159, 31],
    [191, 167, 39],
    [191, 167, 39],
    [191, 175, 47],
    [183, 175, 47],
    [183, 183, 47],
    [183, 183, 55],
    [207, 207, 111],
    [223, 223, 159],
    [239, 239, 199],
    [255, 255, 255],
];

pub fn rgb(heat: Heat) -> Result<[u8; 3]> {
    DOOM.get(heat as usize)
        .copied()
        .ok_or(FireError::PaletteRangeViolation { heat })
}

/// Fails on the first value that has no palette entry.
pub fn check_range<S, D>(heat: &ArrayBase<S, D>) -> Result<()>
where
    S: Data<Elem = Heat>,
    D: Dimension,
{
    match heat.iter().find(|&&h| h > MAX_HEAT) {
        Some(&heat) => Err(FireError::PaletteRangeViolation { heat }),
        None => Ok(()),
    }
}
