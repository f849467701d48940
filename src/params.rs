use rand::{rngs::StdRng, SeedableRng};

use crate::decay::{
    check_animation, generate_decay_matrix_cube, stream_count, DEFAULT_WIND_STRENGTH,
};
use crate::{Heat, HeatCube, Result, DEFAULT_BASE_HEAT};

/// Everything needed to generate one decay-matrix animation.
#[derive(Clone, Debug, PartialEq)]
pub struct FireParams {
    pub total_frames: usize,
    pub height: usize,
    pub width: usize,
    /// Columns of lean per row of height.
    pub wind_strength: f64,
    pub base_heat: Heat,
    /// Fixed seed for reproducible output, fresh entropy otherwise.
    pub seed: Option<u64>,
}

impl Default for FireParams {
    fn default() -> Self {
        Self {
            total_frames: 90,
            height: 100,
            width: 100,
            wind_strength: DEFAULT_WIND_STRENGTH,
            base_heat: DEFAULT_BASE_HEAT,
            seed: None,
        }
    }
}

impl FireParams {
    pub fn validate(&self) -> Result<()> {
        check_animation(
            self.total_frames,
            self.height,
            self.width,
            self.wind_strength,
            self.base_heat,
        )
    }

    pub fn num_streams(&self) -> usize {
        stream_count(self.total_frames, self.height)
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Checked by [`generate_decay_matrix_cube`] itself.
    pub fn generate(&self) -> Result<HeatCube> {
        let mut rng = self.rng();
        generate_decay_matrix_cube(
            self.total_frames,
            self.height,
            self.width,
            self.wind_strength,
            self.base_heat,
            &mut rng,
        )
    }
}
