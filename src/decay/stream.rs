use ndarray::{s, Array, Array3, ArrayView1, ArrayView3, Axis};
use rand::Rng;
use tracing::trace;

use crate::error::{check_base_heat, check_dimension};
use crate::{palette, FireError, Heat, Result};

/// Heat histories of independent particle lines, indexed (stream, age, column).
///
/// Stream `s` holds a line born `s` ticks after the first stream. Age 0 is birth at
/// full heat and each later age has decayed by 0..=2 more than the previous one.
/// With a single age every value is exactly the base heat, whatever the rng.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamPool {
    heat: Array3<Heat>,
}

impl StreamPool {
    pub fn generate<R: Rng + ?Sized>(
        num_streams: usize,
        max_age: usize,
        width: usize,
        base_heat: Heat,
        rng: &mut R,
    ) -> Result<Self> {
        check_dimension("num_streams", num_streams)?;
        check_dimension("max_age", max_age)?;
        check_dimension("width", width)?;
        check_base_heat(base_heat)?;

        // Nothing is lost before the first step up.
        let mut decay: Array3<u32> =
            Array::from_shape_fn((num_streams, max_age, width), |(_, age, _)| {
                if age == 0 {
                    0
                } else {
                    rng.gen_range(0..3)
                }
            });
        decay.accumulate_axis_inplace(Axis(1), |&prev, curr| *curr += prev);

        let base = u32::from(base_heat);
        let heat = decay.mapv(|d| base.saturating_sub(d) as Heat);

        trace!(num_streams, max_age, width, "generated stream pool");
        Ok(Self { heat })
    }

    /// Wraps precomputed histories.
    pub fn from_array(heat: Array3<Heat>) -> Result<Self> {
        let (num_streams, max_age, width) = heat.dim();
        check_dimension("num_streams", num_streams)?;
        check_dimension("max_age", max_age)?;
        check_dimension("width", width)?;
        palette::check_range(&heat)?;
        Ok(Self { heat })
    }

    pub fn num_streams(&self) -> usize {
        self.heat.len_of(Axis(0))
    }

    pub fn max_age(&self) -> usize {
        self.heat.len_of(Axis(1))
    }

    pub fn width(&self) -> usize {
        self.heat.len_of(Axis(2))
    }

    pub fn view(&self) -> ArrayView3<'_, Heat> {
        self.heat.view()
    }

    /// Heat of every column of `stream` at `age`.
    pub fn lane(&self, stream: usize, age: usize) -> Result<ArrayView1<'_, Heat>> {
        if stream >= self.num_streams() || age >= self.max_age() {
            return Err(FireError::IndexOutOfRange {
                stream,
                age,
                streams: self.num_streams(),
                ages: self.max_age(),
            });
        }
        Ok(self.heat.slice(s![stream, age, ..]))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{DEFAULT_BASE_HEAT, MAX_HEAT};
    use ndarray::Zip;
    use rand::{rngs::StdRng, SeedableRng};

    fn pool(num_streams: usize, max_age: usize, width: usize, seed: u64) -> StreamPool {
        let mut rng = StdRng::seed_from_u64(seed);
        StreamPool::generate(num_streams, max_age, width, DEFAULT_BASE_HEAT, &mut rng).unwrap()
    }

    #[test]
    fn test_generate_shape() {
        let p = pool(7, 5, 3, 1);
        assert_eq!(p.view().dim(), (7, 5, 3));
        assert_eq!(p.num_streams(), 7);
        assert_eq!(p.max_age(), 5);
        assert_eq!(p.width(), 3);
    }

    #[test]
    fn test_birth_is_full_heat() {
        let p = pool(20, 30, 16, 2);
        assert!(p
            .view()
            .index_axis(Axis(1), 0)
            .iter()
            .all(|&h| h == DEFAULT_BASE_HEAT));
    }

    #[test]
    fn test_decay_per_step_is_at_most_two() {
        let p = pool(20, 30, 16, 3);
        let heat = p.view();
        let younger = heat.slice(s![.., ..-1, ..]);
        let older = heat.slice(s![.., 1.., ..]);

        Zip::from(&younger).and(&older).for_each(|&y, &o| {
            assert!(o <= y);
            assert!(y - o <= 2);
        });
    }

    #[test]
    fn test_heat_floors_at_zero() {
        let p = pool(10, 100, 10, 4);
        assert!(p.view().iter().all(|&h| h <= MAX_HEAT));
        // 99 draws averaging 1 each burn well past 36.
        assert!(p
            .view()
            .index_axis(Axis(1), 99)
            .iter()
            .all(|&h| h == 0));
    }

    #[test]
    fn test_generate_is_deterministic_per_seed() {
        assert_eq!(pool(12, 8, 8, 42), pool(12, 8, 8, 42));
        assert_ne!(pool(12, 8, 8, 42), pool(12, 8, 8, 43));
    }

    #[test]
    fn test_generate_rejects_bad_arguments() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            StreamPool::generate(0, 5, 5, 36, &mut rng),
            Err(FireError::InvalidDimension {
                name: "num_streams",
                value: 0
            })
        );
        assert_eq!(
            StreamPool::generate(5, 5, 0, 36, &mut rng),
            Err(FireError::InvalidDimension {
                name: "width",
                value: 0
            })
        );
        assert_eq!(
            StreamPool::generate(5, 5, 5, 37, &mut rng),
            Err(FireError::InvalidBaseHeat { heat: 37 })
        );
    }

    #[test]
    fn test_lane() {
        let heat = Array::from_shape_fn((3, 2, 4), |(s, a, _)| (s * 10 + a) as Heat);
        let p = StreamPool::from_array(heat).unwrap();

        assert_eq!(p.lane(2, 1).unwrap().to_vec(), vec![21; 4]);
        assert_eq!(
            p.lane(3, 0),
            Err(FireError::IndexOutOfRange {
                stream: 3,
                age: 0,
                streams: 3,
                ages: 2
            })
        );
        assert!(p.lane(0, 2).is_err());
    }

    #[test]
    fn test_from_array_checks_heat() {
        let heat = Array::from_elem((1, 1, 1), 40);
        assert_eq!(
            StreamPool::from_array(heat),
            Err(FireError::PaletteRangeViolation { heat: 40 })
        );
    }
}
