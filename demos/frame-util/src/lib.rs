use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{ensure, Context};
use decay_fire::{palette, FireParams, Heat, HeatCube, DEFAULT_BASE_HEAT};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, DynamicImage, Frame, Rgb, RgbImage};
use ndarray::{s, Array3, ArrayView2};
use tracing_subscriber::EnvFilter;

/// Flags shared by every demo.
#[derive(clap::Args, Debug, Clone)]
pub struct FireArgs {
    /// frames to record
    #[arg(long, default_value_t = 90)]
    pub frames: usize,

    /// grid rows
    #[arg(long, default_value_t = 100)]
    pub height: usize,

    /// grid columns
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// columns of lean per row of height
    #[arg(long, default_value_t = 0.5)]
    pub wind: f64,

    /// heat of newborn particles / the source row
    #[arg(long, default_value_t = DEFAULT_BASE_HEAT)]
    pub base_heat: Heat,

    /// fixed rng seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// playback rate of the written gif
    #[arg(long, default_value_t = 30)]
    pub fps: u32,
}

impl FireArgs {
    pub fn params(&self) -> FireParams {
        FireParams {
            total_frames: self.frames,
            height: self.height,
            width: self.width,
            wind_strength: self.wind,
            base_heat: self.base_heat,
            seed: self.seed,
        }
    }
}

/// `RUST_LOG` filtering, `info` when unset.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

pub fn colorize(grid: ArrayView2<Heat>) -> anyhow::Result<RgbImage> {
    let (height, width) = grid.dim();

    let mut img = RgbImage::new(width as u32, height as u32);

    for ((y, x), &heat) in grid.indexed_iter() {
        img.put_pixel(x as u32, y as u32, Rgb(palette::rgb(heat)?));
    }

    Ok(img)
}

pub fn save_frame(prefix: &str, index: usize, grid: ArrayView2<Heat>) -> anyhow::Result<()> {
    colorize(grid)?.save(format!("out/{}_{:06}.png", prefix, index))?;

    Ok(())
}

/// Writes `cube` as an endlessly looping gif.
pub fn save_gif(path: impl AsRef<Path>, cube: &HeatCube, fps: u32) -> anyhow::Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;

    let mut encoder = GifEncoder::new(BufWriter::new(file));
    encoder.set_repeat(Repeat::Infinite)?;

    let delay = Delay::from_numer_denom_ms(1000, fps.max(1));
    for frame in cube.outer_iter() {
        let rgba = DynamicImage::ImageRgb8(colorize(frame)?).into_rgba8();
        encoder
            .encode_frame(Frame::from_parts(rgba, 0, 0, delay))
            .with_context(|| format!("encoding {}", path.display()))?;
    }

    Ok(())
}

/// Places `left` and `right` next to each other with a cold band of `gap` columns.
pub fn side_by_side(left: &HeatCube, right: &HeatCube, gap: usize) -> anyhow::Result<HeatCube> {
    let (frames, height, left_width) = left.dim();
    let (right_frames, right_height, right_width) = right.dim();
    ensure!(
        frames == right_frames && height == right_height,
        "cannot join {:?} and {:?}",
        left.dim(),
        right.dim()
    );

    let mut joined = Array3::zeros((frames, height, left_width + gap + right_width));
    joined.slice_mut(s![.., .., ..left_width]).assign(left);
    joined
        .slice_mut(s![.., .., left_width + gap..])
        .assign(right);

    Ok(joined)
}
