use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use decay_fire::{initial_grid, run_stepwise};
use frame_util::{init_logging, save_gif, FireArgs};
use tracing::info;

#[derive(Parser, Debug)]
struct Args {
    #[command(flatten)]
    fire: FireArgs,

    /// ticks simulated before recording starts
    #[arg(long, default_value_t = 50)]
    warmup: usize,

    #[arg(long, default_value = "fire_stepwise.gif")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let params = args.fire.params();
    let mut rng = params.rng();

    let grid = initial_grid(params.height, params.width, params.base_heat)?;

    let start = Instant::now();
    let fire = run_stepwise(&grid, args.warmup, params.total_frames, &mut rng)?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    info!(elapsed_ms, warmup = args.warmup, shape = ?fire.dim(), "simulated step-wise fire");

    save_gif(&args.out, &fire, args.fire.fps)?;
    info!(path = %args.out.display(), "saved");

    Ok(())
}
