use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use decay_fire::stats::{row_histogram, total_variation};
use decay_fire::{
    generate_decay_matrix_cube, generate_stepwise_frame, initial_grid, run_stepwise,
};
use frame_util::{init_logging, save_gif, side_by_side, FireArgs};
use tracing::{debug, info};

/// Black columns between the two animations.
const GAP: usize = 10;

#[derive(Parser, Debug)]
struct Args {
    #[command(flatten)]
    fire: FireArgs,

    /// step-wise ticks simulated before timing starts
    #[arg(long, default_value_t = 50)]
    warmup: usize,

    #[arg(long, default_value = "comparison.gif")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let params = args.fire.params();
    params.validate()?;
    let mut rng = params.rng();

    let mut grid = initial_grid(params.height, params.width, params.base_heat)?;
    for _ in 0..args.warmup {
        grid = generate_stepwise_frame(&grid, &mut rng);
    }

    let start = Instant::now();
    let stepwise = run_stepwise(&grid, 0, params.total_frames, &mut rng)?;
    let stepwise_ms = start.elapsed().as_secs_f64() * 1000.0;
    info!(elapsed_ms = stepwise_ms, "step-wise");

    let start = Instant::now();
    let decay = generate_decay_matrix_cube(
        params.total_frames,
        params.height,
        params.width,
        params.wind_strength,
        params.base_heat,
        &mut rng,
    )?;
    let decay_ms = start.elapsed().as_secs_f64() * 1000.0;
    info!(elapsed_ms = decay_ms, "decay matrix");

    info!(speedup = stepwise_ms / decay_ms.max(1e-6));

    let mut worst = 0.0f64;
    for row in 0..params.height {
        let distance = total_variation(
            &row_histogram(&stepwise, row)?,
            &row_histogram(&decay, row)?,
        );
        debug!(row, distance, "row heat distribution");
        worst = worst.max(distance);
    }
    info!(worst_row_distance = worst, "heat distributions");

    let joined = side_by_side(&stepwise, &decay, GAP)?;
    save_gif(&args.out, &joined, args.fire.fps)?;
    info!(path = %args.out.display(), "saved, left: step-wise, right: decay matrix");

    Ok(())
}
