use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use frame_util::{init_logging, save_frame, save_gif, FireArgs};
use tracing::info;

#[derive(Parser, Debug)]
struct Args {
    #[command(flatten)]
    fire: FireArgs,

    /// also dump every frame as out/decay_NNNNNN.png
    #[arg(long)]
    png: bool,

    #[arg(long, default_value = "fire_decay_matrix.gif")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args = Args::parse();
    let params = args.fire.params();

    let start = Instant::now();
    let fire = params.generate()?;
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

    info!(
        elapsed_ms,
        shape = ?fire.dim(),
        num_streams = params.num_streams(),
        "generated decay-matrix fire"
    );

    if args.png {
        std::fs::create_dir_all("out")?;
        for (f, frame) in fire.outer_iter().enumerate() {
            save_frame("decay", f + 1, frame)?;
            eprint!("\r {} / {}", f + 1, params.total_frames);
        }
        eprintln!();
    }

    save_gif(&args.out, &fire, args.fire.fps)?;
    info!(path = %args.out.display(), "saved");

    Ok(())
}
