use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hanoi_drag::{HanoiConfig, PpmFilePresenter, ReplayController, TracingMoveObserver, parse_moves};

/// Replays a Tower of Hanoi move list without opening a window.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Number of disks on the starting rod.
    #[arg(short, long, default_value_t = 3)]
    disks: u32,

    /// Moves such as "AC AB CB", one pair of rods per move.
    #[arg(short, long, default_value = "")]
    moves: String,

    /// Write the final board as a PPM image.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML file overriding board geometry and colours.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = HanoiConfig::load_or_default(args.config.as_deref())?;
    let moves = parse_moves(&args.moves)?;

    let mut controller = ReplayController::new(PpmFilePresenter::new(), config, args.disks)?
        .with_observer(Arc::new(TracingMoveObserver));

    controller.apply(&moves);
    println!("{}", controller.summary());

    if let Some(path) = args.output {
        controller.write(&path)?;
    }

    Ok(())
}
