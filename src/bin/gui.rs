use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hanoi_drag::{HanoiConfig, PixelsPresenterFactory, RunGuiCommand};

/// Drag-and-drop Tower of Hanoi.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// TOML file overriding window, board and colour settings.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = HanoiConfig::load_or_default(args.config.as_deref())?;
    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), config);

    command.execute()?;

    Ok(())
}
