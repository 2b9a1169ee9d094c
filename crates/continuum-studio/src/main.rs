mod config;
mod player;

use anyhow::Result;
use clap::Parser;
use continuum_engine::logging::{LoggingConfig, init_logging};

use config::StudioArgs;
use player::Player;

fn main() -> Result<()> {
    let args = StudioArgs::parse();

    init_logging(LoggingConfig {
        env_filter: args.log_filter.clone(),
        ..LoggingConfig::default()
    });

    log::info!(
        "rendering `{}` at {}x{} into {}",
        args.element_id,
        args.width,
        args.height,
        args.output_dir.display()
    );

    let mut player = Player::new(&args)?;
    player.play_all(&args.inputs)?;

    let summary = player.summary();
    log::info!(
        "done: {} frames written, {} rejected, {} malformed objects skipped",
        summary.frames,
        summary.rejected,
        summary.skipped_objects
    );
    Ok(())
}
