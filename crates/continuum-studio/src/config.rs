use std::path::PathBuf;

use clap::Parser;

/// Renders continuous-space simulation frames to PNG snapshots.
///
/// Each INPUT is a `.json` file holding one frame, or a stream (any other
/// file, or `-`/nothing for stdin) holding one JSON frame per line.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about)]
pub struct StudioArgs {
    /// Surface width in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Element id, also the PNG file prefix
    #[arg(long = "id", value_name = "NAME", default_value = "monde-canvas")]
    pub element_id: String,

    /// Output directory
    #[arg(long = "out", value_name = "DIR", default_value = "frames")]
    pub output_dir: PathBuf,

    /// Log filter in env_logger syntax (overrides RUST_LOG)
    #[arg(long = "log", value_name = "FILTER")]
    pub log_filter: Option<String>,

    /// Frame sources; `-` or none reads stdin
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,
}
