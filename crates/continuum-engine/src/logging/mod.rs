//! Process-wide `env_logger` installation for frame players and test runs.
//!
//! Engine modules log through the `log` macros only: raster style warnings,
//! ingest skips, surface creation at debug.

mod init;

pub use init::{LoggingConfig, init_logging};
