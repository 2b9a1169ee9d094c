use std::sync::Once;

use env_logger::{Builder, WriteStyle};
use log::LevelFilter;

const FILTER_ENV: &str = "RUST_LOG";

/// Which records reach stderr, and whether they are colored.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` directives such as `"continuum_engine::ingest=debug"`.
    /// Takes precedence over `RUST_LOG`.
    pub env_filter: Option<String>,
    pub write_style: WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { env_filter: None, write_style: WriteStyle::Auto }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { env_filter: Some(filter.into()), ..Self::default() }
    }

    fn directives(&self) -> Option<String> {
        self.env_filter.clone().or_else(|| std::env::var(FILTER_ENV).ok())
    }

    fn builder(&self) -> Builder {
        let mut builder = Builder::new();
        match self.directives() {
            Some(directives) => builder.parse_filters(&directives),
            None => builder.filter_level(LevelFilter::Info),
        };
        builder.write_style(self.write_style);
        builder
    }
}

static LOGGER: Once = Once::new();

/// Installs the logger for this process. Only the first call does anything,
/// and a logger registered elsewhere (a test harness, an embedding app) wins.
pub fn init_logging(config: LoggingConfig) {
    LOGGER.call_once(|| {
        if config.builder().try_init().is_ok() {
            log::debug!("env_logger installed");
        }
    });
}
