use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use continuum_engine::canvas::{RasterHost, SharedRaster};
use continuum_engine::ingest::parse_frame_with_report;
use continuum_engine::render::SimpleContinuousModule;

use crate::config::StudioArgs;

/// Totals for one player run.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct PlaybackSummary {
    pub frames: usize,
    /// Lines or files that were not a frame; written out blank.
    pub rejected: usize,
    pub skipped_objects: usize,
}

/// Renders frames through one module and writes a PNG per frame.
pub struct Player {
    host: RasterHost,
    module: SimpleContinuousModule<SharedRaster>,
    output_dir: PathBuf,
    summary: PlaybackSummary,
}

impl Player {
    pub fn new(config: &StudioArgs) -> Result<Self> {
        let mut host = RasterHost::new();
        let module = SimpleContinuousModule::new(&mut host, config.width, config.height, &config.element_id)
            .context("failed to acquire drawing surface")?;

        fs::create_dir_all(&config.output_dir)
            .with_context(|| format!("failed to create output directory {}", config.output_dir.display()))?;

        Ok(Self {
            host,
            module,
            output_dir: config.output_dir.clone(),
            summary: PlaybackSummary::default(),
        })
    }

    pub fn summary(&self) -> PlaybackSummary {
        self.summary
    }

    /// Plays every input in order. `-` reads stdin.
    pub fn play_all(&mut self, inputs: &[PathBuf]) -> Result<()> {
        if inputs.is_empty() {
            return self.play_stream(io::stdin().lock(), "<stdin>");
        }

        for input in inputs {
            if input.as_os_str() == "-" {
                self.play_stream(io::stdin().lock(), "<stdin>")?;
            } else if input.extension().is_some_and(|e| e == "json") {
                let text = fs::read_to_string(input)
                    .with_context(|| format!("failed to read {}", input.display()))?;
                self.play_document(&text, &input.display().to_string())?;
            } else {
                let file = fs::File::open(input)
                    .with_context(|| format!("failed to open {}", input.display()))?;
                self.play_stream(BufReader::new(file), &input.display().to_string())?;
            }
        }
        Ok(())
    }

    /// One frame per non-empty line.
    pub fn play_stream(&mut self, reader: impl BufRead, source: &str) -> Result<()> {
        for (n, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("failed to read line {} of {source}", n + 1))?;
            if line.trim().is_empty() {
                continue;
            }
            self.play_document(&line, &format!("{source}:{}", n + 1))?;
        }
        Ok(())
    }

    /// Renders one frame document. A document that is not a frame blanks the
    /// surface for that index instead of aborting playback.
    pub fn play_document(&mut self, text: &str, source: &str) -> Result<()> {
        match parse_frame_with_report(text) {
            Ok((frame, report)) => {
                let stats = self.module.render(&frame);
                self.summary.skipped_objects += report.skipped;
                log::debug!("{source}: drew {}, skipped {} unknown", stats.drawn, stats.skipped);
            }
            Err(e) => {
                log::error!("{source}: {e}");
                self.module.reset();
                self.summary.rejected += 1;
            }
        }
        self.write_snapshot()
    }

    fn write_snapshot(&mut self) -> Result<()> {
        let path = self.snapshot_path(self.summary.frames);
        self.host
            .surface(self.module.element_id())
            .context("module surface missing from host")?
            .borrow()
            .save_png(&path)
            .with_context(|| format!("failed to write {}", path.display()))?;

        log::info!("wrote {}", path.display());
        self.summary.frames += 1;
        Ok(())
    }

    fn snapshot_path(&self, index: usize) -> PathBuf {
        snapshot_path(&self.output_dir, self.module.element_id(), index)
    }
}

pub fn snapshot_path(dir: &Path, element_id: &str, index: usize) -> PathBuf {
    dir.join(format!("{element_id}-{index:05}.png"))
}
