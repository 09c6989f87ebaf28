//! Command-line interface for compiling a quadrant into a level layout

use crate::algorithm::pipeline::{BuiltLevel, build_level};
use crate::io::configuration::{
    DEFAULT_LOG_FILTER, DEFAULT_TILE_PIXELS, LAYOUT_SUFFIX, LOG_FILTER_ENV, SAMPLE_STEM,
};
use crate::io::error::Result;
use crate::io::image::{export_preview, preview_dimensions};
use crate::io::quadrant::{load_quadrant, sample_quadrant};
use crate::spatial::grid::QuadrantGrid;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "quadmaze")]
#[command(
    author,
    version,
    about = "Compile a symmetric maze quadrant into an oriented tile layout"
)]
/// Command-line arguments for the level compiler
pub struct Cli {
    /// Quadrant file (text rows of tile codes, or JSON); the built-in sample if omitted
    #[arg(value_name = "QUADRANT")]
    pub quadrant: Option<PathBuf>,

    /// Where to write the JSON layout (defaults to <stem>_layout.json)
    #[arg(short, long, value_name = "PATH")]
    pub layout: Option<PathBuf>,

    /// Also render a PNG preview to this path
    #[arg(short, long, value_name = "PATH")]
    pub preview: Option<PathBuf>,

    /// Side length of one tile in the preview, in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_PIXELS)]
    pub tile_pixels: u32,

    /// Print the inferred quadrant orientation map
    #[arg(short, long)]
    pub show_orientation: bool,

    /// Log stage details
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Log filter used when the environment does not provide one
    pub const fn default_log_filter(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            DEFAULT_LOG_FILTER
        }
    }

    /// Install the global `tracing` subscriber, writing to stderr
    ///
    /// The filter comes from the environment variable named by
    /// [`LOG_FILTER_ENV`] when set. A subscriber installed earlier wins.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
            .unwrap_or_else(|_unset| EnvFilter::new(self.default_log_filter()));
        if let Err(error) = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
        {
            debug!(%error, "keeping existing tracing subscriber");
        }
    }

    /// Path the JSON layout is written to
    pub fn layout_path(&self) -> PathBuf {
        if let Some(path) = &self.layout {
            return path.clone();
        }

        match &self.quadrant {
            Some(input) => {
                let stem = input.file_stem().unwrap_or_default();
                let name = format!("{}{LAYOUT_SUFFIX}.json", stem.to_string_lossy());
                input
                    .parent()
                    .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
            }
            None => PathBuf::from(format!("{SAMPLE_STEM}{LAYOUT_SUFFIX}.json")),
        }
    }
}

/// Runs one level build according to CLI arguments
pub struct LevelProcessor {
    cli: Cli,
}

impl LevelProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load, build and export the level
    ///
    /// # Errors
    ///
    /// Returns an error if the quadrant cannot be loaded or decoded, if the
    /// requested preview is invalid, or if any output cannot be written.
    /// Preview parameters are checked before anything is written.
    pub fn process(&self) -> Result<BuiltLevel> {
        let start_time = Instant::now();

        let quadrant = self.load()?;
        let built = build_level(&quadrant)?;

        if self.cli.preview.is_some() {
            let (rows, cols) = built.layout().dimensions();
            preview_dimensions(rows, cols, self.cli.tile_pixels)?;
        }

        if self.cli.show_orientation {
            print_orientation(&built);
        }

        let layout_path = self.cli.layout_path();
        built.layout().write_json(&layout_path)?;
        info!(path = %layout_path.display(), "layout written");

        if let Some(preview_path) = &self.cli.preview {
            export_preview(built.layout(), self.cli.tile_pixels, preview_path)?;
            info!(path = %preview_path.display(), "preview written");
        }

        info!(elapsed = ?start_time.elapsed(), "done");
        Ok(built)
    }

    fn load(&self) -> Result<QuadrantGrid> {
        self.cli.quadrant.as_deref().map_or_else(sample_quadrant, |path: &Path| {
            info!(path = %path.display(), "loading quadrant");
            load_quadrant(path)
        })
    }
}

// The orientation map is the command's requested output, not a log line
#[allow(clippy::print_stdout)]
fn print_orientation(built: &BuiltLevel) {
    print!("{}", built.quadrant_orientation());
}
