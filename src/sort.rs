use std::path::PathBuf;

use tracing::level_filters::LevelFilter;

use super::error::Result;
use super::lines::{read_lines, sort_lines, write_lines};

/// Configuration of the sorter.
///
/// The values are usually obtained via `Config::default()` and then tweaked
/// field by field.
#[derive(Debug, Clone)]
pub struct Config {
    /// File to take the lines from.
    pub input: PathBuf,
    /// File to put the sorted lines into. Created or truncated.
    pub output: PathBuf,
    /// Maximum level of the log messages written to stderr.
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from("Games.txt"),
            output: PathBuf::from("Games_sorted.txt"),
            log_level: LevelFilter::INFO,
        }
    }
}

/// Sorts the lines of one file into another.
pub struct Sort {
    config: Config,
}

impl Sort {
    pub fn new(config: Config) -> Self {
        Sort { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reads the input, sorts its lines and writes them to the output.
    ///
    /// Returns the number of lines written. The output is not touched if the
    /// input can't be read or decoded.
    pub fn run(&self) -> Result<usize> {
        let mut lines = read_lines(&self.config.input)?;
        sort_lines(&mut lines);
        tracing::debug!("sorted {} lines", lines.len());
        write_lines(&self.config.output, &lines)?;
        tracing::info!(
            lines = lines.len(),
            "wrote {}",
            self.config.output.display()
        );
        Ok(lines.len())
    }
}
