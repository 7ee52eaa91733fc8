//! Conversion run: load, parse, render, write.
//!
//! The input is read in full before parsing begins, and the destination is
//! only touched once the whole document has been rendered.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{ConvertError, ConvertResult};
use crate::output::write_atomic;
use crate::render::{render, RenderConfig};
use crate::table::build_table;

/// Generated file location, relative to the working directory.
pub const DEFAULT_DESTINATION: &str = "src/ui/world_map/world.rs";

/// Converter settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    /// File the generated declaration is written to.
    pub destination: PathBuf,

    /// Declaration parameters.
    pub render: RenderConfig,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            destination: PathBuf::from(DEFAULT_DESTINATION),
            render: RenderConfig::default(),
        }
    }
}

impl ConverterConfig {
    /// Set the output file.
    pub fn with_destination(mut self, destination: impl Into<PathBuf>) -> Self {
        self.destination = destination.into();
        self
    }

    /// Set the declaration parameters.
    pub fn with_render(mut self, render: RenderConfig) -> Self {
        self.render = render;
        self
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Input file that was read.
    pub input: PathBuf,

    /// File that was written.
    pub destination: PathBuf,

    /// Lines inspected.
    pub lines_seen: usize,

    /// Records written (the declared array length).
    pub records: usize,

    /// Lines that produced no record.
    pub skipped: usize,

    /// 1-based numbers of lines with a single token.
    pub malformed: Vec<usize>,
}

/// Converts coordinate text files into a static array declaration.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConverterConfig,
}

impl Converter {
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert `input` and overwrite the configured destination.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::ReadInput`] if the input cannot be read; nothing is written.
    /// - [`ConvertError::WriteOutput`] if the destination cannot be replaced;
    ///   any previous destination file is left as it was.
    pub fn run(&self, input: &Path) -> ConvertResult<ConversionReport> {
        debug!(input = %input.display(), "Reading coordinate file");
        let text = fs::read_to_string(input).map_err(|source| ConvertError::ReadInput {
            path: input.to_path_buf(),
            source,
        })?;

        let table = build_table(&text);
        for line in table.malformed_lines() {
            warn!(line = *line, "Skipping line with fewer than two tokens");
        }
        debug!(
            lines = table.lines_seen(),
            records = table.len(),
            "Built record table"
        );

        let document = render(&table, &self.config.render);

        let destination = &self.config.destination;
        write_atomic(destination, document.as_bytes()).map_err(|source| {
            ConvertError::WriteOutput {
                path: destination.clone(),
                source,
            }
        })?;

        info!(
            input = %input.display(),
            destination = %destination.display(),
            records = document.entries(),
            skipped = table.skipped(),
            "Wrote coordinate table"
        );

        Ok(ConversionReport {
            input: input.to_path_buf(),
            destination: destination.clone(),
            lines_seen: table.lines_seen(),
            records: document.entries(),
            skipped: table.skipped(),
            malformed: table.malformed_lines().to_vec(),
        })
    }
}
