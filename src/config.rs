// ⚙️ Driver Configuration
//
// Where to read the ledger from, how to interpret it, and how to print it.
// The CLI fills this from flags and environment; tests build it directly.

use crate::aggregator::DEFAULT_TOP_MANAGERS;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

/// Default input file, next to the working directory
pub const DEFAULT_INPUT: &str = "bank.xml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum InputFormat {
    /// Pick from the file extension (.json → Json, anything else → Xml)
    Auto,
    Xml,
    /// A serialized Node tree
    Json,
}

impl InputFormat {
    /// Resolve Auto against a concrete path
    pub fn resolve(self, path: &Path) -> InputFormat {
        match self {
            InputFormat::Auto => {
                let is_json = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .map(|ext| ext.eq_ignore_ascii_case("json"))
                    .unwrap_or(false);

                if is_json {
                    InputFormat::Json
                } else {
                    InputFormat::Xml
                }
            }
            other => other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub input_format: InputFormat,
    pub output_format: OutputFormat,

    /// How many managers the ranking prints
    pub top_managers: usize,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Config {
            input: input.into(),
            ..Config::default()
        }
    }

    /// Reject settings the queries cannot honour
    pub fn validate(&self) -> Result<()> {
        if self.top_managers == 0 {
            bail!("top_managers must be at least 1");
        }

        if self.input.as_os_str().is_empty() {
            bail!("input path is empty");
        }

        Ok(())
    }

    /// Input format with Auto resolved against the input path
    pub fn effective_input_format(&self) -> InputFormat {
        self.input_format.resolve(&self.input)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input: PathBuf::from(DEFAULT_INPUT),
            input_format: InputFormat::Auto,
            output_format: OutputFormat::Text,
            top_managers: DEFAULT_TOP_MANAGERS,
        }
    }
}
