//! Shared configuration loader for the exdata toolchain.
//!
//! `defaults/exdata.default.toml` is embedded into the binary so the documented defaults and
//! runtime behavior stay in sync. Callers layer user files on top via [`Loader`] before
//! deserializing into [`ExdataConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/exdata.default.toml");

/// Top-level configuration consumed by exdata applications.
#[derive(Debug, Clone, Deserialize)]
pub struct ExdataConfig {
    pub output: OutputConfig,
}

/// How parsed documents are rendered.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Output format name, as accepted by `--format`.
    pub format: String,
    /// Spaces per nesting level for indented JSON.
    pub indent: usize,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override, e.g. `output.indent` from a CLI flag.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<ExdataConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
