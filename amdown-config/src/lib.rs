//! Shared configuration loader for the amdown toolchain.
//!
//! `defaults/amdown.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer project files and
//! overrides on top of those defaults via [`Loader`] before deserializing into
//! [`AmdownConfig`].

use amdown::FileContext;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/amdown.default.toml");

/// Project config file picked up from the working directory when present.
pub const PROJECT_FILE: &str = "amdown.toml";

/// Top-level configuration consumed by amdown applications.
#[derive(Debug, Clone, Deserialize)]
pub struct AmdownConfig {
    pub render: RenderConfig,
    pub inspect: InspectConfig,
    pub context: FileContext,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub default_format: String,
    pub standalone: bool,
    pub title: String,
    pub html: HtmlConfig,
    pub pdf: PdfConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub custom_css: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PdfConfig {
    pub size: PdfPageSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PdfPageSize {
    #[serde(rename = "a4")]
    A4,
    #[serde(rename = "mobile")]
    Mobile,
}

impl PdfPageSize {
    pub fn as_str(self) -> &'static str {
        match self {
            PdfPageSize::A4 => "a4",
            PdfPageSize::Mobile => "mobile",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InspectConfig {
    pub show_inlines: bool,
}

impl AmdownConfig {
    /// The configuration as format options, the same keys `--extra-<key>`
    /// sets. Empty settings are left out so formats apply their own defaults.
    pub fn format_options(&self) -> HashMap<String, String> {
        let mut options = HashMap::new();
        options.insert("standalone".to_string(), self.render.standalone.to_string());
        options.insert("size".to_string(), self.render.pdf.size.as_str().to_string());
        let optional = [
            ("title", self.render.title.clone()),
            ("custom-css", self.render.html.custom_css.clone()),
            (
                "working-dir",
                self.context.working_dir.to_string_lossy().into_owned(),
            ),
            ("url-path", self.context.url_path.clone()),
            ("media-path", self.context.media_path.clone()),
        ];
        for (key, value) in optional {
            if !value.is_empty() {
                options.insert(key.to_string(), value);
            }
        }
        options
    }
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

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<AmdownConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<AmdownConfig, ConfigError> {
    Loader::new().build()
}
