//! Configuration for ANSI Lens
//!
//! Precedence: CLI > environment variables > config file > defaults.
//! The config file is TOML, found at `--config <FILE>` or
//! `<config dir>/ansi-lens/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::style::{Palette, Rgb, DEFAULT_ANSI, DEFAULT_INVERSE_FOREGROUND};

/// Environment variable selecting the output format
pub const FORMAT_ENV: &str = "ANSI_LENS_FORMAT";

/// CLI arguments for the `ansi-lens` runner
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "ansi-lens")]
#[command(version)]
#[command(about = "Decode and explain ANSI escape sequences in text", long_about = None)]
pub struct CliArgs {
    /// File to read (stdin if omitted)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Decode this string instead of reading a file
    #[arg(short, long, value_name = "TEXT", conflicts_with = "file")]
    pub input: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// How the runner prints its result
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// One line per token with its breakdown
    #[default]
    Text,
    /// Token list as JSON
    Json,
    /// Styled HTML preview
    Html,
}

impl OutputFormat {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "html" => Some(Self::Html),
            _ => None,
        }
    }
}

/// Palette colors as `#RRGGBB` strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// ANSI colors 0-15
    pub ansi: Vec<String>,
    /// Text color for inverse video without a background
    pub inverse_foreground: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            ansi: DEFAULT_ANSI.iter().map(Rgb::to_string).collect(),
            inverse_foreground: DEFAULT_INVERSE_FOREGROUND.to_string(),
        }
    }
}

/// Runner configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub format: OutputFormat,
    pub palette: PaletteConfig,
}

impl Config {
    /// Load configuration with full precedence:
    /// CLI args > environment variables > config file > defaults
    pub fn load_with_args(args: &CliArgs) -> Result<Self> {
        let mut config = match &args.config {
            // An explicitly requested file must load.
            Some(path) => Self::load_from_file(path)?,
            None => Self::default_config_path()
                .filter(|path| path.exists())
                .and_then(|path| match Self::load_from_file(&path) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                        None
                    }
                })
                .unwrap_or_default(),
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.apply_cli_args(args);
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Apply environment overrides; `lookup` reads a variable
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup(FORMAT_ENV) {
            match OutputFormat::from_name(&val) {
                Some(format) => self.format = format,
                None => tracing::warn!("Ignoring unknown {}={}", FORMAT_ENV, val),
            }
        }
    }

    fn apply_cli_args(&mut self, args: &CliArgs) {
        if let Some(format) = args.format {
            self.format = format;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.palette().map(|_| ())
    }

    /// The configured palette
    pub fn palette(&self) -> Result<Palette> {
        let colors = &self.palette.ansi;
        if colors.len() != 16 {
            return Err(Error::InvalidConfig {
                field: "palette.ansi".to_string(),
                message: format!("Expected 16 colors, found {}", colors.len()),
            });
        }

        let mut ansi = DEFAULT_ANSI;
        for (i, (slot, text)) in ansi.iter_mut().zip(colors).enumerate() {
            *slot = parse_color(text, &format!("palette.ansi[{i}]"))?;
        }
        let inverse_foreground =
            parse_color(&self.palette.inverse_foreground, "palette.inverse_foreground")?;

        Ok(Palette {
            ansi,
            inverse_foreground,
        })
    }

    /// Get the default configuration file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ansi-lens").join("config.toml"))
    }
}

fn parse_color(text: &str, field: &str) -> Result<Rgb> {
    Rgb::from_hex(text).ok_or_else(|| Error::InvalidConfig {
        field: field.to_string(),
        message: format!("Invalid hex color '{text}'. Expected format: #RRGGBB"),
    })
}
