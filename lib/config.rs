//! Provides definitions for loading and verifying distribution parameters
//! from common config file formats.
//!
//! The following formats are directly supported, selected by file extension
//! when reading from or writing to disk:
//! - [TOML][toml] (`.toml`)
//! - [JSON][serde_json] (`.json`)
//! - [YAML][serde_yaml] (`.yaml`, `.yml`)
//!
//! A config only carries the numerical parameters of a distribution (support
//! bounds and integration step); the density itself is always supplied in
//! code via [`DistConfig::build`].
//!
//! ```toml
//! min = 0.0
//! max = 1.0
//! step_size = 0.001 # optional, defaults to 0.01
//! ```

use std::{
    fmt,
    fs,
    path::Path,
};
use toml;
use serde_json as json;
use serde_yaml as yaml;
use serde::{ Deserialize, Serialize };
use thiserror::Error;
use tracing::debug;
use crate::math::probability::{
    Continuous,
    DEFAULT_STEP_SIZE,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config: invalid value for key '{0}': expected value to satisfy '{1}' but got {2}")]
    InvalidValue(String, String, String),

    #[error("config: couldn't read file '{0}'")]
    FileRead(String),

    #[error("config: couldn't parse file '{0}'")]
    FileParse(String),

    #[error("config: couldn't write to file '{0}': {1}")]
    FileWrite(String, String),

    #[error("config: unrecognized file format for '{0}'")]
    UnknownFormat(String),

    #[error("config: TOML parse error '{0}'")]
    TomlDeError(#[from] toml::de::Error),

    #[error("config: TOML error '{0}'")]
    TomlSerError(#[from] toml::ser::Error),

    #[error("config: JSON error '{0}'")]
    JsonError(#[from] json::Error),

    #[error("config: YAML error '{0}'")]
    YamlError(#[from] yaml::Error),
}
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Supported on-disk formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    /// Determine the format of a file from its extension.
    pub fn from_path<P>(path: P) -> ConfigResult<Self>
    where P: AsRef<Path>
    {
        let path: &Path = path.as_ref();
        return match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(ConfigError::UnknownFormat(path.display().to_string())),
        };
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return match self {
            Self::Toml => f.write_str("TOML"),
            Self::Json => f.write_str("JSON"),
            Self::Yaml => f.write_str("YAML"),
        };
    }
}

fn default_step_size() -> f64 { DEFAULT_STEP_SIZE }

/// Numerical parameters of a [`Continuous`] distribution.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DistConfig {
    /// Lower (inclusive) bound of the support
    pub min: f64,

    /// Upper bound of the support
    pub max: f64,

    /// Integration step (default 0.01)
    #[serde(default = "default_step_size")]
    pub step_size: f64,
}

impl<F> From<&Continuous<F>> for DistConfig
where F: Fn(f64) -> f64
{
    fn from(dist: &Continuous<F>) -> Self {
        return Self {
            min: dist.min(),
            max: dist.max(),
            step_size: dist.step_size(),
        };
    }
}

impl DistConfig {
    /// Create a new config with the default step size. The result is not
    /// verified.
    pub fn new(min: f64, max: f64) -> Self {
        return Self { min, max, step_size: DEFAULT_STEP_SIZE };
    }

    /// Return `self` if all values are admissible: finite bounds with
    /// `min < max` and a finite, positive step size.
    pub fn verify(self) -> ConfigResult<Self> {
        let invalid = |key: &str, expected: &str, got: f64| {
            ConfigError::InvalidValue(
                key.to_string(), expected.to_string(), got.to_string())
        };
        if !self.min.is_finite() {
            return Err(invalid("min", "finite", self.min));
        }
        if !self.max.is_finite() {
            return Err(invalid("max", "finite", self.max));
        }
        if !(self.min < self.max) {
            return Err(invalid("max", "max > min", self.max));
        }
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return Err(invalid("step_size", "finite, > 0", self.step_size));
        }
        return Ok(self);
    }

    /// Parse and verify from a string in the given format.
    pub fn from_str_as(s: &str, format: Format) -> ConfigResult<Self> {
        let config: Self = match format {
            Format::Toml => toml::from_str(s)?,
            Format::Json => json::from_str(s)?,
            Format::Yaml => yaml::from_str(s)?,
        };
        return config.verify();
    }

    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        return Self::from_str_as(s, Format::Toml);
    }

    pub fn from_json_str(s: &str) -> ConfigResult<Self> {
        return Self::from_str_as(s, Format::Json);
    }

    pub fn from_yaml_str(s: &str) -> ConfigResult<Self> {
        return Self::from_str_as(s, Format::Yaml);
    }

    /// Read, parse, and verify a file, with the format determined by its
    /// extension.
    pub fn from_file<P>(infile: P) -> ConfigResult<Self>
    where P: AsRef<Path>
    {
        let infile: &Path = infile.as_ref();
        let infile_str: String = infile.display().to_string();
        let format: Format = Format::from_path(infile)?;
        let contents: String
            = fs::read_to_string(infile)
            .map_err(|_| ConfigError::FileRead(infile_str.clone()))?;
        let config: Self = match format {
            Format::Toml => toml::from_str(&contents).ok(),
            Format::Json => json::from_str(&contents).ok(),
            Format::Yaml => yaml::from_str(&contents).ok(),
        }.ok_or(ConfigError::FileParse(infile_str))?;
        debug!(
            file = %infile.display(),
            %format,
            min = config.min,
            max = config.max,
            step = config.step_size,
            "loaded distribution config"
        );
        return config.verify();
    }

    pub fn as_toml_string(&self) -> ConfigResult<String> {
        return Ok(toml::to_string(self)?);
    }

    pub fn as_json_string(&self) -> ConfigResult<String> {
        return Ok(json::to_string(self)?);
    }

    pub fn as_json_string_pretty(&self) -> ConfigResult<String> {
        return Ok(json::to_string_pretty(self)?);
    }

    pub fn as_yaml_string(&self) -> ConfigResult<String> {
        return Ok(yaml::to_string(self)?);
    }

    /// Write to a file, with the format determined by its extension.
    /// Existing files are overwritten.
    pub fn write_file<P>(&self, outfile: P) -> ConfigResult<()>
    where P: AsRef<Path>
    {
        let outfile: &Path = outfile.as_ref();
        let contents: String = match Format::from_path(outfile)? {
            Format::Toml => self.as_toml_string()?,
            Format::Json => self.as_json_string_pretty()?,
            Format::Yaml => self.as_yaml_string()?,
        };
        return fs::write(outfile, contents)
            .map_err(|e| {
                ConfigError::FileWrite(
                    outfile.display().to_string(), e.to_string())
            });
    }

    /// Verify `self` and construct a distribution from it with the given
    /// density.
    pub fn build<F>(&self, density: F) -> ConfigResult<Continuous<F>>
    where F: Fn(f64) -> f64
    {
        let config: Self = self.verify()?;
        debug!(
            min = config.min,
            max = config.max,
            step = config.step_size,
            "building distribution from config"
        );
        return Ok(
            Continuous::with_step(
                config.min, config.max, config.step_size, density)
        );
    }
}
