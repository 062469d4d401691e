use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// How [`Plotter`](crate::plot::Plotter) draws a function.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PlotConfig {
    /// The character bars are made of.
    pub bar_char: char,
    /// The length of the bar of the largest value.
    pub bar_width: f64,
    /// Rows per unit of position; rows between samples are interpolated.
    pub supersampling: f64,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            bar_char: '*',
            bar_width: 70.0,
            supersampling: 1.0,
        }
    }
}

impl PlotConfig {
    pub fn from_reader(reader: impl Read) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn with_supersampling(&self, supersampling: f64) -> Self {
        Self {
            supersampling,
            ..self.clone()
        }
    }
}
