//! Demo configuration, read from TOML.
//!
//! Every section is optional; anything left out falls back to the values the
//! drivers use when run without a file.
//!
//! ```toml
//! [path]
//! steps = ["up", "up", "left", "up", "right", "end", "left"]
//!
//! [saver]
//! layers = ["cookie", "file"]
//! data = { key = "value" }
//!
//! [hasher]
//! input = "123"
//! algorithms = ["md5", "sha256", "whirlpool"]
//!
//! [output]
//! color = true
//! ```

use crate::error::{Error, Result};
use crate::hasher::Algorithm;
use crate::path_builder::Step;
use crate::saver::{SaveRequest, SaverLayer};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub path: PathConfig,
    pub saver: SaverConfig,
    pub hasher: HasherConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathConfig {
    pub steps: Vec<Step>,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            steps: vec![
                Step::Up,
                Step::Up,
                Step::Left,
                Step::Up,
                Step::Right,
                Step::End,
                Step::Left,
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SaverConfig {
    pub layers: Vec<SaverLayer>,
    pub data: SaveRequest,
}

impl Default for SaverConfig {
    fn default() -> Self {
        Self {
            layers: vec![SaverLayer::Cookie, SaverLayer::File],
            data: [("key", "value")].into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HasherConfig {
    pub input: String,
    pub algorithms: Vec<Algorithm>,
}

impl Default for HasherConfig {
    fn default() -> Self {
        Self {
            input: "123".to_string(),
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded demo config");
        Ok(config)
    }
}
