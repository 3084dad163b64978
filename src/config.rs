//! User configuration
//!
//! Read from TOML. Every key is optional; a missing file means defaults.
//!
//! ```toml
//! cutoff = 100
//! infinite = 99999
//! abbrev = 7
//! unicode_graph = true
//!
//! [margin]
//! width = 28
//! unit_width = 7
//! visible = true
//!
//! [glyphs]
//! "*" = "●"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::wash::pagination::{DEFAULT_CUTOFF, INFINITE_CUTOFF};
use crate::wash::{DurationSpec, DurationUnit, GlyphTable, MarginSpec, Pagination, WashError};

/// Directory name under the platform config dir
const CONFIG_DIR: &str = "logwash";
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error(transparent)]
    Wash(#[from] WashError),
}

/// Margin section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MarginConfig {
    pub width: usize,
    pub unit_width: usize,
    pub visible: bool,
    /// Replaces the default year-to-second table
    pub units: Option<Vec<DurationUnit>>,
}

impl Default for MarginConfig {
    fn default() -> Self {
        let spec = MarginSpec::default();
        Self {
            width: spec.width(),
            unit_width: spec.unit_width(),
            visible: true,
            units: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cutoff: usize,
    pub infinite: usize,
    pub abbrev: usize,
    pub unicode_graph: bool,
    pub margin: MarginConfig,
    /// Extra or replacement graph glyphs, one character each side
    pub glyphs: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cutoff: DEFAULT_CUTOFF,
            infinite: INFINITE_CUTOFF,
            abbrev: 7,
            unicode_graph: true,
            margin: MarginConfig::default(),
            glyphs: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or from the default location if it exists
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_path().filter(|p| p.exists()) {
                Some(path) => path,
                None => {
                    log::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        log::info!("loaded config from {}", path.display());
        Self::from_toml(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.cutoff == 0 {
            return Err(ConfigError::Invalid("cutoff must be at least 1".to_string()));
        }
        if self.infinite < self.cutoff {
            return Err(ConfigError::Invalid(format!(
                "infinite ({}) is below cutoff ({})",
                self.infinite, self.cutoff
            )));
        }
        if self.abbrev < 4 {
            return Err(ConfigError::Invalid("abbrev must be at least 4".to_string()));
        }
        self.margin_spec()?;
        self.glyph_table()?;
        Ok(())
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.cutoff, self.infinite)
    }

    /// Margin geometry with the configured unit table
    pub fn margin_spec(&self) -> Result<MarginSpec, ConfigError> {
        let durations = match self.margin.units {
            Some(ref units) => DurationSpec::new(units.clone())?,
            None => DurationSpec::default(),
        };
        Ok(MarginSpec::new(
            self.margin.width,
            self.margin.unit_width,
            durations,
        )?)
    }

    /// Graph substitutions, or `None` to keep ASCII
    pub fn glyph_table(&self) -> Result<Option<GlyphTable>, ConfigError> {
        if !self.unicode_graph {
            return Ok(None);
        }
        let mut table = GlyphTable::unicode();
        for (from, to) in &self.glyphs {
            table.insert(single_char(from)?, single_char(to)?);
        }
        Ok(Some(table))
    }
}

fn single_char(s: &str) -> Result<char, ConfigError> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::Invalid(format!(
            "glyph {:?} must be a single character",
            s
        ))),
    }
}

/// `<config dir>/logwash/config.toml`
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
