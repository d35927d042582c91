use crate::error::{CountryMatchError, Result};
use country_match_common::MatchConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_UNRESOLVED_SAMPLE: usize = 20;

/// User settings persisted at `~/.config/country-match/config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Reference JSON used instead of the built-in table
    pub reference_path: Option<PathBuf>,
    /// Batch worker threads; rayon's default when unset
    pub threads: Option<usize>,
    /// Unresolved locations printed after a batch
    pub unresolved_sample: usize,
    pub matching: MatchConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_path: None,
            threads: None,
            unresolved_sample: DEFAULT_UNRESOLVED_SAMPLE,
            matching: MatchConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Missing file means defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.matching.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "config saved");
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CountryMatchError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("country-match").join("config.json"))
    }

    /// Point at a reference file; the path must exist.
    pub fn set_reference_path(&mut self, path: PathBuf) -> Result<()> {
        if !path.exists() {
            return Err(CountryMatchError::FileNotFound(path.display().to_string()));
        }
        self.reference_path = Some(path);
        Ok(())
    }
}
