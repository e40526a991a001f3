//! Configuration management for resume radar

use crate::error::{Result, ResumeRadarError};
use crate::taxonomy::{builtin, Taxonomy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
    pub taxonomy: TaxonomyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Field taxonomy used when --field is not given
    pub default_field: String,
    /// Framework filter applied when --framework is not given
    pub default_framework: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyConfig {
    /// Extra taxonomy TOML files merged with the built-in fields at startup
    pub custom_paths: Vec<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig {
                default_field: builtin::CYBER_SECURITY.to_string(),
                default_framework: None,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
            taxonomy: TaxonomyConfig {
                custom_paths: Vec::new(),
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path, writing defaults there on first run
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeRadarError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeRadarError::Configuration(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-radar")
            .join("config.toml")
    }

    /// All available taxonomies: built-ins followed by the custom files.
    /// Custom files are validated as they load, so misconfiguration fails
    /// here rather than at scoring time.
    pub fn taxonomies(&self) -> Result<Vec<Taxonomy>> {
        let mut taxonomies = builtin::all();
        for path in &self.taxonomy.custom_paths {
            taxonomies.push(Taxonomy::from_toml_file(path)?);
        }
        Ok(taxonomies)
    }

    /// Resolve a field name against built-ins and custom taxonomies
    pub fn resolve_taxonomy(&self, field: &str) -> Result<Taxonomy> {
        if let Some(taxonomy) = builtin::by_field(field) {
            return Ok(taxonomy);
        }
        for path in &self.taxonomy.custom_paths {
            let taxonomy = Taxonomy::from_toml_file(path)?;
            if taxonomy.field.eq_ignore_ascii_case(field) {
                return Ok(taxonomy);
            }
        }
        Err(ResumeRadarError::InvalidInput(format!(
            "Unknown field '{}'. Available: {}",
            field,
            self.taxonomies()?
                .iter()
                .map(|t| t.field.clone())
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }
}
