//! Configuration management for the salary letter tools

use crate::constants::*;
use crate::error::{Result, SalaryError};
use salary_types::{SchemaKind, IDENTIFIER_SPACE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides, e.g. `SALARY_LETTERS__RENDERING__WORKER_COUNT=4`
pub const ENV_PREFIX: &str = "SALARY_LETTERS";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryLettersConfig {
    pub generation: GenerationConfig,
    pub rendering: RenderingConfig,
    pub letter: LetterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    #[serde(alias = "rows")]
    pub row_count: usize,

    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,

    pub max_identifier_attempts: u32,
    pub schema: SchemaKind,
    pub output_file: PathBuf,
    pub progress_interval: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            row_count: DEFAULT_ROW_COUNT,
            seed: None,
            max_identifier_attempts: DEFAULT_MAX_IDENTIFIER_ATTEMPTS,
            schema: SchemaKind::default(),
            output_file: PathBuf::from(DEFAULT_SPREADSHEET_FILE),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderingConfig {
    #[serde(alias = "workers")]
    pub worker_count: usize,
    pub queue_capacity: usize,
    pub progress_interval: usize,

    /// Render at most this many rows; 0 renders all of them
    pub limit: usize,

    pub input_file: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            worker_count: DEFAULT_WORKER_COUNT,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            limit: 0,
            input_file: PathBuf::from(DEFAULT_SPREADSHEET_FILE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterConfig {
    /// Signature line and document author
    pub sender: String,
    pub creator: String,
}

impl Default for LetterConfig {
    fn default() -> Self {
        Self {
            sender: DEFAULT_SENDER.to_string(),
            creator: DEFAULT_CREATOR.to_string(),
        }
    }
}

impl SalaryLettersConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SalaryError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_json_str(&content)
    }

    /// Load configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| SalaryError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Layer defaults, an optional config file (any format the `config` crate
    /// recognises by extension) and `SALARY_LETTERS__*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            log::debug!("Reading configuration from {}", path.display());
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let generation = &self.generation;
        if generation.row_count == 0 {
            return Err(SalaryError::Config("generation.row_count must be at least 1".to_string()));
        }
        if generation.row_count as u64 > IDENTIFIER_SPACE {
            return Err(SalaryError::Config(format!(
                "generation.row_count {} exceeds the {} available identifiers",
                generation.row_count, IDENTIFIER_SPACE
            )));
        }
        if generation.max_identifier_attempts == 0 {
            return Err(SalaryError::Config(
                "generation.max_identifier_attempts must be at least 1".to_string(),
            ));
        }

        let rendering = &self.rendering;
        if rendering.worker_count == 0 {
            return Err(SalaryError::Config("rendering.worker_count must be at least 1".to_string()));
        }
        if rendering.queue_capacity == 0 {
            return Err(SalaryError::Config("rendering.queue_capacity must be at least 1".to_string()));
        }
        if generation.progress_interval == 0 || rendering.progress_interval == 0 {
            return Err(SalaryError::Config("progress_interval must be at least 1".to_string()));
        }

        if self.letter.sender.trim().is_empty() {
            return Err(SalaryError::Config("letter.sender is required".to_string()));
        }

        Ok(())
    }
}
