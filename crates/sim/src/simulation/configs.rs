//! Run configuration.
//!
//! Both configurations serialize to JSON so a run can be reproduced from a
//! file, and both are validated before use.

use crate::editor::IndelLimits;
use crate::errors::ConfigError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

fn save_json<T: Serialize>(value: &T, path: &Path) -> Result<(), ConfigError> {
    fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Parameters of one mutation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationConfig {
    /// Number of sites protected for substitution
    pub snp_count: usize,
    /// Number of indel intents generated
    pub indel_count: usize,
    /// Longest random insertion
    pub max_insertion_length: usize,
    /// Longest random deletion
    pub max_deletion_length: usize,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            snp_count: 300,
            indel_count: 20,
            max_insertion_length: 10,
            max_deletion_length: 10,
            seed: None,
        }
    }
}

impl MutationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_insertion_length == 0 {
            return Err(ConfigError::InvalidParameter(
                "max_insertion_length must be at least 1".into(),
            ));
        }
        if self.max_deletion_length == 0 {
            return Err(ConfigError::InvalidParameter(
                "max_deletion_length must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn limits(&self) -> IndelLimits {
        IndelLimits {
            max_insertion: self.max_insertion_length,
            max_deletion: self.max_deletion_length,
        }
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = load_json(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    /// Save the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        save_json(self, path.as_ref())
    }
}

/// Parameters of the paired-end read sampler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadSimConfig {
    /// Length of each mate
    pub read_length: usize,
    /// Target coverage, used when `num_reads` is unset
    pub coverage: f64,
    /// Distance from the start of R1 to the start of R2's template
    pub insert_size: usize,
    /// Quality character repeated over each read
    pub quality: char,
    /// Explicit number of pairs
    pub num_reads: Option<usize>,
    /// Optional RNG seed for reproducibility
    pub seed: Option<u64>,
}

impl Default for ReadSimConfig {
    fn default() -> Self {
        Self {
            read_length: 100,
            coverage: 30.0,
            insert_size: 300,
            quality: 'I',
            num_reads: None,
            seed: None,
        }
    }
}

impl ReadSimConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.read_length == 0 {
            return Err(ConfigError::InvalidParameter(
                "read_length must be at least 1".into(),
            ));
        }
        if !(self.coverage > 0.0 && self.coverage.is_finite()) {
            return Err(ConfigError::InvalidParameter(format!(
                "coverage must be positive, got {}",
                self.coverage
            )));
        }
        if !self.quality.is_ascii_graphic() {
            return Err(ConfigError::InvalidParameter(format!(
                "quality must be a printable ASCII character, got {:?}",
                self.quality
            )));
        }
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config: Self = load_json(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        save_json(self, path.as_ref())
    }

    /// Pairs to sample from a genome of `genome_len` bases.
    pub fn pair_count(&self, genome_len: usize) -> usize {
        self.num_reads.unwrap_or_else(|| {
            (genome_len as f64 * self.coverage / (self.read_length as f64 * 2.0)) as usize
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_mutation_defaults() {
        let config = MutationConfig::default();
        assert_eq!(config.snp_count, 300);
        assert_eq!(config.indel_count, 20);
        assert_eq!(config.limits(), IndelLimits::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_mutation_validation() {
        let config = MutationConfig {
            max_deletion_length: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_mutation_partial_json_uses_defaults() {
        let config: MutationConfig = serde_json::from_str(r#"{"snp_count": 5, "seed": 9}"#).unwrap();
        assert_eq!(config.snp_count, 5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.indel_count, 20);
    }

    #[test]
    fn test_mutation_save_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = MutationConfig {
            snp_count: 12,
            seed: Some(4),
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(MutationConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_rejects_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"max_insertion_length": 0}"#).unwrap();
        assert!(matches!(
            MutationConfig::load(&path),
            Err(ConfigError::InvalidParameter(_))
        ));
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(MutationConfig::load(&path), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_read_sim_validation() {
        assert!(ReadSimConfig::default().validate().is_ok());
        let bad = ReadSimConfig {
            coverage: 0.0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
        let bad = ReadSimConfig {
            read_length: 0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_read_sim_save_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reads.json");
        let config = ReadSimConfig {
            quality: 'F',
            num_reads: Some(10),
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(ReadSimConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_pair_count() {
        let config = ReadSimConfig::default();
        // 1000 * 30 / 200
        assert_eq!(config.pair_count(1000), 150);
        let config = ReadSimConfig {
            num_reads: Some(7),
            ..Default::default()
        };
        assert_eq!(config.pair_count(1000), 7);
    }

    #[test]
    fn test_pair_count_with_huge_read_length() {
        let config = ReadSimConfig {
            read_length: usize::MAX,
            ..Default::default()
        };
        assert_eq!(config.pair_count(1000), 0);
    }
}
