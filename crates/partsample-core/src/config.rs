use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dispatch::{self, Dispatch};
use crate::errors::{ErrorInfo, SamplingError};
use crate::rng::{derive_substream_seed, RngHandle};
use crate::sampleable::Sampleable;

/// YAML/JSON-configurable parameters of a batch draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Number of samples to draw.
    pub samples: usize,
    /// Master seed for every draw in the batch.
    #[serde(default)]
    pub seed: u64,
    /// Optional substream of the master seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substream: Option<u64>,
    /// How the batch is executed.
    #[serde(default)]
    pub execution: Execution,
}

/// Execution mode of a batch draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Execution {
    /// All draws come from one RNG, in index order.
    #[default]
    Sequential,
    /// Slot `i` draws from substream `i` of the effective seed, possibly on
    /// several threads. Output differs from [`Execution::Sequential`].
    Parallel,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            samples: 1,
            seed: 0,
            substream: None,
            execution: Execution::default(),
        }
    }
}

impl BatchConfig {
    /// Parses a configuration from YAML.
    pub fn from_yaml_str(text: &str) -> Result<Self, SamplingError> {
        let config: Self = serde_yaml::from_str(text).map_err(|err| {
            SamplingError::Config(ErrorInfo::new("config.yaml_parse", err.to_string()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a configuration from JSON.
    pub fn from_json_str(text: &str) -> Result<Self, SamplingError> {
        let config: Self = serde_json::from_str(text).map_err(|err| {
            SamplingError::Config(ErrorInfo::new("config.json_parse", err.to_string()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration can be executed by this build.
    pub fn validate(&self) -> Result<(), SamplingError> {
        if self.execution == Execution::Parallel && !cfg!(feature = "rayon") {
            return Err(SamplingError::Config(
                ErrorInfo::new(
                    "config.parallel_unavailable",
                    "parallel execution requested but the `rayon` feature is disabled",
                )
                .with_hint("enable the `rayon` feature or use `execution: sequential`"),
            ));
        }
        Ok(())
    }

    /// Seed actually used for the batch.
    pub fn effective_seed(&self) -> u64 {
        match self.substream {
            Some(index) => derive_substream_seed(self.seed, index),
            None => self.seed,
        }
    }
}

/// Draws the batch described by `config`.
pub fn sample_with_config<D>(config: &BatchConfig, d: &D) -> Result<Vec<D::Element>, SamplingError>
where
    D: Sampleable + Sync + ?Sized,
    D::Shape: Dispatch<D>,
    D::Element: Send,
{
    config.validate()?;
    let seed = config.effective_seed();
    debug!(
        samples = config.samples,
        seed,
        execution = ?config.execution,
        "drawing configured batch"
    );
    match config.execution {
        Execution::Sequential => {
            let mut rng = RngHandle::from_seed(seed);
            Ok(dispatch::sample_batch(&mut rng, d, config.samples))
        }
        #[cfg(feature = "rayon")]
        Execution::Parallel => Ok(crate::parallel::sample_batch_parallel(d, seed, config.samples)),
        #[cfg(not(feature = "rayon"))]
        Execution::Parallel => unreachable!("validate rejects parallel execution without rayon"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_defaults_to_sequential() {
        let config = BatchConfig::from_yaml_str("samples: 8\nseed: 3\n").unwrap();
        assert_eq!(config.samples, 8);
        assert_eq!(config.execution, Execution::Sequential);
        assert_eq!(config.effective_seed(), 3);
    }

    #[test]
    fn substream_changes_effective_seed() {
        let config = BatchConfig {
            substream: Some(2),
            seed: 3,
            ..BatchConfig::default()
        };
        assert_eq!(config.effective_seed(), derive_substream_seed(3, 2));
    }

    #[test]
    fn malformed_yaml_is_config_error() {
        let err = BatchConfig::from_yaml_str("samples: many").unwrap_err();
        assert!(matches!(err, SamplingError::Config(_)));
        assert_eq!(err.info().code, "config.yaml_parse");
    }

    #[test]
    fn json_round_trip() {
        let config = BatchConfig {
            samples: 4,
            seed: 9,
            substream: Some(1),
            execution: Execution::Sequential,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"sequential\""));
        assert_eq!(BatchConfig::from_json_str(&json).unwrap(), config);
    }

    #[cfg(not(feature = "rayon"))]
    #[test]
    fn parallel_requires_rayon() {
        let err = BatchConfig::from_yaml_str("samples: 2\nexecution: parallel\n").unwrap_err();
        assert_eq!(err.info().code, "config.parallel_unavailable");
    }
}
