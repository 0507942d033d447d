use crate::error::{LearnError, Result};
use crate::init::InitStrategy;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Knobs a caller can turn before training: learning rate, number of epochs
/// per `train` call, initialization strategy and an optional seed.
///
/// ```rust
/// use linear_units::{InitStrategy, TrainingConfig};
///
/// let config = TrainingConfig::default()
///     .learning_rate(0.1)
///     .epochs(5)
///     .init(InitStrategy::Zero)
///     .seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub learning_rate: f64,
    pub epochs: usize,
    pub init: InitStrategy,
    pub seed: Option<u64>,
}

impl TrainingConfig {
    /// Defaults for the LMS unit: 100 epochs, tiny gaussian weights.
    pub fn adaline() -> Self {
        Self {
            learning_rate: 0.01,
            epochs: 100,
            init: InitStrategy::Gaussian { mean: 0.0, std: 0.01 },
            seed: None,
        }
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn epochs(mut self, epochs: usize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn init(mut self, init: InitStrategy) -> Self {
        self.init = init;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_learning_rate(self.learning_rate)?;
        self.init.validate()
    }

    /// A generator seeded from `seed`, or from OS entropy when there is none.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            epochs: 1,
            init: InitStrategy::default(),
            seed: None,
        }
    }
}

pub(crate) fn validate_learning_rate(learning_rate: f64) -> Result<()> {
    if !learning_rate.is_finite() || learning_rate <= 0.0 {
        return Err(LearnError::invalid(format!(
            "learning_rate must be finite and > 0, got {}",
            learning_rate
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let config = TrainingConfig::default();
        assert_eq!(config.learning_rate, 0.01);
        assert_eq!(config.epochs, 1);
        assert_eq!(config.init, InitStrategy::Uniform { low: -1.0, high: 1.0 });

        let config = TrainingConfig::adaline();
        assert_eq!(config.epochs, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_learning_rate() {
        assert!(TrainingConfig::default().learning_rate(0.0).validate().is_err());
        assert!(TrainingConfig::default().learning_rate(-0.1).validate().is_err());
        assert!(TrainingConfig::default().learning_rate(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = TrainingConfig::default().seed(3);
        let a: f64 = config.rng().sample(rand::distributions::Standard);
        let b: f64 = config.rng().sample(rand::distributions::Standard);
        assert_eq!(a, b);
    }

    #[test]
    fn test_partial_json_config() {
        let config: TrainingConfig =
            serde_json::from_str(r#"{"learning_rate": 0.5, "init": {"kind": "zero"}}"#).unwrap();
        assert_eq!(config.learning_rate, 0.5);
        assert_eq!(config.epochs, 1);
        assert_eq!(config.init, InitStrategy::Zero);
        assert_eq!(config.seed, None);
    }
}
