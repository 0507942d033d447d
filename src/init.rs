use crate::error::{LearnError, Result};
use crate::Vector;
use ndarray::s;
use ndarray_rand::rand_distr::{Normal, Uniform as UniformDist};
use ndarray_rand::RandomExt;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How the weights and the bias of a fresh model are populated.
///
/// Random strategies draw from a caller-supplied generator, so a seeded
/// `StdRng` gives the same model every time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum InitStrategy {
    /// All weights and the bias start at zero.
    Zero,
    /// Each value drawn independently from `[low, high]`.
    Uniform { low: f64, high: f64 },
    /// Each value drawn independently from `N(mean, std²)`.
    Gaussian { mean: f64, std: f64 },
}

impl InitStrategy {
    pub fn validate(&self) -> Result<()> {
        match *self {
            InitStrategy::Zero => Ok(()),
            InitStrategy::Uniform { low, high } => {
                if !low.is_finite() || !high.is_finite() {
                    return Err(LearnError::invalid(format!(
                        "uniform bounds must be finite, got [{}, {}]",
                        low, high
                    )));
                }
                if low > high {
                    return Err(LearnError::invalid(format!(
                        "uniform low ({}) must be <= high ({})",
                        low, high
                    )));
                }
                // rand scales the width by 1 / (1 - EPSILON) and panics if that overflows
                if !((high - low) / (1.0 - f64::EPSILON)).is_finite() {
                    return Err(LearnError::invalid(format!(
                        "uniform range [{}, {}] is too wide",
                        low, high
                    )));
                }
                Ok(())
            }
            InitStrategy::Gaussian { mean, std } => {
                if !mean.is_finite() || !std.is_finite() || std < 0.0 {
                    return Err(LearnError::invalid(format!(
                        "gaussian needs a finite mean and a finite std >= 0, got N({}, {})",
                        mean, std
                    )));
                }
                Ok(())
            }
        }
    }

    /// Draws `n_features` weights followed by the bias.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        n_features: usize,
        rng: &mut R,
    ) -> Result<(Vector, f64)> {
        self.validate()?;

        let params = match *self {
            InitStrategy::Zero => Vector::zeros(n_features + 1),
            InitStrategy::Uniform { low, high } => {
                Vector::random_using(n_features + 1, UniformDist::new_inclusive(low, high), rng)
            }
            InitStrategy::Gaussian { mean, std } => {
                let normal =
                    Normal::new(mean, std).map_err(|e| LearnError::invalid(e.to_string()))?;
                Vector::random_using(n_features + 1, normal, rng)
            }
        };

        let weights = params.slice(s![..n_features]).to_owned();
        Ok((weights, params[n_features]))
    }
}

impl Default for InitStrategy {
    fn default() -> Self {
        InitStrategy::Uniform { low: -1.0, high: 1.0 }
    }
}
