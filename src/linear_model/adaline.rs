use super::LinearModel;
use crate::config::{validate_learning_rate, TrainingConfig};
use crate::dataset::Dataset;
use crate::error::Result;
use crate::init::InitStrategy;
use crate::metrics::mean_squared_error;
use crate::{Matrix, Vector};
use log::{debug, trace};
use ndarray::AsArray;
use rand::Rng;

/// ADALINE unit trained with the LMS (Widrow-Hoff) rule.
///
/// Output is the raw linear response. Every sample updates the model with
/// `w += lr * (target - y) * x`, whatever the size of the error. Weights are
/// never clamped, so a large learning rate can diverge.
#[derive(Clone, Debug)]
pub struct AdaptiveLinearUnit {
    model: LinearModel,
    learning_rate: f64,
}

impl AdaptiveLinearUnit {
    pub fn new(model: LinearModel, learning_rate: f64) -> Result<Self> {
        validate_learning_rate(learning_rate)?;
        Ok(Self { model, learning_rate })
    }

    pub fn from_config(n_features: usize, config: &TrainingConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = config.rng();
        let model = LinearModel::initialize(n_features, &config.init, &mut rng)?;
        Self::new(model, config.learning_rate)
    }

    pub fn predict<'a, V>(&self, input: V) -> Result<f64>
    where
        V: AsArray<'a, f64>,
    {
        self.model.predict_raw(input)
    }

    pub fn predict_batch(&self, x: &Matrix) -> Result<Vector> {
        self.model.predict_batch(x)
    }

    /// One ordered pass over `data`, updating after every sample.
    pub fn train_epoch(&mut self, data: &Dataset) -> Result<()> {
        self.model.check_features(data.n_features())?;

        let mut squared_error = 0.0;
        for (i, (input, target)) in data.iter().enumerate() {
            let error = target - self.model.response(input);
            self.model.nudge(input, self.learning_rate * error);
            squared_error += error * error;
            trace!("lms sample {}: error={:.6}", i, error);
        }

        if !data.is_empty() {
            debug!(
                "lms epoch finished: mean_sq_error={:.6} samples={}",
                squared_error / data.n_samples() as f64,
                data.n_samples()
            );
        }
        Ok(())
    }

    /// Exactly `epochs` passes in the given order, no shuffling, no early stop.
    pub fn train(&mut self, data: &Dataset, epochs: usize) -> Result<()> {
        for _ in 0..epochs {
            self.train_epoch(data)?;
        }
        Ok(())
    }

    /// Mean squared error of the current model on `data`.
    pub fn score(&self, data: &Dataset) -> Result<f64> {
        let predictions = self.predict_batch(data.features())?;
        mean_squared_error(data.targets(), &predictions)
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, strategy: &InitStrategy, rng: &mut R) -> Result<()> {
        self.model = LinearModel::initialize(self.model.n_features(), strategy, rng)?;
        debug!("lms reset: {}", self.model.snapshot());
        Ok(())
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn set_learning_rate(&mut self, learning_rate: f64) -> Result<()> {
        validate_learning_rate(learning_rate)?;
        self.learning_rate = learning_rate;
        Ok(())
    }
}
