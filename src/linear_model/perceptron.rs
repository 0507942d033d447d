use super::LinearModel;
use crate::config::{validate_learning_rate, TrainingConfig};
use crate::dataset::Dataset;
use crate::error::{LearnError, Result};
use crate::init::InitStrategy;
use crate::metrics::accuracy_score;
use crate::{Matrix, Vector};
use log::{debug, trace};
use ndarray::AsArray;
use rand::Rng;

/// Binary perceptron over labels `+1` / `-1`.
///
/// A sample is corrected only when it is misclassified, with
/// `w += lr * label * x` and `bias += lr * label`. Corrections apply
/// immediately, so later samples of the same epoch see them.
#[derive(Clone, Debug)]
pub struct LinearClassifier {
    model: LinearModel,
    learning_rate: f64,
}

impl LinearClassifier {
    pub fn new(model: LinearModel, learning_rate: f64) -> Result<Self> {
        validate_learning_rate(learning_rate)?;
        Ok(Self { model, learning_rate })
    }

    /// Builds a classifier for `n_features` inputs, seeded per `config`.
    pub fn from_config(n_features: usize, config: &TrainingConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = config.rng();
        let model = LinearModel::initialize(n_features, &config.init, &mut rng)?;
        Self::new(model, config.learning_rate)
    }

    /// `+1` when the raw response is `>= 0`, `-1` otherwise. A response of
    /// exactly zero is `+1`.
    pub fn classify<'a, V>(&self, input: V) -> Result<f64>
    where
        V: AsArray<'a, f64>,
    {
        self.model.predict_raw(input).map(step)
    }

    pub fn classify_batch(&self, x: &Matrix) -> Result<Vector> {
        Ok(self.model.predict_batch(x)?.mapv(step))
    }

    /// One ordered pass over `data`. Returns whether any sample was corrected.
    pub fn train_epoch(&mut self, data: &Dataset) -> Result<bool> {
        self.model.check_features(data.n_features())?;
        validate_labels(data.targets())?;

        let mut corrections = 0;
        for (i, (input, label)) in data.iter().enumerate() {
            if step(self.model.response(input)) != label {
                self.model.nudge(input, self.learning_rate * label);
                corrections += 1;
                trace!("perceptron corrected sample {}: {}", i, self.model.snapshot());
            }
        }

        debug!(
            "perceptron epoch finished: corrections={} samples={}",
            corrections,
            data.n_samples()
        );
        Ok(corrections > 0)
    }

    /// Runs `epochs` passes with no early stop. Returns how many of them
    /// corrected at least one sample.
    pub fn train(&mut self, data: &Dataset, epochs: usize) -> Result<usize> {
        let mut correcting_epochs = 0;
        for _ in 0..epochs {
            if self.train_epoch(data)? {
                correcting_epochs += 1;
            }
        }
        Ok(correcting_epochs)
    }

    /// Accuracy over `data`.
    pub fn score(&self, data: &Dataset) -> Result<f64> {
        let predictions = self.classify_batch(data.features())?;
        accuracy_score(data.targets(), &predictions)
    }

    /// Fresh weights from `strategy`. Samples live outside the classifier
    /// and are not touched.
    pub fn reset<R: Rng + ?Sized>(&mut self, strategy: &InitStrategy, rng: &mut R) -> Result<()> {
        self.model = LinearModel::initialize(self.model.n_features(), strategy, rng)?;
        debug!("perceptron reset: {}", self.model.snapshot());
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

fn step(raw: f64) -> f64 {
    if raw >= 0.0 { 1.0 } else { -1.0 }
}

fn validate_labels(y: &Vector) -> Result<()> {
    for &label in y.iter() {
        if label != 1.0 && label != -1.0 {
            return Err(LearnError::InvalidLabel(label));
        }
    }
    Ok(())
}
