//! Generation log for mistake-driven training.
//!
//! The classifier never writes here itself. After an epoch that corrected at
//! least one sample the caller records the model's new parameters:
//!
//! ```rust
//! use linear_units::{Dataset, LinearClassifier, LinearModel, TrainingRun};
//!
//! let mut data = Dataset::empty(2);
//! data.push(&[1.0, 1.0], 1.0).unwrap();
//! data.push(&[-1.0, -1.0], -1.0).unwrap();
//!
//! let model = LinearModel::new(ndarray::array![-1.0, 0.0], 0.0);
//! let mut clf = LinearClassifier::new(model, 0.5).unwrap();
//! let mut run = TrainingRun::new();
//!
//! if clf.train_epoch(&data).unwrap() {
//!     run.record(clf.model());
//! }
//! assert_eq!(run.len(), 1);
//! ```

use crate::linear_model::LinearModel;
use crate::Vector;
use std::fmt;

/// The parameters of a model at one point in training.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub weights: Vector,
    pub bias: f64,
}

impl From<&LinearModel> for Snapshot {
    fn from(model: &LinearModel) -> Self {
        Self {
            weights: model.weights().clone(),
            bias: model.bias(),
        }
    }
}

/// `w1=0.12, w2=-0.40, b=0.05`
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (j, w) in self.weights.iter().enumerate() {
            write!(f, "w{}={:.2}, ", j + 1, w)?;
        }
        write!(f, "b={:.2}", self.bias)
    }
}

/// Append-only list of snapshots, one per correcting epoch.
#[derive(Clone, Debug, Default)]
pub struct TrainingRun {
    generations: Vec<Snapshot>,
}

impl TrainingRun {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, model: &LinearModel) {
        self.generations.push(Snapshot::from(model));
    }

    /// Generation `index`, counted from zero.
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.generations.get(index)
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.generations.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.generations.iter()
    }

    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    pub fn clear(&mut self) {
        self.generations.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_snapshot_display() {
        let snapshot = Snapshot {
            weights: array![0.123, -0.4],
            bias: 0.05,
        };
        assert_eq!(snapshot.to_string(), "w1=0.12, w2=-0.40, b=0.05");
    }

    #[test]
    fn test_record_copies_parameters() {
        let mut model = LinearModel::new(array![1.0, 2.0], 3.0);
        let mut run = TrainingRun::new();
        run.record(&model);

        model.weights_mut()[0] = 10.0;
        run.record(&model);

        assert_eq!(run.len(), 2);
        assert_eq!(run.get(0).unwrap().weights, array![1.0, 2.0]);
        assert_eq!(run.last().unwrap().weights, array![10.0, 2.0]);
    }

    #[test]
    fn test_clear() {
        let model = LinearModel::new(array![1.0], 0.0);
        let mut run = TrainingRun::new();
        run.record(&model);
        run.clear();
        assert!(run.is_empty());
        assert!(run.get(0).is_none());
    }
}
