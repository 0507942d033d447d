use crate::error::{LearnError, Result};
use crate::{Matrix, Vector};
use ndarray::{aview1, s, ArrayView1, AsArray, Axis};

/// An ordered, append-only list of training samples.
///
/// Row `i` of `features` and `targets[i]` form one sample. Training walks the
/// rows in insertion order, so the order samples were pushed in matters.
#[derive(Clone, Debug)]
pub struct Dataset {
    features: Matrix,
    targets: Vector,
}

impl Dataset {
    pub fn empty(n_features: usize) -> Self {
        Self {
            features: Matrix::zeros((0, n_features)),
            targets: Vector::zeros(0),
        }
    }

    pub fn new(features: Matrix, targets: Vector) -> Result<Self> {
        if features.nrows() != targets.len() {
            return Err(LearnError::LengthMismatch {
                left: features.nrows(),
                right: targets.len(),
            });
        }

        Ok(Self { features, targets })
    }

    /// Builds a filtering dataset from a signal: each sample holds the last
    /// `taps` values of `input` (oldest first) and targets `desired` at the
    /// newest of them.
    pub fn tapped_delay(input: &Vector, desired: &Vector, taps: usize) -> Result<Self> {
        if taps == 0 {
            return Err(LearnError::invalid("taps must be > 0"));
        }
        if input.len() != desired.len() {
            return Err(LearnError::LengthMismatch {
                left: input.len(),
                right: desired.len(),
            });
        }

        let mut dataset = Self::empty(taps);
        for i in (taps - 1)..input.len() {
            dataset.push(input.slice(s![i + 1 - taps..=i]), desired[i])?;
        }
        Ok(dataset)
    }

    /// Appends one sample; its width must match the dataset's.
    pub fn push<'a, V>(&mut self, input: V, target: f64) -> Result<()>
    where
        V: AsArray<'a, f64>,
    {
        let input: ArrayView1<'a, f64> = input.into();
        if input.len() != self.n_features() {
            return Err(LearnError::DimensionMismatch {
                expected: self.n_features(),
                got: input.len(),
            });
        }

        self.features
            .push_row(input)
            .map_err(|e| LearnError::invalid(e.to_string()))?;
        self.targets
            .append(Axis(0), aview1(&[target]))
            .map_err(|e| LearnError::invalid(e.to_string()))?;
        Ok(())
    }

    /// Drops every sample but keeps the feature width.
    pub fn clear(&mut self) {
        *self = Self::empty(self.n_features());
    }

    pub fn iter(&self) -> impl Iterator<Item = (ArrayView1<'_, f64>, f64)> + '_ {
        self.features
            .outer_iter()
            .zip(self.targets.iter().copied())
    }

    pub fn features(&self) -> &Matrix {
        &self.features
    }

    pub fn targets(&self) -> &Vector {
        &self.targets
    }

    pub fn n_samples(&self) -> usize {
        self.features.nrows()
    }

    pub fn n_features(&self) -> usize {
        self.features.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.n_samples() == 0
    }
}
