use crate::error::{LearnError, Result};
use crate::geometry::{boundary_points, Bounds, Point};
use crate::history::Snapshot;
use crate::init::InitStrategy;
use crate::{Matrix, Vector};
use ndarray::{ArrayView1, AsArray};
use rand::Rng;

/// Weights plus a bias, shared by both learning rules.
///
/// The number of weights is fixed when the model is built; every input must
/// have exactly that many features.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearModel {
    weights: Vector,
    bias: f64,
}

impl LinearModel {
    pub fn new(weights: Vector, bias: f64) -> Self {
        Self { weights, bias }
    }

    pub fn from_slice(weights: &[f64], bias: f64) -> Self {
        Self::new(Vector::from(weights.to_vec()), bias)
    }

    /// Builds a model of `n_features` weights drawn with `strategy` from `rng`.
    pub fn initialize<R: Rng + ?Sized>(
        n_features: usize,
        strategy: &InitStrategy,
        rng: &mut R,
    ) -> Result<Self> {
        let (weights, bias) = strategy.sample(n_features, rng)?;
        Ok(Self { weights, bias })
    }

    /// `dot(weights, input) + bias`.
    pub fn predict_raw<'a, V>(&self, input: V) -> Result<f64>
    where
        V: AsArray<'a, f64>,
    {
        let input: ArrayView1<'a, f64> = input.into();
        self.check_features(input.len())?;
        Ok(self.response(input))
    }

    /// Raw response for every row of `x`.
    pub fn predict_batch(&self, x: &Matrix) -> Result<Vector> {
        self.check_features(x.ncols())?;
        Ok(x.dot(&self.weights) + self.bias)
    }

    /// Endpoints of the decision line of a two-feature model inside `bounds`.
    pub fn boundary(&self, bounds: &Bounds) -> Result<(Point, Point)> {
        if self.n_features() != 2 {
            return Err(LearnError::DimensionMismatch {
                expected: 2,
                got: self.n_features(),
            });
        }
        boundary_points(self.weights[0], self.weights[1], self.bias, bounds)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }

    pub fn weights(&self) -> &Vector {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    #[cfg(test)]
    pub(crate) fn weights_mut(&mut self) -> &mut Vector {
        &mut self.weights
    }

    pub(crate) fn check_features(&self, got: usize) -> Result<()> {
        if got != self.n_features() {
            return Err(LearnError::DimensionMismatch {
                expected: self.n_features(),
                got,
            });
        }
        Ok(())
    }

    /// Unchecked response, callers validate the width first.
    pub(crate) fn response(&self, input: ArrayView1<'_, f64>) -> f64 {
        self.weights.dot(&input) + self.bias
    }

    /// `w += step * x`, `b += step`. Both rules reduce to this with a
    /// different `step`.
    pub(crate) fn nudge(&mut self, input: ArrayView1<'_, f64>, step: f64) {
        self.weights.scaled_add(step, &input);
        self.bias += step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_predict_raw() {
        let model = LinearModel::new(array![2.0, -1.0], 0.5);
        let y = model.predict_raw(&[3.0, 4.0]).unwrap();
        assert!((y - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_predict_raw_dimension_mismatch() {
        let model = LinearModel::from_slice(&[1.0, 1.0], -1.5);

        let err = model.predict_raw(&[1.0]).unwrap_err();
        assert_eq!(err, LearnError::DimensionMismatch { expected: 2, got: 1 });
        assert!(model.predict_raw(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn test_predict_batch() {
        let model = LinearModel::new(array![1.0, 1.0], -1.5);
        let x = array![[0.0, 0.0], [1.0, 1.0], [2.0, 0.5]];

        let predictions = model.predict_batch(&x).unwrap();
        let expected = array![-1.5, 0.5, 1.0];
        for (pred, exp) in predictions.iter().zip(expected.iter()) {
            assert!((pred - exp).abs() < 1e-10);
        }

        assert!(model.predict_batch(&array![[1.0, 2.0, 3.0]]).is_err());
    }

    #[test]
    fn test_initialize() {
        let mut rng = StdRng::seed_from_u64(11);
        let model = LinearModel::initialize(3, &InitStrategy::default(), &mut rng).unwrap();

        assert_eq!(model.n_features(), 3);
        assert!(model.weights().iter().all(|w| w.abs() <= 1.0));
        assert!(model.bias().abs() <= 1.0);

        let zero = LinearModel::initialize(2, &InitStrategy::Zero, &mut rng).unwrap();
        assert_eq!(zero, LinearModel::from_slice(&[0.0, 0.0], 0.0));
    }

    #[test]
    fn test_nudge() {
        let mut model = LinearModel::new(array![1.0, 1.0], 0.0);
        model.nudge(array![2.0, -4.0].view(), 0.5);
        assert_eq!(model.weights(), &array![2.0, -1.0]);
        assert_eq!(model.bias(), 0.5);
    }

    #[test]
    fn test_boundary_requires_two_features() {
        let model = LinearModel::from_slice(&[1.0, 1.0, 1.0], 0.0);
        assert!(matches!(
            model.boundary(&Bounds::default()),
            Err(LearnError::DimensionMismatch { expected: 2, got: 3 })
        ));

        let model = LinearModel::from_slice(&[1.0, 1.0], -1.5);
        let (p1, p2) = model.boundary(&Bounds::default()).unwrap();
        assert!((p1.y - 11.5).abs() < 1e-10);
        assert!((p2.y + 8.5).abs() < 1e-10);
    }
}
