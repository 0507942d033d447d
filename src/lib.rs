//! Perceptron and ADALINE learning rules over a shared linear model.

pub use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

pub mod config;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod history;
pub mod init;
pub mod linear_model;
pub mod metrics;

pub use config::TrainingConfig;
pub use dataset::Dataset;
pub use error::{LearnError, Result};
pub use geometry::{boundary_points, Bounds, Point};
pub use history::{Snapshot, TrainingRun};
pub use init::InitStrategy;
pub use linear_model::{AdaptiveLinearUnit, LinearClassifier, LinearModel};
pub use metrics::mean_squared_error;

pub type Vector = Array1<f64>;
pub type Matrix = Array2<f64>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_reexports() {
        let mut data = Dataset::empty(2);
        data.push(&[1.0, 1.0], 1.0).unwrap();
        data.push(&[-1.0, -1.0], -1.0).unwrap();

        let model = LinearModel::from_slice(&[1.0, 1.0], 0.0);
        let predictions: Vector = model.predict_batch(data.features()).unwrap();
        let mse = mean_squared_error(data.targets(), &predictions.mapv(f64::signum)).unwrap();
        assert!(mse.abs() < 1e-10);

        let (p1, p2) = boundary_points(1.0, 1.0, 0.0, &Bounds::default()).unwrap();
        assert_eq!(p1, Point::new(-10.0, 10.0));
        assert_eq!(p2, Point::new(10.0, -10.0));
    }
}
