//! Online linear learners.
//!
//! This module provides:
//! - `LinearModel`: weights plus bias and the raw linear response
//! - `LinearClassifier`: perceptron, mistake-driven updates on `+1`/`-1` labels
//! - `AdaptiveLinearUnit`: ADALINE, LMS updates on every sample
//!
//! # Examples
//!
//! ## Perceptron
//! ```rust
//! use linear_units::{Dataset, InitStrategy, LinearClassifier, TrainingConfig};
//!
//! let mut data = Dataset::empty(2);
//! data.push(&[2.0, 1.0], 1.0).unwrap();
//! data.push(&[-1.0, -3.0], -1.0).unwrap();
//!
//! let config = TrainingConfig::default().init(InitStrategy::Zero);
//! let mut clf = LinearClassifier::from_config(2, &config).unwrap();
//! while clf.train_epoch(&data).unwrap() {}
//!
//! assert_eq!(clf.classify(&[3.0, 3.0]).unwrap(), 1.0);
//! assert_eq!(clf.classify(&[-2.0, -2.0]).unwrap(), -1.0);
//! ```
//!
//! ## ADALINE
//! ```rust
//! use linear_units::{AdaptiveLinearUnit, Dataset, TrainingConfig};
//! use ndarray::array;
//!
//! let data = Dataset::new(array![[0.0], [1.0], [2.0]], array![1.0, 3.0, 5.0]).unwrap();
//!
//! let config = TrainingConfig::adaline().learning_rate(0.05).seed(0);
//! let mut unit = AdaptiveLinearUnit::from_config(1, &config).unwrap();
//! unit.train(&data, 2000).unwrap();
//!
//! assert!((unit.predict(&[3.0]).unwrap() - 7.0).abs() < 1e-3);
//! ```

mod adaline;
mod base;
mod perceptron;

pub use adaline::AdaptiveLinearUnit;
pub use base::LinearModel;
pub use perceptron::LinearClassifier;
