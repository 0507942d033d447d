use linear_units::{mean_squared_error, AdaptiveLinearUnit, Dataset, TrainingConfig, Vector};
use ndarray::{s, Array1};
use ndarray_rand::rand_distr::Normal;
use ndarray_rand::RandomExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::PI;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== ADALINE Noise Filter Example ===\n");

    let n_samples = 400;
    let taps = 8;

    // clean sine plus gaussian noise
    let t = Array1::linspace(0.0, 4.0 * PI, n_samples);
    let clean: Vector = t.mapv(f64::sin);
    let mut rng = StdRng::seed_from_u64(7);
    let normal = Normal::new(0.0, 0.3).map_err(|e| e.to_string())?;
    let noise = Vector::random_using(n_samples, normal, &mut rng);
    let noisy = &clean + &noise;

    // window of the last `taps` noisy values -> current clean value
    let data = Dataset::tapped_delay(&noisy, &clean, taps)?;
    println!("Samples: {}  Taps: {}", data.n_samples(), data.n_features());

    let config = TrainingConfig::adaline().seed(7);
    let mut unit = AdaptiveLinearUnit::from_config(taps, &config)?;

    let aligned_noisy = noisy.slice(s![taps - 1..]).to_owned();
    let baseline = mean_squared_error(data.targets(), &aligned_noisy)?;
    println!("MSE of the raw noisy signal: {:.5}", baseline);
    println!("MSE before training: {:.5}", unit.score(&data)?);

    let mut trained = 0;
    for checkpoint in [1, 10, 50, config.epochs] {
        unit.train(&data, checkpoint.saturating_sub(trained))?;
        trained = trained.max(checkpoint);
        println!("MSE after {:>3} epochs: {:.5}", trained, unit.score(&data)?);
    }

    println!("\nFilter weights:");
    for (j, w) in unit.model().weights().iter().enumerate() {
        println!("  w[{}] = {:+.4}", j, w);
    }
    println!("  bias = {:+.4}", unit.model().bias());

    let filtered = unit.predict_batch(data.features())?;
    println!("\nFirst samples (clean / noisy / filtered):");
    for i in 0..5 {
        println!(
            "  {:+.3} / {:+.3} / {:+.3}",
            data.targets()[i],
            aligned_noisy[i],
            filtered[i]
        );
    }

    Ok(())
}
