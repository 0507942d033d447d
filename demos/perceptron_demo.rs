use linear_units::{Bounds, Dataset, LinearClassifier, TrainingConfig, TrainingRun};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Perceptron Example ===\n");

    // Points as they would be clicked on the canvas: left button +1, right button -1
    let clicks = [
        (2.0, 3.5, 1.0),
        (4.0, 1.0, 1.0),
        (6.5, 5.0, 1.0),
        (1.5, 7.0, 1.0),
        (-3.0, -2.0, -1.0),
        (-1.0, -6.0, -1.0),
        (-7.5, 1.0, -1.0),
        (0.5, -4.0, -1.0),
    ];

    let mut data = Dataset::empty(2);
    for (i, &(x, y, label)) in clicks.iter().enumerate() {
        data.push(&[x, y], label)?;
        println!("Point {}: ({:.2}, {:.2}) label={:+}", i + 1, x, y, label);
    }

    let config = TrainingConfig::default().seed(2024);
    let mut clf = LinearClassifier::from_config(2, &config)?;
    let mut run = TrainingRun::new();
    let bounds = Bounds::default();

    println!("\nInitial weights: {}", clf.model().snapshot());

    // One "train" press per epoch, until an epoch makes no correction
    let max_presses = 500;
    for press in 1..=max_presses {
        if !clf.train_epoch(&data)? {
            println!("\nNo corrections on press {}, stopping.", press);
            break;
        }
        run.record(clf.model());
    }

    println!("\nGeneration log:");
    for (i, generation) in run.iter().enumerate() {
        println!("Gen {}: {}", i + 1, generation);
    }

    match clf.model().boundary(&bounds) {
        Ok((p1, p2)) => println!(
            "\nDecision line: ({:.2}, {:.2}) -> ({:.2}, {:.2})",
            p1.x, p1.y, p2.x, p2.y
        ),
        Err(e) => println!("\nNo decision line: {}", e),
    }
    println!("Accuracy: {:.2}%", clf.score(&data)? * 100.0);

    // "Reset": new weights, same points
    clf.reset(&config.init, &mut config.rng())?;
    run.clear();
    println!("\nAfter reset: {} ({} points kept)", clf.model().snapshot(), data.n_samples());

    Ok(())
}
