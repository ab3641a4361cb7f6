#![deny(warnings)]

use perceptron::dataset::Dataset;
use perceptron::perceptron::Perceptron;
use perceptron::report::{epoch_errors, plot_errors, print_training_summary};
use rand::{distributions::Uniform, thread_rng, Rng};

/// Synthesize sensor readings around a trip point: pressure and
/// temperature both high means the alarm fired. The bands are kept
/// apart so the classes stay linearly separable.
fn sensor_readings(samples_per_class: usize) -> (Vec<Vec<f32>>, Vec<f32>) {
    let mut rng = thread_rng();
    let quiet = Uniform::new(0.0, 0.4);
    let alarming = Uniform::new(0.6, 1.0);

    let mut inputs = Vec::new();
    let mut outputs = Vec::new();
    for _ in 0..samples_per_class {
        inputs.push(vec![rng.sample(quiet), rng.sample(quiet), 1.0]);
        outputs.push(0.0);
        inputs.push(vec![rng.sample(alarming), rng.sample(alarming), 1.0]);
        outputs.push(1.0);
    }
    (inputs, outputs)
}

fn main() {
    let (rows, outputs) = sensor_readings(25);
    let inputs = Dataset::from_rows(rows);

    let mut model = Perceptron::new(inputs, outputs, 0.5, 0.1, 40);
    let weights = model.train().to_vec();

    print_training_summary(&weights, model.sum_squared_errors());
    println!(
        "Converged: {} (threshold {})",
        model.did_converge(),
        model.threshold()
    );

    let quiet_plant = [0.1, 0.2, 1.0];
    let runaway_plant = [0.9, 0.8, 1.0];
    println!(
        "Alarm for quiet plant: {}",
        model.predict(&quiet_plant, &weights)
    );
    println!(
        "Alarm for runaway plant: {}",
        model.predict(&runaway_plant, &weights)
    );

    plot_errors(epoch_errors(model.sum_squared_errors()));
}
