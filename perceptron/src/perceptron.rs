use crate::dataset::Dataset;
use crate::math;

/// A single-layer perceptron: a linear binary classifier trained with
/// per-sample weight updates over a fixed number of epochs.
pub struct Perceptron {
    inputs: Dataset,
    outputs: Vec<f32>,
    threshold: f32,
    learning_rate: f32,
    epochs: usize,
    weights: Vec<f32>,
    predictions: Vec<f32>,
    sum_squared_errors: Vec<f32>,
}

impl Perceptron {
    pub fn new(
        inputs: Dataset,
        outputs: Vec<f32>,
        threshold: f32,
        learning_rate: f32,
        epochs: usize,
    ) -> Self {
        let weights = vec![0.0; inputs.width()];
        let predictions = vec![1.0; outputs.len()];
        Self {
            inputs,
            outputs,
            threshold,
            learning_rate,
            epochs,
            weights,
            predictions,
            sum_squared_errors: Vec::with_capacity(epochs),
        }
    }

    /// Run the full training schedule and return the final weights.
    ///
    /// Each epoch walks the examples in order. The weight update for an
    /// example is applied before the next example's dot product is
    /// computed, so later examples in the same epoch see the adjusted
    /// weights. One sum-squared-error entry is appended per epoch, from
    /// the predictions the epoch finished with.
    pub fn train(&mut self) -> &[f32] {
        for _ in 0..self.epochs {
            for i in 0..self.inputs.len() {
                let row = self.inputs.row(i);
                let dot = math::dot_product(row, &self.weights);
                self.predictions[i] = if dot >= self.threshold { 1.0 } else { 0.0 };

                let step = self.learning_rate * (self.outputs[i] - self.predictions[i]);
                for (w_j, x_j) in self.weights.iter_mut().zip(row.iter()) {
                    *w_j += step * x_j;
                }
            }

            let errors = self
                .outputs
                .iter()
                .zip(self.predictions.iter())
                .map(|(y_i, p_i)| (y_i - p_i).powi(2))
                .collect::<Vec<f32>>();
            self.sum_squared_errors.push(math::sum(&errors));
        }

        &self.weights
    }

    /// Classify a feature vector against an explicit weight vector.
    /// Only the stored threshold is read; the boundary is inclusive.
    pub fn predict(&self, data: &[f32], weights: &[f32]) -> bool {
        math::dot_product(data, weights) >= self.threshold
    }

    /// True if every epoch in the last half of the schedule finished
    /// with zero error. For an odd epoch count the middle epoch is
    /// excluded from the window along with the first half.
    pub fn did_converge(&self) -> bool {
        let start = if self.epochs % 2 == 0 {
            self.epochs / 2
        } else {
            (self.epochs + 1) / 2
        };
        let window = self.sum_squared_errors.get(start..).unwrap_or(&[]);
        math::sum(window) == 0.0
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    pub fn predictions(&self) -> &[f32] {
        &self.predictions
    }

    pub fn sum_squared_errors(&self) -> &[f32] {
        &self.sum_squared_errors
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn and_gate() -> Perceptron {
        let inputs = Dataset::from_rows(vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ]);
        let outputs = vec![0.0, 0.0, 0.0, 1.0];
        Perceptron::new(inputs, outputs, 0.5, 0.1, 8)
    }

    #[test]
    fn test_new_initializes_buffers() {
        let p = and_gate();
        assert_eq!(&[0.0, 0.0], p.weights());
        assert_eq!(&[1.0, 1.0, 1.0, 1.0], p.predictions());
        assert!(p.sum_squared_errors().is_empty());
    }

    #[test]
    fn test_zero_inputs_leave_weights_at_zero() {
        let inputs = Dataset::from_rows(vec![vec![0.0, 0.0], vec![0.0, 0.0]]);
        let mut p = Perceptron::new(inputs, vec![1.0, 0.0], 0.5, 0.1, 1);
        p.train();
        assert_eq!(&[0.0, 0.0], p.weights());
    }

    #[test]
    fn test_single_step_update() {
        let inputs = Dataset::from_rows(vec![vec![1.0]]);
        let mut p = Perceptron::new(inputs, vec![1.0], 0.5, 0.1, 1);

        let weights = p.train().to_vec();

        // dot = 0.0 < 0.5 so the prediction is 0.0, and the weight
        // moves by 0.1 * (1.0 - 0.0) * 1.0
        assert_eq!(vec![0.1], weights);
        assert_eq!(&[1.0], p.sum_squared_errors());
    }

    #[test]
    fn test_and_gate_training_run() {
        let mut p = and_gate();
        p.train();

        // The (1, 1) example is the only misprediction; it bumps both
        // weights by 0.1 per epoch until the dot clears the threshold
        // at (0.3, 0.3) in epoch four.
        assert!((p.weights()[0] - 0.3).abs() < 1e-6);
        assert!((p.weights()[1] - 0.3).abs() < 1e-6);
        assert_eq!(&[1.0, 1.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0], p.sum_squared_errors());
        assert!(p.did_converge());
    }

    #[test]
    fn test_non_converging_run_reports_false() {
        // One example the zero-initialized weights cannot fit in two
        // epochs: the prediction stays 0.0 while the weight creeps up.
        let inputs = Dataset::from_rows(vec![vec![1.0]]);
        let mut p = Perceptron::new(inputs, vec![1.0], 0.5, 0.1, 2);
        p.train();

        assert_eq!(&[1.0, 1.0], p.sum_squared_errors());
        assert!(!p.did_converge());
    }

    #[test]
    fn test_odd_epoch_window_excludes_middle() {
        let inputs = Dataset::from_rows(vec![vec![1.0]]);
        let mut p = Perceptron::new(inputs, vec![1.0], 0.5, 0.1, 5);

        // The window for five epochs is indexes {3, 4}; the entry at
        // index 3 keeps this history from counting as converged.
        p.sum_squared_errors = vec![0.0, 0.0, 0.0, 1.0, 0.0];
        assert!(!p.did_converge());

        // A non-zero middle entry is outside the window.
        p.sum_squared_errors = vec![0.0, 0.0, 1.0, 0.0, 0.0];
        assert!(p.did_converge());

        p.sum_squared_errors = vec![0.0, 0.0, 0.0, 0.0, 0.0];
        assert!(p.did_converge());
    }

    #[test]
    fn test_predict_ignores_stored_weights() {
        let mut p = and_gate();
        p.train();

        // The trained weights reject (1, 0); a custom vector accepts it.
        assert!(!p.predict(&[1.0, 0.0], p.weights()));
        assert!(p.predict(&[1.0, 0.0], &[0.6, 0.0]));

        let before = p.weights().to_vec();
        p.predict(&[1.0, 0.0], &[0.6, 0.0]);
        assert_eq!(before, p.weights());
    }

    #[test]
    fn test_predict_threshold_boundary_is_inclusive() {
        let p = and_gate();
        // dot == threshold exactly
        assert!(p.predict(&[1.0, 0.0], &[0.5, 0.0]));
        assert!(!p.predict(&[1.0, 0.0], &[0.49, 0.0]));
    }

    #[test]
    fn test_trained_and_gate_predictions() {
        let mut p = and_gate();
        let weights = p.train().to_vec();

        assert!(p.predict(&[1.0, 1.0], &weights));
        assert!(!p.predict(&[0.0, 0.0], &weights));
        assert!(!p.predict(&[0.0, 1.0], &weights));
        assert!(!p.predict(&[1.0, 0.0], &weights));
    }
}
