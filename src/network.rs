use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::activation::{dsigmoid, sigmoid};
use crate::error::Shape;
use crate::{Error, Matrix, NetworkBuilder, Result};

/// Learning rate used when none is configured.
pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

/// Input -> hidden -> output perceptron with sigmoid activations on both layers.
///
/// Trainable state:
/// - `weights_ih`: `(hidden_nodes, input_nodes)`
/// - `bias_h`: `(hidden_nodes, 1)`
/// - `weights_ho`: `(output_nodes, hidden_nodes)`
/// - `bias_o`: `(output_nodes, 1)`
///
/// Shapes are fixed at construction. Only [`Network::train`] mutates the values.
#[derive(Debug, Clone, PartialEq)]
pub struct Network {
    input_nodes: usize,
    hidden_nodes: usize,
    output_nodes: usize,
    weights_ih: Matrix,
    weights_ho: Matrix,
    bias_h: Matrix,
    bias_o: Matrix,
    learning_rate: f64,
}

/// Column activations retained by a forward pass.
struct Forward {
    inputs: Matrix,
    hidden: Matrix,
    output: Matrix,
}

impl Network {
    /// Randomly initialised network with the default learning rate.
    pub fn new(input_nodes: usize, hidden_nodes: usize, output_nodes: usize) -> Result<Self> {
        NetworkBuilder::new(input_nodes, hidden_nodes, output_nodes)?.build()
    }

    pub fn new_with_seed(
        input_nodes: usize,
        hidden_nodes: usize,
        output_nodes: usize,
        seed: u64,
    ) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::new_with_rng(input_nodes, hidden_nodes, output_nodes, &mut rng)
    }

    pub fn new_with_rng<R: Rng + ?Sized>(
        input_nodes: usize,
        hidden_nodes: usize,
        output_nodes: usize,
        rng: &mut R,
    ) -> Result<Self> {
        Self::init_with_rng(
            input_nodes,
            hidden_nodes,
            output_nodes,
            DEFAULT_LEARNING_RATE,
            rng,
        )
    }

    pub(crate) fn init_with_rng<R: Rng + ?Sized>(
        input_nodes: usize,
        hidden_nodes: usize,
        output_nodes: usize,
        learning_rate: f64,
        rng: &mut R,
    ) -> Result<Self> {
        validate_nodes(input_nodes, hidden_nodes, output_nodes)?;
        validate_learning_rate(learning_rate)?;

        let weights_ih = Matrix::random(hidden_nodes, input_nodes, rng)?;
        let weights_ho = Matrix::random(output_nodes, hidden_nodes, rng)?;
        let bias_h = Matrix::random(hidden_nodes, 1, rng)?;
        let bias_o = Matrix::random(output_nodes, 1, rng)?;

        tracing::debug!(
            input_nodes,
            hidden_nodes,
            output_nodes,
            learning_rate,
            "initialised network"
        );

        Ok(Self {
            input_nodes,
            hidden_nodes,
            output_nodes,
            weights_ih,
            weights_ho,
            bias_h,
            bias_o,
            learning_rate,
        })
    }

    /// Assemble a network from explicit parameters.
    ///
    /// Node counts are inferred from `weights_ih` (`hidden x input`) and `weights_ho`
    /// (`output x hidden`); the biases must be matching columns.
    pub fn from_parts(
        weights_ih: Matrix,
        bias_h: Matrix,
        weights_ho: Matrix,
        bias_o: Matrix,
        learning_rate: f64,
    ) -> Result<Self> {
        validate_learning_rate(learning_rate)?;

        let hidden_nodes = weights_ih.rows();
        let input_nodes = weights_ih.cols();
        let output_nodes = weights_ho.rows();

        if weights_ho.cols() != hidden_nodes {
            return Err(Error::mismatch(
                "weights_ho",
                Shape::new(output_nodes, hidden_nodes),
                weights_ho.shape(),
            ));
        }
        if bias_h.shape() != Shape::column(hidden_nodes) {
            return Err(Error::mismatch(
                "bias_h",
                Shape::column(hidden_nodes),
                bias_h.shape(),
            ));
        }
        if bias_o.shape() != Shape::column(output_nodes) {
            return Err(Error::mismatch(
                "bias_o",
                Shape::column(output_nodes),
                bias_o.shape(),
            ));
        }

        Ok(Self {
            input_nodes,
            hidden_nodes,
            output_nodes,
            weights_ih,
            weights_ho,
            bias_h,
            bias_o,
            learning_rate,
        })
    }

    #[inline]
    pub fn input_nodes(&self) -> usize {
        self.input_nodes
    }

    #[inline]
    pub fn hidden_nodes(&self) -> usize {
        self.hidden_nodes
    }

    #[inline]
    pub fn output_nodes(&self) -> usize {
        self.output_nodes
    }

    #[inline]
    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    #[inline]
    pub fn weights_ih(&self) -> &Matrix {
        &self.weights_ih
    }

    #[inline]
    pub fn weights_ho(&self) -> &Matrix {
        &self.weights_ho
    }

    #[inline]
    pub fn bias_h(&self) -> &Matrix {
        &self.bias_h
    }

    #[inline]
    pub fn bias_o(&self) -> &Matrix {
        &self.bias_o
    }

    /// Feed-forward inference.
    ///
    /// Returns `output_nodes` values, each in `(0, 1)`.
    pub fn predict(&self, input: &[f64]) -> Result<Vec<f64>> {
        Ok(self.forward(input)?.output.into_vec())
    }

    /// One online backpropagation step on a single `(input, target)` pair.
    ///
    /// Updates all four parameter tensors in place. Lengths are validated before anything
    /// is mutated, so an `Err` leaves the network unchanged.
    pub fn train(&mut self, input: &[f64], target: &[f64]) -> Result<()> {
        self.train_step(input, target).map(|_| ())
    }

    /// `sum((target - output)^2)` for the current weights.
    pub fn squared_error(&self, input: &[f64], target: &[f64]) -> Result<f64> {
        let targets = self.target_column(target)?;
        let fwd = self.forward(input)?;
        let errors = Matrix::subtract(&targets, &fwd.output)?;
        Ok(errors.as_slice().iter().map(|e| e * e).sum())
    }

    /// Same as [`Network::train`], returning the squared error of the prediction made
    /// before the update.
    pub(crate) fn train_step(&mut self, input: &[f64], target: &[f64]) -> Result<f64> {
        let targets = self.target_column(target)?;
        let Forward {
            inputs,
            hidden,
            output,
        } = self.forward(input)?;

        let output_errors = Matrix::subtract(&targets, &output)?;
        let loss = output_errors.as_slice().iter().map(|e| e * e).sum();

        // Output layer.
        let mut output_gradient = output;
        output_gradient.map(dsigmoid);
        output_gradient.hadamard(&output_errors)?;
        output_gradient.scale(self.learning_rate);
        let weights_ho_deltas = Matrix::multiply(&output_gradient, &hidden.transpose())?;

        // Hidden layer. The error is propagated through `weights_ho` as it was during the
        // forward pass; the output-layer deltas are only applied below.
        let hidden_errors = Matrix::multiply(&self.weights_ho.transpose(), &output_errors)?;
        let mut hidden_gradient = hidden;
        hidden_gradient.map(dsigmoid);
        hidden_gradient.hadamard(&hidden_errors)?;
        hidden_gradient.scale(self.learning_rate);
        let weights_ih_deltas = Matrix::multiply(&hidden_gradient, &inputs.transpose())?;

        self.weights_ho.add(&weights_ho_deltas)?;
        self.bias_o.add(&output_gradient)?;
        self.weights_ih.add(&weights_ih_deltas)?;
        self.bias_h.add(&hidden_gradient)?;

        Ok(loss)
    }

    fn forward(&self, input: &[f64]) -> Result<Forward> {
        if input.len() != self.input_nodes {
            return Err(Error::mismatch(
                "input",
                Shape::column(self.input_nodes),
                Shape::column(input.len()),
            ));
        }
        let inputs = Matrix::from_column(input)?;

        let mut hidden = Matrix::multiply(&self.weights_ih, &inputs)?;
        hidden.add(&self.bias_h)?;
        hidden.map(sigmoid);

        let mut output = Matrix::multiply(&self.weights_ho, &hidden)?;
        output.add(&self.bias_o)?;
        output.map(sigmoid);

        Ok(Forward {
            inputs,
            hidden,
            output,
        })
    }

    fn target_column(&self, target: &[f64]) -> Result<Matrix> {
        if target.len() != self.output_nodes {
            return Err(Error::mismatch(
                "target",
                Shape::column(self.output_nodes),
                Shape::column(target.len()),
            ));
        }
        Matrix::from_column(target)
    }
}

pub(crate) fn validate_nodes(
    input_nodes: usize,
    hidden_nodes: usize,
    output_nodes: usize,
) -> Result<()> {
    if input_nodes == 0 || hidden_nodes == 0 || output_nodes == 0 {
        return Err(Error::InvalidConfig(format!(
            "node counts must be > 0, got input={input_nodes} hidden={hidden_nodes} output={output_nodes}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_learning_rate(learning_rate: f64) -> Result<()> {
    if !(learning_rate.is_finite() && learning_rate > 0.0) {
        return Err(Error::InvalidConfig(format!(
            "learning rate must be finite and > 0, got {learning_rate}"
        )));
    }
    Ok(())
}
