//! Network builder.
//!
//! `NetworkBuilder` is the recommended way to configure a network. It validates the node
//! counts and learning rate up front and fixes them for the lifetime of the resulting
//! [`Network`]; there is no way to reassign the learning rate afterwards.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::network::{DEFAULT_LEARNING_RATE, validate_learning_rate, validate_nodes};
use crate::{Network, Result};

#[derive(Debug, Clone)]
/// Builder for a [`Network`].
///
/// Example:
///
/// ```rust
/// use review_mlp::NetworkBuilder;
///
/// # fn main() -> review_mlp::Result<()> {
/// let net = NetworkBuilder::new(2, 4, 1)?
///     .learning_rate(0.05)?
///     .build_with_seed(0)?;
/// assert_eq!(net.learning_rate(), 0.05);
/// # Ok(())
/// # }
/// ```
pub struct NetworkBuilder {
    input_nodes: usize,
    hidden_nodes: usize,
    output_nodes: usize,
    learning_rate: f64,
}

impl NetworkBuilder {
    /// Start building a network with the given layer sizes.
    pub fn new(input_nodes: usize, hidden_nodes: usize, output_nodes: usize) -> Result<Self> {
        validate_nodes(input_nodes, hidden_nodes, output_nodes)?;
        Ok(Self {
            input_nodes,
            hidden_nodes,
            output_nodes,
            learning_rate: DEFAULT_LEARNING_RATE,
        })
    }

    /// Step size applied to every gradient update. Must be finite and > 0.
    pub fn learning_rate(mut self, learning_rate: f64) -> Result<Self> {
        validate_learning_rate(learning_rate)?;
        self.learning_rate = learning_rate;
        Ok(self)
    }

    /// Build with weights drawn from OS entropy.
    pub fn build(self) -> Result<Network> {
        let mut rng = StdRng::from_entropy();
        self.build_with_rng(&mut rng)
    }

    /// Build using a deterministic seed.
    pub fn build_with_seed(self, seed: u64) -> Result<Network> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.build_with_rng(&mut rng)
    }

    /// Build using the provided RNG.
    pub fn build_with_rng<R: Rng + ?Sized>(self, rng: &mut R) -> Result<Network> {
        Network::init_with_rng(
            self.input_nodes,
            self.hidden_nodes,
            self.output_nodes,
            self.learning_rate,
            rng,
        )
    }
}
