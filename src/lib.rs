//! A small one-hidden-layer perceptron trained by online backpropagation.
//!
//! `review-mlp` is the numeric core of a rule-plus-neural-net text classifier. Feature
//! encoders turn a review into a fixed-length vector, a [`Network`] maps that vector to a
//! vector of sigmoid scores, and a decoder picks the winning category.
//!
//! # Design goals
//!
//! - Small, readable kernel: everything is expressed with the [`Matrix`] operations.
//! - Clear contracts: shapes are validated at the API boundary and mismatches are returned as
//!   [`Error::DimensionMismatch`], never silently truncated.
//! - Online training: every [`Network::train`] call updates the weights immediately. There is
//!   no batching and no optimizer state.
//!
//! # Data layout and shapes
//!
//! - Scalars are `f64`.
//! - Matrices are row-major; vectors are lifted to `(len, 1)` columns.
//! - `weights_ih` is `(hidden, input)`, `weights_ho` is `(output, hidden)`, biases are columns.
//!
//! # Concurrency
//!
//! `predict` takes `&self` and `train` takes `&mut self`, so the borrow checker enforces a
//! single writer. To share one network between threads, wrap it in a lock.
//!
//! # Quick start
//!
//! ```rust
//! use review_mlp::{Dataset, FitConfig, Network, Shuffle};
//!
//! # fn main() -> review_mlp::Result<()> {
//! let xs = vec![
//!     vec![0.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![1.0, 0.0],
//!     vec![1.0, 1.0],
//! ];
//! let ys = vec![vec![0.0], vec![1.0], vec![1.0], vec![0.0]];
//! let train = Dataset::from_rows(&xs, &ys)?;
//!
//! let mut net = Network::new_with_seed(2, 4, 1, 0)?;
//! let report = net.fit(
//!     &train,
//!     FitConfig {
//!         epochs: 200,
//!         shuffle: Shuffle::None,
//!         log_every: None,
//!     },
//! )?;
//! assert_eq!(report.losses.len(), 200);
//!
//! let y = net.predict(&[1.0, 0.0])?;
//! assert!(y[0] > 0.0 && y[0] < 1.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Driving training yourself
//!
//! The network has no notion of epochs; any loop that calls `train` once per example works:
//!
//! ```rust
//! use review_mlp::NetworkBuilder;
//!
//! # fn main() -> review_mlp::Result<()> {
//! let mut net = NetworkBuilder::new(3, 8, 2)?
//!     .learning_rate(0.05)?
//!     .build_with_seed(0)?;
//!
//! let x = [0.1, -0.2, 0.3];
//! let t = [0.0, 1.0];
//! let before = net.squared_error(&x, &t)?;
//! for _ in 0..100 {
//!     net.train(&x, &t)?;
//! }
//! assert!(net.squared_error(&x, &t)? < before);
//! # Ok(())
//! # }
//! ```

pub mod activation;
pub mod builder;
pub mod data;
pub mod encoding;
pub mod error;
pub mod loss;
pub(crate) mod matmul;
pub mod matrix;
pub mod metrics;
pub mod network;
pub mod train;

#[cfg(feature = "serde")]
pub mod serde_model;

pub use builder::NetworkBuilder;
pub use data::Dataset;
pub use error::{Error, Result, Shape};
pub use matrix::Matrix;
pub use network::{DEFAULT_LEARNING_RATE, Network};
pub use train::{EvalReport, FitConfig, FitReport, Shuffle};
